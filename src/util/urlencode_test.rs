use super::*;

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn spaces_and_separators_are_encoded() {
    assert_eq!(encode_component("Chess Club"), "Chess%20Club");
    assert_eq!(encode_component("a&b=c?d#e"), "a%26b%3Dc%3Fd%23e");
    assert_eq!(encode_component("a/b"), "a%2Fb");
}

#[test]
fn email_characters_are_encoded() {
    assert_eq!(encode_component("a+b@x.com"), "a%2Bb%40x.com");
}

#[test]
fn markup_characters_are_encoded() {
    assert_eq!(encode_component(r#"<a>"&"#), "%3Ca%3E%22%26");
}

#[test]
fn multibyte_utf8_is_encoded_per_byte() {
    assert_eq!(encode_component("café"), "caf%C3%A9");
}
