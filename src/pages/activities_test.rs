use super::*;

#[test]
fn removal_prompt_names_participant_and_activity() {
    assert_eq!(
        removal_prompt("Chess Club", "michael@mergington.edu"),
        "Remove michael@mergington.edu from Chess Club?"
    );
}

#[test]
fn successful_mutation_resyncs_the_catalog() {
    assert_eq!(
        mutation_effects(&Ok("Signed up".to_owned())),
        (StatusKind::Success, true)
    );
}

#[test]
fn rejected_mutation_keeps_form_and_list_untouched() {
    assert_eq!(
        mutation_effects(&Err("Activity full".to_owned())),
        (StatusKind::Error, false)
    );
}
