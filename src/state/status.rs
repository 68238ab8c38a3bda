//! Transient status messages with sequence-guarded auto-hide.
//!
//! DESIGN
//! ======
//! Status messages hide on a fixed timer. A bare timer could hide a newer
//! message early when actions overlap, so every shown message gets a
//! monotonic token and the timer hides the message only while its token is
//! still current.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::time::Duration;

/// How long a signup confirmation or error stays visible.
pub const SIGNUP_HIDE_DELAY: Duration = Duration::from_secs(5);

/// How long a removal confirmation or error stays visible.
pub const REMOVAL_HIDE_DELAY: Duration = Duration::from_secs(4);

/// Visual flavor of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Currently displayed status message, if any.
#[derive(Clone, Debug, Default)]
pub struct StatusState {
    message: Option<(String, StatusKind)>,
    seq: u64,
}

impl StatusState {
    /// Show a message, replacing whatever was visible. Returns the token a
    /// later [`Self::hide_if_current`] must present.
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some((text.into(), kind));
        self.seq
    }

    /// Hide the message `token` was issued for.
    ///
    /// A no-op returning `false` when a newer message has replaced it.
    pub fn hide_if_current(&mut self, token: u64) -> bool {
        if token != self.seq {
            return false;
        }
        self.message = None;
        true
    }

    /// Visible message text and kind, if any.
    pub fn current(&self) -> Option<(&str, StatusKind)> {
        self.message
            .as_ref()
            .map(|(text, kind)| (text.as_str(), *kind))
    }
}
