//! Blocking user dialogs.
use std::fmt;

/// Synchronous confirm/alert capability.
///
/// Widgets receive a `Prompter` as a prop, defaulting to the browser's
/// blocking dialogs. Tests substitute a scripted responder through
/// [`Prompter::new`].
#[derive(Clone, Copy)]
pub struct Prompter {
    confirm: fn(&str) -> bool,
    alert: fn(&str),
}

impl Prompter {
    pub fn new(confirm: fn(&str) -> bool, alert: fn(&str)) -> Self {
        Self { confirm, alert }
    }

    /// Asks a blocking yes/no question.
    pub fn confirm(&self, message: &str) -> bool {
        (self.confirm)(message)
    }

    /// Shows a blocking notification.
    pub fn alert(&self, message: &str) {
        (self.alert)(message)
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self {
            confirm: browser_confirm,
            alert: browser_alert,
        }
    }
}

impl PartialEq for Prompter {
    fn eq(&self, other: &Self) -> bool {
        self.confirm as usize == other.confirm as usize
            && self.alert as usize == other.alert as usize
    }
}

impl fmt::Debug for Prompter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Prompter")
    }
}

fn browser_confirm(message: &str) -> bool {
    let window = web_sys::window().expect("could not get window");
    window.confirm_with_message(message).unwrap_or(false)
}

fn browser_alert(message: &str) {
    let window = web_sys::window().expect("could not get window");
    window.alert_with_message(message).ok();
}
