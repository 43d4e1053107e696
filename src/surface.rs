//! Notification surface
//!
//! A single-slot status line plus the port the controller uses to drive a
//! front-end.

use crate::render::ProjectCard;

/// Status line state. A new message replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notification {
    #[default]
    Hidden,
    Visible(String),
}

impl Notification {
    pub fn notify(&mut self, text: impl Into<String>) {
        *self = Notification::Visible(text.into());
    }

    pub fn clear(&mut self) {
        *self = Notification::Hidden;
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Notification::Hidden => None,
            Notification::Visible(text) => Some(text),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Notification::Visible(_))
    }
}

/// What a front-end exposes to the controller
pub trait Surface {
    /// Show `text` in the notification slot
    fn notify(&self, text: &str);

    /// Hide the notification slot
    fn clear(&self);

    /// Write the formatted balance into the balance slot
    fn show_balance(&self, balance: &str);

    /// Replace the rendered project list
    fn show_projects(&self, cards: Vec<ProjectCard>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let n = Notification::default();
        assert!(!n.is_visible());
        assert_eq!(n.text(), None);
    }

    #[test]
    fn test_single_slot() {
        let mut n = Notification::default();
        n.notify("A");
        n.notify("B");
        assert_eq!(n, Notification::Visible("B".to_string()));
        assert_eq!(n.text(), Some("B"));

        n.clear();
        assert_eq!(n, Notification::Hidden);
    }
}
