//! Strength hint component - renders a classification label next to the
//! password field.

use crate::classify::classify;
use crate::config::Thresholds;
use crate::page::{Element, InputEvent, Page};
use crate::types::Strength;

/// Id of the rendered strength label element.
pub const HINT_LABEL_ID: &str = "password-strength-hint";

/// Style class shared by every rendered strength label.
pub const HINT_LABEL_CLASS: &str = "password-strength";

/// Listens to input events on the password field and keeps a single
/// classification label rendered next to it.
#[derive(Debug)]
pub struct StrengthHint {
    field_id: String,
    thresholds: Thresholds,
}

impl StrengthHint {
    /// Binds the hint to the page's password input.
    ///
    /// # Returns
    /// - `Some(hint)` when the password input exists
    /// - `None` when it does not; no listener is attached and nothing is
    ///   rendered
    pub fn bind(page: &Page, thresholds: Thresholds) -> Option<Self> {
        let field = page.password_input()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Strength hint bound to input `{}`", field.id());

        Some(Self {
            field_id: field.id().to_string(),
            thresholds,
        })
    }

    /// Handles one input event.
    ///
    /// Events for other targets are ignored. Otherwise the event value is
    /// classified and the label re-rendered, replacing any previous label
    /// so at most one exists.
    pub fn on_input(&self, page: &mut Page, event: &InputEvent) {
        if event.target != self.field_id {
            return;
        }

        let strength = classify(&event.value, &self.thresholds);
        page.replace_or_insert_after(&self.field_id, Self::render_label(strength));
    }

    fn render_label(strength: Strength) -> Element {
        Element::label(HINT_LABEL_ID)
            .with_class(HINT_LABEL_CLASS)
            .with_class(strength.style().class_name())
            .with_text(strength.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PASSWORD_INPUT_ID;
    use secrecy::SecretString;

    fn page_with_input() -> Page {
        let mut page = Page::new();
        page.push(Element::node("username")).expect("push");
        page.push(Element::password_input(PASSWORD_INPUT_ID))
            .expect("push");
        page.push(Element::node("submit")).expect("push");
        page
    }

    fn input(value: &str) -> InputEvent {
        InputEvent::new(PASSWORD_INPUT_ID, SecretString::new(value.to_string().into()))
    }

    #[test]
    fn test_bind_without_password_input() {
        let page = Page::new();
        assert!(StrengthHint::bind(&page, Thresholds::default()).is_none());
    }

    #[test]
    fn test_on_input_renders_weak_label() {
        let mut page = page_with_input();
        let hint = StrengthHint::bind(&page, Thresholds::default()).expect("bind");

        hint.on_input(&mut page, &input("abc"));

        let label = page.get(HINT_LABEL_ID).expect("label rendered");
        assert_eq!(label.text(), "Weak");
        assert!(label.has_class(HINT_LABEL_CLASS));
        assert!(label.has_class("text-danger"));
    }

    #[test]
    fn test_label_rendered_next_to_input() {
        let mut page = page_with_input();
        let hint = StrengthHint::bind(&page, Thresholds::default()).expect("bind");

        hint.on_input(&mut page, &input("abc"));

        let ids: Vec<_> = page.elements().iter().map(Element::id).collect();
        assert_eq!(
            ids,
            vec!["username", PASSWORD_INPUT_ID, HINT_LABEL_ID, "submit"]
        );
    }

    #[test]
    fn test_consecutive_events_keep_one_label() {
        let mut page = page_with_input();
        let hint = StrengthHint::bind(&page, Thresholds::default()).expect("bind");

        for value in ["a", "ab", "abcdef", "abcdefghij", "abc"] {
            hint.on_input(&mut page, &input(value));
        }

        let labels = page
            .elements()
            .iter()
            .filter(|e| e.has_class(HINT_LABEL_CLASS))
            .count();
        assert_eq!(labels, 1);

        // Last event wins.
        let label = page.get(HINT_LABEL_ID).expect("label");
        assert_eq!(label.text(), "Weak");
    }

    #[test]
    fn test_label_tracks_strength_and_style() {
        let mut page = page_with_input();
        let hint = StrengthHint::bind(&page, Thresholds::default()).expect("bind");

        hint.on_input(&mut page, &input("abcdefgh"));
        let label = page.get(HINT_LABEL_ID).expect("label");
        assert_eq!(label.text(), "Medium");
        assert!(label.has_class("text-warning"));

        hint.on_input(&mut page, &input("abcdefghijk"));
        let label = page.get(HINT_LABEL_ID).expect("label");
        assert_eq!(label.text(), "Strong");
        assert!(label.has_class("text-success"));
        assert!(!label.has_class("text-warning"));
    }

    #[test]
    fn test_events_for_other_targets_ignored() {
        let mut page = page_with_input();
        let hint = StrengthHint::bind(&page, Thresholds::default()).expect("bind");

        let event = InputEvent::new("username", SecretString::new("whoever".to_string().into()));
        hint.on_input(&mut page, &event);

        assert!(page.get(HINT_LABEL_ID).is_none());
    }
}
