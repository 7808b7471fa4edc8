//! Typed page model the enhancement passes operate on.
//!
//! Stands in for a live document: elements are looked up by id or marker
//! attribute, lookups return `Option`, and a miss leaves the page untouched.

use std::collections::BTreeMap;

use secrecy::SecretString;
use thiserror::Error;

/// Recognized id of the password input element.
pub const PASSWORD_INPUT_ID: &str = "password";

/// Attribute marking an element as a tooltip trigger.
pub const TOOLTIP_TOGGLE_ATTR: &str = "data-toggle";

/// Attribute value marking an element as a tooltip trigger.
pub const TOOLTIP_TOGGLE_VALUE: &str = "tooltip";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    #[error("Duplicate element id: {0}")]
    DuplicateId(String),
}

/// Role of an element within the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    PasswordInput,
    Label,
    Node,
}

/// One page element: id, role, text, style classes, and attributes.
///
/// Input values are not stored here; each input event carries the value it
/// was fired with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    kind: ElementKind,
    text: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
}

impl Element {
    fn with_kind(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            text: String::new(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Creates a generic element.
    pub fn node(id: impl Into<String>) -> Self {
        Self::with_kind(id, ElementKind::Node)
    }

    /// Creates a password input element.
    pub fn password_input(id: impl Into<String>) -> Self {
        Self::with_kind(id, ElementKind::PasswordInput)
    }

    /// Creates a label element.
    pub fn label(id: impl Into<String>) -> Self {
        Self::with_kind(id, ElementKind::Label)
    }

    /// Sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a style class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if the element carries the given style class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the attribute value, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns `true` if the element is marked as a tooltip trigger.
    pub fn is_tooltip_trigger(&self) -> bool {
        self.attr(TOOLTIP_TOGGLE_ATTR) == Some(TOOLTIP_TOGGLE_VALUE)
    }
}

/// One input event: the target element's id and the value at that keystroke.
#[derive(Debug)]
pub struct InputEvent {
    pub target: String,
    pub value: SecretString,
}

impl InputEvent {
    pub fn new(target: impl Into<String>, value: SecretString) -> Self {
        Self {
            target: target.into(),
            value,
        }
    }
}

/// Ordered element collection with unique ids.
#[derive(Debug, Default, Clone)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the page.
    ///
    /// # Errors
    ///
    /// Returns `PageError::DuplicateId` if an element with the same id
    /// already exists.
    pub fn push(&mut self, element: Element) -> Result<(), PageError> {
        if self.get(element.id()).is_some() {
            return Err(PageError::DuplicateId(element.id.clone()));
        }
        self.elements.push(element);
        Ok(())
    }

    /// Looks up an element by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Returns the password input, if the page has one under the
    /// recognized id.
    pub fn password_input(&self) -> Option<&Element> {
        self.get(PASSWORD_INPUT_ID)
            .filter(|e| e.kind == ElementKind::PasswordInput)
    }

    /// Iterates tooltip trigger elements in document order.
    pub fn tooltip_triggers(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_tooltip_trigger())
    }

    /// Replaces the element sharing `element`'s id in place, or inserts
    /// `element` right after the anchor.
    ///
    /// Falls back to appending when the anchor is gone, so the element is
    /// never dropped.
    pub fn replace_or_insert_after(&mut self, anchor_id: &str, element: Element) {
        if let Some(existing) = self.elements.iter_mut().find(|e| e.id == element.id) {
            *existing = element;
            return;
        }

        match self.elements.iter().position(|e| e.id == anchor_id) {
            Some(pos) => self.elements.insert(pos + 1, element),
            None => self.elements.push(element),
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
