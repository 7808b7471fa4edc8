//! Form enhancement library
//!
//! This library reproduces a classic login-form enhancement script over a
//! typed page model: a password strength hint re-rendered on every input
//! event, and tooltip widgets instantiated for every trigger-marked
//! element at page-ready time.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `FORM_HINTS_THRESHOLDS`: Override the classification bounds as
//!   `<medium>,<strong>` (default: `6,10`)
//!
//! # Example
//!
//! ```rust
//! use form_hints::{on_ready, Element, InputEvent, Page, Thresholds, TooltipFactory};
//! use secrecy::SecretString;
//!
//! // Stand-in for the external widget library.
//! struct NoTooltips;
//!
//! impl TooltipFactory for NoTooltips {
//!     type Widget = ();
//!
//!     fn build(&self, _element: &Element) {}
//! }
//!
//! let mut page = Page::new();
//! page.push(Element::password_input("password")).expect("unique id");
//!
//! // Run once after the page is ready.
//! let enhanced = on_ready(&page, &NoTooltips, Thresholds::default());
//!
//! // Route keystrokes to the bound hint.
//! let event = InputEvent::new("password", SecretString::new("abcdefghijk".to_string().into()));
//! enhanced.dispatch_input(&mut page, &event);
//!
//! let label = page.get("password-strength-hint").expect("label rendered");
//! assert_eq!(label.text(), "Strong");
//! ```

// Internal modules
mod classify;
mod components;
mod config;
mod enhance;
mod page;
mod types;

// Public API
pub use classify::classify;
pub use components::{HINT_LABEL_CLASS, HINT_LABEL_ID, StrengthHint, TooltipFactory, init_tooltips};
pub use config::{
    DEFAULT_MEDIUM_AT, DEFAULT_STRONG_AT, THRESHOLDS_ENV, Thresholds, ThresholdsError,
};
pub use enhance::{Enhanced, on_ready};
pub use page::{
    Element, ElementKind, InputEvent, PASSWORD_INPUT_ID, Page, PageError, TOOLTIP_TOGGLE_ATTR,
    TOOLTIP_TOGGLE_VALUE,
};
pub use types::{HintStyle, Strength};
