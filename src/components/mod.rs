//! Page enhancement components
//!
//! Each component covers one independent behavior wired in at page-ready
//! time.

mod strength_hint;
mod tooltip;

pub use strength_hint::{HINT_LABEL_CLASS, HINT_LABEL_ID, StrengthHint};
pub use tooltip::{TooltipFactory, init_tooltips};
