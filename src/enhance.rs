//! Page-ready enhancement - wires all components once the page is loaded.

use crate::components::{StrengthHint, TooltipFactory, init_tooltips};
use crate::config::Thresholds;
use crate::page::{InputEvent, Page};

/// Handles produced by [`on_ready`]: the bound strength hint, if any, and
/// the tooltip widgets built by the factory.
#[derive(Debug)]
pub struct Enhanced<W> {
    pub hint: Option<StrengthHint>,
    pub tooltips: Vec<W>,
}

impl<W> Enhanced<W> {
    /// Routes an input event to the bound strength hint.
    ///
    /// A no-op when no password input existed at ready time.
    pub fn dispatch_input(&self, page: &mut Page, event: &InputEvent) {
        if let Some(hint) = &self.hint {
            hint.on_input(page, event);
        }
    }
}

/// Runs both enhancement passes once, in sequence.
///
/// The passes are independent; each degrades to a no-op when the elements
/// it expects are absent. Meant to be called once per page load —
/// re-invocation rebinds the hint but duplicates tooltip widgets.
pub fn on_ready<F: TooltipFactory>(
    page: &Page,
    factory: &F,
    thresholds: Thresholds,
) -> Enhanced<F::Widget> {
    let hint = StrengthHint::bind(page, thresholds);

    #[cfg(feature = "tracing")]
    if hint.is_none() {
        tracing::debug!("No password input on page; strength hint not bound");
    }

    let tooltips = init_tooltips(page, factory);

    Enhanced { hint, tooltips }
}
