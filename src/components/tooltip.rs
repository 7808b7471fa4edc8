//! Tooltip initialization over trigger-marked elements.

use crate::page::{Element, Page};

/// Constructor seam to the external tooltip widget library.
///
/// This crate only supplies the element reference; widget behavior,
/// placement, and lifecycle belong to the library behind the factory.
pub trait TooltipFactory {
    type Widget;

    /// Builds one tooltip widget attached to `element`.
    fn build(&self, element: &Element) -> Self::Widget;
}

/// Instantiates one tooltip widget per trigger element, in document order.
///
/// A page without triggers yields an empty vec. Calling this more than
/// once builds duplicate widgets; it is meant to run once at page-ready
/// time.
pub fn init_tooltips<F: TooltipFactory>(page: &Page, factory: &F) -> Vec<F::Widget> {
    let widgets: Vec<_> = page
        .tooltip_triggers()
        .map(|element| factory.build(element))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Tooltips initialized: {} widget(s)", widgets.len());

    widgets
}
