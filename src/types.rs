//! Core hint types shared across components.

use std::fmt;

/// Password strength classification derived from input length.
///
/// Transient by design: recomputed on every input event and rendered
/// immediately, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Display text rendered into the strength label.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    /// Visual style paired with this classification.
    pub fn style(&self) -> HintStyle {
        match self {
            Strength::Weak => HintStyle::Danger,
            Strength::Medium => HintStyle::Warning,
            Strength::Strong => HintStyle::Success,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual treatment of a rendered hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintStyle {
    Danger,
    Warning,
    Success,
}

impl HintStyle {
    /// Style class applied to the label element.
    pub fn class_name(&self) -> &'static str {
        match self {
            HintStyle::Danger => "text-danger",
            HintStyle::Warning => "text-warning",
            HintStyle::Success => "text-success",
        }
    }
}
