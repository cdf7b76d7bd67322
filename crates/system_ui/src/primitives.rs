//! Shared control and window-chrome primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod chrome;
mod controls;

pub use chrome::{StatusBar, WindowControl, WindowControlButton};
pub use controls::{Button, ProgressBar, RangeField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual variants for [`Button`].
pub enum ButtonVariant {
    /// Raised bevelled button.
    #[default]
    Standard,
    /// Default-action button with the heavy outer ring.
    Primary,
    /// Flat button used inside toolbars and keypads.
    Quiet,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.trim().is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Clamps `value` into `[min, max]` and maps it onto `0..=100`.
pub(crate) fn percent_of(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("  ")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("calc-key")),
            "ui-button calc-key"
        );
    }

    #[test]
    fn percent_is_clamped_and_tolerates_degenerate_ranges() {
        assert_eq!(percent_of(50.0, 0.0, 200.0), 25.0);
        assert_eq!(percent_of(-4.0, 0.0, 10.0), 0.0);
        assert_eq!(percent_of(40.0, 0.0, 10.0), 100.0);
        assert_eq!(percent_of(3.0, 5.0, 5.0), 0.0);
        assert_eq!(percent_of(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn variant_tokens_are_stable() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonVariant::Danger.token(), "danger");
        assert_eq!(bool_token(true), "true");
    }
}
