//! Theme for the qupo GUI
//!
//! A plain value handed to every render function. Nothing reads styling
//! from a global.

use gpui::*;

/// Theme colors for the wizard
#[derive(Clone, Debug)]
pub struct Theme {
    // Surfaces
    pub background: Hsla,
    pub card_bg: Hsla,
    pub card_bg_elevated: Hsla,
    pub hover_bg: Hsla,

    // Text
    pub text: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,
    pub text_dimmed: Hsla,

    // Borders
    pub border: Hsla,
    pub border_subtle: Hsla,

    // Accent
    pub accent: Hsla,
    pub accent_subtle: Hsla,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: hsla(222.0 / 360.0, 0.15, 0.08, 1.0),
            card_bg: hsla(222.0 / 360.0, 0.14, 0.12, 1.0),
            card_bg_elevated: hsla(222.0 / 360.0, 0.14, 0.14, 1.0),
            hover_bg: hsla(222.0 / 360.0, 0.16, 0.16, 1.0),

            text: hsla(0.0, 0.0, 0.97, 1.0),
            text_secondary: hsla(220.0 / 360.0, 0.08, 0.82, 1.0),
            text_muted: hsla(220.0 / 360.0, 0.12, 0.60, 1.0),
            text_dimmed: hsla(220.0 / 360.0, 0.10, 0.45, 1.0),

            border: hsla(222.0 / 360.0, 0.14, 0.20, 1.0),
            border_subtle: hsla(222.0 / 360.0, 0.12, 0.15, 1.0),

            accent: hsla(210.0 / 360.0, 0.92, 0.58, 1.0),
            accent_subtle: hsla(210.0 / 360.0, 0.80, 0.55, 0.18),
        }
    }

    pub fn light() -> Self {
        Self {
            background: hsla(220.0 / 360.0, 0.10, 0.97, 1.0),
            card_bg: hsla(0.0, 0.0, 1.0, 1.0),
            card_bg_elevated: hsla(220.0 / 360.0, 0.05, 0.99, 1.0),
            hover_bg: hsla(220.0 / 360.0, 0.12, 0.92, 1.0),

            text: hsla(222.0 / 360.0, 0.25, 0.12, 1.0),
            text_secondary: hsla(222.0 / 360.0, 0.15, 0.30, 1.0),
            text_muted: hsla(222.0 / 360.0, 0.10, 0.45, 1.0),
            text_dimmed: hsla(222.0 / 360.0, 0.08, 0.58, 1.0),

            border: hsla(220.0 / 360.0, 0.14, 0.86, 1.0),
            border_subtle: hsla(220.0 / 360.0, 0.10, 0.92, 1.0),

            accent: hsla(210.0 / 360.0, 0.90, 0.45, 1.0),
            accent_subtle: hsla(210.0 / 360.0, 0.85, 0.45, 0.12),
        }
    }

    /// Theme for a settings mode string; anything but `"light"` is dark.
    pub fn from_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
