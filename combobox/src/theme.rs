//! Colors used when rendering the combobox.

use crate::buffer::Rgb;

/// Named colors for each part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Trigger and search field background.
    pub surface: Rgb,
    /// Popover background.
    pub popover: Rgb,
    /// Placeholders, icons and the empty message.
    pub muted: Rgb,
    /// Background of the highlighted option.
    pub highlight: Rgb,
    pub highlight_foreground: Rgb,
    pub disabled: Rgb,
    /// Selected-option check mark.
    pub accent: Rgb,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            foreground: Rgb::new(230, 230, 230),
            surface: Rgb::new(38, 38, 38),
            popover: Rgb::new(24, 24, 24),
            muted: Rgb::new(130, 130, 130),
            highlight: Rgb::new(60, 70, 100),
            highlight_foreground: Rgb::new(255, 255, 255),
            disabled: Rgb::new(85, 85, 85),
            accent: Rgb::new(110, 190, 120),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
