//! Drawing the combobox into a cell buffer.

use crate::buffer::{Buffer, Paint, Rect, TextStyle};
use crate::theme::Theme;

use super::layout::{ComboboxLayout, PopoverLayout};
use super::state::Combobox;

pub const ARROW_CLOSED: &str = "▼";
pub const ARROW_OPEN: &str = "▲";
pub const SEARCH_ICON: &str = "⌕";
pub const CLEAR_ICON: &str = "✕";
pub const CHECK_MARK: &str = "✓";

impl Combobox {
    /// Render the trigger and, when open, the popover.
    pub fn render(&self, layout: &ComboboxLayout, buf: &mut Buffer, theme: &Theme) {
        self.render_trigger(layout.trigger, buf, theme);
        if let Some(popover) = &layout.popover {
            self.render_popover(popover, buf, theme);
        }
    }

    fn render_trigger(&self, rect: Rect, buf: &mut Buffer, theme: &Theme) {
        if rect.is_empty() {
            return;
        }
        let base = Paint::new(theme.foreground, theme.surface);
        buf.fill(rect, base);

        let label_paint = if self.is_disabled() {
            Paint::new(theme.disabled, theme.surface).with_style(TextStyle::new().dim())
        } else if self.selected_option().is_none() {
            Paint::new(theme.muted, theme.surface)
        } else {
            base
        };

        let arrow = if self.is_open() { ARROW_OPEN } else { ARROW_CLOSED };
        let arrow_x = rect.right().saturating_sub(2);
        buf.set_str(
            rect.x + 1,
            rect.y,
            self.trigger_label(),
            arrow_x.saturating_sub(1),
            label_paint,
        );
        buf.set_str(
            arrow_x,
            rect.y,
            arrow,
            rect.right(),
            Paint::new(theme.muted, theme.surface),
        );
    }

    fn render_popover(&self, popover: &PopoverLayout, buf: &mut Buffer, theme: &Theme) {
        buf.fill(popover.area, Paint::new(theme.foreground, theme.popover));

        // Search row
        let search = popover.search;
        buf.fill(search, Paint::new(theme.foreground, theme.surface));
        let text_end = popover.clear.map(|rect| rect.x).unwrap_or(search.right());
        let col = buf.set_str(
            search.x + 1,
            search.y,
            SEARCH_ICON,
            text_end,
            Paint::new(theme.muted, theme.surface),
        );
        if self.search_text().is_empty() {
            buf.set_str(
                col + 1,
                search.y,
                self.search_placeholder_text(),
                text_end,
                Paint::new(theme.muted, theme.surface),
            );
        } else {
            buf.set_str(
                col + 1,
                search.y,
                self.search_text(),
                text_end,
                Paint::new(theme.foreground, theme.surface)
                    .with_style(TextStyle::new().underline()),
            );
        }
        if let Some(clear) = popover.clear {
            buf.set_str(
                clear.x,
                clear.y,
                CLEAR_ICON,
                clear.right(),
                Paint::new(theme.muted, theme.surface),
            );
        }

        if let Some(empty) = popover.empty {
            buf.set_str(
                empty.x + 1,
                empty.y,
                self.empty_message_text(),
                empty.right(),
                Paint::new(theme.muted, theme.popover),
            );
        }

        let highlighted = self.highlighted_row();
        let selected = self.selected_value();
        for &(row, rect) in &popover.rows {
            let Some(option) = self.filtered_option(row) else {
                continue;
            };

            let paint = if option.disabled {
                Paint::new(theme.disabled, theme.popover).with_style(TextStyle::new().dim())
            } else if highlighted == Some(row) {
                Paint::new(theme.highlight_foreground, theme.highlight)
                    .with_style(TextStyle::new().bold())
            } else {
                Paint::new(theme.foreground, theme.popover)
            };
            buf.fill(rect, paint);

            let mut col = rect.x + 1;
            if selected == Some(option.value.as_str()) {
                let check = Paint {
                    fg: theme.accent,
                    ..paint
                };
                buf.set_str(col, rect.y, CHECK_MARK, rect.right(), check);
            }
            col += 2;
            if let Some(icon) = &option.icon {
                col = buf.set_str(col, rect.y, icon.as_str(), rect.right(), paint) + 1;
            }
            buf.set_str(col, rect.y, &option.label, rect.right(), paint);
        }
    }
}
