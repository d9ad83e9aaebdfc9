//! Geometry of the trigger and popover, and pointer hit testing.

use crate::buffer::Rect;

use super::state::Combobox;

/// What sits under a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Trigger,
    /// The search field, outside the clear icon.
    Search,
    ClearSearch,
    /// An option row, by position in the filtered list.
    Option(usize),
    /// Popover background that is neither search nor an option.
    Popover,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverLayout {
    pub area: Rect,
    pub search: Rect,
    /// Present only while there is search text to clear.
    pub clear: Option<Rect>,
    /// Visible option rows as (filtered row, rect), top to bottom.
    pub rows: Vec<(usize, Rect)>,
    pub empty: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxLayout {
    pub trigger: Rect,
    pub popover: Option<PopoverLayout>,
}

impl ComboboxLayout {
    pub fn hit_test(&self, x: u16, y: u16) -> Hit {
        // The popover renders above everything else, so it wins.
        if let Some(popover) = &self.popover {
            if popover.clear.is_some_and(|rect| rect.contains(x, y)) {
                return Hit::ClearSearch;
            }
            if popover.search.contains(x, y) {
                return Hit::Search;
            }
            if let Some((row, _)) = popover.rows.iter().find(|(_, rect)| rect.contains(x, y)) {
                return Hit::Option(*row);
            }
            if popover.area.contains(x, y) {
                return Hit::Popover;
            }
        }
        if self.trigger.contains(x, y) {
            Hit::Trigger
        } else {
            Hit::Outside
        }
    }
}

impl Combobox {
    /// Lay the widget out with its trigger at `anchor`.
    ///
    /// The popover opens below the trigger and is clipped to `bounds`. When
    /// more options match than fit, the visible window follows the highlight.
    pub fn layout(&self, anchor: Rect, bounds: Rect) -> ComboboxLayout {
        let trigger = Rect::new(anchor.x, anchor.y, anchor.width, 1);
        if !self.is_open() {
            return ComboboxLayout {
                trigger,
                popover: None,
            };
        }

        let top = trigger.bottom();
        let room = bounds.bottom().saturating_sub(top);
        if room == 0 {
            return ComboboxLayout {
                trigger,
                popover: None,
            };
        }
        let body_room = (room - 1) as usize;

        let empty = self.shows_empty_message();
        let visible = if empty {
            1.min(body_room)
        } else {
            self.filtered_len()
                .min(self.visible_rows() as usize)
                .min(body_room)
        };

        let area = Rect::new(anchor.x, top, anchor.width, 1 + visible as u16);
        let search = area.row(0);
        let clear = if self.search_text().is_empty() || search.width < 3 {
            None
        } else {
            Some(Rect::new(search.right() - 2, search.y, 1, 1))
        };

        let mut rows = Vec::new();
        let mut empty_rect = None;
        if empty {
            if visible > 0 {
                empty_rect = Some(area.row(1));
            }
        } else if visible > 0 {
            let start = match self.highlighted_row() {
                Some(row) if row >= visible => row + 1 - visible,
                _ => 0,
            };
            rows = (start..start + visible)
                .enumerate()
                .map(|(offset, row)| (row, area.row(1 + offset as u16)))
                .collect();
        }

        ComboboxLayout {
            trigger,
            popover: Some(PopoverLayout {
                area,
                search,
                clear,
                rows,
                empty: empty_rect,
            }),
        }
    }
}
