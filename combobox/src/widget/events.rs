//! Keyboard and pointer handling for the combobox.

use std::time::Instant;

use log::trace;

use crate::input::{InputEvent, Key, Modifiers, Pointer, PointerKind};

use super::layout::{ComboboxLayout, Hit};
use super::state::Combobox;

impl Combobox {
    /// Handle a key press. Returns true if the widget consumed it.
    ///
    /// While closed only the activation keys do anything. While open the
    /// search field has focus: arrows move the highlight, Enter confirms,
    /// Escape and Tab close, everything printable edits the search.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, now: Instant) -> bool {
        if self.is_disabled() {
            return false;
        }
        trace!("Combobox[{}] key {:?} open={}", self.id(), key, self.is_open());

        if !self.is_open() {
            return match key {
                Key::Enter | Key::Space | Key::Down => self.open(),
                _ => false,
            };
        }

        match key {
            Key::Down => self.highlight_next(),
            Key::Up => self.highlight_prev(),
            Key::Enter => self.confirm_highlighted(now),
            Key::Escape | Key::Tab => self.close(now),
            Key::Backspace => self.pop_search_char(),
            Key::Space => self.push_search_char(' '),
            Key::Char(c) if modifiers.is_plain() => self.push_search_char(c),
            Key::Char(_) => false,
        }
    }

    /// Handle a pointer event against the layout it was rendered with.
    pub fn handle_pointer(
        &mut self,
        pointer: Pointer,
        layout: &ComboboxLayout,
        now: Instant,
    ) -> bool {
        if self.is_disabled() {
            return false;
        }
        let hit = layout.hit_test(pointer.x, pointer.y);

        match pointer.kind {
            PointerKind::Click => {
                trace!("Combobox[{}] click {:?}", self.id(), hit);
                match hit {
                    Hit::Trigger => self.toggle(now),
                    Hit::Option(row) => self.select_row(row, now),
                    Hit::ClearSearch => self.clear_search(),
                    Hit::Search | Hit::Popover => false,
                    Hit::Outside => self.close(now),
                }
            }
            PointerKind::Move => match hit {
                Hit::Option(row) => self.hover_row(row),
                _ => false,
            },
        }
    }

    /// Dispatch any input event. Resizes are left to the host.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        layout: &ComboboxLayout,
        now: Instant,
    ) -> bool {
        match event {
            InputEvent::Key { key, modifiers } => self.handle_key(key, modifiers, now),
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer, layout, now),
            InputEvent::Resize { .. } => false,
        }
    }
}
