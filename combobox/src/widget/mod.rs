//! Combobox widget - a searchable dropdown with keyboard navigation.

pub mod events;
pub mod layout;
pub mod render;
mod state;

pub use layout::{ComboboxLayout, Hit, PopoverLayout};
pub use state::{Combobox, DEFAULT_MAX_VISIBLE_ROWS, DEFAULT_RESET_DELAY, ValueChangeHandler};
