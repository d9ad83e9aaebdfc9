pub mod buffer;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod input;
pub mod option;
pub mod theme;
pub mod widget;

pub use buffer::{Buffer, Cell, Paint, Rect, Rgb, TextStyle};
pub use config::ComboboxConfig;
pub use debounce::Debounce;
pub use error::ConfigError;
pub use filter::{filter_indices, filter_options, navigable_indices};
pub use highlight::Highlight;
pub use input::{InputEvent, Key, Modifiers, Pointer, PointerKind, convert_event};
pub use option::{ComboOption, Icon};
pub use theme::Theme;
pub use widget::{Combobox, ComboboxLayout, Hit, PopoverLayout, ValueChangeHandler};
