//! Terminal input understood by the combobox, and conversion from crossterm.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    Backspace,
    Escape,
    Tab,
    Up,
    Down,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    /// True when no modifier other than shift is held.
    pub fn is_plain(&self) -> bool {
        !self.ctrl && !self.alt
    }
}

/// What the pointer did at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Click,
    /// Pointer moved without a button held
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl Pointer {
    pub fn click(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Click,
            x,
            y,
        }
    }

    pub fn hover(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }
}

/// A terminal event relevant to the combobox host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    Pointer(Pointer),
    Resize { width: u16, height: u16 },
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

/// Convert a crossterm key event. Key releases are dropped.
pub fn convert_key_event(event: KeyEvent) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = convert_key(event.code)?;
    Some(InputEvent::Key {
        key,
        modifiers: convert_modifiers(event.modifiers),
    })
}

/// Convert a crossterm mouse event. Only left clicks and plain moves matter.
pub fn convert_mouse_event(event: MouseEvent) -> Option<InputEvent> {
    let kind = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Click,
        MouseEventKind::Moved => PointerKind::Move,
        _ => return None,
    };
    Some(InputEvent::Pointer(Pointer {
        kind,
        x: event.column,
        y: event.row,
    }))
}

/// Convert a crossterm Event to a combobox InputEvent
pub fn convert_event(event: CrosstermEvent) -> Option<InputEvent> {
    match event {
        CrosstermEvent::Key(key_event) => convert_key_event(key_event),
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event),
        CrosstermEvent::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}
