//! Event loop hosting a single combobox.

use std::time::Instant;

use combobox::{
    Buffer, Combobox, ComboboxLayout, InputEvent, Key, Paint, Rect, TextStyle, Theme, convert_event,
};
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, trace};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use crate::error::DemoError;
use crate::terminal::TerminalGuard;

const TRIGGER_WIDTH: u16 = 40;

/// Sleep until a deadline, or wait forever if None.
/// This is used as a conditional branch in tokio::select!
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

fn is_quit(event: &InputEvent, combobox: &Combobox) -> bool {
    match event {
        InputEvent::Key { key: Key::Char('c'), modifiers } => modifiers.ctrl,
        InputEvent::Key { key: Key::Char('q'), .. } => !combobox.is_open(),
        InputEvent::Key { key: Key::Escape, .. } => !combobox.is_open(),
        _ => false,
    }
}

fn draw_frame(combobox: &Combobox, theme: &Theme, buf: &mut Buffer) -> ComboboxLayout {
    let area = buf.area();
    buf.fill(area, Paint::new(theme.foreground, theme.background));

    let title = Paint::new(theme.foreground, theme.background).with_style(TextStyle::new().bold());
    let muted = Paint::new(theme.muted, theme.background);
    buf.set_str(2, 1, "Combobox demo", area.right(), title);

    let selected = match combobox.selected_value() {
        Some(value) => format!("Selected: {value}"),
        None => "Selected: (none)".to_string(),
    };
    buf.set_str(2, area.bottom().saturating_sub(2), &selected, area.right(), muted);
    buf.set_str(
        2,
        area.bottom().saturating_sub(1),
        "Enter/Space open · ↑/↓ move · Enter select · Esc close · q quit",
        area.right(),
        muted,
    );

    let width = TRIGGER_WIDTH.min(area.width.saturating_sub(4));
    let anchor = Rect::new(2, 3, width, 1);
    // Keep the popover clear of the footer.
    let bounds = Rect::new(0, 0, area.width, area.height.saturating_sub(2));
    let layout = combobox.layout(anchor, bounds);
    combobox.render(&layout, buf, theme);
    layout
}

/// Run the demo until the user quits. Returns the last selected value.
pub async fn run(
    combobox: Combobox,
    theme: Theme,
    term: &mut TerminalGuard,
) -> Result<Option<String>, DemoError> {
    // The widget never writes the selection itself; it reports it here and
    // the loop pushes it back as the new value.
    let (selection_tx, mut selection_rx) = mpsc::unbounded_channel::<String>();
    let mut combobox = combobox.on_value_change(move |value| {
        let _ = selection_tx.send(value.to_string());
    });

    let (width, height) = term.size();
    info!(
        "Demo started: terminal {}x{}, {} options",
        width,
        height,
        combobox.options().len()
    );

    let mut events = EventStream::new();
    let mut layout = ComboboxLayout {
        trigger: Rect::default(),
        popover: None,
    };

    loop {
        term.draw(|buf| layout = draw_frame(&combobox, &theme, buf))?;

        let next_deadline = combobox.next_deadline();

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event_result) = maybe_event else {
                    info!("Event stream closed");
                    break;
                };
                let crossterm_event = event_result?;
                trace!("Crossterm event: {:?}", crossterm_event);
                let Some(event) = convert_event(crossterm_event) else {
                    continue;
                };
                if is_quit(&event, &combobox) {
                    info!("Quit requested");
                    break;
                }
                let handled = combobox.handle_input(event, &layout, Instant::now());
                debug!("Event {:?} handled={}", event, handled);
            }

            _ = sleep_until_optional(next_deadline) => {
                combobox.tick(Instant::now());
            }
        }

        while let Ok(value) = selection_rx.try_recv() {
            info!("Selected {:?}", value);
            combobox.set_value(Some(value), Instant::now());
        }
    }

    Ok(combobox.selected_value().map(str::to_string))
}
