use std::sync::{Arc, Mutex};
use std::time::Instant;

use combobox::{Buffer, ComboOption, Combobox, Hit, Pointer, Rect, Theme};

const ANCHOR: Rect = Rect::new(2, 3, 20, 1);
const BOUNDS: Rect = Rect::new(0, 0, 40, 20);

fn abc() -> Vec<ComboOption> {
    vec![
        ComboOption::new("a", "Alpha"),
        ComboOption::new("b", "Bravo"),
        ComboOption::new("c", "Charlie"),
    ]
}

fn many(count: usize) -> Vec<ComboOption> {
    (0..count)
        .map(|i| ComboOption::new(format!("opt{i}"), format!("Option {i}")))
        .collect()
}

fn render(combobox: &Combobox, theme: &Theme) -> Buffer {
    let mut buf = Buffer::new(BOUNDS.width, BOUNDS.height);
    let layout = combobox.layout(ANCHOR, BOUNDS);
    combobox.render(&layout, &mut buf, theme);
    buf
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_closed_layout_is_trigger_only() {
    let combobox = Combobox::new(abc());
    let layout = combobox.layout(ANCHOR, BOUNDS);
    assert_eq!(layout.trigger, Rect::new(2, 3, 20, 1));
    assert!(layout.popover.is_none());
}

#[test]
fn test_open_layout_places_popover_below_trigger() {
    let mut combobox = Combobox::new(abc());
    combobox.open();
    let layout = combobox.layout(ANCHOR, BOUNDS);
    let popover = layout.popover.expect("popover should be laid out");

    assert_eq!(popover.area, Rect::new(2, 4, 20, 4));
    assert_eq!(popover.search, Rect::new(2, 4, 20, 1));
    assert!(popover.clear.is_none());
    assert_eq!(
        popover.rows,
        vec![
            (0, Rect::new(2, 5, 20, 1)),
            (1, Rect::new(2, 6, 20, 1)),
            (2, Rect::new(2, 7, 20, 1)),
        ]
    );
    assert!(popover.empty.is_none());
}

#[test]
fn test_clear_icon_only_with_search_text() {
    let mut combobox = Combobox::new(abc());
    combobox.open();
    combobox.set_search_text("a");
    let popover = combobox.layout(ANCHOR, BOUNDS).popover.unwrap();
    assert_eq!(popover.clear, Some(Rect::new(20, 4, 1, 1)));
}

#[test]
fn test_window_follows_highlight() {
    let mut combobox = Combobox::new(many(10)).max_visible_rows(3).value("opt7");
    combobox.open();
    let popover = combobox.layout(ANCHOR, BOUNDS).popover.unwrap();
    let rows: Vec<usize> = popover.rows.iter().map(|(row, _)| *row).collect();
    assert_eq!(rows, vec![5, 6, 7]);

    // Wrapping to the top scrolls back
    combobox.highlight_next();
    combobox.highlight_next();
    combobox.highlight_next();
    assert_eq!(combobox.highlighted_row(), Some(0));
    let popover = combobox.layout(ANCHOR, BOUNDS).popover.unwrap();
    let rows: Vec<usize> = popover.rows.iter().map(|(row, _)| *row).collect();
    assert_eq!(rows, vec![0, 1, 2]);
}

#[test]
fn test_popover_clipped_to_bounds() {
    let mut combobox = Combobox::new(abc());
    combobox.open();
    let popover = combobox
        .layout(ANCHOR, Rect::new(0, 0, 40, 6))
        .popover
        .unwrap();
    assert_eq!(popover.area.height, 2);
    assert_eq!(popover.rows.len(), 1);
}

#[test]
fn test_empty_message_row() {
    let mut combobox = Combobox::new(abc());
    combobox.open();
    combobox.set_search_text("zzz");
    let popover = combobox.layout(ANCHOR, BOUNDS).popover.unwrap();
    assert!(popover.rows.is_empty());
    assert_eq!(popover.empty, Some(Rect::new(2, 5, 20, 1)));
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_regions() {
    let mut combobox = Combobox::new(abc());
    combobox.open();
    combobox.set_search_text("a");
    let layout = combobox.layout(ANCHOR, BOUNDS);

    assert_eq!(layout.hit_test(5, 3), Hit::Trigger);
    assert_eq!(layout.hit_test(5, 4), Hit::Search);
    assert_eq!(layout.hit_test(20, 4), Hit::ClearSearch);
    assert_eq!(layout.hit_test(5, 6), Hit::Option(1));
    assert_eq!(layout.hit_test(1, 6), Hit::Outside);
    assert_eq!(layout.hit_test(5, 15), Hit::Outside);
}

#[test]
fn test_rect_edges_saturate_at_coordinate_limit() {
    let rect = Rect::new(u16::MAX - 2, u16::MAX - 1, 10, 5);
    assert_eq!(rect.right(), u16::MAX);
    assert_eq!(rect.bottom(), u16::MAX);
    assert!(rect.contains(u16::MAX - 1, u16::MAX - 1));
    assert!(!rect.contains(u16::MAX, u16::MAX - 1));
    assert!(!rect.contains(0, 0));
}

// ============================================================================
// Pointer handling
// ============================================================================

#[test]
fn test_pointer_flow() {
    let now = Instant::now();
    let calls = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = calls.clone();
    let mut combobox = Combobox::new(abc())
        .on_value_change(move |value| sink.lock().unwrap().push(value.to_string()));

    let layout = combobox.layout(ANCHOR, BOUNDS);
    assert!(combobox.handle_pointer(Pointer::click(5, 3), &layout, now));
    assert!(combobox.is_open());

    let layout = combobox.layout(ANCHOR, BOUNDS);
    assert!(combobox.handle_pointer(Pointer::hover(5, 7), &layout, now));
    assert_eq!(combobox.highlighted_row(), Some(2));

    assert!(combobox.handle_pointer(Pointer::click(5, 6), &layout, now));
    assert_eq!(*calls.lock().unwrap(), vec!["b".to_string()]);
    assert!(!combobox.is_open());
}

#[test]
fn test_click_outside_closes() {
    let now = Instant::now();
    let mut combobox = Combobox::new(abc());
    combobox.open();
    let layout = combobox.layout(ANCHOR, BOUNDS);
    assert!(combobox.handle_pointer(Pointer::click(30, 15), &layout, now));
    assert!(!combobox.is_open());
}

#[test]
fn test_click_clear_icon_empties_search() {
    let now = Instant::now();
    let mut combobox = Combobox::new(abc());
    combobox.open();
    combobox.set_search_text("br");
    let layout = combobox.layout(ANCHOR, BOUNDS);

    assert!(combobox.handle_pointer(Pointer::click(20, 4), &layout, now));
    assert_eq!(combobox.search_text(), "");
    assert!(combobox.is_open());
}

#[test]
fn test_click_disabled_row_is_inert() {
    let now = Instant::now();
    let calls = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = calls.clone();
    let mut combobox = Combobox::new(vec![
        ComboOption::new("a", "Alpha"),
        ComboOption::new("b", "Bravo").disabled(),
    ])
    .on_value_change(move |value| sink.lock().unwrap().push(value.to_string()));
    combobox.open();
    let layout = combobox.layout(ANCHOR, BOUNDS);

    assert!(!combobox.handle_pointer(Pointer::hover(5, 6), &layout, now));
    assert!(!combobox.handle_pointer(Pointer::click(5, 6), &layout, now));
    assert!(combobox.is_open());
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_disabled_widget_ignores_pointer() {
    let now = Instant::now();
    let mut combobox = Combobox::new(abc()).disabled(true);
    let layout = combobox.layout(ANCHOR, BOUNDS);
    assert!(!combobox.handle_pointer(Pointer::click(5, 3), &layout, now));
    assert!(!combobox.is_open());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_closed_trigger_with_placeholder() {
    let theme = Theme::default();
    let combobox = Combobox::new(abc()).placeholder("Pick one");
    let buf = render(&combobox, &theme);

    let row = buf.row_text(3);
    assert!(row.contains("Pick one"), "got {:?}", row);
    assert!(row.contains('▼'));
    assert_eq!(buf.get(3, 3).unwrap().fg, theme.muted);
    assert_eq!(buf.row_text(4), "");
}

#[test]
fn test_render_trigger_shows_selected_label() {
    let theme = Theme::default();
    let combobox = Combobox::new(abc()).value("c");
    let buf = render(&combobox, &theme);
    assert!(buf.row_text(3).contains("Charlie"));
    assert_eq!(buf.get(3, 3).unwrap().fg, theme.foreground);
}

#[test]
fn test_render_open_popover() {
    let theme = Theme::default();
    let mut combobox = Combobox::new(abc()).value("b");
    combobox.open();
    let buf = render(&combobox, &theme);

    assert!(buf.row_text(3).contains('▲'));
    let search = buf.row_text(4);
    assert!(search.contains('⌕'));
    assert!(search.contains("Search..."));
    assert!(buf.row_text(5).contains("Alpha"));
    assert!(buf.row_text(6).contains("✓ Bravo"));
    assert!(buf.row_text(7).contains("Charlie"));

    // The selected value is also the highlighted one
    assert_eq!(buf.get(2, 6).unwrap().bg, theme.highlight);
    assert_eq!(buf.get(2, 5).unwrap().bg, theme.popover);
    assert_eq!(buf.get(3, 6).unwrap().fg, theme.accent);
}

#[test]
fn test_render_disabled_option_dimmed() {
    let theme = Theme::default();
    let mut combobox = Combobox::new(vec![
        ComboOption::new("a", "Alpha"),
        ComboOption::new("b", "Bravo").disabled(),
    ]);
    combobox.open();
    let buf = render(&combobox, &theme);

    let cell = buf.get(5, 6).unwrap();
    assert_eq!(cell.char, 'B');
    assert!(cell.style.dim);
    assert_eq!(cell.fg, theme.disabled);
}

#[test]
fn test_render_icon_before_label() {
    let theme = Theme::default();
    let mut combobox = Combobox::new(vec![ComboOption::new("a", "Alpha").icon("★")]);
    combobox.open();
    let buf = render(&combobox, &theme);
    assert!(buf.row_text(5).contains("★ Alpha"));
}

#[test]
fn test_render_search_text_and_empty_message() {
    let theme = Theme::default();
    let mut combobox = Combobox::new(abc()).empty_message("Nothing here.");
    combobox.open();
    combobox.set_search_text("zzz");
    let buf = render(&combobox, &theme);

    let search = buf.row_text(4);
    assert!(search.contains("zzz"));
    assert!(search.contains('✕'));
    assert!(buf.row_text(5).contains("Nothing here."));
}
