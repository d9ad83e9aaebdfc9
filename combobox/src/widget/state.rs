//! Combobox widget state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::debounce::Debounce;
use crate::filter::{filter_indices, navigable_indices};
use crate::highlight::Highlight;
use crate::option::ComboOption;

/// Callback invoked with the value of a confirmed option.
pub type ValueChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Delay before the search text is cleared after a close or value change.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(100);

/// Option rows shown in the popover before it scrolls.
pub const DEFAULT_MAX_VISIBLE_ROWS: u16 = 8;

/// A searchable dropdown selection widget.
///
/// The selected value is owned by the caller. The widget only mirrors it
/// (for the trigger label and the initial highlight) and asks for changes
/// through [`Combobox::on_value_change`]; the caller pushes the new value
/// back with [`Combobox::set_value`].
///
/// Time never comes from the clock. Operations that schedule the deferred
/// search reset take `now`, and the host calls [`Combobox::tick`] when
/// [`Combobox::next_deadline`] passes.
///
/// # Example
///
/// ```ignore
/// let mut country = Combobox::new([("us", "United States"), ("uk", "United Kingdom")])
///     .value("us")
///     .placeholder("Select country...")
///     .search_placeholder("Search countries...")
///     .empty_message("No country found.")
///     .on_value_change(|value| log::info!("picked {value}"));
///
/// country.open();
/// ```
pub struct Combobox {
    id: String,
    options: Vec<ComboOption>,
    value: Option<String>,
    placeholder: String,
    search_placeholder: String,
    empty_message: String,
    disabled: bool,
    max_visible_rows: u16,
    on_value_change: Option<ValueChangeHandler>,

    open: bool,
    search: String,
    /// Indices into `options` that match `search`.
    filtered: Vec<usize>,
    /// Enabled subset of `filtered`, still indices into `options`.
    navigable: Vec<usize>,
    highlight: Highlight,
    search_reset: Debounce,
}

impl std::fmt::Debug for Combobox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("options", &self.options.len())
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("open", &self.open)
            .field("search", &self.search)
            .field("highlight", &self.highlight)
            .field("on_value_change", &self.on_value_change.is_some())
            .finish()
    }
}

impl Combobox {
    /// Create a combobox over the given options, with nothing selected.
    pub fn new<O>(options: impl IntoIterator<Item = O>) -> Self
    where
        O: Into<ComboOption>,
    {
        let options: Vec<ComboOption> = options.into_iter().map(Into::into).collect();
        let filtered = filter_indices(&options, "");
        let navigable = navigable_indices(&options, &filtered);

        Self {
            id: "combobox".into(),
            options,
            value: None,
            placeholder: "Select option...".into(),
            search_placeholder: "Search...".into(),
            empty_message: "No results found.".into(),
            disabled: false,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            on_value_change: None,
            open: false,
            search: String::new(),
            filtered,
            navigable,
            highlight: Highlight::NONE,
            search_reset: Debounce::new(DEFAULT_RESET_DELAY),
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set the initially selected value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Text shown on the trigger when no option matches the value.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Text shown in the empty search field.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Text shown when a non-empty search matches nothing.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Disable the whole widget.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Identifier used in logs and by tests to find the widget.
    pub fn class_name(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn reset_delay(mut self, delay: Duration) -> Self {
        self.search_reset.set_delay(delay);
        self
    }

    pub fn max_visible_rows(mut self, rows: u16) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }

    /// Register the callback receiving confirmed values.
    pub fn on_value_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_value_change = Some(Arc::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    /// The caller's selected value, as last pushed to the widget.
    pub fn selected_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The option whose value equals the selected value.
    pub fn selected_option(&self) -> Option<&ComboOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|option| option.value == value)
    }

    /// Label for the trigger: the selected option's label, or the placeholder.
    pub fn trigger_label(&self) -> &str {
        self.selected_option()
            .map(|option| option.label.as_str())
            .unwrap_or(self.placeholder.as_str())
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn search_placeholder_text(&self) -> &str {
        &self.search_placeholder
    }

    pub fn empty_message_text(&self) -> &str {
        &self.empty_message
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn visible_rows(&self) -> u16 {
        self.max_visible_rows
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Options matching the search, in their original order.
    pub fn filtered_options(&self) -> impl Iterator<Item = &ComboOption> + '_ {
        self.filtered.iter().map(|&index| &self.options[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Option at a position in the filtered list.
    pub fn filtered_option(&self, row: usize) -> Option<&ComboOption> {
        self.filtered.get(row).map(|&index| &self.options[index])
    }

    /// Enabled options matching the search; the keyboard moves over these.
    pub fn navigable_options(&self) -> impl Iterator<Item = &ComboOption> + '_ {
        self.navigable.iter().map(|&index| &self.options[index])
    }

    pub fn navigable_len(&self) -> usize {
        self.navigable.len()
    }

    pub fn highlighted_option(&self) -> Option<&ComboOption> {
        let position = self.highlight.index()?;
        self.navigable
            .get(position)
            .map(|&index| &self.options[index])
    }

    /// Filtered row holding the highlighted option.
    pub fn highlighted_row(&self) -> Option<usize> {
        let option_index = *self.navigable.get(self.highlight.index()?)?;
        self.filtered.iter().position(|&index| index == option_index)
    }

    /// The empty message is only shown for a search that matches nothing.
    pub fn shows_empty_message(&self) -> bool {
        !self.search.is_empty() && self.filtered.is_empty()
    }

    /// When the host should call [`Combobox::tick`] next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search_reset.deadline()
    }

    // -------------------------------------------------------------------------
    // Caller-owned props
    // -------------------------------------------------------------------------

    /// Mirror a new selected value from the caller.
    ///
    /// A change schedules the deferred search reset.
    pub fn set_value(&mut self, value: Option<String>, now: Instant) {
        if self.value == value {
            return;
        }
        debug!("Combobox[{}] value {:?} -> {:?}", self.id, self.value, value);
        self.value = value;
        self.search_reset.schedule(now);
    }

    /// Replace the option list.
    pub fn set_options<O>(&mut self, options: impl IntoIterator<Item = O>)
    where
        O: Into<ComboOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.refresh();
        self.highlight = self.highlight.clamp(self.navigable.len());
        debug!(
            "Combobox[{}] options replaced count={} navigable={}",
            self.id,
            self.options.len(),
            self.navigable.len()
        );
    }

    /// Enable or disable the widget. Disabling closes an open popover.
    pub fn set_disabled(&mut self, disabled: bool, now: Instant) {
        self.disabled = disabled;
        if disabled {
            self.close(now);
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Open the popover. Returns false if it was already open or disabled.
    pub fn open(&mut self) -> bool {
        if self.disabled || self.open {
            return false;
        }
        self.open = true;
        self.search_reset.cancel();
        self.highlight = Highlight::initial(
            self.navigable_options().map(|option| option.value.as_str()),
            self.value.as_deref(),
        );
        debug!(
            "Combobox[{}] open highlight={:?} navigable={}",
            self.id,
            self.highlight.index(),
            self.navigable.len()
        );
        true
    }

    /// Close the popover. Returns false if it was already closed.
    pub fn close(&mut self, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.highlight = Highlight::NONE;
        self.search_reset.schedule(now);
        debug!("Combobox[{}] close", self.id);
        true
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.open {
            self.close(now)
        } else {
            self.open()
        }
    }

    // -------------------------------------------------------------------------
    // Search text
    // -------------------------------------------------------------------------

    /// Replace the search text, refiltering and resetting the highlight.
    ///
    /// A closed popover has no highlight, so the text can change (the
    /// deferred reset) without bringing one back.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search {
            return false;
        }
        self.search = text;
        self.refresh();
        self.highlight = if self.open {
            Highlight::first(self.navigable.len())
        } else {
            Highlight::NONE
        };
        debug!(
            "Combobox[{}] search={:?} filtered={} navigable={}",
            self.id,
            self.search,
            self.filtered.len(),
            self.navigable.len()
        );
        true
    }

    pub fn push_search_char(&mut self, c: char) -> bool {
        let mut text = self.search.clone();
        text.push(c);
        self.set_search_text(text)
    }

    pub fn pop_search_char(&mut self) -> bool {
        let mut text = self.search.clone();
        if text.pop().is_none() {
            return false;
        }
        self.set_search_text(text)
    }

    /// Empty the search text (the clear icon). Focus stays in the search field.
    pub fn clear_search(&mut self) -> bool {
        self.set_search_text(String::new())
    }

    fn refresh(&mut self) {
        self.filtered = filter_indices(&self.options, &self.search);
        self.navigable = navigable_indices(&self.options, &self.filtered);
    }

    // -------------------------------------------------------------------------
    // Highlight
    // -------------------------------------------------------------------------

    /// Move the highlight down, wrapping to the top.
    pub fn highlight_next(&mut self) -> bool {
        if !self.open || self.navigable.is_empty() {
            return false;
        }
        self.highlight = self.highlight.next(self.navigable.len());
        true
    }

    /// Move the highlight up, wrapping to the bottom.
    pub fn highlight_prev(&mut self) -> bool {
        if !self.open || self.navigable.is_empty() {
            return false;
        }
        self.highlight = self.highlight.prev(self.navigable.len());
        true
    }

    /// Highlight the option under the pointer. Disabled rows are ignored.
    pub fn hover_row(&mut self, row: usize) -> bool {
        if !self.open {
            return false;
        }
        let Some(&option_index) = self.filtered.get(row) else {
            return false;
        };
        match self.navigable.iter().position(|&index| index == option_index) {
            Some(position) => {
                let changed = self.highlight != Highlight::at(position);
                self.highlight = Highlight::at(position);
                changed
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Commit the highlighted option. No-op when nothing is highlighted.
    pub fn confirm_highlighted(&mut self, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        let Some(&option_index) = self
            .highlight
            .index()
            .and_then(|position| self.navigable.get(position))
        else {
            return false;
        };
        self.commit(option_index, now)
    }

    /// Commit the option at a filtered row (a click).
    pub fn select_row(&mut self, row: usize, now: Instant) -> bool {
        if !self.open {
            return false;
        }
        match self.filtered.get(row) {
            Some(&option_index) => self.commit(option_index, now),
            None => false,
        }
    }

    fn commit(&mut self, option_index: usize, now: Instant) -> bool {
        let option = &self.options[option_index];
        if option.disabled {
            debug!(
                "Combobox[{}] ignoring disabled option {:?}",
                self.id, option.value
            );
            return false;
        }
        let value = option.value.clone();
        self.close(now);
        debug!("Combobox[{}] commit {:?}", self.id, value);
        if let Some(ref handler) = self.on_value_change {
            handler(&value);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Deferred reset
    // -------------------------------------------------------------------------

    /// Run the deferred search reset if it is due. Returns true if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.search_reset.fire_if_due(now) {
            return false;
        }
        debug!("Combobox[{}] deferred search reset", self.id);
        self.set_search_text(String::new());
        true
    }
}
