//! Highlight cursor over the navigable options.
//!
//! The cursor is either empty or a position in the navigable subset. Every
//! transition takes the current subset length `n` so the cursor never points
//! past the end.

/// Keyboard/pointer highlight position within the navigable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight(Option<usize>);

impl Highlight {
    /// Nothing highlighted.
    pub const NONE: Self = Self(None);

    /// Highlight a specific navigable position.
    pub const fn at(index: usize) -> Self {
        Self(Some(index))
    }

    /// Starting highlight when the dropdown opens.
    ///
    /// The selected value wins if it is navigable, otherwise the first
    /// navigable option. Empty when there is nothing to navigate.
    pub fn initial<'a>(
        navigable_values: impl IntoIterator<Item = &'a str>,
        selected: Option<&str>,
    ) -> Self {
        let mut count = 0;
        let mut selected_position = None;
        for (position, value) in navigable_values.into_iter().enumerate() {
            count += 1;
            if selected_position.is_none() && selected == Some(value) {
                selected_position = Some(position);
            }
        }

        match (count, selected_position) {
            (0, _) => Self::NONE,
            (_, Some(position)) => Self::at(position),
            (_, None) => Self::at(0),
        }
    }

    /// Highlight after the search text changed.
    pub fn first(n: usize) -> Self {
        if n == 0 { Self::NONE } else { Self::at(0) }
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0.is_none()
    }

    /// Move down one entry, wrapping past the end to the first entry.
    pub fn next(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        match self.0 {
            None => Self::at(0),
            Some(current) => Self::at((current + 1) % n),
        }
    }

    /// Move up one entry, wrapping before the start to the last entry.
    pub fn prev(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        match self.0 {
            None => Self::at(0),
            Some(current) => Self::at((current % n + n - 1) % n),
        }
    }

    /// Drop a position that no longer fits in a subset of length `n`.
    pub fn clamp(self, n: usize) -> Self {
        match self.0 {
            Some(current) if current >= n => Self::first(n),
            _ => self,
        }
    }
}
