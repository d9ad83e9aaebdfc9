//! Search filtering and the navigable (enabled-only) subset.
//!
//! Both stages are pure functions of their inputs. The widget caches their
//! index form and recomputes it whenever the options or the search text
//! change.

use std::borrow::Cow;

use crate::option::ComboOption;

/// Filter options by a case-insensitive substring match on the label.
///
/// An empty query returns the input slice itself, borrowed and unchanged.
/// Otherwise the matching options are returned in their original order.
pub fn filter_options<'a>(options: &'a [ComboOption], query: &str) -> Cow<'a, [ComboOption]> {
    if query.is_empty() {
        return Cow::Borrowed(options);
    }

    let query_lower = query.to_lowercase();
    Cow::Owned(
        options
            .iter()
            .filter(|option| option.label_contains(&query_lower))
            .cloned()
            .collect(),
    )
}

/// Same as [`filter_options`], returning indices into `options`.
pub fn filter_indices(options: &[ComboOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let query_lower = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.label_contains(&query_lower))
        .map(|(index, _)| index)
        .collect()
}

/// Keep only the enabled entries of a filtered index list, preserving order.
pub fn navigable_indices(options: &[ComboOption], filtered: &[usize]) -> Vec<usize> {
    filtered
        .iter()
        .copied()
        .filter(|&index| options.get(index).is_some_and(|option| !option.disabled))
        .collect()
}
