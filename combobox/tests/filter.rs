use std::borrow::Cow;

use combobox::{ComboOption, filter_indices, filter_options, navigable_indices};

fn fruits() -> Vec<ComboOption> {
    vec![
        ComboOption::new("apple", "Apple"),
        ComboOption::new("banana", "Banana").disabled(),
        ComboOption::new("apricot", "Apricot"),
        ComboOption::new("grape", "Grape"),
        ComboOption::new("pineapple", "PINEAPPLE"),
    ]
}

// ============================================================================
// Filter Stage
// ============================================================================

#[test]
fn test_empty_query_is_identity() {
    let options = fruits();
    let filtered = filter_options(&options, "");
    assert!(matches!(filtered, Cow::Borrowed(_)));
    assert!(std::ptr::eq(filtered.as_ref(), options.as_slice()));
}

#[test]
fn test_substring_match_is_case_insensitive() {
    let options = fruits();
    let filtered = filter_options(&options, "aPp");
    let values: Vec<&str> = filtered.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["apple", "pineapple"]);
}

#[test]
fn test_filter_preserves_original_order() {
    let options = fruits();
    let filtered = filter_options(&options, "a");
    let values: Vec<&str> = filtered
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, vec!["apple", "banana", "apricot", "grape", "pineapple"]);
}

#[test]
fn test_filter_matches_label_not_value() {
    let options = vec![ComboOption::new("us", "United States")];
    assert!(filter_options(&options, "us").is_empty());
    assert_eq!(filter_options(&options, "states").len(), 1);
}

#[test]
fn test_no_matches() {
    let options = fruits();
    assert!(filter_options(&options, "xyz").is_empty());
    assert!(filter_indices(&options, "xyz").is_empty());
}

#[test]
fn test_every_filtered_label_contains_query() {
    let options = fruits();
    for query in ["a", "AP", "ple", "r", "Grape", "e"] {
        let needle = query.to_lowercase();
        for option in filter_options(&options, query).iter() {
            assert!(
                option.label.to_lowercase().contains(&needle),
                "{:?} should contain {:?}",
                option.label,
                query
            );
        }
    }
}

#[test]
fn test_filter_indices_agree_with_filter_options() {
    let options = fruits();
    for query in ["", "a", "ap", "GRA", "zzz"] {
        let by_index: Vec<&ComboOption> = filter_indices(&options, query)
            .into_iter()
            .map(|i| &options[i])
            .collect();
        let filtered = filter_options(&options, query);
        let by_value: Vec<&ComboOption> = filtered.iter().collect();
        assert_eq!(by_index, by_value, "query {:?}", query);
    }
}

// ============================================================================
// Navigable Subset
// ============================================================================

#[test]
fn test_navigable_drops_disabled() {
    let options = fruits();
    let filtered = filter_indices(&options, "");
    assert_eq!(navigable_indices(&options, &filtered), vec![0, 2, 3, 4]);
}

#[test]
fn test_navigable_is_ordered_subsequence_of_filtered() {
    let options = fruits();
    for query in ["", "a", "an", "p"] {
        let filtered = filter_indices(&options, query);
        let navigable = navigable_indices(&options, &filtered);

        let mut rest = filtered.iter();
        for index in &navigable {
            assert!(rest.any(|f| f == index), "order broken for {:?}", query);
            assert!(!options[*index].disabled);
        }
    }
}

#[test]
fn test_navigable_empty_when_all_disabled() {
    let options = vec![
        ComboOption::new("a", "A").disabled(),
        ComboOption::new("b", "B").disabled(),
    ];
    let filtered = filter_indices(&options, "");
    assert_eq!(filtered.len(), 2);
    assert!(navigable_indices(&options, &filtered).is_empty());
}
