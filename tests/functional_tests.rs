#![cfg(feature = "functional")]
//! Integration tests for the collection helpers.
//!
//! The helpers are thin layers over the comparator and the comparison set, so
//! these tests focus on the mixed-kind cases where that matters: integer
//! widths, floats against integers, NaN and records addressed by field.

use std::collections::HashMap;

use collecta::compare::Operator;
use collecta::functional::{
    avg, contains, count, diff, diff_keys, duplicates, except, filter_where, filter_where_field,
    filter_where_field_in, filter_where_field_not_in, filter_where_in, filter_where_not_in,
    index_of, keys, max, min, only, random, same, shuffle, sort, sort_by_key_with, sort_desc, sum,
    unique, SortOrder,
};
use collecta::access::pluck;
use collecta::value::{Record, Value};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::{fixture, rstest};

fn user(id: i64, name: &str, age: u8) -> Record {
    Record::new("User")
        .with_field("ID", id)
        .with_field("Name", name)
        .with_field("Age", age)
}

#[fixture]
fn users() -> Vec<Record> {
    vec![
        user(1, "Hugo", 40),
        user(2, "Lisa", 25),
        user(3, "Iris", 31),
        user(4, "Mona", 25),
    ]
}

fn names(records: &[Record]) -> Vec<String> {
    pluck(records, "Name")
}

// =============================================================================
// Where
// =============================================================================

#[rstest]
#[case(Operator::Eq, vec![3])]
#[case(Operator::Ne, vec![1, 2, 4])]
#[case(Operator::Lt, vec![1, 2])]
#[case(Operator::Lte, vec![1, 2, 3])]
#[case(Operator::Gt, vec![4])]
#[case(Operator::Gte, vec![3, 4])]
fn test_filter_where_widens_integers(#[case] operator: Operator, #[case] expected: Vec<u16>) {
    assert_eq!(filter_where(&[1u16, 2, 3, 4], operator, &3i64), expected);
}

#[rstest]
fn test_filter_where_floats_never_equal_integers() {
    assert!(filter_where(&[1, 2, 3], Operator::Eq, &2.0).is_empty());
    assert_eq!(filter_where(&[1, 2, 3], Operator::Ne, &2.0), [1, 2, 3]);
}

#[rstest]
fn test_filter_where_float_tolerance() {
    assert_eq!(filter_where(&[0.1 + 0.2, 0.5], Operator::Eq, &0.3), [0.1 + 0.2]);
}

#[rstest]
fn test_filter_where_field(users: Vec<Record>) {
    let found = filter_where_field(&users, "Age", Operator::Eq, &25);
    assert_eq!(names(&found), ["Lisa", "Mona"]);

    let found = filter_where_field(&users, "Age", Operator::Gt, &30i64);
    assert_eq!(names(&found), ["Hugo", "Iris"]);
}

#[rstest]
fn test_filter_where_field_on_maps() {
    let rows = vec![
        HashMap::from([("kind", "a"), ("tag", "x")]),
        HashMap::from([("kind", "b"), ("tag", "y")]),
    ];
    let found = filter_where_field(&rows, "kind", Operator::Eq, &"b");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["tag"], "y");
}

// =============================================================================
// WhereIn / WhereNotIn
// =============================================================================

#[rstest]
fn test_filter_where_in_mixes_integer_widths() {
    assert_eq!(filter_where_in(&[1i32, 2, 3], &[2u64, 3u64]), [2, 3]);
    assert!(filter_where_in(&[1i32, 2, 3], &Vec::<i32>::new()).is_empty());
}

#[rstest]
fn test_filter_where_not_in_keeps_everything_against_floats() {
    assert_eq!(filter_where_not_in(&[1, 2, 3], &[1.0, 2.0, 3.14]), [1, 2, 3]);
    assert_eq!(filter_where_not_in(&[1.0, 2.0, 3.14], &[3.14]), [1.0, 2.0]);
}

#[rstest]
fn test_filter_where_field_membership(users: Vec<Record>) {
    let found = filter_where_field_in(&users, "ID", &[2u8, 4u8]);
    assert_eq!(names(&found), ["Lisa", "Mona"]);

    let found = filter_where_field_not_in(&users, "Name", &["Hugo", "Mona"]);
    assert_eq!(names(&found), ["Lisa", "Iris"]);
}

#[rstest]
fn test_filter_where_field_membership_by_index() {
    let pairs = vec![vec![1, 10], vec![2, 20], vec![3]];
    let found = filter_where_field_in(&pairs, 1, &[20]);
    assert_eq!(found, [vec![2, 20]]);

    let found = filter_where_field_not_in(&pairs, 1, &[20]);
    assert_eq!(found, [vec![1, 10]]);
}

// =============================================================================
// Slices
// =============================================================================

#[rstest]
fn test_same_and_search() {
    assert!(same(&["a", "b"], &["a", "b"]));
    assert!(!same(&["a", "b"], &["b", "a"]));
    assert_eq!(index_of(&[3, 5, 5], &5), Some(1));
    assert!(contains(&[f64::NAN], &f64::NAN));
    assert_eq!(diff(&["a", "b", "c"], &["c"]), ["a", "b"]);
}

#[rstest]
fn test_unique_and_duplicates_over_records(users: Vec<Record>) {
    let mut repeated = users.clone();
    repeated.push(user(1, "Hugo", 40));

    assert_eq!(unique(&repeated).len(), users.len());
    let extra = duplicates(&repeated);
    assert_eq!(extra.keys().copied().collect::<Vec<_>>(), [4]);
}

#[rstest]
fn test_unique_values_of_mixed_kinds() {
    let mixed = [Value::from(1i32), Value::from(1i64), Value::from(1.0), Value::from(1i32)];
    assert_eq!(mixed[0], mixed[1]);
    assert_eq!(unique(&mixed).len(), 2);
}

#[rstest]
fn test_unique_and_duplicates_agree_with_value_equality() {
    let widths = [Value::from(1i32), Value::from(1i64)];
    assert_eq!(unique(&widths).len(), 1);
    let repeated = duplicates(&widths);
    assert_eq!(repeated.len(), 1);
    assert!(repeated.contains_key(&1));
}

#[rstest]
fn test_count_words() {
    let counts = count(&["to", "be", "or", "not", "to", "be"]);
    assert_eq!(counts["to"], 2);
    assert_eq!(counts["not"], 1);
    assert_eq!(counts.values().sum::<usize>(), 6);
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
fn test_sort_directions() {
    assert_eq!(sort(&["pear", "apple", "fig"]), ["apple", "fig", "pear"]);
    assert_eq!(sort_desc(&[1u8, 3, 2]), [3, 2, 1]);
}

#[rstest]
fn test_sort_records_by_field(users: Vec<Record>) {
    let ages: Vec<u8> = pluck(&users, "Age");
    let sorted = sort_by_key_with(&users, SortOrder::Descending, |_, index| ages[index]);
    assert_eq!(names(&sorted), ["Hugo", "Iris", "Lisa", "Mona"]);
}

// =============================================================================
// Random
// =============================================================================

#[rstest]
fn test_seeded_shuffle_is_reproducible() {
    let items: Vec<u32> = (0..32).collect();
    let first = shuffle(&items, &mut StdRng::seed_from_u64(11));
    let second = shuffle(&items, &mut StdRng::seed_from_u64(11));
    assert_eq!(first, second);
    assert_eq!(sort(&first), items);
}

#[rstest]
fn test_random_on_empty_slice() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(random::<u8, _>(&[], &mut rng), None);
    assert_eq!(random(&[9], &mut rng), Some(&9));
}

// =============================================================================
// Numbers
// =============================================================================

#[rstest]
fn test_aggregates() {
    let items = [4, 8, 15, 16, 23, 42];
    assert_eq!(sum(&items), 108);
    assert_eq!(avg(&items), 18);
    assert_eq!(min(&items), 4);
    assert_eq!(max(&items), 42);
}

#[rstest]
fn test_aggregates_of_empty_slice() {
    let empty: [f32; 0] = [];
    assert_eq!(sum(&empty), 0.0);
    assert_eq!(avg(&empty), 0.0);
    assert_eq!(min(&empty), 0.0);
    assert_eq!(max(&empty), 0.0);
}

// =============================================================================
// Maps
// =============================================================================

#[rstest]
fn test_map_helpers() {
    let stock = HashMap::from([("apple", 3), ("pear", 0), ("fig", 7)]);

    let picked = only(&stock, &["fig", "kiwi"]);
    assert_eq!(picked, HashMap::from([("fig", 7), ("kiwi", 0)]));

    let rest = except(&stock, &["apple", "kiwi"]);
    assert_eq!(rest, HashMap::from([("pear", 0), ("fig", 7)]));

    let mut names = keys(&stock);
    names.sort_unstable();
    assert_eq!(names, ["apple", "fig", "pear"]);

    let sold = HashMap::from([("pear", true)]);
    assert_eq!(diff_keys(&stock, &sold), HashMap::from([("apple", 3), ("fig", 7)]));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_where_in_and_not_in_partition(
        items in prop::collection::vec(-8i32..8, 0..24),
        candidates in prop::collection::vec(-8i64..8, 0..8),
    ) {
        let inside = filter_where_in(&items, &candidates);
        let outside = filter_where_not_in(&items, &candidates);
        prop_assert_eq!(inside.len() + outside.len(), items.len());
        for item in &inside {
            prop_assert!(candidates.contains(&i64::from(*item)));
        }
        for item in &outside {
            prop_assert!(!candidates.contains(&i64::from(*item)));
        }
    }

    #[test]
    fn prop_unique_has_no_duplicates(items in prop::collection::vec(0u8..6, 0..32)) {
        let distinct = unique(&items);
        prop_assert!(duplicates(&distinct).is_empty());
        prop_assert_eq!(distinct.len() + duplicates(&items).len(), items.len());
    }

    #[test]
    fn prop_sort_orders_and_preserves_length(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let ascending = sort(&items);
        prop_assert_eq!(ascending.len(), items.len());
        prop_assert!(ascending.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut descending = sort_desc(&items);
        descending.reverse();
        prop_assert_eq!(descending, ascending);
    }

    #[test]
    fn prop_min_max_bound_every_element(items in prop::collection::vec(any::<i16>(), 1..32)) {
        let low = min(&items);
        let high = max(&items);
        prop_assert!(items.iter().all(|item| low <= *item && *item <= high));
    }
}
