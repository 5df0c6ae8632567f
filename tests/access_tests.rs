//! Tests for the dynamic field accessor.
//!
//! Exercises every addressable shape: records, native sequences and maps,
//! smart pointers and optional values, and the error taxonomy reported when
//! a key does not address anything.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use collecta::access::{any_get, any_get_or_default, get, AccessError, AccessKey};
use collecta::value::{IntoValue, Kind, Record, Reference, Value};
use rstest::rstest;

fn lucy() -> Record {
    Record::new("User")
        .with_field("ID", 33u32)
        .with_field("Name", "Lucy")
        .with_field("Tags", Value::sequence(["admin", "ops"]))
}

// =============================================================================
// Records
// =============================================================================

#[rstest]
fn test_record_fields() {
    assert_eq!(any_get::<String, _>(&lucy(), "Name"), Ok("Lucy".to_owned()));
    assert_eq!(any_get::<u32, _>(&lucy(), "ID"), Ok(33));
    assert_eq!(
        any_get::<Vec<String>, _>(&lucy(), "Tags"),
        Ok(vec!["admin".to_owned(), "ops".to_owned()])
    );
}

#[rstest]
fn test_record_missing_field() {
    assert_eq!(
        any_get::<String, _>(&lucy(), "Email"),
        Err(AccessError::NoSuchField {
            type_name: "User".to_owned(),
            field: "Email".to_owned(),
        })
    );
}

#[rstest]
fn test_type_mismatch_is_an_error() {
    let error = any_get::<i64, _>(&lucy(), "ID").unwrap_err();
    assert_eq!(error.name(), "type_mismatch");
    assert_eq!(any_get_or_default::<i64, _>(&lucy(), "ID"), 0);
}

// =============================================================================
// Sequences
// =============================================================================

#[rstest]
#[case(AccessKey::from(0), Ok(1))]
#[case(AccessKey::from(2usize), Ok(3))]
#[case(AccessKey::from("1"), Ok(2))]
#[case(AccessKey::from(10), Err("index_overflow"))]
#[case(AccessKey::from(-1), Err("index_overflow"))]
#[case(AccessKey::from("x"), Err("bad_index"))]
fn test_vector_index(#[case] key: AccessKey, #[case] expected: Result<i32, &str>) {
    let numbers = vec![1, 2, 3];
    let result = any_get::<i32, _>(&numbers, key).map_err(|error| error.name());
    assert_eq!(result, expected);
}

#[rstest]
fn test_index_overflow_reports_bounds() {
    assert_eq!(
        any_get::<i32, _>(&[1, 2, 3], 10),
        Err(AccessError::IndexOverflow {
            index: 10,
            length: 3
        })
    );
}

#[rstest]
fn test_nested_sequence_element() {
    let grid = vec![vec![1, 2], vec![3, 4]];
    let row: Vec<i32> = any_get(&grid, 1).unwrap();
    assert_eq!(row, [3, 4]);
}

// =============================================================================
// Mappings
// =============================================================================

#[rstest]
fn test_hash_map_lookup() {
    let greetings = HashMap::from([(0, "Hello".to_owned()), (1, "World".to_owned())]);
    assert_eq!(any_get::<String, _>(&greetings, 1), Ok("World".to_owned()));
    assert!(matches!(
        any_get::<String, _>(&greetings, 2),
        Err(AccessError::InvalidKey { .. })
    ));
}

#[rstest]
fn test_map_keys_match_across_widths() {
    let scores: BTreeMap<u32, u8> = BTreeMap::from([(7, 70), (9, 90)]);
    assert_eq!(any_get::<u8, _>(&scores, 9), Ok(90));
    assert_eq!(any_get::<u8, _>(&scores, 9i64), Ok(90));
}

#[rstest]
fn test_text_keyed_map() {
    let config = HashMap::from([("mode".to_owned(), "fast".to_owned())]);
    assert_eq!(any_get::<String, _>(&config, "mode"), Ok("fast".to_owned()));
}

// =============================================================================
// Indirection
// =============================================================================

#[rstest]
fn test_one_level_of_indirection() {
    let boxed = Box::new(lucy());
    assert_eq!(any_get::<String, _>(&boxed, "Name"), Ok("Lucy".to_owned()));

    let shared = Rc::new(vec![5, 6]);
    assert_eq!(any_get::<i32, _>(&shared, 1), Ok(6));

    let present = Some(lucy());
    assert_eq!(any_get::<u32, _>(&present, "ID"), Ok(33));
}

#[rstest]
fn test_borrow_is_transparent() {
    let user = lucy();
    let borrowed = &user;
    assert_eq!(any_get::<String, _>(&borrowed, "Name"), Ok("Lucy".to_owned()));
}

#[rstest]
fn test_nil_reference_fails() {
    let absent: Option<Record> = None;
    assert_eq!(
        any_get::<String, _>(&absent, "Name"),
        Err(AccessError::NilReference)
    );
}

#[rstest]
fn test_multi_level_indirection_is_rejected() {
    let nested = Some(Box::new(lucy()));
    assert_eq!(
        any_get::<String, _>(&nested, "Name"),
        Err(AccessError::Unsupported {
            kind: Kind::Reference
        })
    );
}

#[rstest]
fn test_optional_fields_convert() {
    let user = Record::new("User")
        .with_field("Manager", Reference::nil())
        .with_field("Mentor", Reference::to("Iris"));
    assert_eq!(any_get::<Option<String>, _>(&user, "Manager"), Ok(None));
    assert_eq!(
        any_get::<Option<String>, _>(&user, "Mentor"),
        Ok(Some("Iris".to_owned()))
    );
}

// =============================================================================
// Raw access
// =============================================================================

#[rstest]
fn test_raw_get_returns_values() {
    let view = lucy().to_value();
    assert_eq!(get(&view, &AccessKey::from("ID")), Ok(Value::from(33u32)));
    assert_eq!(
        get(&Value::from(true), &AccessKey::from(0)),
        Err(AccessError::Unsupported { kind: Kind::Bool })
    );
}
