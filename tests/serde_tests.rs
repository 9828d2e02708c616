#![cfg(feature = "serde")]

//! Integration tests for serde support in sorted-set.
//!
//! A set is written as a plain ascending sequence and read back from any
//! sequence, sorted and deduplicated.

use rstest::rstest;
use sorted_set::SortedSet;

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
fn test_empty_set_serializes_as_empty_array() {
    let set: SortedSet<i32> = SortedSet::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
}

#[rstest]
fn test_strings_serialize_in_ascending_order() {
    let set = SortedSet::from(["rust".to_string(), "hello".to_string(), "world".to_string()]);
    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"["hello","rust","world"]"#
    );
}

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
#[case::inline((1..=5).collect())]
#[case::shared((1..=100).collect())]
fn test_json_roundtrip(#[case] set: SortedSet<i32>) {
    let json = serde_json::to_string(&set).unwrap();
    let restored: SortedSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_tuple_elements_roundtrip() {
    let pairs = SortedSet::from([("b".to_string(), 2), ("a".to_string(), 9), ("a".to_string(), 1)]);
    let json = serde_json::to_string(&pairs).unwrap();
    assert_eq!(json, r#"[["a",1],["a",9],["b",2]]"#);
    let restored: SortedSet<(String, i32)> = serde_json::from_str(&json).unwrap();
    assert_eq!(pairs, restored);
}

// =============================================================================
// Deserialization
// =============================================================================

#[rstest]
fn test_deserialize_sorts_and_deduplicates() {
    let set: SortedSet<i32> = serde_json::from_str("[9, 1, 9, 4, 1]").unwrap();
    assert_eq!(set.to_vec(), vec![1, 4, 9]);
}

#[rstest]
fn test_deserialize_rejects_wrong_element_type() {
    let result: Result<SortedSet<i32>, _> = serde_json::from_str(r#"[1, "two"]"#);
    assert!(result.is_err());
}

#[rstest]
fn test_deserialize_inside_struct_field() {
    let value: serde_json::Value = serde_json::from_str(r#"{"tags": [3, 1, 2]}"#).unwrap();
    let tags: SortedSet<i32> = serde_json::from_value(value["tags"].clone()).unwrap();
    assert_eq!(tags, SortedSet::from([1, 2, 3]));
}
