use chrono::{TimeZone, Utc};
use json_view::{ArrayView, Expected, JsonError, Location, ObjectView, Tag};
use serde_json::json;

fn view(v: serde_json::Value) -> ArrayView {
    ArrayView::try_from(v).unwrap()
}

#[test]
fn test_typed_reads() {
    let a = view(json!(["s", 1.5, 4, false, null, {"k": "v"}, [1]]));
    assert_eq!(a.size(), 7);
    assert_eq!(a.string(0).unwrap(), "s");
    assert_eq!(a.number(1).unwrap(), 1.5);
    assert_eq!(a.integer(2).unwrap(), 4);
    assert!(!a.boolean(3).unwrap());
    assert!(a.is_null(4).unwrap());
    assert_eq!(a.object(5).unwrap().string("k").unwrap(), "v");
    assert_eq!(a.array(6).unwrap().integer(0).unwrap(), 1);
}

#[test]
fn test_type_mismatch_names_index() {
    let a = view(json!(["s", 2.5]));
    let err = a.boolean(0).unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: Expected::Boolean,
            at: Location::Index(0),
            found: Tag::String,
        }
    );
    assert_eq!(err.to_string(), "expected 'true' or 'false' for array element 0, found string");

    let err = a.integer(1).unwrap_err();
    assert!(matches!(err, JsonError::TypeMismatch { expected: Expected::Integer, .. }));
}

#[test]
fn test_out_of_range() {
    let a = view(json!([1]));
    assert_eq!(a.number(3).unwrap_err(), JsonError::IndexOutOfRange { index: 3, len: 1 });
    assert!(a.is_null(1).unwrap_err().is_index_out_of_range());
    assert!(a.n_string(1).unwrap_err().is_index_out_of_range());
    assert!(ArrayView::new().string(0).unwrap_err().is_index_out_of_range());
}

#[test]
fn test_append_grows_by_one_and_keeps_order() {
    let mut a = ArrayView::new();
    let when = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap().fixed_offset();

    a.append_string("first");
    assert_eq!(a.size(), 1);
    a.append_number(2.5);
    a.append_boolean(true);
    a.append_null();
    a.append_n_string(None);
    a.append_n_string(Some("named"));
    a.append_integer(-9);
    a.append_date_time(&when);
    a.append_n_date_time(None);
    a.append_n_date_time(Some(&when));
    a.append_object(&ObjectView::new());
    a.append_array(&ArrayView::new());
    assert_eq!(a.size(), 12);

    assert_eq!(a.string(0).unwrap(), "first");
    assert_eq!(a.number(1).unwrap(), 2.5);
    assert!(a.boolean(2).unwrap());
    assert!(a.is_null(3).unwrap());
    assert_eq!(a.n_string(4).unwrap(), None);
    assert_eq!(a.n_string(5).unwrap(), Some("named".to_string()));
    assert_eq!(a.integer(6).unwrap(), -9);
    assert_eq!(a.string(7).unwrap(), "2001-02-03T04:05:06Z");
    assert_eq!(a.date_time(7).unwrap(), Some(when));
    assert_eq!(a.n_date_time(8).unwrap(), None);
    assert_eq!(a.n_date_time(9).unwrap(), Some(when));
    assert!(a.object(10).unwrap().is_empty());
    assert!(a.array(11).unwrap().is_empty());
}

#[test]
fn test_nullable_readers_reject_wrong_type() {
    let a = view(json!([true, 3]));
    assert!(a.n_string(0).unwrap_err().is_type_mismatch());
    assert!(a.n_date_time(1).unwrap_err().is_type_mismatch());
}

#[test]
fn test_parse_errors() {
    assert!(ArrayView::parse_str("{not json").unwrap_err().is_parse());
    let err = ArrayView::parse_str("{}").unwrap_err();
    assert_eq!(err, JsonError::ShapeMismatch { expected: Tag::Array, found: Tag::Object });
    assert_eq!(ArrayView::parse_str("[1, 2]").unwrap().size(), 2);
}

#[test]
fn test_appended_views_are_copies() {
    let mut inner = ArrayView::new();
    inner.append_integer(1);
    let mut outer = ArrayView::new();
    outer.append_array(&inner);
    inner.append_integer(2);
    assert_eq!(outer.array(0).unwrap().size(), 1);
}

#[test]
fn test_iter_and_serialize() {
    let a = view(json!([1, "two"]));
    let tags: Vec<Tag> = a.iter().map(Tag::of).collect();
    assert_eq!(tags, vec![Tag::Number, Tag::String]);
    assert_eq!(a.to_compact_text(), r#"[1,"two"]"#);
    assert_eq!(a.to_text(), "[\n  1,\n  \"two\"\n]\n");
}
