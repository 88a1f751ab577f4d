//! Structural validation of decoded response bodies.
//!
//! Takes an already-parsed `serde_json::Value` and shapes it into `Comment`
//! values. Checks short-circuit: the first failing check is reported and
//! nothing after it is examined.

use serde_json::{Map, Value};

use crate::error::StructureError;
use crate::types::Comment;

/// Decode a single comment object.
///
/// Checks run in order: the value is an object, then `id` is an unsigned
/// integer, then `name` is a string, then `text` is a string.
pub fn read_comment(value: &Value) -> Result<Comment, StructureError> {
    let item = value.as_object().ok_or(StructureError::ExpectedObject)?;

    let id = item
        .get("id")
        .and_then(Value::as_u64)
        .ok_or(StructureError::InvalidField { field: "id" })?;
    let name = string_field(item, "name")?;
    let text = string_field(item, "text")?;

    Ok(Comment { id, name, text })
}

/// Decode an array of comment objects, preserving order.
///
/// Every element is checked to be an object before any element is decoded,
/// so a non-object anywhere in the array wins over a bad field in an earlier
/// element.
pub fn read_comment_list(value: &Value) -> Result<Vec<Comment>, StructureError> {
    let items = value.as_array().ok_or(StructureError::ExpectedArray)?;

    if let Some(index) = items.iter().position(|item| !item.is_object()) {
        return Err(StructureError::ItemNotObject { index });
    }

    items.iter().map(read_comment).collect()
}

fn string_field(item: &Map<String, Value>, field: &'static str) -> Result<String, StructureError> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(StructureError::InvalidField { field })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn invalid(field: &'static str) -> StructureError {
        StructureError::InvalidField { field }
    }

    #[test]
    fn read_comment_success() {
        let comment = read_comment(&json!({"id": 1, "name": "John", "text": "Hi there"})).unwrap();
        assert_eq!(comment, Comment::new(1, "John", "Hi there"));
    }

    #[test]
    fn read_comment_ignores_extra_keys() {
        let value = json!({"id": 7, "name": "", "text": "", "author": "someone"});
        let comment = read_comment(&value).unwrap();
        assert_eq!(comment, Comment::new(7, "", ""));
    }

    #[test]
    fn read_comment_rejects_non_object_roots() {
        for value in [json!("str"), json!(1), json!([]), json!(null), json!(true)] {
            assert_eq!(read_comment(&value), Err(StructureError::ExpectedObject), "{value}");
        }
    }

    #[test]
    fn read_comment_bad_id() {
        for id in [json!("1"), json!(1.5), json!(1.0), json!(-1), json!(null)] {
            let value = json!({"id": id, "name": "John", "text": "Hi there"});
            assert_eq!(read_comment(&value), Err(invalid("id")), "{value}");
        }
    }

    #[test]
    fn read_comment_bad_name() {
        let value = json!({"id": 1, "name": 1, "text": "Hi there"});
        assert_eq!(read_comment(&value), Err(invalid("name")));
    }

    #[test]
    fn read_comment_bad_text() {
        let value = json!({"id": 1, "name": "John", "text": 1});
        assert_eq!(read_comment(&value), Err(invalid("text")));
    }

    #[test]
    fn read_comment_absent_id() {
        let value = json!({"name": "John", "text": "Hi there"});
        assert_eq!(read_comment(&value), Err(invalid("id")));
    }

    #[test]
    fn read_comment_absent_name() {
        let value = json!({"id": 1, "text": "Hi there"});
        assert_eq!(read_comment(&value), Err(invalid("name")));
    }

    #[test]
    fn read_comment_absent_text() {
        let value = json!({"id": 1, "name": "John"});
        assert_eq!(read_comment(&value), Err(invalid("text")));
    }

    #[test]
    fn read_comment_reports_first_failing_field() {
        let value = json!({"name": 1});
        assert_eq!(read_comment(&value), Err(invalid("id")));

        let value = json!({"id": 1, "name": null, "text": null});
        assert_eq!(read_comment(&value), Err(invalid("name")));
    }

    #[test]
    fn read_comment_list_empty() {
        assert!(read_comment_list(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn read_comment_list_preserves_order() {
        let value = json!([
            {"id": 2, "name": "Tom", "text": "Hello world"},
            {"id": 1, "name": "John", "text": "Hi there"},
        ]);
        let comments = read_comment_list(&value).unwrap();
        assert_eq!(
            comments,
            vec![
                Comment::new(2, "Tom", "Hello world"),
                Comment::new(1, "John", "Hi there"),
            ]
        );
    }

    #[test]
    fn read_comment_list_bad_root_type() {
        for value in [json!("str"), json!({}), json!(null)] {
            assert_eq!(read_comment_list(&value), Err(StructureError::ExpectedArray), "{value}");
        }
    }

    #[test]
    fn read_comment_list_bad_child_type() {
        let value = json!(["str1", "str2"]);
        assert_eq!(
            read_comment_list(&value),
            Err(StructureError::ItemNotObject { index: 0 })
        );
    }

    #[test]
    fn read_comment_list_checks_shapes_before_fields() {
        // Element 0 has a bad field, but the non-object at index 2 is found first.
        let value = json!([
            {"id": "1", "name": "John", "text": "Hi there"},
            {"id": 2, "name": "Tom", "text": "Hello world"},
            42,
        ]);
        assert_eq!(
            read_comment_list(&value),
            Err(StructureError::ItemNotObject { index: 2 })
        );
    }

    #[test]
    fn read_comment_list_reports_first_bad_element() {
        let value = json!([
            {"id": 1, "name": "John", "text": "Hi there"},
            {"id": 2, "text": "Hello world"},
            {"id": 3, "name": "Ann"},
        ]);
        assert_eq!(read_comment_list(&value), Err(invalid("name")));
    }
}
