//! Row serialization in the Data Pipeline export format
//!
//! Each row becomes one line of the data object:
//!
//! ```text
//! {"id":{"s":"a-1"},"total":{"n":"12.50"},"tags":{"sS":["new","gift"]}}
//! ```
//!
//! Every attribute is written as `"name":{<token>}` where the token is a
//! single `"tag":payload` pair. Maps recurse through [`serialize_row`];
//! list elements are serialized without a name and wrapped in braces.
//!
//! Output is a byte string rather than text: binary payloads are copied in
//! byte for byte, so a line is only valid UTF-8 when every binary value in
//! it is.

use crate::domain::{AttributeValue, BackupError, Result, Row};
use std::collections::HashMap;

/// Serialize one row to a single line (without the trailing newline)
///
/// Attribute order follows map iteration order and is not stable between
/// runs; consumers must not depend on it.
///
/// # Errors
///
/// Returns [`BackupError::Serialization`] if any value, at any depth, has an
/// unrecognized type.
///
/// # Examples
///
/// ```
/// use ddb_backup::core::serialize::serialize_row;
/// use ddb_backup::domain::{AttributeValue, Row};
///
/// let mut row = Row::new();
/// row.insert("id".to_string(), AttributeValue::S("a-1".to_string()));
/// assert_eq!(serialize_row(&row).unwrap(), br#"{"id":{"s":"a-1"}}"#);
/// ```
pub fn serialize_row(row: &Row) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_map(&mut out, row)?;
    Ok(out)
}

/// Serialize one attribute value
///
/// With a non-empty `key` the result is `"key":{<token>}`; with an empty key
/// the bare token is returned, which is how list elements are written.
///
/// # Errors
///
/// Returns [`BackupError::Serialization`] for an unrecognized value.
pub fn serialize_attribute(key: &str, value: &AttributeValue) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_attribute(&mut out, key, value)?;
    Ok(out)
}

fn write_map(out: &mut Vec<u8>, map: &HashMap<String, AttributeValue>) -> Result<()> {
    out.push(b'{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_attribute(out, key, value)?;
    }
    out.push(b'}');
    Ok(())
}

fn write_attribute(out: &mut Vec<u8>, key: &str, value: &AttributeValue) -> Result<()> {
    if key.is_empty() {
        return write_token(out, value);
    }

    write_quoted(out, key)?;
    out.extend_from_slice(b":{");
    write_token(out, value).map_err(|e| match e {
        BackupError::Serialization(msg) => {
            BackupError::Serialization(format!("attribute {key}: {msg}"))
        }
        other => other,
    })?;
    out.push(b'}');
    Ok(())
}

fn write_token(out: &mut Vec<u8>, value: &AttributeValue) -> Result<()> {
    match value {
        AttributeValue::M(map) => {
            out.extend_from_slice(b"\"m\":");
            write_map(out, map)?;
        }
        AttributeValue::Bool(flag) => {
            out.extend_from_slice(format!("\"bOOL\":{flag}").as_bytes());
        }
        AttributeValue::B(bytes) => {
            out.extend_from_slice(b"\"b\":");
            write_raw(out, bytes);
        }
        AttributeValue::Bs(members) => {
            out.extend_from_slice(b"\"bS\":[");
            for (i, bytes) in members.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_raw(out, bytes);
            }
            out.push(b']');
        }
        AttributeValue::L(elements) => {
            out.extend_from_slice(b"\"l\":[");
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                out.push(b'{');
                write_token(out, element)?;
                out.push(b'}');
            }
            out.push(b']');
        }
        AttributeValue::N(number) => {
            out.extend_from_slice(b"\"n\":");
            write_raw(out, number.as_bytes());
        }
        AttributeValue::Ns(members) => {
            out.extend_from_slice(b"\"nS\":[");
            for (i, number) in members.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_raw(out, number.as_bytes());
            }
            out.push(b']');
        }
        AttributeValue::Null(flag) => {
            out.extend_from_slice(format!("\"nULLValue\":\"{flag}\"").as_bytes());
        }
        AttributeValue::S(text) => {
            out.extend_from_slice(b"\"s\":");
            write_quoted(out, text)?;
        }
        AttributeValue::Ss(members) => {
            out.extend_from_slice(b"\"sS\":[");
            for (i, text) in members.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_quoted(out, text)?;
            }
            out.push(b']');
        }
        AttributeValue::Unrecognized(descriptor) => {
            return Err(BackupError::Serialization(format!(
                "cannot serialize value of unrecognized type '{descriptor}'"
            )));
        }
    }

    Ok(())
}

/// Quoted verbatim, no escaping
fn write_raw(out: &mut Vec<u8>, bytes: &[u8]) {
    out.push(b'"');
    out.extend_from_slice(bytes);
    out.push(b'"');
}

/// Quoted and JSON-escaped
fn write_quoted(out: &mut Vec<u8>, text: &str) -> Result<()> {
    serde_json::to_writer(&mut *out, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    fn attr(key: &str, value: &AttributeValue) -> String {
        String::from_utf8(serialize_attribute(key, value).unwrap()).unwrap()
    }

    #[test]
    fn test_scalar_tokens() {
        assert_eq!(attr("", &s("x")), r#""s":"x""#);
        assert_eq!(attr("", &AttributeValue::N("3".to_string())), r#""n":"3""#);
        assert_eq!(attr("", &AttributeValue::Bool(false)), r#""bOOL":false"#);
        assert_eq!(attr("", &AttributeValue::B(b"raw".to_vec())), r#""b":"raw""#);
    }

    #[test]
    fn test_binary_payload_is_copied_byte_for_byte() {
        let value = AttributeValue::B(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        let mut expected = b"\"b\":\"".to_vec();
        expected.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        expected.push(b'"');
        assert_eq!(serialize_attribute("", &value).unwrap(), expected);
    }

    #[test]
    fn test_binary_set_members_are_copied_byte_for_byte() {
        let value = AttributeValue::Bs(vec![vec![0xFF, 0x00, 0x80], vec![0xC3]]);
        let mut expected = b"\"blobs\":{\"bS\":[\"".to_vec();
        expected.extend_from_slice(&[0xFF, 0x00, 0x80]);
        expected.extend_from_slice(b"\",\"");
        expected.push(0xC3);
        expected.extend_from_slice(b"\"]}");
        assert_eq!(serialize_attribute("blobs", &value).unwrap(), expected);
    }

    #[test]
    fn test_null_flag_is_quoted_literal() {
        assert_eq!(attr("", &AttributeValue::Null(true)), r#""nULLValue":"true""#);
        assert_eq!(attr("", &AttributeValue::Null(false)), r#""nULLValue":"false""#);
    }

    #[test]
    fn test_number_keeps_exact_digits() {
        let value = AttributeValue::N("12345678901234567890.000000000000000001".to_string());
        assert_eq!(
            attr("big", &value),
            r#""big":{"n":"12345678901234567890.000000000000000001"}"#
        );
    }

    #[test]
    fn test_string_is_json_escaped() {
        let value = s("say \"hi\"\n\tnow\\");
        assert_eq!(attr("", &value), r#""s":"say \"hi\"\n\tnow\\""#);
    }

    #[test]
    fn test_sets_keep_source_order() {
        let ss = AttributeValue::Ss(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(attr("", &ss), r#""sS":["b","a"]"#);

        let ns = AttributeValue::Ns(vec!["10".to_string(), "2".to_string()]);
        assert_eq!(attr("", &ns), r#""nS":["10","2"]"#);

        let bs = AttributeValue::Bs(vec![b"y".to_vec(), b"x".to_vec()]);
        assert_eq!(attr("", &bs), r#""bS":["y","x"]"#);
    }

    #[test]
    fn test_list_under_key() {
        let list = AttributeValue::L(vec![s("x"), AttributeValue::Bool(true)]);
        assert_eq!(attr("l", &list), r#""l":{"l":[{"s":"x"},{"bOOL":true}]}"#);
    }

    #[test]
    fn test_empty_list_and_map() {
        assert_eq!(attr("", &AttributeValue::L(vec![])), r#""l":[]"#);
        assert_eq!(attr("", &AttributeValue::M(HashMap::new())), r#""m":{}"#);
        assert_eq!(serialize_row(&Row::new()).unwrap(), b"{}");
    }

    #[test]
    fn test_nested_map_in_list() {
        let mut inner = HashMap::new();
        inner.insert("k".to_string(), AttributeValue::N("1".to_string()));
        let list = AttributeValue::L(vec![AttributeValue::M(inner)]);
        assert_eq!(attr("items", &list), r#""items":{"l":[{"m":{"k":{"n":"1"}}}]}"#);
    }

    #[test]
    fn test_unrecognized_value_is_an_error() {
        let err = serialize_attribute("", &AttributeValue::Unrecognized("X".to_string()))
            .unwrap_err();
        assert!(matches!(err, BackupError::Serialization(_)));
    }

    #[test]
    fn test_unrecognized_nested_value_names_attribute() {
        let mut row = Row::new();
        row.insert(
            "payload".to_string(),
            AttributeValue::L(vec![s("ok"), AttributeValue::Unrecognized("X".to_string())]),
        );
        let err = serialize_row(&row).unwrap_err();
        assert!(err.to_string().contains("payload"));
    }
}
