//! Conversions between SDK attribute values and domain values

use crate::domain::{AttributeValue, BackupError, Result, Row};
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue as SdkValue;
use std::collections::HashMap;

/// Convert an SDK value into a domain value
///
/// SDK values of a type this crate does not know map to
/// [`AttributeValue::Unrecognized`] so the serializer can reject them.
pub fn from_sdk_value(value: SdkValue) -> AttributeValue {
    match value {
        SdkValue::M(map) => AttributeValue::M(from_sdk_item(map)),
        SdkValue::L(list) => AttributeValue::L(list.into_iter().map(from_sdk_value).collect()),
        SdkValue::Bool(flag) => AttributeValue::Bool(flag),
        SdkValue::Null(flag) => AttributeValue::Null(flag),
        SdkValue::S(text) => AttributeValue::S(text),
        SdkValue::N(number) => AttributeValue::N(number),
        SdkValue::B(blob) => AttributeValue::B(blob.into_inner()),
        SdkValue::Ss(members) => AttributeValue::Ss(members),
        SdkValue::Ns(members) => AttributeValue::Ns(members),
        SdkValue::Bs(members) => {
            AttributeValue::Bs(members.into_iter().map(Blob::into_inner).collect())
        }
        _ => AttributeValue::Unrecognized("unknown".to_string()),
    }
}

/// Convert an SDK item into a domain row
pub fn from_sdk_item(item: HashMap<String, SdkValue>) -> Row {
    item.into_iter()
        .map(|(key, value)| (key, from_sdk_value(value)))
        .collect()
}

/// Convert a domain value back into an SDK value, used for start keys
///
/// # Errors
///
/// Returns a serialization error for [`AttributeValue::Unrecognized`].
pub fn to_sdk_value(value: &AttributeValue) -> Result<SdkValue> {
    let converted = match value {
        AttributeValue::M(map) => SdkValue::M(to_sdk_item(map)?),
        AttributeValue::L(list) => {
            SdkValue::L(list.iter().map(to_sdk_value).collect::<Result<Vec<_>>>()?)
        }
        AttributeValue::Bool(flag) => SdkValue::Bool(*flag),
        AttributeValue::Null(flag) => SdkValue::Null(*flag),
        AttributeValue::S(text) => SdkValue::S(text.clone()),
        AttributeValue::N(number) => SdkValue::N(number.clone()),
        AttributeValue::B(bytes) => SdkValue::B(Blob::new(bytes.clone())),
        AttributeValue::Ss(members) => SdkValue::Ss(members.clone()),
        AttributeValue::Ns(members) => SdkValue::Ns(members.clone()),
        AttributeValue::Bs(members) => {
            SdkValue::Bs(members.iter().map(|b| Blob::new(b.clone())).collect())
        }
        AttributeValue::Unrecognized(descriptor) => {
            return Err(BackupError::Serialization(format!(
                "cannot convert value of unrecognized type '{descriptor}' into a start key"
            )));
        }
    };

    Ok(converted)
}

/// Convert a domain row back into an SDK item
pub fn to_sdk_item(row: &Row) -> Result<HashMap<String, SdkValue>> {
    row.iter()
        .map(|(key, value)| to_sdk_value(value).map(|converted| (key.clone(), converted)))
        .collect()
}
