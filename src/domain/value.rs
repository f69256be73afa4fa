//! Typed attribute values read from the source table
//!
//! [`AttributeValue`] mirrors the DynamoDB type system as a tagged union, so
//! a value always carries exactly one populated case.

use std::collections::HashMap;

/// One table item: attribute name to value. Iteration order is unspecified.
pub type Row = HashMap<String, AttributeValue>;

/// A single typed attribute value
///
/// Numbers are carried as their decimal string to keep the exact digits the
/// table returned. Set members keep the order the table returned them in.
///
/// # Examples
///
/// ```
/// use ddb_backup::domain::value::AttributeValue;
///
/// let value = AttributeValue::N("3.14159265358979323846".to_string());
/// assert_eq!(value.type_descriptor(), "N");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Nested map of attributes
    M(HashMap<String, AttributeValue>),
    /// Ordered list of values
    L(Vec<AttributeValue>),
    /// Boolean
    Bool(bool),
    /// Null marker with its flag
    Null(bool),
    /// String scalar
    S(String),
    /// Number scalar as a decimal string
    N(String),
    /// Binary scalar
    B(Vec<u8>),
    /// String set
    Ss(Vec<String>),
    /// Number set
    Ns(Vec<String>),
    /// Binary set
    Bs(Vec<Vec<u8>>),
    /// A value whose type descriptor the exporter does not understand
    Unrecognized(String),
}

impl AttributeValue {
    /// Returns the DynamoDB type descriptor for this value
    pub fn type_descriptor(&self) -> &str {
        match self {
            AttributeValue::M(_) => "M",
            AttributeValue::L(_) => "L",
            AttributeValue::Bool(_) => "BOOL",
            AttributeValue::Null(_) => "NULL",
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::B(_) => "B",
            AttributeValue::Ss(_) => "SS",
            AttributeValue::Ns(_) => "NS",
            AttributeValue::Bs(_) => "BS",
            AttributeValue::Unrecognized(descriptor) => descriptor,
        }
    }

    /// Returns true if this value, and every value nested inside it, has a
    /// known type
    pub fn is_recognized(&self) -> bool {
        match self {
            AttributeValue::Unrecognized(_) => false,
            AttributeValue::M(map) => map.values().all(AttributeValue::is_recognized),
            AttributeValue::L(list) => list.iter().all(AttributeValue::is_recognized),
            _ => true,
        }
    }
}
