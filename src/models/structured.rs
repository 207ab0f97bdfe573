//! Conversion between typed entities and untyped JSON trees.
//!
//! `to_structured` is total. `from_structured` reports the first absent key as
//! [`Error::MissingField`] and a value of the wrong JSON type as
//! [`Error::InvalidType`]; nothing is coerced or defaulted here.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub trait Structured: Sized {
    fn to_structured(&self) -> Value;

    fn from_structured(value: &Value) -> Result<Self>;
}

/// Borrowed view over a JSON object with typed, key-checked accessors.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn of(value: &'a Value, name: &str) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(Error::InvalidType {
                field: name.to_string(),
                expected: "object",
            }),
        }
    }

    pub(crate) fn require(&self, key: &str) -> Result<&'a Value> {
        self.map
            .get(key)
            .ok_or_else(|| Error::MissingField(key.to_string()))
    }

    pub(crate) fn string(&self, key: &str) -> Result<String> {
        expect_str(self.require(key)?, key)
    }

    pub(crate) fn strings(&self, key: &str) -> Result<Vec<String>> {
        expect_array(self.require(key)?, key)?
            .iter()
            .map(|item| expect_str(item, key))
            .collect()
    }

    pub(crate) fn object<T: Structured>(&self, key: &str) -> Result<T> {
        T::from_structured(self.require(key)?)
    }

    pub(crate) fn list<T: Structured>(&self, key: &str) -> Result<Vec<T>> {
        expect_array(self.require(key)?, key)?
            .iter()
            .map(T::from_structured)
            .collect()
    }
}

fn expect_str(value: &Value, field: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::InvalidType {
            field: field.to_string(),
            expected: "string",
        })
}

fn expect_array<'v>(value: &'v Value, field: &str) -> Result<&'v Vec<Value>> {
    value.as_array().ok_or_else(|| Error::InvalidType {
        field: field.to_string(),
        expected: "array",
    })
}

pub fn to_structured_list<T: Structured>(items: &[T]) -> Value {
    Value::Array(items.iter().map(Structured::to_structured).collect())
}
