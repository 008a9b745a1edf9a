//! Typed key/value attributes.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{LogError, LogResult};

/// A single key/value pair attached to a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: Cow<'static, str>,
    pub value: Value,
}

impl Attr {
    /// Create an attribute from anything convertible into a JSON value.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an attribute from any `Serialize` value.
    ///
    /// A value that fails to serialize is recorded as a string describing the
    /// failure; emission never errors.
    pub fn serialized<T: Serialize + ?Sized>(key: impl Into<Cow<'static, str>>, value: &T) -> Self {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("!serialize error: {}", e)));
        Self {
            key: key.into(),
            value,
        }
    }

    /// Create an attribute from the `Display` rendering of a value.
    pub fn display(key: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: Value::String(value.to_string()),
        }
    }

    /// Pair up a flat `[key, value, key, value, ...]` list.
    ///
    /// Odd lengths and non-string keys are rejected rather than padded.
    pub fn pairs<I>(values: I) -> LogResult<Vec<Attr>>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: Vec<Value> = values.into_iter().collect();
        if values.len() % 2 != 0 {
            return Err(LogError::OddAttributeList { len: values.len() });
        }

        let mut attrs = Vec::with_capacity(values.len() / 2);
        let mut iter = values.into_iter().enumerate();
        while let (Some((index, key)), Some((_, value))) = (iter.next(), iter.next()) {
            match key {
                Value::String(key) => attrs.push(Attr::new(key, value)),
                _ => return Err(LogError::NonStringKey { index }),
            }
        }
        Ok(attrs)
    }
}

impl<K, V> From<(K, V)> for Attr
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Attr::new(key, value)
    }
}
