//! Loosely-typed YAML values
//!
//! A [`ConfigValue`] tree is walked with [`ConfigValue::get`] and read with
//! the `bind_*` methods, which only succeed when the value has a compatible
//! shape. Missing values are [`ConfigValue::Nil`] and bind to empty results.

use crate::error::{ConfigError, ConfigResult};
use serde_yaml::Value;
use std::collections::HashMap;

/// A YAML value of unknown shape
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigValue {
    /// Missing or null value
    #[default]
    Nil,
    /// Any scalar, kept as text
    Scalar(String),
    Sequence(Vec<ConfigValue>),
    Mapping(HashMap<String, ConfigValue>),
}

static NIL: ConfigValue = ConfigValue::Nil;

impl ConfigValue {
    /// Parse a YAML document
    pub fn from_text(text: &str) -> ConfigResult<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_yaml(&value)
    }

    /// Convert a parsed YAML value
    pub fn from_yaml(value: &Value) -> ConfigResult<Self> {
        match value {
            Value::Null => Ok(ConfigValue::Nil),
            Value::Bool(b) => Ok(ConfigValue::Scalar(b.to_string())),
            Value::Number(n) => Ok(ConfigValue::Scalar(n.to_string())),
            Value::String(s) => Ok(ConfigValue::Scalar(s.clone())),
            Value::Sequence(items) => items
                .iter()
                .map(Self::from_yaml)
                .collect::<ConfigResult<Vec<_>>>()
                .map(ConfigValue::Sequence),
            Value::Mapping(mapping) => {
                let mut entries = HashMap::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let Value::String(key) = key else {
                        return Err(ConfigError::Key(describe(key)));
                    };
                    entries.insert(key.clone(), Self::from_yaml(value)?);
                }
                Ok(ConfigValue::Mapping(entries))
            }
            Value::Tagged(tagged) => {
                Err(ConfigError::Shape(format!("tagged value {}", tagged.tag)))
            }
        }
    }

    /// Child of a mapping, or `Nil`
    pub fn get(&self, key: &str) -> &ConfigValue {
        match self {
            ConfigValue::Mapping(entries) => entries.get(key).unwrap_or(&NIL),
            _ => &NIL,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, ConfigValue::Nil)
    }

    /// Read a string
    pub fn bind_str(&self) -> Option<String> {
        match self {
            ConfigValue::Nil => Some(String::new()),
            ConfigValue::Scalar(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Read a list of strings; a single string binds as a one-item list
    pub fn bind_str_seq(&self) -> Option<Vec<String>> {
        match self {
            ConfigValue::Nil => Some(Vec::new()),
            ConfigValue::Scalar(s) => Some(vec![s.clone()]),
            ConfigValue::Sequence(items) => items.iter().map(ConfigValue::bind_str).collect(),
            ConfigValue::Mapping(_) => None,
        }
    }

    /// Read a mapping whose values all bind with `binding`
    pub fn bind_map<V, F>(&self, binding: F) -> Option<HashMap<String, V>>
    where
        F: Fn(&ConfigValue) -> Option<V>,
    {
        match self {
            ConfigValue::Mapping(entries) => entries
                .iter()
                .map(|(key, value)| binding(value).map(|v| (key.clone(), v)))
                .collect(),
            _ => None,
        }
    }
}

/// Short description of a YAML value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
