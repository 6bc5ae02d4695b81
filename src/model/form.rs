use std::{collections::HashMap, str::FromStr};

use serde_json::Value;

use super::error::FormError;

pub type FormData = HashMap<String, Value>;

/// Untyped key/value payload sent by the presentation layer.
pub struct Form {
    inner: HashMap<String, Value>,
}

impl Form {
    pub fn from_data(data: FormData) -> Self {
        Self { inner: data }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn get_value<T>(&self, key: &str) -> Result<T, FormError>
    where
        T: TryFrom<Value>,
    {
        match self.inner.get(key) {
            Some(value) => value
                .to_owned()
                .try_into()
                .map_err(|_e| FormError::invalid_type(key, "invalid type conversion")),
            None => Err(FormError::InvalidKey(key.to_string())),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<String, FormError> {
        match self.inner.get(key) {
            Some(value) => match value.as_str() {
                Some(v) => Ok(v.to_string()),
                None => Err(FormError::invalid_type(key, "expected a string")),
            },
            None => Err(FormError::InvalidKey(key.to_string())),
        }
    }

    /// Numeric inputs arrive as strings or numbers; an empty string or null means unset.
    pub fn get_number<T>(&self, key: &str) -> Result<Option<T>, FormError>
    where
        T: FromStr,
    {
        match self.inner.get(key) {
            Some(Value::Null) => Ok(None),
            Some(Value::String(v)) => parse_optional_number(key, v),
            Some(Value::Number(v)) => v
                .to_string()
                .parse()
                .map(Some)
                .map_err(|_e| FormError::invalid_type(key, "invalid number")),
            Some(_) => Err(FormError::invalid_type(key, "expected a number")),
            None => Err(FormError::InvalidKey(key.to_string())),
        }
    }

    pub fn get_str_list(&self, key: &str) -> Result<Vec<String>, FormError> {
        match self.inner.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item.as_str() {
                    Some(v) => Ok(v.to_string()),
                    None => Err(FormError::invalid_type(key, "expected a list of strings")),
                })
                .collect(),
            Some(_) => Err(FormError::invalid_type(key, "expected a list")),
            None => Err(FormError::InvalidKey(key.to_string())),
        }
    }
}

pub(crate) fn parse_optional_number<T>(key: &str, raw: &str) -> Result<Option<T>, FormError>
where
    T: FromStr,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse()
        .map(Some)
        .map_err(|_e| FormError::invalid_type(key, "invalid number"))
}
