use std::fmt::{self, Display};

use serde::Serialize;
use thiserror::Error;

use super::schema::DraftField;

/// One failed validation rule: the offending field and a message fit for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: DraftField,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: DraftField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every rule a draft failed, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("recipe draft is incomplete ({} violations)", .0.len())]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn fields(&self) -> Vec<DraftField> {
        self.0.iter().map(|v| v.field).collect()
    }

    pub fn names(&self, field: DraftField) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Caller mistakes and undecodable form payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("ingredient row {index} is out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[error("invalid key ({0})")]
    InvalidKey(String),
    #[error("invalid value for {key} ({info})")]
    InvalidType { key: String, info: String },
}

impl FormError {
    pub fn invalid_type(key: &str, info: &str) -> Self {
        Self::InvalidType {
            key: key.to_string(),
            info: info.to_string(),
        }
    }
}
