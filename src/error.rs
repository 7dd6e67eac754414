//! Errors surfaced by viewport queries

use thiserror::Error;

/// Query failures. Every variant is a deterministic function of the input, so
/// none of them are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The viewport or zoom supplied by the caller could not be parsed
    #[error("malformed {component}: {reason}")]
    MalformedInput { component: String, reason: String },

    /// A zoom, radius or minimum cluster size outside its domain
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    /// A station lacks a display field needed to build its record
    #[error("station {station} has no string `{field}` property")]
    MissingMetadata { station: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(component: impl Into<String>, reason: impl ToString) -> Self {
        Error::MalformedInput {
            component: component.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }

    /// True when the caller sent bad input, false when the failure points at
    /// the dataset or at a programming error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MalformedInput { .. })
    }
}
