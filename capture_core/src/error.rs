//! Error kinds returned by pattern compilation and binding.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::field::FieldKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("destination must be a struct: `{type_name}` is not a registered record type")]
    DestinationType { type_name: &'static str },

    #[error("cannot store group '{group}' value {value:?} into {kind} field '{field}': {source}")]
    Coercion {
        field: String,
        group: String,
        value: String,
        kind: FieldKind,
        #[source]
        source: CoercionError,
    },
}

/// Failure of a single captured string to parse into its field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("invalid boolean literal: {0:?}")]
    Boolean(String),
}

impl Error {
    /// Returns true for failures raised while storing a captured value.
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion { .. })
    }
}
