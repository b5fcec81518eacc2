//! Error types for enumera-core.

use std::fmt;

use thiserror::Error;

use crate::types::EnumName;

/// The key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Name(String),
    Value(i64),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Name(name) => write!(f, "name '{name}'"),
            LookupKey::Value(value) => write!(f, "value {value}"),
        }
    }
}

/// Why a declared variant list was rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionFault {
    #[error("duplicate name '{name}' (ordinals {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("duplicate value {value} (ordinals {first} and {second})")]
    DuplicateValue {
        value: i64,
        first: usize,
        second: usize,
    },

    /// A value-based enumeration declared a variant without a value.
    #[error("variant '{identifier}' has no value in a value-based enumeration")]
    MissingValue { identifier: String },

    /// A plain enumeration declared a variant with a value.
    #[error("variant '{identifier}' has a value in a plain enumeration")]
    UnexpectedValue { identifier: String },

    #[error("variant at ordinal {ordinal} has an empty identifier")]
    EmptyIdentifier { ordinal: usize },

    #[error("variant '{identifier}' resolves to an empty name")]
    EmptyName { identifier: String },
}

/// All errors that can arise from enumeration construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// No variant matches the requested name or value.
    #[error("{enumeration} has no variant with {key}")]
    NotFound { enumeration: EnumName, key: LookupKey },

    /// The caller passed something this enumeration cannot answer for,
    /// e.g. a variant owned by another enumeration.
    #[error("invalid argument for {enumeration}: {reason}")]
    InvalidArgument { enumeration: EnumName, reason: String },

    /// The declaration breaks an invariant; raised only by `build()`.
    #[error("cannot construct {enumeration}: {reason}")]
    Construction {
        enumeration: EnumName,
        #[source]
        reason: ConstructionFault,
    },
}

impl EnumError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EnumError::NotFound { .. })
    }
}
