//! Domain types for the enumeration registry.
//!
//! A [`Variant`] is only ever created by [`crate::registry::EnumerationBuilder`];
//! its fields are read through accessors so the registry's invariants cannot be
//! broken from outside.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for an enumeration (e.g. `Country`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumName(pub String);

impl fmt::Display for EnumName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EnumName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EnumName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Process-unique identity of one constructed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumId(u64);

impl EnumId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether variants carry a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnumKind {
    #[default]
    Plain,
    Valued,
}

impl fmt::Display for EnumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumKind::Plain => write!(f, "plain"),
            EnumKind::Valued => write!(f, "valued"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One fixed member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Variant {
    #[serde(skip)]
    owner: EnumId,
    identifier: String,
    name: String,
    ordinal: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
}

impl Variant {
    pub(crate) fn new(
        owner: EnumId,
        identifier: String,
        name: String,
        ordinal: usize,
        value: Option<i64>,
    ) -> Self {
        Self { owner, identifier, name, ordinal, value }
    }

    /// The identifier the variant was declared with.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The resolved name: a naming-convention transform of the identifier,
    /// or the literal override.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based declaration position.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Numeric value; `Some` exactly for value-based enumerations.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub(crate) fn owner(&self) -> EnumId {
        self.owner
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
