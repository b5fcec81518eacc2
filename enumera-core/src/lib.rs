//! Enumera core library — typed enumeration registry.
//!
//! Public API surface:
//! - [`types`] — newtypes and the [`Variant`] record
//! - [`naming`] — [`NamingConvention`] transforms
//! - [`registry`] — [`EnumerationBuilder`] and [`Enumeration`] lookups
//! - [`typed`] — [`EnumEntry`] / [`TypedEnumeration`] for closed Rust enums
//! - [`error`] — [`EnumError`]

pub mod error;
pub mod naming;
pub mod registry;
pub mod typed;
pub mod types;

pub use error::{ConstructionFault, EnumError, LookupKey};
pub use naming::{NamingConvention, UnknownConvention};
pub use registry::{Enumeration, EnumerationBuilder};
pub use typed::{EnumEntry, TypedEnumeration, ValueEntry};
pub use types::{EnumKind, EnumName, Variant};
