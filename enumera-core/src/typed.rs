//! Binding a closed Rust `enum` to an [`Enumeration`].
//!
//! Implement [`EnumEntry`] (and [`ValueEntry`] for integer-valued enums) by
//! listing the members once, in order, then build a [`TypedEnumeration`]
//! at initialization, usually behind a `once_cell::sync::Lazy` static.

use std::fmt;

use crate::error::EnumError;
use crate::naming::NamingConvention;
use crate::registry::{Enumeration, EnumerationBuilder};
use crate::types::{EnumKind, Variant};

/// A closed Rust enum whose members form an enumeration.
pub trait EnumEntry: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const ENUM_NAME: &'static str;

    /// Every member, in declaration order.
    fn declared() -> &'static [Self];

    /// The identifier the name is derived from, usually the Rust variant name.
    fn identifier(&self) -> &'static str;

    /// A literal name that bypasses the naming convention.
    fn name_override(&self) -> Option<&'static str> {
        None
    }

    fn convention() -> NamingConvention {
        NamingConvention::Verbatim
    }
}

/// An [`EnumEntry`] whose members carry a unique integer.
pub trait ValueEntry: EnumEntry {
    fn value(&self) -> i64;
}

/// An [`Enumeration`] whose lookups return members of `T`.
#[derive(Debug, Clone)]
pub struct TypedEnumeration<T: EnumEntry> {
    inner: Enumeration,
    members: &'static [T],
}

impl<T: EnumEntry> TypedEnumeration<T> {
    /// Build a plain enumeration from `T::declared()`.
    pub fn build() -> Result<Self, EnumError> {
        Self::assemble(EnumKind::Plain, |_| None)
    }

    fn assemble(kind: EnumKind, value_of: impl Fn(&T) -> Option<i64>) -> Result<Self, EnumError> {
        let members = T::declared();
        let builder = members.iter().fold(
            EnumerationBuilder::new(T::ENUM_NAME, kind).convention(T::convention()),
            |b, m| b.declare(m.identifier(), m.name_override(), value_of(m)),
        );
        Ok(Self { inner: builder.build()?, members })
    }

    /// The untyped enumeration backing this one.
    pub fn enumeration(&self) -> &Enumeration {
        &self.inner
    }

    /// All members in declaration order.
    pub fn values(&self) -> &'static [T] {
        self.members
    }

    pub fn with_name(&self, name: &str) -> Result<T, EnumError> {
        self.inner.with_name(name).map(|v| self.member(v))
    }

    pub fn with_name_option(&self, name: &str) -> Option<T> {
        self.inner.with_name_option(name).map(|v| self.member(v))
    }

    pub fn with_name_insensitive(&self, name: &str) -> Result<T, EnumError> {
        self.inner.with_name_insensitive(name).map(|v| self.member(v))
    }

    pub fn with_name_insensitive_option(&self, name: &str) -> Option<T> {
        self.inner.with_name_insensitive_option(name).map(|v| self.member(v))
    }

    pub fn with_name_uppercase_only(&self, name: &str) -> Result<T, EnumError> {
        self.inner.with_name_uppercase_only(name).map(|v| self.member(v))
    }

    pub fn with_name_lowercase_only(&self, name: &str) -> Result<T, EnumError> {
        self.inner.with_name_lowercase_only(name).map(|v| self.member(v))
    }

    /// Ordinal of `member`. Fails with [`EnumError::InvalidArgument`] when
    /// `T::declared()` leaves it out.
    pub fn index_of(&self, member: T) -> Result<usize, EnumError> {
        self.members
            .iter()
            .position(|m| *m == member)
            .ok_or_else(|| EnumError::InvalidArgument {
                enumeration: self.inner.name().clone(),
                reason: format!("{member:?} is not declared"),
            })
    }

    /// The registry record for `member`.
    pub fn variant(&self, member: T) -> Result<&Variant, EnumError> {
        let ordinal = self.index_of(member)?;
        Ok(&self.inner.values()[ordinal])
    }

    pub fn name_of(&self, member: T) -> Result<&str, EnumError> {
        self.variant(member).map(Variant::name)
    }

    fn member(&self, variant: &Variant) -> T {
        self.members[variant.ordinal()]
    }
}

impl<T: ValueEntry> TypedEnumeration<T> {
    /// Build a value-based enumeration from `T::declared()` and `T::value()`.
    pub fn build_valued() -> Result<Self, EnumError> {
        Self::assemble(EnumKind::Valued, |m| Some(m.value()))
    }

    pub fn with_value(&self, value: i64) -> Result<T, EnumError> {
        self.inner.with_value(value).map(|v| self.member(v))
    }

    pub fn with_value_option(&self, value: i64) -> Option<T> {
        self.inner.with_value_option(value).map(|v| self.member(v))
    }
}
