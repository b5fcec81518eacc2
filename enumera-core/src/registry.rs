//! Enumeration registry: construction and lookup.
//!
//! # Layout
//!
//! ```text
//! Enumeration
//!   variants   Vec<Variant>          (arena, index == ordinal)
//!   by_name    name        -> ordinal
//!   by_folded  lowercase   -> lowest ordinal
//!   by_upper   UPPERCASE   -> lowest ordinal
//!   by_lower   lowercase   -> lowest ordinal
//!   by_value   value       -> ordinal (value-based only)
//! ```
//!
//! # API pattern
//!
//! Every failing lookup has two forms:
//! - `with_x(…) -> Result<&Variant, EnumError>`
//! - `with_x_option(…) -> Option<&Variant>` — same matching, `None` on miss
//!
//! All invariants are checked by [`EnumerationBuilder::build`]; an
//! [`Enumeration`] that exists is valid and never changes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{ConstructionFault, EnumError, LookupKey};
use crate::naming::NamingConvention;
use crate::types::{EnumId, EnumKind, EnumName, Variant};

// ---------------------------------------------------------------------------
// 1. Builder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Declared {
    identifier: String,
    literal: Option<String>,
    value: Option<i64>,
}

/// Ordered declaration of an enumeration's variants.
///
/// ```
/// use enumera_core::{EnumerationBuilder, NamingConvention};
///
/// let style = EnumerationBuilder::plain("Style")
///     .convention(NamingConvention::SnakeCase)
///     .variant("PythonStyle")
///     .build()
///     .unwrap();
/// assert_eq!(style.with_name("python_style").unwrap().ordinal(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct EnumerationBuilder {
    name: EnumName,
    kind: EnumKind,
    convention: NamingConvention,
    declared: Vec<Declared>,
}

impl EnumerationBuilder {
    /// Start a plain enumeration (no numeric values).
    pub fn plain(name: impl Into<EnumName>) -> Self {
        Self::new(name, EnumKind::Plain)
    }

    /// Start a value-based enumeration; every variant must carry a value.
    pub fn valued(name: impl Into<EnumName>) -> Self {
        Self::new(name, EnumKind::Valued)
    }

    pub fn new(name: impl Into<EnumName>, kind: EnumKind) -> Self {
        Self {
            name: name.into(),
            kind,
            convention: NamingConvention::default(),
            declared: Vec::new(),
        }
    }

    /// Naming convention used for variants without a literal name.
    pub fn convention(mut self, convention: NamingConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn variant(self, identifier: impl Into<String>) -> Self {
        self.declare(identifier, None::<String>, None)
    }

    /// Declare a variant whose name is `literal` instead of the
    /// convention-derived one.
    pub fn variant_named(self, identifier: impl Into<String>, literal: impl Into<String>) -> Self {
        self.declare(identifier, Some(literal), None)
    }

    pub fn value_variant(self, identifier: impl Into<String>, value: i64) -> Self {
        self.declare(identifier, None::<String>, Some(value))
    }

    pub fn value_variant_named(
        self,
        identifier: impl Into<String>,
        literal: impl Into<String>,
        value: i64,
    ) -> Self {
        self.declare(identifier, Some(literal), Some(value))
    }

    /// General form of the `variant*` methods. Declaration order is ordinal order.
    pub fn declare(
        mut self,
        identifier: impl Into<String>,
        literal: Option<impl Into<String>>,
        value: Option<i64>,
    ) -> Self {
        self.declared.push(Declared {
            identifier: identifier.into(),
            literal: literal.map(Into::into),
            value,
        });
        self
    }

    /// Validate the declaration and build the lookup tables.
    ///
    /// Fails with [`EnumError::Construction`] on an empty identifier or name,
    /// a duplicate name or value, or a value that does not match the kind.
    pub fn build(self) -> Result<Enumeration, EnumError> {
        let EnumerationBuilder { name, kind, convention, declared } = self;
        let id = EnumId::next();
        let fault = |reason| EnumError::Construction { enumeration: name.clone(), reason };

        let mut variants = Vec::with_capacity(declared.len());
        let mut by_name = HashMap::with_capacity(declared.len());
        let mut by_folded = HashMap::with_capacity(declared.len());
        let mut by_upper = HashMap::with_capacity(declared.len());
        let mut by_lower = HashMap::with_capacity(declared.len());
        let mut by_value = HashMap::new();

        for (ordinal, decl) in declared.into_iter().enumerate() {
            if decl.identifier.is_empty() {
                return Err(fault(ConstructionFault::EmptyIdentifier { ordinal }));
            }
            match (kind, decl.value) {
                (EnumKind::Valued, None) => {
                    return Err(fault(ConstructionFault::MissingValue {
                        identifier: decl.identifier,
                    }));
                }
                (EnumKind::Plain, Some(_)) => {
                    return Err(fault(ConstructionFault::UnexpectedValue {
                        identifier: decl.identifier,
                    }));
                }
                _ => {}
            }

            let resolved = match decl.literal {
                Some(literal) => literal,
                None => convention.apply(&decl.identifier),
            };
            if resolved.is_empty() {
                return Err(fault(ConstructionFault::EmptyName { identifier: decl.identifier }));
            }

            match by_name.entry(resolved.clone()) {
                Entry::Occupied(e) => {
                    return Err(fault(ConstructionFault::DuplicateName {
                        name: resolved,
                        first: *e.get(),
                        second: ordinal,
                    }));
                }
                Entry::Vacant(e) => {
                    e.insert(ordinal);
                }
            }

            if let Some(value) = decl.value {
                match by_value.entry(value) {
                    Entry::Occupied(e) => {
                        return Err(fault(ConstructionFault::DuplicateValue {
                            value,
                            first: *e.get(),
                            second: ordinal,
                        }));
                    }
                    Entry::Vacant(e) => {
                        e.insert(ordinal);
                    }
                }
            }

            // Case-folded indexes keep the first (lowest) ordinal on collision.
            match by_folded.entry(resolved.to_lowercase()) {
                Entry::Occupied(e) => {
                    tracing::warn!(
                        enumeration = %name,
                        name = %resolved,
                        shadowed_by = *e.get(),
                        "case-insensitive name collision; lookups resolve to the lowest ordinal"
                    );
                }
                Entry::Vacant(e) => {
                    e.insert(ordinal);
                }
            }
            by_upper.entry(resolved.to_uppercase()).or_insert(ordinal);
            by_lower.entry(resolved.to_lowercase()).or_insert(ordinal);

            variants.push(Variant::new(id, decl.identifier, resolved, ordinal, decl.value));
        }

        tracing::debug!(
            enumeration = %name,
            kind = %kind,
            convention = %convention,
            variants = variants.len(),
            "enumeration constructed"
        );

        Ok(Enumeration {
            id,
            name,
            kind,
            convention,
            variants,
            by_name,
            by_folded,
            by_upper,
            by_lower,
            by_value,
        })
    }
}

// ---------------------------------------------------------------------------
// 2. Enumeration
// ---------------------------------------------------------------------------

/// A closed, ordered, immutable set of variants with O(1) lookups.
#[derive(Debug, Clone)]
pub struct Enumeration {
    id: EnumId,
    name: EnumName,
    kind: EnumKind,
    convention: NamingConvention,
    variants: Vec<Variant>,
    by_name: HashMap<String, usize>,
    by_folded: HashMap<String, usize>,
    by_upper: HashMap<String, usize>,
    by_lower: HashMap<String, usize>,
    by_value: HashMap<i64, usize>,
}

impl Enumeration {
    pub fn name(&self) -> &EnumName {
        &self.name
    }

    pub fn kind(&self) -> EnumKind {
        self.kind
    }

    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// All variants in declaration order.
    pub fn values(&self) -> &[Variant] {
        &self.variants
    }

    /// Variant names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.iter().map(Variant::name)
    }

    pub fn get(&self, ordinal: usize) -> Option<&Variant> {
        self.variants.get(ordinal)
    }

    // -- name lookups -------------------------------------------------------

    /// Exact-match lookup.
    pub fn with_name(&self, name: &str) -> Result<&Variant, EnumError> {
        self.with_name_option(name).ok_or_else(|| self.name_not_found(name))
    }

    pub fn with_name_option(&self, name: &str) -> Option<&Variant> {
        self.lookup(&self.by_name, name)
    }

    /// Case-insensitive lookup. When several names fold to the same
    /// lowercase form, the lowest ordinal wins.
    pub fn with_name_insensitive(&self, name: &str) -> Result<&Variant, EnumError> {
        self.with_name_insensitive_option(name)
            .ok_or_else(|| self.name_not_found(name))
    }

    pub fn with_name_insensitive_option(&self, name: &str) -> Option<&Variant> {
        self.lookup(&self.by_folded, &name.to_lowercase())
    }

    /// Matches only the all-uppercase form of a name: `GERMANY` finds
    /// `Germany`, `Germany` does not.
    pub fn with_name_uppercase_only(&self, name: &str) -> Result<&Variant, EnumError> {
        self.with_name_uppercase_only_option(name)
            .ok_or_else(|| self.name_not_found(name))
    }

    pub fn with_name_uppercase_only_option(&self, name: &str) -> Option<&Variant> {
        self.lookup(&self.by_upper, name)
    }

    /// Matches only the all-lowercase form of a name.
    pub fn with_name_lowercase_only(&self, name: &str) -> Result<&Variant, EnumError> {
        self.with_name_lowercase_only_option(name)
            .ok_or_else(|| self.name_not_found(name))
    }

    pub fn with_name_lowercase_only_option(&self, name: &str) -> Option<&Variant> {
        self.lookup(&self.by_lower, name)
    }

    // -- ordinal / value ----------------------------------------------------

    /// Ordinal of `variant`, which must have been built by this enumeration.
    pub fn index_of(&self, variant: &Variant) -> Result<usize, EnumError> {
        if self.contains(variant) {
            Ok(variant.ordinal())
        } else {
            Err(EnumError::InvalidArgument {
                enumeration: self.name.clone(),
                reason: format!("variant '{}' does not belong to this enumeration", variant.name()),
            })
        }
    }

    pub fn contains(&self, variant: &Variant) -> bool {
        variant.owner() == self.id && self.variants.get(variant.ordinal()) == Some(variant)
    }

    /// Exact numeric lookup. Only value-based enumerations can answer it.
    pub fn with_value(&self, value: i64) -> Result<&Variant, EnumError> {
        if self.kind != EnumKind::Valued {
            return Err(EnumError::InvalidArgument {
                enumeration: self.name.clone(),
                reason: "not a value-based enumeration".to_owned(),
            });
        }
        self.with_value_option(value).ok_or_else(|| EnumError::NotFound {
            enumeration: self.name.clone(),
            key: LookupKey::Value(value),
        })
    }

    pub fn with_value_option(&self, value: i64) -> Option<&Variant> {
        self.by_value.get(&value).map(|&i| &self.variants[i])
    }

    // -- helpers ------------------------------------------------------------

    fn lookup<'a>(&'a self, index: &HashMap<String, usize>, key: &str) -> Option<&'a Variant> {
        index.get(key).map(|&i| &self.variants[i])
    }

    fn name_not_found(&self, name: &str) -> EnumError {
        EnumError::NotFound {
            enumeration: self.name.clone(),
            key: LookupKey::Name(name.to_owned()),
        }
    }
}

impl<'a> IntoIterator for &'a Enumeration {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
