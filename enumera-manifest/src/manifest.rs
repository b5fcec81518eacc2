//! YAML declaration manifests.
//!
//! # Format
//!
//! ```yaml
//! enumerations:
//!   - name: HttpStatus
//!     convention: words        # optional, default `verbatim`
//!     variants:
//!       - ident: OK
//!         value: 200
//!       - ident: BadRequest     # name derived: "Bad Request"
//!         value: 400
//!       - ident: Teapot
//!         name: "I'm a teapot" # literal override
//!         value: 418
//! ```
//!
//! A declaration with any `value` is value-based unless `kind` says otherwise.
//! Manifests are parsed from strings only; reading files is the caller's job.

use std::collections::HashSet;

use enumera_core::{EnumError, EnumKind, EnumName, Enumeration, EnumerationBuilder, NamingConvention};
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// Root of a YAML manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EnumManifest {
    #[serde(default)]
    pub enumerations: Vec<EnumDecl>,
}

/// One enumeration, variants in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: EnumName,
    #[serde(default)]
    pub convention: NamingConvention,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EnumKind>,
    #[serde(default)]
    pub variants: Vec<VariantDecl>,
}

/// One variant. `name` overrides the convention-derived name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDecl {
    pub ident: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

// ---------------------------------------------------------------------------
// 1. Parse
// ---------------------------------------------------------------------------

impl EnumManifest {
    /// Parse a manifest. Malformed YAML yields `ManifestError::Parse`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ManifestError> {
        let manifest: EnumManifest =
            serde_yaml::from_str(yaml).map_err(|e| ManifestError::Parse { source: e })?;
        tracing::debug!(enumerations = manifest.enumerations.len(), "manifest parsed");
        Ok(manifest)
    }

    // -----------------------------------------------------------------------
    // 2. Build
    // -----------------------------------------------------------------------

    /// Build every declared enumeration, in manifest order.
    ///
    /// Fails on the first duplicate enumeration name or rejected declaration.
    pub fn build(&self) -> Result<Vec<Enumeration>, ManifestError> {
        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(self.enumerations.len());
        for decl in &self.enumerations {
            if !seen.insert(&decl.name) {
                return Err(ManifestError::DuplicateEnumeration { name: decl.name.clone() });
            }
            built.push(decl.build()?);
        }
        Ok(built)
    }

    // -----------------------------------------------------------------------
    // 3. Export
    // -----------------------------------------------------------------------

    /// Describe already-built enumerations as a manifest.
    pub fn from_enumerations<'a>(enumerations: impl IntoIterator<Item = &'a Enumeration>) -> Self {
        Self { enumerations: enumerations.into_iter().map(EnumDecl::from).collect() }
    }

    pub fn to_yaml_string(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl EnumDecl {
    /// The kind to build with: explicit `kind`, else valued iff any variant has a value.
    pub fn resolved_kind(&self) -> EnumKind {
        match self.kind {
            Some(kind) => kind,
            None if self.variants.iter().any(|v| v.value.is_some()) => EnumKind::Valued,
            None => EnumKind::Plain,
        }
    }

    pub fn build(&self) -> Result<Enumeration, EnumError> {
        self.variants
            .iter()
            .fold(
                EnumerationBuilder::new(self.name.clone(), self.resolved_kind())
                    .convention(self.convention),
                |b, v| b.declare(v.ident.as_str(), v.name.as_deref(), v.value),
            )
            .build()
    }
}

impl From<&Enumeration> for EnumDecl {
    fn from(e: &Enumeration) -> Self {
        let convention = e.convention();
        let variants = e
            .values()
            .iter()
            .map(|v| VariantDecl {
                ident: v.identifier().to_owned(),
                name: (convention.apply(v.identifier()) != v.name()).then(|| v.name().to_owned()),
                value: v.value(),
            })
            .collect();
        Self { name: e.name().clone(), convention, kind: Some(e.kind()), variants }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(ident: &str, value: Option<i64>) -> VariantDecl {
        VariantDecl { ident: ident.into(), name: None, value }
    }

    #[test]
    fn kind_inferred_from_values() {
        let mut decl = EnumDecl {
            name: EnumName::from("E"),
            convention: NamingConvention::Verbatim,
            kind: None,
            variants: vec![variant("A", None)],
        };
        assert_eq!(decl.resolved_kind(), EnumKind::Plain);
        decl.variants.push(variant("B", Some(1)));
        assert_eq!(decl.resolved_kind(), EnumKind::Valued);
        decl.kind = Some(EnumKind::Plain);
        assert_eq!(decl.resolved_kind(), EnumKind::Plain);
    }

    #[test]
    fn explicit_kind_with_no_variants() {
        let decl = EnumDecl {
            name: EnumName::from("Empty"),
            convention: NamingConvention::Verbatim,
            kind: Some(EnumKind::Valued),
            variants: vec![],
        };
        let e = decl.build().expect("build");
        assert_eq!(e.kind(), EnumKind::Valued);
        assert!(e.with_value(1).unwrap_err().is_not_found());
    }

    #[test]
    fn export_omits_derived_names() {
        let e = EnumerationBuilder::plain("Style")
            .convention(NamingConvention::SnakeCase)
            .variant("PythonStyle")
            .variant_named("JavaStyle", "camels")
            .build()
            .expect("build");
        let decl = EnumDecl::from(&e);
        assert_eq!(decl.variants[0].name, None);
        assert_eq!(decl.variants[1].name.as_deref(), Some("camels"));
        assert_eq!(decl.kind, Some(EnumKind::Plain));
    }
}
