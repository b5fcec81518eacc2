//! Enumera manifests — enumerations declared in YAML.
//!
//! - [`manifest`] — [`EnumManifest`] parse / build / export
//! - [`error`] — [`ManifestError`]

pub mod error;
pub mod manifest;

pub use error::ManifestError;
pub use manifest::{EnumDecl, EnumManifest, VariantDecl};
