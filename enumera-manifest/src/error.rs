//! Error types for enumera-manifest.

use enumera_core::{EnumError, EnumName};
use thiserror::Error;

/// All errors that can arise from manifest parsing, building and export.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// YAML parse error on load — includes line context from serde_yaml.
    #[error("failed to parse manifest: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialization error (export path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two declarations share an enumeration name.
    #[error("enumeration {name} is declared more than once")]
    DuplicateEnumeration { name: EnumName },

    /// A declaration was rejected by the registry.
    #[error(transparent)]
    Enum(#[from] EnumError),
}
