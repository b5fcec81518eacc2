//! Naming conventions: pure transforms from a declared identifier to a
//! variant name.
//!
//! Identifiers are first split into words:
//! - a run of capitals followed by a capitalised word splits before the last
//!   capital (`HTTPServer` → `HTTP`, `Server`)
//! - a lower-case letter or digit followed by a capital splits
//!   (`JavaStyle` → `Java`, `Style`)
//! - `_`, `-`, `.` and whitespace always separate words
//!
//! Each convention then re-cases and joins those words.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a variant's name is derived from its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    /// Identifier unchanged.
    #[default]
    Verbatim,
    /// `JavaStyle` → `JAVASTYLE`
    UpperCase,
    /// `JavaStyle` → `javastyle`
    LowerCase,
    /// `JavaStyle` → `javaStyle` (first character only)
    Uncapitalised,
    /// `JavaStyle` → `Java Style`
    Words,
    /// `JavaStyle` → `JAVA STYLE`
    UpperWords,
    /// `javaStyle` → `Java Style`
    CapitalWords,
    /// `java_style` → `JavaStyle`
    CamelCase,
    /// `JavaStyle` → `javaStyle`
    LowerCamelCase,
    /// `PythonStyle` → `python_style`
    SnakeCase,
    /// `PythonStyle` → `PYTHON_STYLE`
    UpperSnakeCase,
    /// `PythonStyle` → `Python_Style`
    CapitalSnakeCase,
    /// `KebabStyle` → `kebab-style`
    HyphenCase,
    /// `KebabStyle` → `KEBAB-STYLE`
    UpperHyphenCase,
    /// `KebabStyle` → `Kebab-Style`
    CapitalHyphenCase,
    /// `DotStyle` → `dot.style`
    DotCase,
    /// `DotStyle` → `DOT.STYLE`
    UpperDotCase,
    /// `DotStyle` → `Dot.Style`
    CapitalDotCase,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 18] = [
        NamingConvention::Verbatim,
        NamingConvention::UpperCase,
        NamingConvention::LowerCase,
        NamingConvention::Uncapitalised,
        NamingConvention::Words,
        NamingConvention::UpperWords,
        NamingConvention::CapitalWords,
        NamingConvention::CamelCase,
        NamingConvention::LowerCamelCase,
        NamingConvention::SnakeCase,
        NamingConvention::UpperSnakeCase,
        NamingConvention::CapitalSnakeCase,
        NamingConvention::HyphenCase,
        NamingConvention::UpperHyphenCase,
        NamingConvention::CapitalHyphenCase,
        NamingConvention::DotCase,
        NamingConvention::UpperDotCase,
        NamingConvention::CapitalDotCase,
    ];

    /// Kebab-case spelling, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            NamingConvention::Verbatim => "verbatim",
            NamingConvention::UpperCase => "upper-case",
            NamingConvention::LowerCase => "lower-case",
            NamingConvention::Uncapitalised => "uncapitalised",
            NamingConvention::Words => "words",
            NamingConvention::UpperWords => "upper-words",
            NamingConvention::CapitalWords => "capital-words",
            NamingConvention::CamelCase => "camel-case",
            NamingConvention::LowerCamelCase => "lower-camel-case",
            NamingConvention::SnakeCase => "snake-case",
            NamingConvention::UpperSnakeCase => "upper-snake-case",
            NamingConvention::CapitalSnakeCase => "capital-snake-case",
            NamingConvention::HyphenCase => "hyphen-case",
            NamingConvention::UpperHyphenCase => "upper-hyphen-case",
            NamingConvention::CapitalHyphenCase => "capital-hyphen-case",
            NamingConvention::DotCase => "dot-case",
            NamingConvention::UpperDotCase => "upper-dot-case",
            NamingConvention::CapitalDotCase => "capital-dot-case",
        }
    }

    /// Apply the convention to a declared identifier.
    pub fn apply(self, identifier: &str) -> String {
        match self {
            NamingConvention::Verbatim => identifier.to_owned(),
            NamingConvention::UpperCase => identifier.to_uppercase(),
            NamingConvention::LowerCase => identifier.to_lowercase(),
            NamingConvention::Uncapitalised => uncapitalise(identifier),
            NamingConvention::Words => split_words(identifier).join(" "),
            NamingConvention::UpperWords => split_words(identifier).join(" ").to_uppercase(),
            NamingConvention::CapitalWords => join_mapped(identifier, " ", capitalise),
            NamingConvention::CamelCase => join_mapped(identifier, "", capitalise),
            NamingConvention::LowerCamelCase => {
                uncapitalise(&join_mapped(identifier, "", capitalise))
            }
            NamingConvention::SnakeCase => join_mapped(identifier, "_", str::to_lowercase),
            NamingConvention::UpperSnakeCase => join_mapped(identifier, "_", str::to_uppercase),
            NamingConvention::CapitalSnakeCase => join_mapped(identifier, "_", capitalise),
            NamingConvention::HyphenCase => join_mapped(identifier, "-", str::to_lowercase),
            NamingConvention::UpperHyphenCase => join_mapped(identifier, "-", str::to_uppercase),
            NamingConvention::CapitalHyphenCase => join_mapped(identifier, "-", capitalise),
            NamingConvention::DotCase => join_mapped(identifier, ".", str::to_lowercase),
            NamingConvention::UpperDotCase => join_mapped(identifier, ".", str::to_uppercase),
            NamingConvention::CapitalDotCase => join_mapped(identifier, ".", capitalise),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown naming convention '{0}'")]
pub struct UnknownConvention(pub String);

impl FromStr for NamingConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamingConvention::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownConvention(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Word splitting
// ---------------------------------------------------------------------------

static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));
static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));

/// Split an identifier into its words, preserving each word's case.
pub fn split_words(identifier: &str) -> Vec<String> {
    let marked = ACRONYM_BOUNDARY.replace_all(identifier, "${1}_${2}");
    let marked = CASE_BOUNDARY.replace_all(&marked, "${1}_${2}");
    marked
        .split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

fn join_mapped(identifier: &str, sep: &str, f: impl Fn(&str) -> String) -> String {
    split_words(identifier)
        .iter()
        .map(|w| f(w.as_str()))
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn uncapitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
