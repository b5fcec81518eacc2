//! Typed enumerations declared once as `static`s and queried from tests.

use enumera_core::{
    ConstructionFault, EnumEntry, EnumError, NamingConvention, TypedEnumeration, ValueEntry,
};
use once_cell::sync::Lazy;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Country {
    Germany,
    India,
}

impl EnumEntry for Country {
    const ENUM_NAME: &'static str = "Country";

    fn declared() -> &'static [Self] {
        &[Country::Germany, Country::India]
    }

    fn identifier(&self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::India => "India",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpStatus {
    Ok,
    BadRequest,
}

impl EnumEntry for HttpStatus {
    const ENUM_NAME: &'static str = "HttpStatus";

    fn declared() -> &'static [Self] {
        &[HttpStatus::Ok, HttpStatus::BadRequest]
    }

    fn identifier(&self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::BadRequest => "BadRequest",
        }
    }

    fn name_override(&self) -> Option<&'static str> {
        match self {
            HttpStatus::BadRequest => Some("Bad Request"),
            HttpStatus::Ok => None,
        }
    }
}

impl ValueEntry for HttpStatus {
    fn value(&self) -> i64 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::BadRequest => 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnakeStyle {
    PythonStyle,
    RubyStyle,
}

impl EnumEntry for SnakeStyle {
    const ENUM_NAME: &'static str = "SnakeStyle";

    fn declared() -> &'static [Self] {
        &[SnakeStyle::PythonStyle, SnakeStyle::RubyStyle]
    }

    fn identifier(&self) -> &'static str {
        match self {
            SnakeStyle::PythonStyle => "PythonStyle",
            SnakeStyle::RubyStyle => "RubyStyle",
        }
    }

    fn convention() -> NamingConvention {
        NamingConvention::SnakeCase
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CamelStyle {
    JavaStyle,
}

impl EnumEntry for CamelStyle {
    const ENUM_NAME: &'static str = "CamelStyle";

    fn declared() -> &'static [Self] {
        &[CamelStyle::JavaStyle]
    }

    fn identifier(&self) -> &'static str {
        "JavaStyle"
    }

    fn convention() -> NamingConvention {
        NamingConvention::LowerCamelCase
    }
}

/// Two members that collapse to the same snake-case name.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clash {
    FooBar,
    Foo_Bar,
}

impl EnumEntry for Clash {
    const ENUM_NAME: &'static str = "Clash";

    fn declared() -> &'static [Self] {
        &[Clash::FooBar, Clash::Foo_Bar]
    }

    fn identifier(&self) -> &'static str {
        match self {
            Clash::FooBar => "FooBar",
            Clash::Foo_Bar => "Foo_Bar",
        }
    }

    fn convention() -> NamingConvention {
        NamingConvention::SnakeCase
    }
}

static COUNTRIES: Lazy<TypedEnumeration<Country>> =
    Lazy::new(|| TypedEnumeration::build().expect("Country declaration is valid"));
static STATUSES: Lazy<TypedEnumeration<HttpStatus>> =
    Lazy::new(|| TypedEnumeration::build_valued().expect("HttpStatus declaration is valid"));

// ---------------------------------------------------------------------------
// 1. Plain
// ---------------------------------------------------------------------------

#[test]
fn values_in_declaration_order() {
    assert_eq!(COUNTRIES.values(), &[Country::Germany, Country::India]);
    assert_eq!(COUNTRIES.enumeration().len(), 2);
}

#[test]
fn with_name_and_option() {
    assert_eq!(COUNTRIES.with_name("India"), Ok(Country::India));
    assert_eq!(COUNTRIES.with_name_option("nonexistent"), None);
    assert!(COUNTRIES.with_name("nonexistent").unwrap_err().is_not_found());
}

#[rstest]
#[case("GERMANY", Some(Country::Germany))]
#[case("iNDia", Some(Country::India))]
#[case("uSA", None)]
fn insensitive(#[case] input: &str, #[case] expected: Option<Country>) {
    assert_eq!(COUNTRIES.with_name_insensitive_option(input), expected);
}

#[test]
fn case_only_lookups() {
    assert_eq!(COUNTRIES.with_name_uppercase_only("GERMANY"), Ok(Country::Germany));
    assert!(COUNTRIES.with_name_uppercase_only("Germany").is_err());
    assert_eq!(COUNTRIES.with_name_lowercase_only("india"), Ok(Country::India));
}

#[test]
fn index_of_first_declared() {
    assert_eq!(COUNTRIES.index_of(Country::Germany), Ok(0));
    assert_eq!(COUNTRIES.index_of(Country::India), Ok(1));
}

// ---------------------------------------------------------------------------
// 2. Valued
// ---------------------------------------------------------------------------

#[test]
fn with_value_returns_member() {
    assert_eq!(STATUSES.with_value(400), Ok(HttpStatus::BadRequest));
    assert_eq!(STATUSES.with_value_option(500), None);
    assert_eq!(STATUSES.name_of(HttpStatus::BadRequest), Ok("Bad Request"));
    assert_eq!(STATUSES.name_of(HttpStatus::Ok), Ok("OK"));
    assert_eq!(STATUSES.variant(HttpStatus::Ok).map(|v| v.value()), Ok(Some(200)));
}

#[test]
fn plain_build_of_valued_type_has_no_values() {
    let plain = TypedEnumeration::<HttpStatus>::build().expect("build");
    assert!(matches!(plain.with_value(200), Err(EnumError::InvalidArgument { .. })));
}

// ---------------------------------------------------------------------------
// 3. Naming conventions
// ---------------------------------------------------------------------------

#[test]
fn lower_camel_case_name() {
    let styles = TypedEnumeration::<CamelStyle>::build().expect("build");
    assert_eq!(styles.name_of(CamelStyle::JavaStyle), Ok("javaStyle"));
}

#[test]
fn snake_case_names() {
    let styles = TypedEnumeration::<SnakeStyle>::build().expect("build");
    assert_eq!(styles.name_of(SnakeStyle::PythonStyle), Ok("python_style"));
    assert_eq!(styles.with_name("ruby_style"), Ok(SnakeStyle::RubyStyle));
}

#[test]
fn colliding_names_fail_before_any_query() {
    let err = TypedEnumeration::<Clash>::build().unwrap_err();
    match err {
        EnumError::Construction { reason, .. } => assert_eq!(
            reason,
            ConstructionFault::DuplicateName { name: "foo_bar".into(), first: 0, second: 1 }
        ),
        other => panic!("expected construction error, got: {other}"),
    }
}
