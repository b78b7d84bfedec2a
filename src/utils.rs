//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

/// A capitalized run (`Xyz`) preceded by any character.
static CAPITALIZED_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());

/// An uppercase letter directly after a lowercase letter or digit.
static LOWER_UPPER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Converts a Python identifier to snake_case.
///
/// Acronyms stay together and already snake_cased names are left alone.
///
/// # Examples
///
/// ```
/// use pyxplod::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("CamelCase"), "camel_case");
/// assert_eq!(to_snake_case("camelCase"), "camel_case");
/// assert_eq!(to_snake_case("HTTPResponse"), "http_response");
/// assert_eq!(to_snake_case("getHTTPResponseCode"), "get_http_response_code");
/// assert_eq!(to_snake_case("snake_case"), "snake_case");
/// assert_eq!(to_snake_case("A"), "a");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let runs_split = CAPITALIZED_RUN_REGEX.replace_all(name, "${1}_${2}");
    let split = LOWER_UPPER_REGEX.replace_all(&runs_split, "${1}_${2}");
    split.to_lowercase()
}

/// Checks whether a file name is wrapped in double underscores
/// (`__init__.py`, `__main__.py`, `__version__.py`, ...).
pub fn is_dunder_file(file_name: &str) -> bool {
    file_name.starts_with("__") && file_name.ends_with("__.py")
}
