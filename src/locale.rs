//! Locale identifiers and their parser

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LocaleParseError, LocaleParseErrorKind};

/// A (language, region) pair identifying one translation variant.
///
/// By convention the language code is two lowercase letters and the region
/// code two uppercase letters (`pt_BR`, `en_US`), but neither is enforced:
/// any two characters on either side of the `_` are accepted.
///
/// Parsing ignores everything after the region code, so POSIX-style values
/// such as `pt_BR.UTF-8` and `de_DE@euro` work unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LocaleId {
    language: String,
    region: String,
}

impl LocaleId {
    /// Build a locale id from already-split codes.
    ///
    /// No shape check is performed here; parse a `xx_YY` string via
    /// [`FromStr`] to get validation.
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: region.into(),
        }
    }

    /// The language code, e.g. `"pt"`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region code, e.g. `"BR"`.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Split into owned `(language, region)` codes.
    pub fn into_parts(self) -> (String, String) {
        (self.language, self.region)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.region)
    }
}

impl FromStr for LocaleId {
    type Err = LocaleParseError;

    /// Parse a `language_region` pair off the front of a locale string.
    ///
    /// Exactly two characters, then `_`, then exactly two characters;
    /// anything after that (an `.encoding`, an `@modifier`) is discarded.
    /// Segments count Unicode characters, not bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let language = match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => two_chars(a, b),
            _ => return Err(LocaleParseError::new(LocaleParseErrorKind::TooShort, s)),
        };

        match chars.next() {
            Some('_') => {}
            Some(_) => {
                return Err(LocaleParseError::new(
                    LocaleParseErrorKind::MissingSeparator,
                    s,
                ))
            }
            None => return Err(LocaleParseError::new(LocaleParseErrorKind::TooShort, s)),
        }

        let region = match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => two_chars(a, b),
            _ => return Err(LocaleParseError::new(LocaleParseErrorKind::TooShort, s)),
        };

        Ok(Self { language, region })
    }
}

fn two_chars(a: char, b: char) -> String {
    let mut code = String::with_capacity(a.len_utf8() + b.len_utf8());
    code.push(a);
    code.push(b);
    code
}
