//! Error types for locale handling

use thiserror::Error;

/// Result type for the fallible locale operations
pub type I18nResult<T> = Result<T, LocaleParseError>;

/// Why a locale string failed to parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleParseErrorKind {
    /// The input ended before both two-character codes were complete
    #[error("input too short for a `xx_YY` pair")]
    TooShort,

    /// The third character was not the `_` separator
    #[error("missing `_` between language and region")]
    MissingSeparator,
}

/// Error raised when a locale string does not decompose into a
/// two-character language code and a two-character region code.
///
/// This is the only error the crate produces. Missing languages, regions,
/// keys, and empty stored values are not errors; they degrade to a fallback
/// value instead (see [`TranslationContext`]).
///
/// [`TranslationContext`]: crate::TranslationContext
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparsable locale string {input:?}: {kind}")]
pub struct LocaleParseError {
    kind: LocaleParseErrorKind,
    input: String,
}

impl LocaleParseError {
    pub(crate) fn new(kind: LocaleParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> LocaleParseErrorKind {
        self.kind
    }

    /// The offending input string.
    pub fn input(&self) -> &str {
        &self.input
    }
}
