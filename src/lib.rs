//! # interlocale
//!
//! In-memory internationalized string lookup with language and region
//! fallback.
//!
//! Translations live in a two-level map, language code then region code,
//! and keys resolve against it with a fixed fallback policy:
//!
//! - An exact `language_region` match wins.
//! - When the region has no table of its own, any other region of the same
//!   language may answer.
//! - When the language is entirely unknown, or nothing non-empty is stored
//!   for the key, the key itself comes back unchanged.
//!
//! An empty stored value counts as absent throughout, so a half-finished
//! translation file never blanks out the UI. Lookups therefore never fail
//! a rendering path; the only error in this crate is [`LocaleParseError`],
//! raised for malformed locale strings such as `"portuguese"`. The
//! supported shape is `xx_YY`, optionally followed by an `.encoding` or
//! `@modifier` suffix as in `pt_BR.UTF-8`.
//!
//! A preferred locale can be set once, either explicitly or from the
//! `LC_ALL` / `LANG` environment variables, so call sites can use
//! [`TranslationContext::get`] without threading a locale string around.
//!
//! ## Example
//!
//! ```rust
//! use interlocale::{translation_table, TranslationContext};
//!
//! # fn example() -> Result<(), interlocale::LocaleParseError> {
//! let mut ctx = TranslationContext::new();
//! ctx.add_locale("pt_BR.UTF-8", translation_table! { "hello" => "olá" })?;
//!
//! // Exact hit, then region fallback, then unknown language.
//! assert_eq!(ctx.get_from_locale("hello", "pt_BR")?, "olá");
//! assert_eq!(ctx.get_from_locale("hello", "pt_PT")?, "olá");
//! assert_eq!(ctx.get_from_locale("hello", "en_US")?, "hello");
//!
//! // Or set the locale once and drop the argument.
//! ctx.set_preferred_locale("pt_BR")?;
//! assert_eq!(ctx.get("hello"), "olá");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Concurrency
//!
//! [`TranslationContext`] is plain owned data with no interior mutability
//! and no internal locking. Share it freely behind `&self` once loading is
//! done, or wrap it in a lock when translations are added at runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod error;
pub mod locale;
pub mod table;

pub use context::TranslationContext;
pub use error::{I18nResult, LocaleParseError, LocaleParseErrorKind};
pub use locale::LocaleId;
pub use table::{table_from_pairs, LanguageGroup, TranslationTable};
