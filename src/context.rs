//! Translation storage, preferred-locale state, and key resolution

use std::collections::HashMap;
use std::env;

use tracing::{debug, trace, warn};

use crate::error::I18nResult;
use crate::locale::LocaleId;
use crate::table::{LanguageGroup, TranslationTable};

/// Preferred-locale selection captured by [`TranslationContext::set_preferred`].
///
/// Holds map keys rather than table references. The keys are captured only
/// when the corresponding entries exist, and entries are never removed, so
/// resolution at read time cannot dangle and always sees the latest tables.
#[derive(Debug, Clone)]
struct PreferredLocale {
    language: String,
    /// Present only when the region's table existed at capture time.
    region: Option<String>,
}

/// Owns every loaded translation and resolves keys against them.
///
/// A context starts empty, is populated through [`add_locale`] or
/// [`insert`], and optionally carries a preferred locale so call sites can
/// use [`get`] without threading a locale string around. Lookups never
/// fail: anything missing degrades to the key itself, following the
/// fallback rules described in the crate docs. Tables are only ever added
/// or replaced, never removed.
///
/// The context is plain owned data with no interior mutability or internal
/// locking; wrap it in a lock to mutate it from several threads.
///
/// [`add_locale`]: Self::add_locale
/// [`insert`]: Self::insert
/// [`get`]: Self::get
#[derive(Debug, Clone)]
pub struct TranslationContext {
    languages: HashMap<String, LanguageGroup>,
    preferred: Option<PreferredLocale>,
}

impl TranslationContext {
    /// Create an empty context with no translations and no preferred locale.
    pub fn new() -> Self {
        Self {
            languages: HashMap::new(),
            preferred: None,
        }
    }

    /// Register the translation table for a locale string, creating the
    /// language group on first use.
    ///
    /// A table already stored under the same language and region is
    /// replaced wholesale; entries are never merged.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleParseError`] when `locale` is not a `xx_YY`
    /// string. Nothing is stored in that case.
    ///
    /// [`LocaleParseError`]: crate::LocaleParseError
    pub fn add_locale(&mut self, locale: &str, entries: TranslationTable) -> I18nResult<()> {
        let id: LocaleId = locale.parse()?;
        self.insert(id, entries);
        Ok(())
    }

    /// Typed form of [`add_locale`](Self::add_locale) for an
    /// already-parsed locale id.
    pub fn insert(&mut self, id: LocaleId, entries: TranslationTable) {
        let (language, region) = id.into_parts();
        debug!(
            "Registered locale {}_{} ({} entries)",
            language,
            region,
            entries.len()
        );
        self.languages
            .entry(language)
            .or_default()
            .insert(region, entries);
    }

    /// Choose the locale used by [`get`](Self::get).
    ///
    /// When no translations are loaded for the parsed language, the
    /// preference is cleared and `get` returns keys unchanged until a later
    /// call succeeds. When the language is loaded but the exact region is
    /// not, `get` answers from any table in the language group.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleParseError`] when `locale` is not a `xx_YY`
    /// string. The current preference is kept in that case.
    ///
    /// [`LocaleParseError`]: crate::LocaleParseError
    pub fn set_preferred_locale(&mut self, locale: &str) -> I18nResult<()> {
        let id: LocaleId = locale.parse()?;
        self.set_preferred(id);
        Ok(())
    }

    /// Typed form of [`set_preferred_locale`](Self::set_preferred_locale)
    /// for an already-parsed locale id.
    pub fn set_preferred(&mut self, id: LocaleId) {
        let (language, region) = id.into_parts();
        match self.languages.get(&language) {
            Some(group) => {
                let region = if group.contains_key(&region) {
                    debug!("Preferred locale set to {}_{}", language, region);
                    Some(region)
                } else {
                    debug!(
                        "Region {} not loaded for language {}, preferring the whole group",
                        region, language
                    );
                    None
                };
                self.preferred = Some(PreferredLocale { language, region });
            }
            None => {
                warn!(
                    "No translations loaded for language {}, preferred locale cleared",
                    language
                );
                self.preferred = None;
            }
        }
    }

    /// Choose the preferred locale from the `LC_ALL` and `LANG` environment
    /// variables.
    ///
    /// `LC_ALL` is tried first and wins outright whenever it parses, even
    /// when it names a language with no loaded translations (which clears
    /// the preference, see
    /// [`set_preferred_locale`](Self::set_preferred_locale)). Only when
    /// `LC_ALL` is unset or unparsable is `LANG` tried, and that attempt's
    /// outcome is returned.
    ///
    /// # Errors
    ///
    /// Returns the `LANG` attempt's [`LocaleParseError`] when neither
    /// variable holds a parsable locale string.
    ///
    /// [`LocaleParseError`]: crate::LocaleParseError
    pub fn set_preferred_locale_from_env(&mut self) -> I18nResult<()> {
        let lc_all = env::var("LC_ALL").unwrap_or_default();
        let lang = env::var("LANG").unwrap_or_default();
        self.set_preferred_locale_from_values(&lc_all, &lang)
    }

    /// The testable seam behind
    /// [`set_preferred_locale_from_env`](Self::set_preferred_locale_from_env):
    /// same contract, with the two variable values passed in. An unset
    /// variable is represented by an empty string.
    fn set_preferred_locale_from_values(&mut self, lc_all: &str, lang: &str) -> I18nResult<()> {
        if self.set_preferred_locale(lc_all).is_ok() {
            debug!("Preferred locale taken from LC_ALL");
            return Ok(());
        }
        debug!("LC_ALL unset or unparsable, trying LANG");
        self.set_preferred_locale(lang)
    }

    /// Look up `key` under the preferred locale.
    ///
    /// Returns `key` itself when no preference is in effect, when the
    /// preferred language group holds no match, or when every stored value
    /// for `key` is empty. Never fails: no parsing happens here.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        let Some(preferred) = &self.preferred else {
            return key;
        };
        // The language key is captured only when its group exists, and
        // groups are never removed.
        let Some(group) = self.languages.get(&preferred.language) else {
            return key;
        };
        if let Some(region) = &preferred.region {
            if let Some(text) = group.get(region).and_then(|table| table.get(key)) {
                if !text.is_empty() {
                    return text;
                }
            }
        }
        trace!(
            "Scanning the {} group for key {:?}",
            preferred.language,
            key
        );
        first_non_empty(group, key).unwrap_or(key)
    }

    /// Look up `key` under an explicit locale string.
    ///
    /// Missing translations are not errors: an unknown language, an
    /// unknown region, a missing key, and an empty stored value all return
    /// `key` as `Ok`. Only a malformed locale string fails.
    ///
    /// When the region has no table, every table in the language group is
    /// scanned for the first non-empty match. When the region's table
    /// exists but holds no non-empty entry for `key`, sibling regions are
    /// *not* consulted and the key itself comes back.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleParseError`] when `locale` is not a `xx_YY`
    /// string.
    ///
    /// [`LocaleParseError`]: crate::LocaleParseError
    pub fn get_from_locale<'a>(&'a self, key: &'a str, locale: &str) -> I18nResult<&'a str> {
        let id: LocaleId = locale.parse()?;
        Ok(self.lookup(key, &id))
    }

    /// Typed form of [`get_from_locale`](Self::get_from_locale) for an
    /// already-parsed locale id, with the same fallback rules.
    pub fn lookup<'a>(&'a self, key: &'a str, id: &LocaleId) -> &'a str {
        let Some(group) = self.languages.get(id.language()) else {
            return key;
        };
        match group.get(id.region()) {
            Some(table) => match table.get(key) {
                Some(text) if !text.is_empty() => text,
                // An exact table answers alone; its misses never consult
                // sibling regions.
                _ => key,
            },
            None => {
                trace!(
                    "No {}_{} table, scanning sibling regions for key {:?}",
                    id.language(),
                    id.region(),
                    key
                );
                first_non_empty(group, key).unwrap_or(key)
            }
        }
    }

    /// Language codes with at least one loaded table, in no particular
    /// order.
    pub fn languages(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    /// Region codes loaded for a language, in no particular order. Empty
    /// when the language itself is unknown.
    pub fn regions(&self, language: &str) -> Vec<&str> {
        self.languages
            .get(language)
            .map(|group| group.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The captured preferred language, if a preference is in effect.
    pub fn preferred_language(&self) -> Option<&str> {
        self.preferred.as_ref().map(|p| p.language.as_str())
    }

    /// The captured preferred region. `None` when no preference is in
    /// effect or when the region had no table at capture time.
    pub fn preferred_region(&self) -> Option<&str> {
        self.preferred.as_ref().and_then(|p| p.region.as_deref())
    }
}

impl Default for TranslationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// First non-empty text stored for `key` anywhere in `group`, in
/// unspecified order.
fn first_non_empty<'a>(group: &'a LanguageGroup, key: &str) -> Option<&'a str> {
    group
        .values()
        .filter_map(|table| table.get(key))
        .find(|text| !text.is_empty())
        .map(String::as_str)
}
