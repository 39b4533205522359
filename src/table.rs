//! Translation storage types and builders

use std::collections::HashMap;

/// Key to translated text, for one (language, region) pair.
pub type TranslationTable = HashMap<String, String>;

/// Region code to translation table, all sharing one language.
pub type LanguageGroup = HashMap<String, TranslationTable>;

/// Helper function to build a [`TranslationTable`] from key-value pairs
pub fn table_from_pairs(pairs: &[(&str, &str)]) -> TranslationTable {
    pairs
        .iter()
        .map(|&(key, text)| (key.to_string(), text.to_string()))
        .collect()
}

/// Macro to build a [`TranslationTable`] from literal entries.
///
/// ```
/// use interlocale::translation_table;
///
/// let table = translation_table! {
///     "hello" => "olá",
///     "bye" => "tchau",
/// };
/// assert_eq!(table.get("hello").map(String::as_str), Some("olá"));
/// ```
#[macro_export]
macro_rules! translation_table {
    () => {
        $crate::TranslationTable::new()
    };
    ($($key:expr => $text:expr),+ $(,)?) => {{
        let mut table = $crate::TranslationTable::new();
        $(
            table.insert($key.into(), $text.into());
        )+
        table
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_pairs() {
        let table = table_from_pairs(&[("hello", "olá"), ("bye", "tchau")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("hello").map(String::as_str), Some("olá"));
        assert_eq!(table.get("bye").map(String::as_str), Some("tchau"));
    }

    #[test]
    fn test_macro_matches_helper() {
        let from_macro = translation_table! {
            "hello" => "olá",
            "bye" => "tchau",
        };
        let from_pairs = table_from_pairs(&[("hello", "olá"), ("bye", "tchau")]);
        assert_eq!(from_macro, from_pairs);
    }

    #[test]
    fn test_empty_macro() {
        let table = translation_table!();
        assert!(table.is_empty());
    }

    #[test]
    fn test_macro_accepts_owned_values() {
        let greeting = String::from("olá");
        let table = translation_table! { "hello" => greeting };
        assert_eq!(table.get("hello").map(String::as_str), Some("olá"));
    }
}
