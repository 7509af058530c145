//! Internationalization module
//!
//! Provides translations for English (en) and French (fr).
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use crate::lead::ValidationIssue;
use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "fr" { lang } else { "en".to_string() };

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, or the key itself when unknown
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// User-facing messages for a list of validation issues
    pub fn validation_messages(&self, issues: &[ValidationIssue]) -> Vec<String> {
        issues.iter().map(|issue| self.get(issue.message_key())).collect()
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }
}

/// Detect system language from the locale environment
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_from_locale(&lang_env).to_string()
}

/// Extract a supported language code (e.g., "fr_FR.UTF-8" -> "fr")
fn language_from_locale(locale: &str) -> &'static str {
    let code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match code {
        "fr" => "fr",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{ContactField, ValidationIssue};

    #[test]
    fn test_locale_detection() {
        assert_eq!(language_from_locale("fr_FR.UTF-8"), "fr");
        assert_eq!(language_from_locale("en_ZA.UTF-8"), "en");
        assert_eq!(language_from_locale("C.UTF-8"), "en");
        assert_eq!(language_from_locale("de_DE"), "en");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("xx");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("pdf.storage"), "Storage");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_validation_messages() {
        let i18n = I18n::new("en");
        let messages = i18n.validation_messages(&[
            ValidationIssue::Required(ContactField::JobTitle),
            ValidationIssue::InvalidEmail,
        ]);
        assert_eq!(
            messages,
            vec![
                "Job Title is required.".to_string(),
                "Please enter a valid email address.".to_string(),
            ]
        );
    }

    #[test]
    fn test_languages_share_keys() {
        let en = en::get_translations();
        let fr = fr::get_translations();
        for key in en.keys() {
            assert!(fr.contains_key(key), "missing French translation for {}", key);
        }
        assert_eq!(en.len(), fr.len());
    }
}
