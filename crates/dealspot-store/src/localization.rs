use dealspot_core::{Language, TranslationKey, Translations};
use tokio::sync::watch;

use crate::error::StoreError;

/// Current UI language. Not persisted: every process starts in Polish.
pub struct LocalizationStore {
    language: Language,
    tx: watch::Sender<Language>,
}

impl Default for LocalizationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    #[must_use]
    pub fn with_language(language: Language) -> Self {
        let (tx, _rx) = watch::channel(language);
        Self { language, tx }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translation table for the current language.
    #[must_use]
    pub fn translations(&self) -> Translations {
        self.language.translations()
    }

    #[must_use]
    pub fn translate(&self, key: TranslationKey) -> &'static str {
        self.translations().get(key)
    }

    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        tracing::info!(from = %self.language, to = %language, "language changed");
        self.language = language;
        self.tx.send_replace(language);
    }

    /// Set the language from its code (`"pl"` or `"en"`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`] for any other value; the current
    /// language is left unchanged.
    pub fn set_language_code(&mut self, code: &str) -> Result<(), StoreError> {
        let language = code.parse::<Language>().map_err(|e| {
            tracing::warn!(code, "rejected language change");
            StoreError::InvalidArgument(e.to_string())
        })?;
        self.set_language(language);
        Ok(())
    }

    /// Switch to the other language and return it.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.language.toggled();
        self.set_language(next);
        next
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_primary_language() {
        let store = LocalizationStore::new();
        assert_eq!(store.language(), Language::Polish);
        assert_eq!(store.translate(TranslationKey::Favorites), "Ulubione");
    }

    #[test]
    fn set_language_switches_translations() {
        let mut store = LocalizationStore::new();
        let before = store.translations();
        store.set_language(Language::English);
        let after = store.translations();

        assert_eq!(after.language(), Language::English);
        assert!(TranslationKey::ALL
            .into_iter()
            .any(|key| before.get(key) != after.get(key)));
        assert_eq!(store.translate(TranslationKey::Favorites), "Favorites");
    }

    #[test]
    fn set_language_code_accepts_supported_codes() {
        let mut store = LocalizationStore::new();
        store.set_language_code("en").unwrap();
        assert_eq!(store.language(), Language::English);
        store.set_language_code("pl").unwrap();
        assert_eq!(store.language(), Language::Polish);
    }

    #[test]
    fn set_language_code_rejects_unknown_value() {
        let mut store = LocalizationStore::with_language(Language::English);
        let err = store.set_language_code("fr").unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(ref msg) if msg.contains("fr")));
        assert_eq!(store.language(), Language::English);
    }

    #[test]
    fn toggle_language_alternates() {
        let mut store = LocalizationStore::new();
        assert_eq!(store.toggle_language(), Language::English);
        assert_eq!(store.toggle_language(), Language::Polish);
    }

    #[test]
    fn subscribers_see_changes_only() {
        let mut store = LocalizationStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow_and_update(), Language::Polish);

        store.set_language(Language::Polish);
        assert!(!rx.has_changed().unwrap());

        store.set_language(Language::English);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::English);
    }

    #[test]
    fn new_store_ignores_previous_session_choice() {
        let mut first = LocalizationStore::new();
        first.set_language(Language::English);
        drop(first);

        let second = LocalizationStore::new();
        assert_eq!(second.language(), Language::Polish);
    }
}
