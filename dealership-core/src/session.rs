//! Per-visit language and theme, with a seam for device-local persistence
use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";
/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("settings storage is unavailable")]
    Unavailable,
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Device-local key/value persistence for session preferences.
pub trait SettingsStore {
    type Error: std::error::Error;

    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RefCell<BTreeMap<String, String>>,
    read_only: bool,
}

impl MemorySettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `entries`.
    #[must_use]
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let values = entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self {
            values: RefCell::new(values),
            read_only: false,
        }
    }

    /// A store whose writes always fail, as a full or blocked localStorage would.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            values: RefCell::default(),
            read_only: true,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl SettingsStore for MemorySettings {
    type Error = SettingsError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.read_only {
            return Err(SettingsError::Write {
                key: key.to_string(),
                message: "store is read-only".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Language and theme for the current page session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub lang: Lang,
    pub theme: Theme,
}

impl SessionState {
    #[must_use]
    pub const fn new(lang: Lang, theme: Theme) -> Self {
        Self { lang, theme }
    }

    /// Restore preferences from `store`.
    ///
    /// Theme is read before language. A preference that cannot be read or
    /// holds an unknown value keeps its default and is listed in `failures`.
    pub fn load<S: SettingsStore>(store: &S) -> RestoredSession {
        let mut state = Self::default();
        let mut failures = Vec::new();
        match restore(store, THEME_KEY, Theme::parse) {
            Ok(theme) => state.theme = theme.unwrap_or_default(),
            Err(err) => failures.push(err),
        }
        match restore(store, LANGUAGE_KEY, Lang::parse) {
            Ok(lang) => state.lang = lang.unwrap_or_default(),
            Err(err) => failures.push(err),
        }
        RestoredSession { state, failures }
    }

    /// Flip the language and persist it. The in-memory flip stands even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the new value could not be written.
    pub fn toggle_language<S: SettingsStore>(&mut self, store: &S) -> Result<Lang, S::Error> {
        self.lang = self.lang.toggled();
        store.write(LANGUAGE_KEY, self.lang.code())?;
        Ok(self.lang)
    }

    /// Flip the theme and persist it. The in-memory flip stands even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the new value could not be written.
    pub fn toggle_theme<S: SettingsStore>(&mut self, store: &S) -> Result<Theme, S::Error> {
        self.theme = self.theme.toggled();
        store.write(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}

/// A stored preference that fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("could not read '{key}': {message}")]
    Unreadable { key: &'static str, message: String },
    #[error("unrecognized value '{value}' for '{key}'")]
    Unrecognized { key: &'static str, value: String },
}

impl PreferenceError {
    /// Storage key of the failed preference.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Unreadable { key, .. } | Self::Unrecognized { key, .. } => key,
        }
    }
}

/// Session restored at startup, plus each preference that could not be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredSession {
    pub state: SessionState,
    pub failures: Vec<PreferenceError>,
}

fn restore<S, T>(
    store: &S,
    key: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, PreferenceError>
where
    S: SettingsStore,
{
    let raw = store.read(key).map_err(|err| PreferenceError::Unreadable {
        key,
        message: err.to_string(),
    })?;
    match raw {
        Some(value) => parse(&value)
            .map(Some)
            .ok_or(PreferenceError::Unrecognized { key, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_yields_defaults() {
        let restored = SessionState::load(&MemorySettings::new());
        assert_eq!(restored.state, SessionState::new(Lang::En, Theme::Dark));
        assert!(restored.failures.is_empty());
    }

    #[test]
    fn stored_preferences_are_restored() {
        let store = MemorySettings::with_entries(&[(THEME_KEY, "light"), (LANGUAGE_KEY, "es")]);
        let restored = SessionState::load(&store);
        assert_eq!(restored.state.theme, Theme::Light);
        assert_eq!(restored.state.lang, Lang::Es);
    }

    #[test]
    fn garbage_values_fall_back_and_are_reported() {
        let store = MemorySettings::with_entries(&[(THEME_KEY, "sepia"), (LANGUAGE_KEY, "klingon")]);
        let restored = SessionState::load(&store);
        assert_eq!(restored.state, SessionState::default());
        let keys: Vec<_> = restored.failures.iter().map(PreferenceError::key).collect();
        assert_eq!(keys, [THEME_KEY, LANGUAGE_KEY]);
        assert_eq!(
            restored.failures[0],
            PreferenceError::Unrecognized {
                key: THEME_KEY,
                value: "sepia".into()
            }
        );
    }

    #[test]
    fn one_bad_preference_keeps_the_other() {
        let store = MemorySettings::with_entries(&[(THEME_KEY, "light"), (LANGUAGE_KEY, "fr")]);
        let restored = SessionState::load(&store);
        assert_eq!(restored.state, SessionState::new(Lang::En, Theme::Light));
        assert_eq!(restored.failures.len(), 1);
        assert_eq!(restored.failures[0].key(), LANGUAGE_KEY);
    }

    #[test]
    fn session_serializes_with_lowercase_codes() {
        let session = SessionState::new(Lang::Es, Theme::Light);
        let json = serde_json::to_value(session).expect("session serializes");
        assert_eq!(json, serde_json::json!({ "lang": "es", "theme": "light" }));
        let back: SessionState = serde_json::from_value(json).expect("session deserializes");
        assert_eq!(back, session);
    }

    #[test]
    fn toggles_flip_and_persist() {
        let store = MemorySettings::new();
        let mut state = SessionState::default();
        assert_eq!(state.toggle_language(&store), Ok(Lang::Es));
        assert_eq!(state.toggle_theme(&store), Ok(Theme::Light));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("es"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        assert_eq!(state.toggle_language(&store), Ok(Lang::En));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(SessionState::load(&store).state, state);
    }

    #[test]
    fn failed_persist_keeps_in_memory_toggle() {
        let store = MemorySettings::read_only();
        let mut state = SessionState::default();
        assert!(state.toggle_theme(&store).is_err());
        assert_eq!(state.theme, Theme::Light);
    }
}
