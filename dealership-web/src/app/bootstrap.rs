use dealership_core::{
    Catalog, CatalogSource, LANGUAGE_KEY, PreferenceError, SessionState, SettingsStore, THEME_KEY,
    StaticCatalog,
};
use thiserror::Error;

/// A startup step that could not complete. The others still run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("theme preference: {0}")]
    Theme(String),
    #[error("language preference: {0}")]
    Language(String),
    #[error("catalog: {0}")]
    Catalog(String),
}

impl BootstrapError {
    #[must_use]
    pub const fn step(&self) -> &'static str {
        match self {
            Self::Theme(_) => "theme",
            Self::Language(_) => "language",
            Self::Catalog(_) => "catalog",
        }
    }
}

impl From<PreferenceError> for BootstrapError {
    fn from(err: PreferenceError) -> Self {
        match err.key() {
            THEME_KEY => Self::Theme(err.to_string()),
            LANGUAGE_KEY => Self::Language(err.to_string()),
            other => Self::Language(format!("{other}: {err}")),
        }
    }
}

/// Outcome of startup: whatever loaded, plus each step that failed.
#[derive(Debug)]
pub struct BootReport {
    pub session: SessionState,
    pub catalog: Catalog,
    pub failures: Vec<BootstrapError>,
}

/// Run the theme, language and catalog steps independently.
pub fn bootstrap_load<S, C>(store: &S, source: &C) -> BootReport
where
    S: SettingsStore,
    C: CatalogSource,
{
    let restored = SessionState::load(store);
    let mut failures: Vec<BootstrapError> = restored
        .failures
        .into_iter()
        .map(BootstrapError::from)
        .collect();
    let catalog = source.load_catalog().unwrap_or_else(|err| {
        failures.push(BootstrapError::Catalog(err.to_string()));
        Catalog::empty()
    });

    for failure in &failures {
        report_failure(failure);
    }
    log::info!(
        "Bootstrap finished: {} vehicles, {} failed steps",
        catalog.len(),
        failures.len()
    );
    BootReport {
        session: restored.state,
        catalog,
        failures,
    }
}

/// Startup for this platform: `localStorage` in the browser, an empty
/// in-memory store elsewhere. Runs before the first paint.
#[must_use]
pub fn startup_report() -> BootReport {
    #[cfg(target_arch = "wasm32")]
    let store = crate::storage::LocalStorageSettings;
    #[cfg(not(target_arch = "wasm32"))]
    let store = dealership_core::MemorySettings::new();
    bootstrap_load(&store, &StaticCatalog)
}

fn report_failure(err: &BootstrapError) {
    log::error!("Startup step '{}' failed: {err}", err.step());
    #[cfg(target_arch = "wasm32")]
    crate::dom::console_error(&format!("Startup step '{}' failed: {err}", err.step()));
}
