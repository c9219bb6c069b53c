//! Browser `localStorage` behind the core settings seam
use crate::dom;
use dealership_core::SettingsStore;
use dealership_core::session::SettingsError;

/// Session preferences persisted in the visitor's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSettings;

impl SettingsStore for LocalStorageSettings {
    type Error = SettingsError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().map_err(|_| SettingsError::Unavailable)?;
        storage.get_item(key).map_err(|err| SettingsError::Read {
            key: key.to_string(),
            message: dom::js_error_message(&err),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|_| SettingsError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| SettingsError::Write {
                key: key.to_string(),
                message: dom::js_error_message(&err),
            })
    }
}
