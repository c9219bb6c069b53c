//! Prestige Motors core
//!
//! Platform-agnostic catalog, localization and form logic for the dealership site.
//! This crate renders nothing; it projects catalog state into view models that a
//! presentation adapter (the Yew crate) turns into markup.

pub mod catalog;
pub mod confirmation;
pub mod detail;
pub mod filter;
pub mod format;
pub mod forms;
pub mod i18n;
pub mod session;
pub mod view_model;
pub mod vocabulary;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, Condition, VehicleRecord};
pub use confirmation::{
    AUTO_DISMISS_MS, Confirmation, ConfirmationKind, ConfirmationQueue, ConfirmationView,
};
pub use detail::{DetailEvent, DetailState};
pub use filter::{ConditionFilter, FilterCriteria, filter};
pub use format::{format_mileage, format_price, group_digits};
pub use forms::{
    ContactInput, ContactRequest, FieldId, FormError, PaymentMethod, PurchaseInput,
    PurchaseRequest, SellerListing, SellerListingInput, is_valid_email,
};
pub use i18n::{Key, Lang, LocalizationError, LocalizationTable};
pub use session::{
    LANGUAGE_KEY, MemorySettings, PreferenceError, RestoredSession, SessionState, SettingsStore,
    THEME_KEY, Theme,
};
pub use view_model::{
    CardView, ConditionBadge, DetailView, FeatureItem, ListingView, SpecRow, project_catalog,
    project_detail, project_listing,
};
pub use vocabulary::{SpecField, translate_spec};

/// Trait for abstracting catalog loading
/// Platform-specific implementations decide where the records come from
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the full ordered catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Catalog source backed by the JSON embedded in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(catalog::STATIC_CATALOG_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_catalog_source_loads_records() {
        let catalog = StaticCatalog.load_catalog().expect("static catalog parses");
        assert!(!catalog.is_empty());
    }
}
