//! Vehicle records and the ordered catalog
use crate::i18n::{Key, Lang};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const STATIC_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Binary classification of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
        }
    }

    /// CSS class of the badge shown on cards and in the detail view.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::New => "condition-new",
            Self::Used => "condition-used",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> Key {
        match self {
            Self::New => Key::ConditionNew,
            Self::Used => Key::ConditionUsed,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "new" => Some(Self::New),
            "used" => Some(Self::Used),
            _ => None,
        }
    }
}

/// A single vehicle in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Position in the catalog, assigned at load time
    #[serde(default)]
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Odometer reading; 0 means new/unused
    pub mileage: u32,
    /// Price in whole US dollars
    pub price: u32,
    pub condition: Condition,
    pub engine: String,
    pub transmission: String,
    pub fuel_type: String,
    pub color: String,
    pub drivetrain: String,
    pub description: String,
    #[serde(default)]
    pub description_es: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub features_es: Option<Vec<String>>,
    pub image: String,
}

impl VehicleRecord {
    /// `"{year} {make} {model}"`, used for titles and image alt text.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Long-form description for `lang`, falling back to the base text.
    #[must_use]
    pub fn description_for(&self, lang: Lang) -> &str {
        match (lang, self.description_es.as_deref()) {
            (Lang::Es, Some(localized)) if !localized.is_empty() => localized,
            _ => &self.description,
        }
    }

    /// Feature list for `lang`, falling back to the base list.
    #[must_use]
    pub fn features_for(&self, lang: Lang) -> &[String] {
        match (lang, self.features_es.as_deref()) {
            (Lang::Es, Some(localized)) if !localized.is_empty() => localized,
            _ => &self.features,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has {0} records, more than ids can address")]
    TooLarge(usize),
}

/// The static ordered list of vehicles shown on the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            vehicles: Vec::new(),
        }
    }

    /// Build a catalog from records, assigning ids by position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::TooLarge`] if the record count exceeds `u32`.
    pub fn from_records(mut vehicles: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        for (idx, vehicle) in vehicles.iter_mut().enumerate() {
            vehicle.id = u32::try_from(idx).map_err(|_| CatalogError::TooLarge(idx + 1))?;
        }
        Ok(Self { vehicles })
    }

    /// Parse a JSON array of vehicle records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let vehicles: Vec<VehicleRecord> = serde_json::from_str(json)?;
        Self::from_records(vehicles)
    }

    /// Load the catalog embedded in the crate, or an empty one if it fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(STATIC_CATALOG_JSON).unwrap_or_else(|err| {
            log::error!("Failed to load static catalog: {err}");
            Self::empty()
        })
    }

    #[must_use]
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
