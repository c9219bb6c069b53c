//! Search and condition filtering over the catalog
use crate::catalog::{Condition, VehicleRecord};
use serde::{Deserialize, Serialize};

/// Condition selector in the inventory toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionFilter {
    #[default]
    All,
    New,
    Used,
}

impl ConditionFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::New, Self::Used];

    /// Parse a `<select>` value. Unknown values select everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match Condition::parse(raw) {
            Some(Condition::New) => Self::New,
            Some(Condition::Used) => Self::Used,
            None => Self::All,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::New => "new",
            Self::Used => "used",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> crate::i18n::Key {
        use crate::i18n::Key;
        match self {
            Self::All => Key::FilterAll,
            Self::New => Key::FilterNew,
            Self::Used => Key::FilterUsed,
        }
    }

    #[must_use]
    pub fn matches(self, condition: Condition) -> bool {
        match self {
            Self::All => true,
            Self::New => condition == Condition::New,
            Self::Used => condition == Condition::Used,
        }
    }
}

/// Current search term and condition selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub condition: ConditionFilter,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(search: impl Into<String>, condition: ConditionFilter) -> Self {
        Self {
            search: search.into(),
            condition,
        }
    }

    fn matches_search(needle: &str, vehicle: &VehicleRecord) -> bool {
        needle.is_empty()
            || vehicle.make.to_lowercase().contains(needle)
            || vehicle.model.to_lowercase().contains(needle)
            || vehicle.year.to_string().contains(needle)
    }

    /// `needle` is the already lowercased search term.
    fn matches_with(&self, needle: &str, vehicle: &VehicleRecord) -> bool {
        self.condition.matches(vehicle.condition) && Self::matches_search(needle, vehicle)
    }

    /// True when `vehicle` satisfies both the search term and the condition selector.
    #[must_use]
    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        self.matches_with(&self.search.to_lowercase(), vehicle)
    }
}

/// Records satisfying `criteria`, in catalog order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a VehicleRecord>
where
    I: IntoIterator<Item = &'a VehicleRecord>,
{
    let needle = criteria.search.to_lowercase();
    records
        .into_iter()
        .filter(|vehicle| criteria.matches_with(&needle, vehicle))
        .collect()
}
