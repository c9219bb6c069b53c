//! Pure projection of catalog records into display-ready view models
//!
//! Nothing here touches the DOM. The web crate renders these structs as-is, and
//! the tester asserts against them directly.
use crate::catalog::{Catalog, Condition, VehicleRecord};
use crate::filter::{FilterCriteria, filter};
use crate::format::{format_mileage, format_price};
use crate::i18n::{Key, Lang, LocalizationTable};
use crate::session::SessionState;
use crate::vocabulary::{SpecField, translate_spec};
use serde::Serialize;

/// One labeled specification line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
    /// Position in its list, drives the staggered entrance animation
    pub ordinal: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionBadge {
    pub label: String,
    pub class: &'static str,
}

impl ConditionBadge {
    fn new(condition: Condition, lang: Lang, table: &LocalizationTable) -> Self {
        Self {
            label: table.text(lang, condition.label_key()),
            class: condition.badge_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: u32,
    pub image: String,
    pub alt: String,
    pub title: String,
    pub specs: Vec<SpecRow>,
    pub price: String,
    pub badge: ConditionBadge,
    pub ordinal: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ListingView {
    Empty { message: String },
    Cards(Vec<CardView>),
}

impl ListingView {
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }

    #[must_use]
    pub fn card_ids(&self) -> Vec<u32> {
        self.cards().iter().map(|card| card.id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    pub text: String,
    pub ordinal: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: u32,
    pub image: String,
    pub alt: String,
    pub title: String,
    pub price: String,
    pub badge: ConditionBadge,
    pub specs_heading: String,
    pub specs: Vec<SpecRow>,
    pub features_heading: String,
    pub features: Vec<FeatureItem>,
    pub description_heading: String,
    pub description: String,
    pub purchase_label: String,
    pub contact_label: String,
    pub close_label: String,
}

fn rows(entries: Vec<(Key, String)>, lang: Lang, table: &LocalizationTable) -> Vec<SpecRow> {
    entries
        .into_iter()
        .enumerate()
        .map(|(ordinal, (key, value))| SpecRow {
            label: table.text(lang, key),
            value,
            ordinal,
        })
        .collect()
}

/// Mileage through drivetrain, shared by cards and the detail view.
fn running_specs(
    vehicle: &VehicleRecord,
    lang: Lang,
    table: &LocalizationTable,
) -> Vec<(Key, String)> {
    vec![
        (
            Key::SpecMileage,
            format_mileage(vehicle.mileage, lang, table),
        ),
        (Key::SpecEngine, vehicle.engine.clone()),
        (
            Key::SpecTransmission,
            translate_spec(SpecField::Transmission, &vehicle.transmission, lang, table),
        ),
        (
            Key::SpecFuel,
            translate_spec(SpecField::Fuel, &vehicle.fuel_type, lang, table),
        ),
        (
            Key::SpecColor,
            translate_spec(SpecField::Color, &vehicle.color, lang, table),
        ),
        (
            Key::SpecDrivetrain,
            translate_spec(SpecField::Drivetrain, &vehicle.drivetrain, lang, table),
        ),
    ]
}

fn project_card(
    vehicle: &VehicleRecord,
    ordinal: usize,
    lang: Lang,
    table: &LocalizationTable,
) -> CardView {
    let title = vehicle.title();
    CardView {
        id: vehicle.id,
        image: vehicle.image.clone(),
        alt: title.clone(),
        title,
        specs: rows(running_specs(vehicle, lang, table), lang, table),
        price: format_price(vehicle.price, lang),
        badge: ConditionBadge::new(vehicle.condition, lang, table),
        ordinal,
    }
}

/// Project an already filtered sequence of records into the inventory grid.
pub fn project_listing<'a, I>(
    records: I,
    session: &SessionState,
    table: &LocalizationTable,
) -> ListingView
where
    I: IntoIterator<Item = &'a VehicleRecord>,
{
    let lang = session.lang;
    let cards: Vec<CardView> = records
        .into_iter()
        .enumerate()
        .map(|(ordinal, vehicle)| project_card(vehicle, ordinal, lang, table))
        .collect();
    if cards.is_empty() {
        ListingView::Empty {
            message: table.text(lang, Key::NoResults),
        }
    } else {
        ListingView::Cards(cards)
    }
}

/// Filter then project in one step.
#[must_use]
pub fn project_catalog(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    session: &SessionState,
    table: &LocalizationTable,
) -> ListingView {
    project_listing(filter(catalog.vehicles(), criteria), session, table)
}

/// Full detail view for a single record.
#[must_use]
pub fn project_detail(
    vehicle: &VehicleRecord,
    session: &SessionState,
    table: &LocalizationTable,
) -> DetailView {
    let lang = session.lang;
    let mut entries = vec![
        (Key::SpecYear, vehicle.year.to_string()),
        (Key::SpecMake, vehicle.make.clone()),
        (Key::SpecModel, vehicle.model.clone()),
    ];
    entries.extend(running_specs(vehicle, lang, table));

    let features = vehicle
        .features_for(lang)
        .iter()
        .enumerate()
        .map(|(ordinal, text)| FeatureItem {
            text: text.clone(),
            ordinal,
        })
        .collect();

    let title = vehicle.title();
    DetailView {
        id: vehicle.id,
        image: vehicle.image.clone(),
        alt: title.clone(),
        title,
        price: format_price(vehicle.price, lang),
        badge: ConditionBadge::new(vehicle.condition, lang, table),
        specs_heading: table.text(lang, Key::DetailSpecs),
        specs: rows(entries, lang, table),
        features_heading: table.text(lang, Key::DetailFeatures),
        features,
        description_heading: table.text(lang, Key::DetailDescription),
        description: vehicle.description_for(lang).to_string(),
        purchase_label: table.text(lang, Key::DetailPurchase),
        contact_label: table.text(lang, Key::DetailContact),
        close_label: table.text(lang, Key::DetailClose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ConditionFilter;
    use crate::session::Theme;

    fn session(lang: Lang) -> SessionState {
        SessionState::new(lang, Theme::Dark)
    }

    #[test]
    fn empty_listing_shows_localized_message() {
        let table = LocalizationTable::builtin();
        let view = project_listing(std::iter::empty(), &session(Lang::Es), table);
        assert_eq!(
            view,
            ListingView::Empty {
                message: table.text(Lang::Es, Key::NoResults)
            }
        );
        assert!(view.cards().is_empty());
    }

    #[test]
    fn cards_carry_six_specs_in_order() {
        let table = LocalizationTable::builtin();
        let catalog = Catalog::load_from_static();
        let view = project_listing(catalog.vehicles(), &session(Lang::En), table);
        let card = &view.cards()[0];
        let labels: Vec<&str> = card.specs.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Mileage:",
                "Engine:",
                "Transmission:",
                "Fuel:",
                "Color:",
                "Drivetrain:"
            ]
        );
        assert_eq!(card.title, "2024 Tesla Model S");
        assert_eq!(card.alt, card.title);
        assert_eq!(card.specs[0].value, "New");
        assert_eq!(card.price, "$89,990");
        assert_eq!(card.badge.class, "condition-new");
        for (idx, spec) in card.specs.iter().enumerate() {
            assert_eq!(spec.ordinal, idx);
        }
    }

    #[test]
    fn card_ordinals_follow_filtered_order() {
        let table = LocalizationTable::builtin();
        let catalog = Catalog::load_from_static();
        let criteria = FilterCriteria::new("", ConditionFilter::Used);
        let view = project_catalog(&catalog, &criteria, &session(Lang::En), table);
        for (idx, card) in view.cards().iter().enumerate() {
            assert_eq!(card.ordinal, idx);
        }
        assert_eq!(view.card_ids(), [1, 2, 4, 5, 6]);
    }

    #[test]
    fn spanish_cards_translate_vocabulary_and_units() {
        let table = LocalizationTable::builtin();
        let catalog = Catalog::load_from_static();
        let camry = catalog.get(2).expect("camry");
        let view = project_listing([camry], &session(Lang::Es), table);
        let card = &view.cards()[0];
        assert_eq!(card.specs[0].value, "42.000 millas");
        assert_eq!(card.specs[2].value, "CVT");
        assert_eq!(card.specs[3].value, "Híbrido");
        assert_eq!(card.specs[4].value, "Plateado");
        assert_eq!(card.specs[5].value, "Tracción delantera");
        assert_eq!(card.badge.label, "Usado");
        // Engine is free text and never translated.
        assert_eq!(card.specs[1].value, camry.engine);
    }

    #[test]
    fn detail_view_uses_localized_content_when_present() {
        let table = LocalizationTable::builtin();
        let catalog = Catalog::load_from_static();
        let tesla = catalog.get(0).expect("tesla");
        let es = project_detail(tesla, &session(Lang::Es), table);
        assert_eq!(es.specs.len(), 9);
        assert_eq!(es.specs[0].value, "2024");
        assert_eq!(Some(es.description.as_str()), tesla.description_es.as_deref());
        let features: Vec<&str> = es.features.iter().map(|f| f.text.as_str()).collect();
        let expected: Vec<&str> = tesla
            .features_es
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(features, expected);

        let en = project_detail(tesla, &session(Lang::En), table);
        assert_eq!(en.description, tesla.description);
        assert_eq!(en.features.len(), tesla.features.len());
        assert_eq!(en.features.last().map(|f| f.ordinal), Some(tesla.features.len() - 1));
    }

    #[test]
    fn detail_view_falls_back_without_localized_content() {
        let table = LocalizationTable::builtin();
        let catalog = Catalog::load_from_static();
        let civic = catalog.get(5).expect("civic");
        let es = project_detail(civic, &session(Lang::Es), table);
        assert_eq!(es.description, civic.description);
        assert_eq!(es.features.len(), civic.features.len());
        assert_eq!(es.specs_heading, "Especificaciones");
    }
}
