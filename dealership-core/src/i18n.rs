//! Localization table and the typed key set
//!
//! Every piece of UI text is addressed by a [`Key`]. The table itself is JSON
//! (one nested object per language, addressed by dotted paths) so copy edits
//! don't touch code. Lookups fall back to English, then to the key path.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

const EN_JSON: &str = include_str!("../i18n/en.json");
const ES_JSON: &str = include_str!("../i18n/es.json");

/// Keys whose path starts with this prefix are input placeholders.
pub const PLACEHOLDER_PREFIX: &str = "placeholder.";

/// Supported site languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::En, Self::Es];
    /// Base language: catalog content is authored in it and it backs every lookup.
    pub const DEFAULT: Self = Self::En;

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }
}

macro_rules! localization_keys {
    ($($variant:ident => $path:literal),+ $(,)?) => {
        /// Typed localization key. Each variant maps to one dotted path in the table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant),+
        }

        impl Key {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn path(self) -> &'static str {
                match self {
                    $(Self::$variant => $path),+
                }
            }
        }
    };
}

localization_keys! {
    SkipToContent => "ui.skip_to_content",
    BackToTop => "ui.back_to_top",
    BrandName => "ui.brand",

    NavHome => "nav.home",
    NavInventory => "nav.inventory",
    NavSell => "nav.sell",
    NavContact => "nav.contact",
    NavToggleMenu => "nav.toggle_menu",
    NavToggleTheme => "nav.toggle_theme",
    NavToggleLanguage => "nav.toggle_language",

    HeroTitle => "hero.title",
    HeroSubtitle => "hero.subtitle",
    HeroCta => "hero.cta",

    InventoryTitle => "inventory.title",
    FilterLabel => "inventory.filter_label",
    FilterAll => "inventory.filter.all",
    FilterNew => "inventory.filter.new",
    FilterUsed => "inventory.filter.used",
    NoResults => "inventory.no_results",

    SpecYear => "spec.year",
    SpecMake => "spec.make",
    SpecModel => "spec.model",
    SpecMileage => "spec.mileage",
    SpecEngine => "spec.engine",
    SpecTransmission => "spec.transmission",
    SpecFuel => "spec.fuel",
    SpecColor => "spec.color",
    SpecDrivetrain => "spec.drivetrain",

    ConditionNew => "condition.new",
    ConditionUsed => "condition.used",
    MileageNew => "mileage.new",
    MileageValue => "mileage.value",

    TermAuto => "terms.transmission.auto",
    TermManual => "terms.transmission.manual",
    TermCvt => "terms.transmission.cvt",
    TermSingleSpeed => "terms.transmission.single_speed",
    TermGas => "terms.fuel.gas",
    TermElectric => "terms.fuel.electric",
    TermHybrid => "terms.fuel.hybrid",
    TermDiesel => "terms.fuel.diesel",
    TermFwd => "terms.drivetrain.fwd",
    TermRwd => "terms.drivetrain.rwd",
    TermAwd => "terms.drivetrain.awd",
    Term4wd => "terms.drivetrain.4wd",
    TermWhite => "terms.color.white",
    TermBlack => "terms.color.black",
    TermSilver => "terms.color.silver",
    TermRed => "terms.color.red",
    TermBlue => "terms.color.blue",
    TermGray => "terms.color.gray",

    DetailSpecs => "detail.specs",
    DetailFeatures => "detail.features",
    DetailDescription => "detail.description",
    DetailPurchase => "detail.purchase",
    DetailContact => "detail.contact",
    DetailClose => "detail.close",

    PurchaseTitle => "purchase.title",
    PurchaseSubmit => "purchase.submit",
    PurchaseCancel => "purchase.cancel",
    PaymentCash => "purchase.payment.cash",
    PaymentFinance => "purchase.payment.finance",
    PaymentLease => "purchase.payment.lease",

    SellTitle => "sell.title",
    SellSubtitle => "sell.subtitle",
    SellSubmit => "sell.submit",
    SellImagePreview => "sell.image_preview",
    SellConditionPrompt => "sell.condition_prompt",

    ContactTitle => "contact.title",
    ContactSubtitle => "contact.subtitle",
    ContactSubmit => "contact.submit",

    FieldSellerName => "field.seller_name",
    FieldSellerEmail => "field.seller_email",
    FieldSellerPhone => "field.seller_phone",
    FieldSellerLocation => "field.seller_location",
    FieldMake => "field.make",
    FieldModel => "field.model",
    FieldYear => "field.year",
    FieldMileage => "field.mileage",
    FieldPrice => "field.price",
    FieldCondition => "field.condition",
    FieldColor => "field.color",
    FieldTransmission => "field.transmission",
    FieldDescription => "field.description",
    FieldFeatures => "field.features",
    FieldImage => "field.image",
    FieldName => "field.name",
    FieldEmail => "field.email",
    FieldPhone => "field.phone",
    FieldSubject => "field.subject",
    FieldMessage => "field.message",
    FieldPaymentMethod => "field.payment_method",

    PlaceholderSearch => "placeholder.search",
    PlaceholderFeatures => "placeholder.features",
    PlaceholderImage => "placeholder.image",
    PlaceholderMessage => "placeholder.message",

    ErrorRequired => "errors.required",
    ErrorEmail => "errors.email",
    ErrorYear => "errors.year",
    ErrorNumber => "errors.number",
    ErrorChoice => "errors.choice",

    ConfirmContinue => "confirm.continue",
    ConfirmListingTitle => "confirm.listing.title",
    ConfirmListingBody => "confirm.listing.body",
    ConfirmListingFollowup => "confirm.listing.followup",
    ConfirmContactTitle => "confirm.contact.title",
    ConfirmContactBody => "confirm.contact.body",
    ConfirmContactFollowup => "confirm.contact.followup",
    ConfirmPurchaseTitle => "confirm.purchase.title",
    ConfirmPurchaseBody => "confirm.purchase.body",
    ConfirmPurchaseFollowup => "confirm.purchase.followup",

    FooterTagline => "footer.tagline",
    FooterCopyright => "footer.copyright",
}

impl Key {
    #[must_use]
    pub fn is_placeholder(self) -> bool {
        self.path().starts_with(PLACEHOLDER_PREFIX)
    }
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("JSON parsing error in '{lang}' bundle: {source}")]
    Parse {
        lang: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("bundle for '{0}' is not a JSON object")]
    NotAnObject(&'static str),
}

/// Language code -> nested string table.
#[derive(Debug, Clone, Default)]
pub struct LocalizationTable {
    bundles: BTreeMap<Lang, Value>,
}

static BUILTIN: Lazy<LocalizationTable> = Lazy::new(|| {
    LocalizationTable::from_sources(&[(Lang::En, EN_JSON), (Lang::Es, ES_JSON)]).unwrap_or_else(
        |err| {
            log::error!("Failed to load localization table: {err}");
            LocalizationTable::default()
        },
    )
});

fn get_nested_value<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(obj, |current, k| current.get(k))
}

fn interpolate(mut text: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let ph1 = format!("{{{{{k}}}}}");
        let ph2 = format!("{{{k}}}");
        text = text.replace(&ph1, v);
        text = text.replace(&ph2, v);
    }
    text
}

impl LocalizationTable {
    /// The table embedded in this crate (English and Spanish).
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a table from `(language, json)` pairs. Missing keys are logged, not fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if any source is not a JSON object.
    pub fn from_sources(sources: &[(Lang, &str)]) -> Result<Self, LocalizationError> {
        let mut bundles = BTreeMap::new();
        for (lang, json) in sources {
            let value: Value =
                serde_json::from_str(json).map_err(|source| LocalizationError::Parse {
                    lang: lang.code(),
                    source,
                })?;
            if !value.is_object() {
                return Err(LocalizationError::NotAnObject(lang.code()));
            }
            bundles.insert(*lang, value);
        }
        let table = Self { bundles };
        for lang in table.bundles.keys() {
            for key in table.missing_keys(*lang) {
                log::warn!("Missing translation '{}' for '{}'", key.path(), lang.code());
            }
        }
        Ok(table)
    }

    fn lookup(&self, lang: Lang, path: &str) -> Option<&str> {
        self.bundles
            .get(&lang)
            .and_then(|bundle| get_nested_value(bundle, path))
            .and_then(Value::as_str)
    }

    /// Text for `key` in `lang`, then English, then the key path itself.
    #[must_use]
    pub fn text(&self, lang: Lang, key: Key) -> String {
        self.format(lang, key, &[])
    }

    /// Like [`Self::text`], substituting `{name}` / `{{name}}` placeholders.
    #[must_use]
    pub fn format(&self, lang: Lang, key: Key, args: &[(&str, &str)]) -> String {
        let path = key.path();
        self.lookup(lang, path)
            .or_else(|| self.lookup(Lang::DEFAULT, path))
            .map_or_else(|| path.to_string(), |s| interpolate(s.to_string(), args))
    }

    /// Text only if `lang` itself provides it; no fallback.
    #[must_use]
    pub fn provided(&self, lang: Lang, key: Key) -> Option<&str> {
        self.lookup(lang, key.path())
    }

    /// Keys without a string entry for `lang`.
    #[must_use]
    pub fn missing_keys(&self, lang: Lang) -> Vec<Key> {
        Key::ALL
            .iter()
            .copied()
            .filter(|key| self.lookup(lang, key.path()).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_in_every_language() {
        let table = LocalizationTable::builtin();
        for lang in Lang::ALL {
            let missing = table.missing_keys(lang);
            assert!(
                missing.is_empty(),
                "missing keys for '{}': {missing:?}",
                lang.code()
            );
        }
    }

    #[test]
    fn key_paths_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for key in Key::ALL {
            assert!(seen.insert(key.path()), "duplicate path {}", key.path());
        }
    }

    #[test]
    fn missing_text_falls_back_to_english_then_path() {
        let table = LocalizationTable::from_sources(&[
            (Lang::En, r#"{"inventory": {"no_results": "Nothing here"}}"#),
            (Lang::Es, "{}"),
        ])
        .expect("valid sources");
        assert_eq!(table.text(Lang::Es, Key::NoResults), "Nothing here");
        assert_eq!(table.text(Lang::Es, Key::HeroTitle), "hero.title");
        assert!(table.provided(Lang::Es, Key::NoResults).is_none());
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let table = LocalizationTable::from_sources(&[(
            Lang::En,
            r#"{"confirm": {"contact": {"body": "Hello, {name}! {{name}}!"}}}"#,
        )])
        .expect("valid source");
        let text = table.format(Lang::En, Key::ConfirmContactBody, &[("name", "Ana")]);
        assert_eq!(text, "Hello, Ana! Ana!");
    }

    #[test]
    fn non_object_bundle_is_rejected() {
        let err = LocalizationTable::from_sources(&[(Lang::En, "[]")]).expect_err("array");
        assert!(matches!(err, LocalizationError::NotAnObject("en")));
    }

    #[test]
    fn placeholder_keys_are_flagged() {
        assert!(Key::PlaceholderSearch.is_placeholder());
        assert!(!Key::NoResults.is_placeholder());
    }

    #[test]
    fn lang_round_trips_codes_and_toggles() {
        for lang in Lang::ALL {
            assert_eq!(Lang::parse(lang.code()), Some(lang));
            assert_eq!(lang.toggled().toggled(), lang);
        }
        assert_eq!(Lang::parse("fr"), None);
    }
}
