//! Translation of free-text spec values through a small fixed vocabulary
use crate::i18n::{Key, Lang, LocalizationTable};

/// Spec fields whose values are matched against the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    Transmission,
    Fuel,
    Drivetrain,
    Color,
}

struct Term {
    needle: &'static str,
    key: Key,
}

const TRANSMISSION_TERMS: &[Term] = &[
    Term {
        needle: "auto",
        key: Key::TermAuto,
    },
    Term {
        needle: "manual",
        key: Key::TermManual,
    },
    Term {
        needle: "cvt",
        key: Key::TermCvt,
    },
    Term {
        needle: "single-speed",
        key: Key::TermSingleSpeed,
    },
];

const FUEL_TERMS: &[Term] = &[
    Term {
        needle: "gas",
        key: Key::TermGas,
    },
    Term {
        needle: "electric",
        key: Key::TermElectric,
    },
    Term {
        needle: "hybrid",
        key: Key::TermHybrid,
    },
    Term {
        needle: "diesel",
        key: Key::TermDiesel,
    },
];

const DRIVETRAIN_TERMS: &[Term] = &[
    Term {
        needle: "fwd",
        key: Key::TermFwd,
    },
    Term {
        needle: "rwd",
        key: Key::TermRwd,
    },
    Term {
        needle: "awd",
        key: Key::TermAwd,
    },
    Term {
        needle: "4wd",
        key: Key::Term4wd,
    },
];

const COLOR_TERMS: &[Term] = &[
    Term {
        needle: "white",
        key: Key::TermWhite,
    },
    Term {
        needle: "black",
        key: Key::TermBlack,
    },
    Term {
        needle: "silver",
        key: Key::TermSilver,
    },
    Term {
        needle: "red",
        key: Key::TermRed,
    },
    Term {
        needle: "blue",
        key: Key::TermBlue,
    },
    Term {
        needle: "gray",
        key: Key::TermGray,
    },
];

impl SpecField {
    const fn terms(self) -> &'static [Term] {
        match self {
            Self::Transmission => TRANSMISSION_TERMS,
            Self::Fuel => FUEL_TERMS,
            Self::Drivetrain => DRIVETRAIN_TERMS,
            Self::Color => COLOR_TERMS,
        }
    }

    /// First vocabulary term contained in `value` (case-insensitive), in enumerated order.
    #[must_use]
    pub fn matching_term(self, value: &str) -> Option<Key> {
        let lowered = value.to_lowercase();
        self.terms()
            .iter()
            .find(|term| lowered.contains(term.needle))
            .map(|term| term.key)
    }
}

/// Localize a spec value for display.
///
/// Values are authored in the default language, so they pass through untouched
/// there. Otherwise the first matching term is replaced by the active language's
/// text for it; unmatched values, or terms the language lacks, pass through.
#[must_use]
pub fn translate_spec(
    field: SpecField,
    value: &str,
    lang: Lang,
    table: &LocalizationTable,
) -> String {
    if lang.is_default() {
        return value.to_string();
    }
    field
        .matching_term(value)
        .and_then(|key| table.provided(lang, key))
        .map_or_else(|| value.to_string(), str::to_string)
}
