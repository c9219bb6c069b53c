//! Number, price and mileage formatting
//!
//! Formatting is done in Rust rather than through the browser's `Intl` so the
//! output is identical on the host (tests, tester CLI) and in the page.
use crate::i18n::{Key, Lang, LocalizationTable};

const fn group_separator(lang: Lang) -> char {
    match lang {
        Lang::En => ',',
        Lang::Es => '.',
    }
}

/// Spanish leaves four-digit numbers ungrouped ("4500", "42.000").
const fn min_grouping_digits(lang: Lang) -> usize {
    match lang {
        Lang::En => 4,
        Lang::Es => 5,
    }
}

/// Insert thousands separators into `value`.
#[must_use]
pub fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Locale-aware integer formatting.
#[must_use]
pub fn format_number(value: u64, lang: Lang) -> String {
    let digits = value.to_string();
    if digits.len() < min_grouping_digits(lang) {
        digits
    } else {
        group_digits(value, group_separator(lang))
    }
}

/// USD price with no decimal digits: `$25,000` (en), `25.000 US$` (es).
#[must_use]
pub fn format_price(price: u32, lang: Lang) -> String {
    let amount = format_number(u64::from(price), lang);
    match lang {
        Lang::En => format!("${amount}"),
        Lang::Es => format!("{amount}\u{a0}US$"),
    }
}

/// Mileage label: the localized "new" token for 0, else `{value} miles`.
#[must_use]
pub fn format_mileage(mileage: u32, lang: Lang, table: &LocalizationTable) -> String {
    if mileage == 0 {
        return table.text(lang, Key::MileageNew);
    }
    let value = format_number(u64::from(mileage), lang);
    table.format(lang, Key::MileageValue, &[("value", value.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_dollar_sign_without_decimals() {
        assert_eq!(format_price(25_000, Lang::En), "$25,000");
        assert_eq!(format_price(0, Lang::En), "$0");
        assert_eq!(format_price(1_250_000, Lang::En), "$1,250,000");
        assert_eq!(format_price(25_000, Lang::Es), "25.000\u{a0}US$");
    }

    #[test]
    fn mileage_zero_renders_new_token() {
        let table = LocalizationTable::builtin();
        assert_eq!(format_mileage(0, Lang::En, table), "New");
        assert_eq!(format_mileage(0, Lang::Es, table), "Nuevo");
    }

    #[test]
    fn mileage_groups_per_language() {
        let table = LocalizationTable::builtin();
        assert_eq!(format_mileage(42_000, Lang::En, table), "42,000 miles");
        assert_eq!(format_mileage(42_000, Lang::Es, table), "42.000 millas");
        assert_eq!(format_mileage(4_500, Lang::Es, table), "4500 millas");
        assert_eq!(format_mileage(4_500, Lang::En, table), "4,500 miles");
    }

    #[test]
    fn group_digits_handles_short_numbers() {
        assert_eq!(group_digits(7, ','), "7");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1_000, ','), "1,000");
        assert_eq!(group_digits(123_456_789, '.'), "123.456.789");
    }
}
