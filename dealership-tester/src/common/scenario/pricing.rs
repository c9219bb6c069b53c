use anyhow::{Result, ensure};
use dealership_core::{Lang, LocalizationTable, format_mileage, format_price};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

fn digits_only(formatted: &str) -> String {
    formatted.chars().filter(char::is_ascii_digit).collect()
}

pub fn format_check(rng: &mut ChaCha8Rng) -> Result<()> {
    ensure!(format_price(25_000, Lang::En) == "$25,000", "25000 should render as $25,000");
    ensure!(format_price(0, Lang::En) == "$0", "0 should render as $0");

    for _ in 0..32 {
        let price: u32 = rng.gen_range(0..5_000_000);
        for lang in Lang::ALL {
            let formatted = format_price(price, lang);
            ensure!(
                digits_only(&formatted) == price.to_string(),
                "{formatted} lost digits of {price}"
            );
        }
        let english = format_price(price, Lang::En);
        ensure!(english.starts_with('$'), "{english} should lead with $");
    }

    let table = LocalizationTable::builtin();
    ensure!(format_mileage(0, Lang::En, table) == "New", "zero miles reads New");
    ensure!(format_mileage(0, Lang::Es, table) == "Nuevo", "zero miles reads Nuevo");
    ensure!(
        format_mileage(42_000, Lang::En, table) == "42,000 miles",
        "English mileage grouping"
    );
    ensure!(
        format_mileage(42_000, Lang::Es, table) == "42.000 millas",
        "Spanish mileage grouping"
    );
    Ok(())
}
