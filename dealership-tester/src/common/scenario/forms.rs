use anyhow::{Result, ensure};
use dealership_core::{
    ContactInput, FieldId, FormError, PurchaseInput, SellerListingInput, is_valid_email,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

fn complete_listing(year: i32) -> SellerListingInput {
    SellerListingInput {
        seller_name: "Dana Reyes".into(),
        seller_email: "dana@example.com".into(),
        make: "Mazda".into(),
        model: "MX-5".into(),
        year: year.to_string(),
        mileage: "31000".into(),
        price: "18500".into(),
        condition: "used".into(),
        ..SellerListingInput::default()
    }
}

fn clear(input: &mut SellerListingInput, field: FieldId) {
    let slot = match field {
        FieldId::SellerName => &mut input.seller_name,
        FieldId::SellerEmail => &mut input.seller_email,
        FieldId::Make => &mut input.make,
        FieldId::Model => &mut input.model,
        FieldId::Year => &mut input.year,
        FieldId::Mileage => &mut input.mileage,
        FieldId::Price => &mut input.price,
        FieldId::Condition => &mut input.condition,
        _ => return,
    };
    slot.clear();
}

const REQUIRED: [FieldId; 8] = [
    FieldId::SellerName,
    FieldId::SellerEmail,
    FieldId::Make,
    FieldId::Model,
    FieldId::Year,
    FieldId::Mileage,
    FieldId::Price,
    FieldId::Condition,
];

fn year_bounds(current_year: i32) -> Result<()> {
    let accepted = |year: i32| complete_listing(year).validate(current_year).is_ok();
    ensure!(!accepted(1899), "1899 should be rejected");
    ensure!(accepted(1900), "1900 should be accepted");
    ensure!(accepted(current_year), "{current_year} should be accepted");
    ensure!(
        accepted(current_year + 1),
        "next model year {} should be accepted",
        current_year + 1
    );
    ensure!(
        !accepted(current_year + 2),
        "{} is too far ahead",
        current_year + 2
    );
    Ok(())
}

fn required_fields(rng: &mut ChaCha8Rng, current_year: i32) -> Result<()> {
    let field = REQUIRED[rng.gen_range(0..REQUIRED.len())];
    let mut input = complete_listing(current_year);
    clear(&mut input, field);
    let outcome = input.validate(current_year);
    ensure!(
        outcome == Err(FormError::Required(field)),
        "Clearing {field} gave {outcome:?}"
    );
    Ok(())
}

fn email_shapes() -> Result<()> {
    ensure!(!is_valid_email("a@b"), "a@b has no domain suffix");
    ensure!(is_valid_email("a@b.com"), "a@b.com is well formed");

    let contact = ContactInput {
        name: "Ana".into(),
        email: "ana at example".into(),
        subject: "financing".into(),
        message: "Hi".into(),
        ..ContactInput::default()
    };
    ensure!(
        contact.validate() == Err(FormError::InvalidEmail(FieldId::Email)),
        "Contact form should reject a malformed email"
    );

    let mut purchase = PurchaseInput::for_vehicle(3);
    purchase.name = "Ana".into();
    purchase.email = "ana@example.com".into();
    ensure!(
        purchase.validate() == Err(FormError::Required(FieldId::Phone)),
        "Purchase form requires a phone number"
    );
    Ok(())
}

pub fn validation_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let current_year = rng.gen_range(2000..=2100);
    year_bounds(current_year)?;
    required_fields(rng, current_year)?;
    email_shapes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn validation_rules_hold_across_seeds() {
        for seed in 0..12 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            validation_check(&mut rng).expect("validation rules");
        }
    }
}
