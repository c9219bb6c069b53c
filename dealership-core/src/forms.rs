//! Seller, contact and purchase form validation
//!
//! Each form arrives as raw strings (exactly what the `<form>` held) and is
//! validated into a typed request. Validation stops at the first failing field.
use crate::catalog::Condition;
use crate::i18n::{Key, Lang, LocalizationTable};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Earliest model year accepted for a listing.
pub const MIN_LISTING_YEAR: i32 = 1900;

/// Stock photo used when a seller leaves the image URL blank.
pub const DEFAULT_LISTING_IMAGE: &str = "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Loose address shape check: something@something.tld, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    SellerName,
    SellerEmail,
    SellerPhone,
    SellerLocation,
    Make,
    Model,
    Year,
    Mileage,
    Price,
    Condition,
    Color,
    Transmission,
    Description,
    Features,
    Image,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    PaymentMethod,
}

impl FieldId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SellerName => "sellerName",
            Self::SellerEmail => "sellerEmail",
            Self::SellerPhone => "sellerPhone",
            Self::SellerLocation => "sellerLocation",
            Self::Make => "make",
            Self::Model => "model",
            Self::Year => "year",
            Self::Mileage => "mileage",
            Self::Price => "price",
            Self::Condition => "condition",
            Self::Color => "color",
            Self::Transmission => "transmission",
            Self::Description => "description",
            Self::Features => "features",
            Self::Image => "image",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::PaymentMethod => "paymentMethod",
        }
    }

    /// Human-readable field name used in validation messages and labels.
    #[must_use]
    pub const fn label_key(self) -> Key {
        match self {
            Self::SellerName => Key::FieldSellerName,
            Self::SellerEmail => Key::FieldSellerEmail,
            Self::SellerPhone => Key::FieldSellerPhone,
            Self::SellerLocation => Key::FieldSellerLocation,
            Self::Make => Key::FieldMake,
            Self::Model => Key::FieldModel,
            Self::Year => Key::FieldYear,
            Self::Mileage => Key::FieldMileage,
            Self::Price => Key::FieldPrice,
            Self::Condition => Key::FieldCondition,
            Self::Color => Key::FieldColor,
            Self::Transmission => Key::FieldTransmission,
            Self::Description => Key::FieldDescription,
            Self::Features => Key::FieldFeatures,
            Self::Image => Key::FieldImage,
            Self::Name => Key::FieldName,
            Self::Email => Key::FieldEmail,
            Self::Phone => Key::FieldPhone,
            Self::Subject => Key::FieldSubject,
            Self::Message => Key::FieldMessage,
            Self::PaymentMethod => Key::FieldPaymentMethod,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field '{0}' is empty")]
    Required(FieldId),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(FieldId),
    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("'{0}' is not a valid number")]
    InvalidNumber(FieldId),
    #[error("'{0}' is not one of the offered choices")]
    InvalidChoice(FieldId),
}

impl FormError {
    /// The first failing field.
    #[must_use]
    pub const fn field(&self) -> FieldId {
        match self {
            Self::Required(field)
            | Self::InvalidEmail(field)
            | Self::InvalidNumber(field)
            | Self::InvalidChoice(field) => *field,
            Self::YearOutOfRange { .. } => FieldId::Year,
        }
    }

    /// Visitor-facing notification text.
    #[must_use]
    pub fn message(&self, lang: Lang, table: &LocalizationTable) -> String {
        let field = table.text(lang, self.field().label_key());
        match self {
            Self::Required(_) => {
                table.format(lang, Key::ErrorRequired, &[("field", field.as_str())])
            }
            Self::InvalidEmail(_) => table.text(lang, Key::ErrorEmail),
            Self::YearOutOfRange { .. } => table.text(lang, Key::ErrorYear),
            Self::InvalidNumber(_) => {
                table.format(lang, Key::ErrorNumber, &[("field", field.as_str())])
            }
            Self::InvalidChoice(_) => {
                table.format(lang, Key::ErrorChoice, &[("field", field.as_str())])
            }
        }
    }
}

fn require(field: FieldId, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(field: FieldId, value: &str) -> Result<T, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber(field))
}

fn check_email(field: FieldId, value: &str) -> Result<String, FormError> {
    let email = value.trim();
    if is_valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(FormError::InvalidEmail(field))
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Split a comma-separated feature list, dropping blanks.
#[must_use]
pub fn split_features(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw "sell your car" form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerListingInput {
    pub seller_name: String,
    pub seller_email: String,
    pub seller_phone: String,
    pub seller_location: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub price: String,
    pub condition: String,
    pub color: String,
    pub transmission: String,
    pub description: String,
    pub features: String,
    pub image: String,
}

/// A validated seller listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerListing {
    pub seller_name: String,
    pub seller_email: String,
    pub seller_phone: Option<String>,
    pub seller_location: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: u32,
    pub price: u32,
    pub condition: Condition,
    pub color: Option<String>,
    pub transmission: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub image: String,
}

impl SellerListingInput {
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

    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::SellerName => &self.seller_name,
            FieldId::SellerEmail => &self.seller_email,
            FieldId::SellerPhone => &self.seller_phone,
            FieldId::SellerLocation => &self.seller_location,
            FieldId::Make => &self.make,
            FieldId::Model => &self.model,
            FieldId::Year => &self.year,
            FieldId::Mileage => &self.mileage,
            FieldId::Price => &self.price,
            FieldId::Condition => &self.condition,
            FieldId::Color => &self.color,
            FieldId::Transmission => &self.transmission,
            FieldId::Description => &self.description,
            FieldId::Features => &self.features,
            FieldId::Image => &self.image,
            FieldId::Name
            | FieldId::Email
            | FieldId::Phone
            | FieldId::Subject
            | FieldId::Message
            | FieldId::PaymentMethod => "",
        }
    }

    /// Validate against `current_year` (listings may be up to one model year ahead).
    ///
    /// Checks run in this order: required fields, the email shape, numbers and
    /// the condition choice, then the year range.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self, current_year: i32) -> Result<SellerListing, FormError> {
        for field in Self::REQUIRED {
            require(field, self.value(field))?;
        }
        let seller_email = check_email(FieldId::SellerEmail, &self.seller_email)?;
        let year: i32 = parse_number(FieldId::Year, &self.year)?;
        let mileage: u32 = parse_number(FieldId::Mileage, &self.mileage)?;
        let price: u32 = parse_number(FieldId::Price, &self.price)?;
        if price == 0 {
            return Err(FormError::InvalidNumber(FieldId::Price));
        }
        let condition =
            Condition::parse(&self.condition).ok_or(FormError::InvalidChoice(FieldId::Condition))?;
        let max = current_year + 1;
        if !(MIN_LISTING_YEAR..=max).contains(&year) {
            return Err(FormError::YearOutOfRange {
                year,
                min: MIN_LISTING_YEAR,
                max,
            });
        }

        Ok(SellerListing {
            seller_name: self.seller_name.trim().to_string(),
            seller_email,
            seller_phone: optional(&self.seller_phone),
            seller_location: optional(&self.seller_location),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year,
            mileage,
            price,
            condition,
            color: optional(&self.color),
            transmission: optional(&self.transmission),
            description: optional(&self.description),
            features: split_features(&self.features),
            image: optional(&self.image).unwrap_or_else(|| DEFAULT_LISTING_IMAGE.to_string()),
        })
    }
}

/// Raw contact form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactInput {
    /// # Errors
    ///
    /// Returns the first empty required field (name, email, subject, message),
    /// then an email shape failure.
    pub fn validate(&self) -> Result<ContactRequest, FormError> {
        require(FieldId::Name, &self.name)?;
        require(FieldId::Email, &self.email)?;
        require(FieldId::Subject, &self.subject)?;
        require(FieldId::Message, &self.message)?;
        let email = check_email(FieldId::Email, &self.email)?;
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email,
            phone: optional(&self.phone),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Finance,
    Lease,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Cash, Self::Finance, Self::Lease];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Finance => "finance",
            Self::Lease => "lease",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "finance" => Some(Self::Finance),
            "lease" => Some(Self::Lease),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> Key {
        match self {
            Self::Cash => Key::PaymentCash,
            Self::Finance => Key::PaymentFinance,
            Self::Lease => Key::PaymentLease,
        }
    }
}

/// Raw purchase request values, opened from a vehicle's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseInput {
    pub vehicle_id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub payment_method: String,
    pub message: String,
}

impl Default for PurchaseInput {
    fn default() -> Self {
        Self {
            vehicle_id: 0,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            payment_method: PaymentMethod::default().as_str().to_string(),
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub vehicle_id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
    pub message: Option<String>,
}

impl PurchaseInput {
    #[must_use]
    pub fn for_vehicle(vehicle_id: u32) -> Self {
        Self {
            vehicle_id,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns the first empty required field (name, email, phone), then an
    /// unknown payment method, then an email shape failure.
    pub fn validate(&self) -> Result<PurchaseRequest, FormError> {
        require(FieldId::Name, &self.name)?;
        require(FieldId::Email, &self.email)?;
        require(FieldId::Phone, &self.phone)?;
        let payment_method = PaymentMethod::parse(&self.payment_method)
            .ok_or(FormError::InvalidChoice(FieldId::PaymentMethod))?;
        let email = check_email(FieldId::Email, &self.email)?;
        Ok(PurchaseRequest {
            vehicle_id: self.vehicle_id,
            name: self.name.trim().to_string(),
            email,
            phone: self.phone.trim().to_string(),
            payment_method,
            message: optional(&self.message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> SellerListingInput {
        SellerListingInput {
            seller_name: "Dana Ruiz".into(),
            seller_email: "dana@example.com".into(),
            make: "Mazda".into(),
            model: "MX-5".into(),
            year: "2018".into(),
            mileage: "31000".into(),
            price: "19500".into(),
            condition: "used".into(),
            features: "Soft top, , Bose audio ,".into(),
            ..SellerListingInput::default()
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn first_missing_required_field_is_reported() {
        let input = SellerListingInput {
            make: String::new(),
            price: String::new(),
            ..listing()
        };
        assert_eq!(input.validate(2025), Err(FormError::Required(FieldId::Make)));
    }

    #[test]
    fn blank_image_uses_stock_photo_and_features_are_trimmed() {
        let listing = listing().validate(2025).expect("valid listing");
        assert_eq!(listing.image, DEFAULT_LISTING_IMAGE);
        assert_eq!(listing.features, ["Soft top", "Bose audio"]);
        assert_eq!(listing.seller_phone, None);
        assert_eq!(listing.condition, Condition::Used);
    }

    #[test]
    fn zero_mileage_is_accepted_zero_price_is_not() {
        let input = SellerListingInput {
            mileage: "0".into(),
            ..listing()
        };
        assert_eq!(input.validate(2025).map(|l| l.mileage), Ok(0));

        let input = SellerListingInput {
            price: "0".into(),
            ..listing()
        };
        assert_eq!(
            input.validate(2025),
            Err(FormError::InvalidNumber(FieldId::Price))
        );
    }

    #[test]
    fn year_may_be_one_ahead() {
        let input = SellerListingInput {
            year: "2026".into(),
            ..listing()
        };
        assert!(input.validate(2025).is_ok());
        let input = SellerListingInput {
            year: "2027".into(),
            ..listing()
        };
        assert_eq!(
            input.validate(2025),
            Err(FormError::YearOutOfRange {
                year: 2027,
                min: MIN_LISTING_YEAR,
                max: 2026
            })
        );
    }

    #[test]
    fn non_numeric_values_and_bad_choices_are_rejected() {
        let input = SellerListingInput {
            mileage: "lots".into(),
            ..listing()
        };
        assert_eq!(
            input.validate(2025),
            Err(FormError::InvalidNumber(FieldId::Mileage))
        );
        let input = SellerListingInput {
            condition: "salvage".into(),
            ..listing()
        };
        assert_eq!(
            input.validate(2025),
            Err(FormError::InvalidChoice(FieldId::Condition))
        );
    }

    #[test]
    fn bad_email_is_reported_before_bad_numbers() {
        let input = SellerListingInput {
            seller_email: "dana.example.com".into(),
            price: "free".into(),
            year: "1850".into(),
            ..listing()
        };
        assert_eq!(
            input.validate(2025),
            Err(FormError::InvalidEmail(FieldId::SellerEmail))
        );
    }

    #[test]
    fn contact_requires_subject_and_message() {
        let input = ContactInput {
            name: "Lee".into(),
            email: "lee@example.com".into(),
            subject: " ".into(),
            message: "Hi".into(),
            ..ContactInput::default()
        };
        assert_eq!(input.validate(), Err(FormError::Required(FieldId::Subject)));
    }

    #[test]
    fn purchase_requires_phone_and_known_payment() {
        let mut input = PurchaseInput::for_vehicle(4);
        input.name = "Sam".into();
        input.email = "sam@example.com".into();
        assert_eq!(input.validate(), Err(FormError::Required(FieldId::Phone)));

        input.phone = "555-0100".into();
        input.payment_method = "barter".into();
        assert_eq!(
            input.validate(),
            Err(FormError::InvalidChoice(FieldId::PaymentMethod))
        );

        input.payment_method = "lease".into();
        let request = input.validate().expect("valid purchase");
        assert_eq!(request.vehicle_id, 4);
        assert_eq!(request.payment_method, PaymentMethod::Lease);
        assert_eq!(request.message, None);
    }

    #[test]
    fn messages_are_localized_with_field_names() {
        let table = LocalizationTable::builtin();
        let err = FormError::Required(FieldId::SellerName);
        assert_eq!(
            err.message(Lang::En, table),
            "Please fill in the seller name field."
        );
        assert_eq!(
            FormError::InvalidEmail(FieldId::Email).message(Lang::En, table),
            "Please enter a valid email address."
        );
        assert_eq!(
            FormError::YearOutOfRange {
                year: 1899,
                min: 1900,
                max: 2026
            }
            .message(Lang::Es, table),
            "Por favor ingresa un año válido."
        );
    }
}
