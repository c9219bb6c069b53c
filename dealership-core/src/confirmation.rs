//! Transient success confirmations shown after a valid submission
use crate::forms::{ContactRequest, PurchaseRequest, SellerListing};
use crate::i18n::{Key, Lang, LocalizationTable};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Confirmations remove themselves after this long.
pub const AUTO_DISMISS_MS: u32 = 5_000;

static NEXT_CONFIRMATION_ID: AtomicU64 = AtomicU64::new(1);

/// What was submitted, with the values echoed back to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ConfirmationKind {
    Listing {
        year: i32,
        make: String,
        model: String,
        email: String,
    },
    Contact {
        name: String,
        subject: String,
        email: String,
    },
    Purchase {
        name: String,
        vehicle: String,
        email: String,
    },
}

impl ConfirmationKind {
    #[must_use]
    pub fn purchase(request: &PurchaseRequest, vehicle_title: impl Into<String>) -> Self {
        Self::Purchase {
            name: request.name.clone(),
            vehicle: vehicle_title.into(),
            email: request.email.clone(),
        }
    }
}

impl From<&SellerListing> for ConfirmationKind {
    fn from(listing: &SellerListing) -> Self {
        Self::Listing {
            year: listing.year,
            make: listing.make.clone(),
            model: listing.model.clone(),
            email: listing.seller_email.clone(),
        }
    }
}

impl From<&ContactRequest> for ConfirmationKind {
    fn from(request: &ContactRequest) -> Self {
        Self::Contact {
            name: request.name.clone(),
            subject: request.subject.clone(),
            email: request.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub id: u64,
    pub kind: ConfirmationKind,
}

/// Localized overlay content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    pub id: u64,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub dismiss_label: String,
}

impl Confirmation {
    /// A confirmation with a process-unique id.
    #[must_use]
    pub fn new(kind: ConfirmationKind) -> Self {
        let id = NEXT_CONFIRMATION_ID.fetch_add(1, Ordering::Relaxed);
        Self { id, kind }
    }

    #[must_use]
    pub fn view(&self, lang: Lang, table: &LocalizationTable) -> ConfirmationView {
        let (title, paragraphs) = match &self.kind {
            ConfirmationKind::Listing {
                year,
                make,
                model,
                email,
            } => {
                let year = year.to_string();
                (
                    Key::ConfirmListingTitle,
                    vec![
                        table.format(
                            lang,
                            Key::ConfirmListingBody,
                            &[
                                ("year", year.as_str()),
                                ("make", make.as_str()),
                                ("model", model.as_str()),
                            ],
                        ),
                        table.format(
                            lang,
                            Key::ConfirmListingFollowup,
                            &[("email", email.as_str())],
                        ),
                    ],
                )
            }
            ConfirmationKind::Contact {
                name,
                subject,
                email,
            } => (
                Key::ConfirmContactTitle,
                vec![
                    table.format(lang, Key::ConfirmContactBody, &[("name", name.as_str())]),
                    table.format(
                        lang,
                        Key::ConfirmContactFollowup,
                        &[("subject", subject.as_str()), ("email", email.as_str())],
                    ),
                ],
            ),
            ConfirmationKind::Purchase {
                name,
                vehicle,
                email,
            } => (
                Key::ConfirmPurchaseTitle,
                vec![
                    table.format(
                        lang,
                        Key::ConfirmPurchaseBody,
                        &[("name", name.as_str()), ("vehicle", vehicle.as_str())],
                    ),
                    table.format(
                        lang,
                        Key::ConfirmPurchaseFollowup,
                        &[("email", email.as_str())],
                    ),
                ],
            ),
        };
        ConfirmationView {
            id: self.id,
            title: table.text(lang, title),
            paragraphs,
            dismiss_label: table.text(lang, Key::ConfirmContinue),
        }
    }
}

/// Confirmations currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfirmationQueue {
    items: Vec<Confirmation>,
}

impl ConfirmationQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Show `confirmation`; returns its id for the auto-dismiss timer.
    pub fn push(&mut self, confirmation: Confirmation) -> u64 {
        let id = confirmation.id;
        self.items.push(confirmation);
        id
    }

    /// Remove the confirmation with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[Confirmation] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
