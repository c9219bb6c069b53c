use dealership_core::{
    Catalog, Confirmation, ConfirmationKind, ConditionFilter, FilterCriteria, Lang,
    LocalizationTable, SessionState, Theme, project_catalog, project_detail,
};
use dealership_web::components::car_detail::CarDetail;
use dealership_web::components::car_listings::CarListings;
use dealership_web::components::confirmation_overlay::ConfirmationOverlay;
use dealership_web::components::contact_form::ContactForm;
use dealership_web::components::footer::Footer;
use dealership_web::components::header::Header;
use dealership_web::components::purchase_form::PurchaseForm;
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn listing_html(criteria: &FilterCriteria, session: &SessionState) -> String {
    let catalog = Catalog::load_from_static();
    let props = dealership_web::components::car_listings::Props {
        listing: project_catalog(&catalog, criteria, session, LocalizationTable::builtin()),
        on_select: Callback::noop(),
    };
    block_on(LocalServerRenderer::<CarListings>::with_props(props).render())
}

#[test]
fn header_renders_toggles_and_navigation() {
    let props = dealership_web::components::header::Props {
        lang: Lang::En,
        theme: Theme::Dark,
        menu_open: true,
        on_toggle_menu: Callback::noop(),
        on_toggle_theme: Callback::noop(),
        on_toggle_language: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("language-toggle"));
    assert!(html.contains("theme-toggle"));
    assert!(html.contains("href=\"#inventory\""));
    assert!(html.contains("nav-links active"));
    assert!(html.contains(">ES<"));
}

#[test]
fn header_translates_navigation() {
    let props = dealership_web::components::header::Props {
        lang: Lang::Es,
        theme: Theme::Light,
        menu_open: false,
        on_toggle_menu: Callback::noop(),
        on_toggle_theme: Callback::noop(),
        on_toggle_language: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Inventario"));
    assert!(!html.contains("nav-links active"));
}

#[test]
fn footer_renders_brand() {
    let props = dealership_web::components::footer::Props { lang: Lang::En };
    let html = block_on(LocalServerRenderer::<Footer>::with_props(props).render());
    assert!(html.contains("<footer"));
    assert!(html.contains("footer-brand"));
}

#[test]
fn listings_render_one_card_per_match() {
    let html = listing_html(&FilterCriteria::default(), &SessionState::default());
    assert_eq!(html.matches("class=\"car-card\"").count(), 8);
    assert!(html.contains("2024 Tesla Model S"));
    assert!(html.contains("$89,990"));

    let html = listing_html(
        &FilterCriteria::new("civic", ConditionFilter::All),
        &SessionState::default(),
    );
    assert_eq!(html.matches("class=\"car-card\"").count(), 1);
    assert!(html.contains("data-car-id=\"5\""));
}

#[test]
fn empty_listing_renders_localized_message() {
    let criteria = FilterCriteria::new("zzz", ConditionFilter::All);
    let html = listing_html(&criteria, &SessionState::default());
    assert!(html.contains("no-results"));
    assert!(html.contains("No cars found matching your criteria."));

    let html = listing_html(&criteria, &SessionState::new(Lang::Es, Theme::Dark));
    assert!(html.contains("No se encontraron autos"));
}

#[test]
fn detail_renders_specs_features_and_actions() {
    let catalog = Catalog::load_from_static();
    let vehicle = catalog.get(2).expect("camry present");
    let view = project_detail(vehicle, &SessionState::default(), LocalizationTable::builtin());
    let props = dealership_web::components::car_detail::Props {
        view,
        on_event: Callback::noop(),
        on_purchase: Callback::noop(),
        on_contact: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CarDetail>::with_props(props).render());
    assert!(html.contains("id=\"car-modal\""));
    assert!(html.contains("2020 Toyota Camry Hybrid"));
    assert!(html.contains("42,000 miles"));
    assert_eq!(html.matches("class=\"spec-item\"").count(), 9);
    assert!(html.contains("purchase-button"));
    assert!(html.contains("contact-button"));
}

#[test]
fn purchase_form_lists_payment_methods() {
    let props = dealership_web::components::purchase_form::Props {
        lang: Lang::En,
        vehicle_id: 1,
        vehicle_title: AttrValue::from("2021 BMW M3"),
        on_submit: Callback::from(|_| false),
        on_cancel: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PurchaseForm>::with_props(props).render());
    assert!(html.contains("purchase-modal"));
    assert!(html.contains("2021 BMW M3"));
    for value in ["cash", "finance", "lease"] {
        assert!(html.contains(&format!("value=\"{value}\"")), "missing {value}");
    }
}

#[test]
fn contact_form_renders_named_controls() {
    let props = dealership_web::components::contact_form::Props {
        lang: Lang::En,
        on_submit: Callback::from(|_| false),
    };
    let html = block_on(LocalServerRenderer::<ContactForm>::with_props(props).render());
    assert!(html.contains("id=\"contact-form\""));
    for name in [
        "contactName",
        "contactEmail",
        "contactPhone",
        "contactSubject",
        "contactMessage",
    ] {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
    }
}

#[test]
fn confirmation_overlay_renders_each_confirmation() {
    let table = LocalizationTable::builtin();
    let confirmation = Confirmation::new(ConfirmationKind::Contact {
        name: "Ana".into(),
        subject: "Hours".into(),
        email: "ana@example.com".into(),
    });
    let props = dealership_web::components::confirmation_overlay::Props {
        items: vec![confirmation.view(Lang::En, table)],
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationOverlay>::with_props(props).render());
    assert_eq!(html.matches("class=\"success-modal\"").count(), 1);
    assert!(html.contains("Message Sent!"));
    assert!(html.contains("success-close-btn"));

    let props = dealership_web::components::confirmation_overlay::Props {
        items: Vec::new(),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationOverlay>::with_props(props).render());
    assert!(!html.contains("success-modal"));
}
