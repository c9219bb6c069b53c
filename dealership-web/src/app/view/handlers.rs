use crate::app::state::{AppState, ConfirmationAction};
use crate::dom;
use dealership_core::{
    Catalog, ConditionFilter, Confirmation, ConfirmationKind, ContactInput, DetailEvent,
    FilterCriteria, FormError, LocalizationTable, PurchaseInput, SellerListingInput,
};
use serde::Serialize;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub search: Callback<String>,
    pub condition: Callback<ConditionFilter>,
    pub select: Callback<u32>,
    pub detail_event: Callback<DetailEvent>,
    pub open_purchase: Callback<u32>,
    pub contact_about: Callback<u32>,
    pub cancel_purchase: Callback<()>,
    pub submit_purchase: Callback<PurchaseInput, bool>,
    pub submit_listing: Callback<SellerListingInput, bool>,
    pub submit_contact: Callback<ContactInput, bool>,
    pub dismiss: Callback<u64>,
    pub toggle_language: Callback<()>,
    pub toggle_theme: Callback<()>,
    pub toggle_menu: Callback<()>,
    pub navigate: Callback<&'static str>,
    pub back_to_top: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            search: build_search(state),
            condition: build_condition(state),
            select: build_detail_select(state),
            detail_event: build_detail_event(state),
            open_purchase: build_open_purchase(state),
            contact_about: build_contact_about(state),
            cancel_purchase: build_cancel_purchase(state),
            submit_purchase: build_submit_purchase(state),
            submit_listing: build_submit_listing(state),
            submit_contact: build_submit_contact(state),
            dismiss: build_dismiss(state),
            toggle_language: build_toggle_language(state),
            toggle_theme: build_toggle_theme(state),
            toggle_menu: build_toggle_menu(state),
            navigate: build_navigate(state),
            back_to_top: build_back_to_top(),
        }
    }
}

/// Validate a seller listing into its confirmation.
///
/// # Errors
/// Returns the first failing field.
pub fn submit_listing(
    input: &SellerListingInput,
    current_year: i32,
) -> Result<Confirmation, FormError> {
    let listing = input.validate(current_year)?;
    log_submission("Seller listing submitted", &listing);
    Ok(Confirmation::new(ConfirmationKind::from(&listing)))
}

/// # Errors
/// Returns the first failing field.
pub fn submit_contact(input: &ContactInput) -> Result<Confirmation, FormError> {
    let request = input.validate()?;
    log_submission("Contact form submitted", &request);
    Ok(Confirmation::new(ConfirmationKind::from(&request)))
}

/// # Errors
/// Returns the first failing field.
pub fn submit_purchase(input: &PurchaseInput, catalog: &Catalog) -> Result<Confirmation, FormError> {
    let request = input.validate()?;
    log_submission("Purchase request submitted", &request);
    let title = catalog
        .get(request.vehicle_id)
        .map(dealership_core::VehicleRecord::title)
        .unwrap_or_default();
    Ok(Confirmation::new(ConfirmationKind::purchase(&request, title)))
}

fn log_submission<T: Serialize>(label: &str, payload: &T) {
    let json = serde_json::to_string(payload).unwrap_or_default();
    log::info!("{label}: {json}");
    #[cfg(target_arch = "wasm32")]
    dom::console_log(&format!("{label}: {json}"));
}

/// Show a successful submission or alert the first failing field.
/// Returns whether the form should reset.
fn deliver(state: &AppState, outcome: Result<Confirmation, FormError>) -> bool {
    match outcome {
        Ok(confirmation) => {
            let id = confirmation.id;
            state
                .confirmations
                .dispatch(ConfirmationAction::Push(confirmation));
            schedule_dismiss(state, id);
            true
        }
        Err(err) => {
            let message = err.message(state.session.lang, LocalizationTable::builtin());
            log::warn!("Rejected submission: {message}");
            #[cfg(target_arch = "wasm32")]
            dom::alert(&message);
            false
        }
    }
}

fn schedule_dismiss(state: &AppState, id: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let dispatcher = state.confirmations.dispatcher();
        if let Err(err) = dom::set_timeout(dealership_core::AUTO_DISMISS_MS, move || {
            dispatcher.dispatch(ConfirmationAction::Dismiss(id));
        }) {
            log::warn!(
                "Confirmation {id} will stay until dismissed: {}",
                dom::js_error_message(&err)
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (state, id);
}

fn build_search(state: &AppState) -> Callback<String> {
    let criteria = state.criteria.clone();
    Callback::from(move |search: String| {
        criteria.set(FilterCriteria::new(search, criteria.condition));
    })
}

fn build_condition(state: &AppState) -> Callback<ConditionFilter> {
    let criteria = state.criteria.clone();
    Callback::from(move |condition: ConditionFilter| {
        criteria.set(FilterCriteria::new(criteria.search.clone(), condition));
    })
}

fn build_detail_select(state: &AppState) -> Callback<u32> {
    let detail = state.detail.clone();
    Callback::from(move |id: u32| detail.dispatch(DetailEvent::Select(id)))
}

fn build_detail_event(state: &AppState) -> Callback<DetailEvent> {
    let detail = state.detail.clone();
    Callback::from(move |event: DetailEvent| detail.dispatch(event))
}

fn build_open_purchase(state: &AppState) -> Callback<u32> {
    let detail = state.detail.clone();
    let target = state.purchase_target.clone();
    Callback::from(move |id: u32| {
        detail.dispatch(DetailEvent::Handoff);
        target.set(Some(id));
    })
}

fn build_contact_about(state: &AppState) -> Callback<u32> {
    let detail = state.detail.clone();
    Callback::from(move |id: u32| {
        log::debug!("Contact handoff from vehicle {id}");
        detail.dispatch(DetailEvent::Handoff);
        #[cfg(target_arch = "wasm32")]
        {
            dom::scroll_to_section("contact");
            dom::focus_element("contact-name");
        }
    })
}

fn build_cancel_purchase(state: &AppState) -> Callback<()> {
    let target = state.purchase_target.clone();
    Callback::from(move |()| target.set(None))
}

fn build_submit_purchase(state: &AppState) -> Callback<PurchaseInput, bool> {
    let state = state.clone();
    Callback::from(move |input: PurchaseInput| {
        let accepted = deliver(&state, submit_purchase(&input, &state.catalog));
        if accepted {
            state.purchase_target.set(None);
        }
        accepted
    })
}

fn build_submit_listing(state: &AppState) -> Callback<SellerListingInput, bool> {
    let state = state.clone();
    Callback::from(move |input: SellerListingInput| {
        deliver(&state, submit_listing(&input, dom::current_year()))
    })
}

fn build_submit_contact(state: &AppState) -> Callback<ContactInput, bool> {
    let state = state.clone();
    Callback::from(move |input: ContactInput| deliver(&state, submit_contact(&input)))
}

fn build_dismiss(state: &AppState) -> Callback<u64> {
    let confirmations = state.confirmations.clone();
    Callback::from(move |id: u64| confirmations.dispatch(ConfirmationAction::Dismiss(id)))
}

fn build_toggle_language(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let mut next = *session;
        match next.toggle_language(&crate::storage::LocalStorageSettings) {
            Ok(lang) => log::info!("Language switched to {}", lang.code()),
            Err(err) => log::warn!("Language preference not saved: {err}"),
        }
        session.set(next);
    })
}

fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| {
        let mut next = *session;
        match next.toggle_theme(&crate::storage::LocalStorageSettings) {
            Ok(theme) => log::info!("Theme switched to {}", theme.as_str()),
            Err(err) => log::warn!("Theme preference not saved: {err}"),
        }
        session.set(next);
    })
}

fn build_toggle_menu(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| menu_open.set(!*menu_open))
}

fn build_navigate(state: &AppState) -> Callback<&'static str> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |section: &'static str| {
        menu_open.set(false);
        #[cfg(target_arch = "wasm32")]
        dom::scroll_to_section(section);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = section;
    })
}

fn build_back_to_top() -> Callback<()> {
    Callback::from(|()| {
        #[cfg(target_arch = "wasm32")]
        dom::scroll_to_top();
    })
}
