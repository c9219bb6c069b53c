use crate::app::bootstrap::startup_report;
use dealership_core::{
    Catalog, Confirmation, ConfirmationQueue, DetailEvent, DetailState, DetailView,
    FilterCriteria, ListingView, LocalizationTable, SessionState, project_catalog, project_detail,
};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper around the detail view state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailMachine(pub DetailState);

impl Reducible for DetailMachine {
    type Action = DetailEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

pub enum ConfirmationAction {
    Push(Confirmation),
    /// Fired by the dismiss button and by the auto-dismiss timer
    Dismiss(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Confirmations(pub ConfirmationQueue);

impl Reducible for Confirmations {
    type Action = ConfirmationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.0.clone();
        match action {
            ConfirmationAction::Push(confirmation) => {
                queue.push(confirmation);
            }
            ConfirmationAction::Dismiss(id) => {
                if !queue.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(Self(queue))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Catalog>,
    pub criteria: UseStateHandle<FilterCriteria>,
    pub session: UseStateHandle<SessionState>,
    pub detail: UseReducerHandle<DetailMachine>,
    /// Vehicle whose purchase form is open
    pub purchase_target: UseStateHandle<Option<u32>>,
    pub confirmations: UseReducerHandle<Confirmations>,
    pub menu_open: UseStateHandle<bool>,
    pub back_to_top: UseStateHandle<bool>,
}

/// All page state, seeded from the startup report on the first render so the
/// catalog and stored preferences are in place before anything paints.
#[hook]
pub fn use_app_state() -> AppState {
    let boot = use_memo((), |()| startup_report());
    let catalog_boot = boot.clone();
    AppState {
        catalog: use_state(move || catalog_boot.catalog.clone()),
        criteria: use_state(FilterCriteria::default),
        session: use_state(move || boot.session),
        detail: use_reducer(DetailMachine::default),
        purchase_target: use_state_eq(|| None::<u32>),
        confirmations: use_reducer(Confirmations::default),
        menu_open: use_state(|| false),
        back_to_top: use_state_eq(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn session(&self) -> SessionState {
        *self.session
    }

    /// Inventory grid for the current criteria and language.
    #[must_use]
    pub fn listing(&self) -> ListingView {
        project_catalog(
            &self.catalog,
            &self.criteria,
            &self.session,
            LocalizationTable::builtin(),
        )
    }

    /// Detail content for the open record, if any.
    #[must_use]
    pub fn detail_view(&self) -> Option<DetailView> {
        let id = self.detail.0.open_id()?;
        let vehicle = self.catalog.get(id)?;
        Some(project_detail(
            vehicle,
            &self.session,
            LocalizationTable::builtin(),
        ))
    }

    /// Title of the vehicle the purchase form is for.
    #[must_use]
    pub fn purchase_title(&self) -> Option<(u32, String)> {
        let id = (*self.purchase_target)?;
        self.catalog.get(id).map(|vehicle| (id, vehicle.title()))
    }

    /// Any dialog that should freeze the page behind it.
    #[must_use]
    pub fn dialog_open(&self) -> bool {
        self.detail.0.is_open() || self.purchase_target.is_some()
    }
}
