#[cfg(not(target_arch = "wasm32"))]
mod stub;
#[cfg(target_arch = "wasm32")]
mod wasm;

use crate::app::state::AppState;
use dealership_core::{ConditionFilter, DetailState};
use serde::Serialize;
use yew::prelude::*;

/// What `__dealershipTest.state()` reports to browser automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeSnapshot {
    pub lang: &'static str,
    pub theme: &'static str,
    pub search: String,
    pub condition: &'static str,
    pub visible_ids: Vec<u32>,
    pub detail_open: Option<u32>,
    pub confirmations: usize,
}

impl BridgeSnapshot {
    #[must_use]
    pub fn capture(state: &AppState) -> Self {
        let session = state.session();
        Self::from_parts(
            session,
            &state.criteria.search,
            state.criteria.condition,
            state.listing().card_ids(),
            state.detail.0,
            state.confirmations.0.len(),
        )
    }

    fn from_parts(
        session: dealership_core::SessionState,
        search: &str,
        condition: ConditionFilter,
        visible_ids: Vec<u32>,
        detail: DetailState,
        confirmations: usize,
    ) -> Self {
        Self {
            lang: session.lang.code(),
            theme: session.theme.as_str(),
            search: search.to_string(),
            condition: condition.as_str(),
            visible_ids,
            detail_open: detail.open_id(),
            confirmations,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    stub::use_test_bridge(app_state);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    wasm::use_test_bridge(app_state);
}
