use yew::prelude::*;

pub mod bootstrap;
pub mod page;
pub mod state;
pub mod test_bridge;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();

    page::use_document_session(app_state.session());
    page::use_scroll_lock(app_state.dialog_open());
    page::use_escape_closes_dialogs(&app_state);
    page::use_back_to_top_tracking(&app_state);
    test_bridge::use_test_bridge(&app_state);

    view::render_app(&app_state)
}
