mod handlers;

pub use handlers::{AppHandlers, submit_contact, submit_listing, submit_purchase};

use crate::app::state::AppState;
use crate::components::back_to_top::BackToTop;
use crate::components::car_detail::CarDetail;
use crate::components::car_listings::CarListings;
use crate::components::confirmation_overlay::ConfirmationOverlay;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::purchase_form::PurchaseForm;
use crate::components::search_bar::SearchBar;
use crate::components::sell_form::SellForm;
use crate::i18n::t;
use dealership_core::{ConfirmationView, Key, LocalizationTable};
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let session = state.session();
    let lang = session.lang;

    let confirmations: Vec<ConfirmationView> = state
        .confirmations
        .0
        .items()
        .iter()
        .map(|item| item.view(lang, LocalizationTable::builtin()))
        .collect();

    let detail = state.detail_view().map(|view| {
        html! {
            <CarDetail
                {view}
                on_event={handlers.detail_event.clone()}
                on_purchase={handlers.open_purchase.clone()}
                on_contact={handlers.contact_about.clone()}
            />
        }
    });

    let purchase = state.purchase_title().map(|(vehicle_id, title)| {
        html! {
            <PurchaseForm
                {lang}
                {vehicle_id}
                vehicle_title={title}
                on_submit={handlers.submit_purchase.clone()}
                on_cancel={handlers.cancel_purchase.clone()}
            />
        }
    });

    html! {
        <>
            <Header
                {lang}
                theme={session.theme}
                menu_open={*state.menu_open}
                on_toggle_menu={handlers.toggle_menu.clone()}
                on_toggle_theme={handlers.toggle_theme.clone()}
                on_toggle_language={handlers.toggle_language.clone()}
                on_navigate={handlers.navigate.clone()}
            />
            <main id="main">
                <Hero {lang} on_navigate={handlers.navigate.clone()} />
                <section id="inventory" class="inventory-section">
                    <h2>{ t(lang, Key::InventoryTitle) }</h2>
                    <SearchBar
                        {lang}
                        search={AttrValue::from(state.criteria.search.clone())}
                        condition={state.criteria.condition}
                        on_search={handlers.search.clone()}
                        on_condition={handlers.condition.clone()}
                    />
                    <CarListings listing={state.listing()} on_select={handlers.select.clone()} />
                </section>
                <SellForm {lang} on_submit={handlers.submit_listing.clone()} />
                <ContactForm {lang} on_submit={handlers.submit_contact.clone()} />
            </main>
            <Footer {lang} />
            { for detail }
            { for purchase }
            <ConfirmationOverlay items={confirmations} on_dismiss={handlers.dismiss.clone()} />
            <BackToTop
                {lang}
                visible={*state.back_to_top}
                on_click={handlers.back_to_top.clone()}
            />
        </>
    }
}
