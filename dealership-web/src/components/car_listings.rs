use crate::components::car_card::CarCard;
use dealership_core::ListingView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub listing: ListingView,
    pub on_select: Callback<u32>,
}

#[function_component(CarListings)]
pub fn car_listings(p: &Props) -> Html {
    let body = match &p.listing {
        ListingView::Empty { message } => html! {
            <p class="no-results">{ message.clone() }</p>
        },
        ListingView::Cards(cards) => cards
            .iter()
            .map(|card| {
                html! {
                    <CarCard key={card.id} card={card.clone()} on_select={p.on_select.clone()} />
                }
            })
            .collect::<Html>(),
    };
    html! {
        <div id="car-listings" class="car-grid" aria-live="polite">
            { body }
        </div>
    }
}
