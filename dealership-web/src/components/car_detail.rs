use crate::components::modal::Modal;
use dealership_core::{DetailEvent, DetailView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: DetailView,
    pub on_event: Callback<DetailEvent>,
    /// Hand off to the purchase form for this vehicle
    pub on_purchase: Callback<u32>,
    /// Hand off to the contact form
    pub on_contact: Callback<u32>,
}

#[function_component(CarDetail)]
pub fn car_detail(p: &Props) -> Html {
    let view = &p.view;
    let on_close = {
        let cb = p.on_event.clone();
        Callback::from(move |()| cb.emit(DetailEvent::CloseButton))
    };
    let on_backdrop = {
        let cb = p.on_event.clone();
        Callback::from(move |()| cb.emit(DetailEvent::Backdrop))
    };
    let on_purchase = {
        let cb = p.on_purchase.clone();
        let id = view.id;
        Callback::from(move |_| cb.emit(id))
    };
    let on_contact = {
        let cb = p.on_contact.clone();
        let id = view.id;
        Callback::from(move |_| cb.emit(id))
    };
    let specs = view.specs.iter().map(|spec| {
        html! {
            <div class="spec-item" style={format!("--item-index: {}", spec.ordinal)}>
                <span class="spec-label">{ spec.label.clone() }</span>
                <span class="spec-value">{ spec.value.clone() }</span>
            </div>
        }
    });
    let features = view.features.iter().map(|feature| {
        html! {
            <li style={format!("--feature-index: {}", feature.ordinal)}>{ feature.text.clone() }</li>
        }
    });

    html! {
        <Modal
            id="car-modal"
            title={view.title.clone()}
            close_label={view.close_label.clone()}
            {on_close}
            {on_backdrop}
            class={classes!("car-detail-modal")}
        >
            <img id="modal-car-image" src={view.image.clone()} alt={view.alt.clone()} class="modal-image" />
            <div class="modal-price-row">
                <span id="modal-car-price" class="car-price">{ view.price.clone() }</span>
                <span id="modal-condition-badge" class={classes!("condition-badge", view.badge.class)}>
                    { view.badge.label.clone() }
                </span>
            </div>
            <section class="modal-specs">
                <h3>{ view.specs_heading.clone() }</h3>
                <div class="spec-grid">{ for specs }</div>
            </section>
            <section class="modal-features">
                <h3>{ view.features_heading.clone() }</h3>
                <ul id="modal-features">{ for features }</ul>
            </section>
            <section class="modal-description">
                <h3>{ view.description_heading.clone() }</h3>
                <p id="modal-car-description">{ view.description.clone() }</p>
            </section>
            <div class="modal-actions">
                <button type="button" id="purchase-button" class="cta-button" onclick={on_purchase}>
                    { view.purchase_label.clone() }
                </button>
                <button type="button" id="contact-button" class="secondary-button" onclick={on_contact}>
                    { view.contact_label.clone() }
                </button>
            </div>
        </Modal>
    }
}
