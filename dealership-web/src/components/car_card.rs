use dealership_core::CardView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: CardView,
    pub on_select: Callback<u32>,
}

#[function_component(CarCard)]
pub fn car_card(p: &Props) -> Html {
    let id = p.card.id;
    let onclick = {
        let cb = p.on_select.clone();
        Callback::from(move |_| cb.emit(id))
    };
    let onkeydown = {
        let cb = p.on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                cb.emit(id);
            }
        })
    };
    let specs = p.card.specs.iter().map(|spec| {
        html! {
            <div class="car-detail" style={format!("--item-index: {}", spec.ordinal)}>
                <span>{ spec.label.clone() }</span>
                <span>{ spec.value.clone() }</span>
            </div>
        }
    });

    html! {
        <div
            class="car-card"
            data-car-id={id.to_string()}
            role="button"
            tabindex="0"
            style={format!("--item-index: {}", p.card.ordinal)}
            {onclick}
            {onkeydown}
        >
            <img src={p.card.image.clone()} alt={p.card.alt.clone()} class="car-image" loading="lazy" />
            <div class="car-info">
                <h3 class="car-title">{ p.card.title.clone() }</h3>
                <div class="car-details">
                    { for specs }
                </div>
                <div class="car-price">{ p.card.price.clone() }</div>
                <span class={classes!("condition-badge", p.card.badge.class)}>
                    { p.card.badge.label.clone() }
                </span>
            </div>
        </div>
    }
}
