use dealership_core::ConfirmationView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<ConfirmationView>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ConfirmationOverlay)]
pub fn confirmation_overlay(p: &Props) -> Html {
    p.items
        .iter()
        .map(|item| {
            let id = item.id;
            let onclick = {
                let cb = p.on_dismiss.clone();
                Callback::from(move |_| cb.emit(id))
            };
            let paragraphs = item.paragraphs.iter().map(|text| html! { <p>{ text.clone() }</p> });
            html! {
                <div key={id} class="success-modal" role="alertdialog" aria-live="assertive" data-confirmation-id={id.to_string()}>
                    <div class="success-modal-content">
                        <div class="success-icon" aria-hidden="true">{ "✓" }</div>
                        <h3>{ item.title.clone() }</h3>
                        { for paragraphs }
                        <button type="button" class="success-close-btn" {onclick}>
                            { item.dismiss_label.clone() }
                        </button>
                    </div>
                </div>
            }
        })
        .collect()
}
