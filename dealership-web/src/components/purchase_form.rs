use crate::components::modal::Modal;
use crate::dom::SubmittedForm;
use crate::i18n::t;
use dealership_core::{FieldId, Key, Lang, PaymentMethod, PurchaseInput};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub vehicle_id: u32,
    pub vehicle_title: AttrValue,
    /// Returns true when the request was accepted
    pub on_submit: Callback<PurchaseInput, bool>,
    pub on_cancel: Callback<()>,
}

#[function_component(PurchaseForm)]
pub fn purchase_form(p: &Props) -> Html {
    let lang = p.lang;
    let onsubmit = {
        let cb = p.on_submit.clone();
        let vehicle_id = p.vehicle_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = SubmittedForm::from_event(&e) else {
                return;
            };
            let input = PurchaseInput {
                vehicle_id,
                name: form.value("purchaseName"),
                email: form.value("purchaseEmail"),
                phone: form.value("purchasePhone"),
                payment_method: form.value("purchasePayment"),
                message: form.value("purchaseMessage"),
            };
            if cb.emit(input) {
                form.reset();
            }
        })
    };
    let cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let payments = PaymentMethod::ALL.iter().map(|method| {
        html! {
            <option value={method.as_str()} selected={*method == PaymentMethod::default()}>
                { t(lang, method.label_key()) }
            </option>
        }
    });
    let label = |field: FieldId| t(lang, field.label_key());

    html! {
        <Modal
            id="purchase-modal"
            title={t(lang, Key::PurchaseTitle)}
            close_label={t(lang, Key::PurchaseCancel)}
            on_close={p.on_cancel.clone()}
            on_backdrop={p.on_cancel.clone()}
        >
            <p class="purchase-vehicle">{ p.vehicle_title.clone() }</p>
            <form id="purchase-form" class="purchase-form" novalidate=true {onsubmit}>
                <div class="form-group">
                    <label for="purchase-name">{ label(FieldId::Name) }</label>
                    <input id="purchase-name" name="purchaseName" type="text" required=true />
                </div>
                <div class="form-group">
                    <label for="purchase-email">{ label(FieldId::Email) }</label>
                    <input id="purchase-email" name="purchaseEmail" type="email" required=true />
                </div>
                <div class="form-group">
                    <label for="purchase-phone">{ label(FieldId::Phone) }</label>
                    <input id="purchase-phone" name="purchasePhone" type="tel" required=true />
                </div>
                <div class="form-group">
                    <label for="purchase-payment">{ label(FieldId::PaymentMethod) }</label>
                    <select id="purchase-payment" name="purchasePayment">{ for payments }</select>
                </div>
                <div class="form-group">
                    <label for="purchase-message">{ label(FieldId::Message) }</label>
                    <textarea id="purchase-message" name="purchaseMessage" rows="3"></textarea>
                </div>
                <div class="form-actions">
                    <button type="button" class="secondary-button" onclick={cancel}>
                        { t(lang, Key::PurchaseCancel) }
                    </button>
                    <button type="submit" class="submit-button">{ t(lang, Key::PurchaseSubmit) }</button>
                </div>
            </form>
        </Modal>
    }
}
