use crate::dom::SubmittedForm;
use crate::i18n::t;
use dealership_core::{FieldId, Key, Lang, SellerListingInput};
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// `name` attributes of the seller form controls.
pub mod names {
    pub const SELLER_NAME: &str = "sellerName";
    pub const SELLER_EMAIL: &str = "sellerEmail";
    pub const SELLER_PHONE: &str = "sellerPhone";
    pub const SELLER_LOCATION: &str = "sellerLocation";
    pub const MAKE: &str = "carMake";
    pub const MODEL: &str = "carModel";
    pub const YEAR: &str = "carYear";
    pub const MILEAGE: &str = "carMileage";
    pub const PRICE: &str = "carPrice";
    pub const CONDITION: &str = "carCondition";
    pub const COLOR: &str = "carColor";
    pub const TRANSMISSION: &str = "carTransmission";
    pub const DESCRIPTION: &str = "carDescription";
    pub const FEATURES: &str = "carFeatures";
    pub const IMAGE: &str = "carImage";
}

fn read_input(form: &SubmittedForm) -> SellerListingInput {
    SellerListingInput {
        seller_name: form.value(names::SELLER_NAME),
        seller_email: form.value(names::SELLER_EMAIL),
        seller_phone: form.value(names::SELLER_PHONE),
        seller_location: form.value(names::SELLER_LOCATION),
        make: form.value(names::MAKE),
        model: form.value(names::MODEL),
        year: form.value(names::YEAR),
        mileage: form.value(names::MILEAGE),
        price: form.value(names::PRICE),
        condition: form.value(names::CONDITION),
        color: form.value(names::COLOR),
        transmission: form.value(names::TRANSMISSION),
        description: form.value(names::DESCRIPTION),
        features: form.value(names::FEATURES),
        image: form.value(names::IMAGE),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    /// Returns true when the listing was accepted and the form should reset
    pub on_submit: Callback<SellerListingInput, bool>,
}

fn text_field(lang: Lang, field: FieldId, name: &'static str, kind: &'static str, required: bool) -> Html {
    let id = format!("sell-{name}");
    html! {
        <div class="form-group">
            <label for={id.clone()}>{ t(lang, field.label_key()) }</label>
            <input id={id} {name} type={kind} {required} />
        </div>
    }
}

#[function_component(SellForm)]
pub fn sell_form(p: &Props) -> Html {
    let preview = use_state(String::new);
    let lang = p.lang;

    let on_image_input = {
        let preview = preview.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                preview.set(input.value().trim().to_string());
            }
        })
    };
    let onsubmit = {
        let cb = p.on_submit.clone();
        let preview = preview.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = SubmittedForm::from_event(&e) else {
                return;
            };
            if cb.emit(read_input(&form)) {
                form.reset();
                preview.set(String::new());
            }
        })
    };
    let conditions = [("new", Key::ConditionNew), ("used", Key::ConditionUsed)]
        .into_iter()
        .map(|(value, key)| html! { <option {value}>{ t(lang, key) }</option> });

    html! {
        <section id="sell" class="sell-section">
            <h2>{ t(lang, Key::SellTitle) }</h2>
            <p class="section-subtitle">{ t(lang, Key::SellSubtitle) }</p>
            <form id="sell-car-form" class="sell-form" novalidate=true {onsubmit}>
                <div class="form-row">
                    { text_field(lang, FieldId::SellerName, names::SELLER_NAME, "text", true) }
                    { text_field(lang, FieldId::SellerEmail, names::SELLER_EMAIL, "email", true) }
                </div>
                <div class="form-row">
                    { text_field(lang, FieldId::SellerPhone, names::SELLER_PHONE, "tel", false) }
                    { text_field(lang, FieldId::SellerLocation, names::SELLER_LOCATION, "text", false) }
                </div>
                <div class="form-row">
                    { text_field(lang, FieldId::Make, names::MAKE, "text", true) }
                    { text_field(lang, FieldId::Model, names::MODEL, "text", true) }
                </div>
                <div class="form-row">
                    { text_field(lang, FieldId::Year, names::YEAR, "number", true) }
                    { text_field(lang, FieldId::Mileage, names::MILEAGE, "number", true) }
                    { text_field(lang, FieldId::Price, names::PRICE, "number", true) }
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="sell-carCondition">{ t(lang, FieldId::Condition.label_key()) }</label>
                        <select id="sell-carCondition" name={names::CONDITION} required=true>
                            <option value="">{ t(lang, Key::SellConditionPrompt) }</option>
                            { for conditions }
                        </select>
                    </div>
                    { text_field(lang, FieldId::Color, names::COLOR, "text", false) }
                    { text_field(lang, FieldId::Transmission, names::TRANSMISSION, "text", false) }
                </div>
                <div class="form-group">
                    <label for="sell-carDescription">{ t(lang, FieldId::Description.label_key()) }</label>
                    <textarea id="sell-carDescription" name={names::DESCRIPTION} rows="4"></textarea>
                </div>
                <div class="form-group">
                    <label for="sell-carFeatures">{ t(lang, FieldId::Features.label_key()) }</label>
                    <input
                        id="sell-carFeatures"
                        name={names::FEATURES}
                        type="text"
                        placeholder={t(lang, Key::PlaceholderFeatures)}
                    />
                </div>
                <div class="form-group">
                    <label for="sell-carImage">{ t(lang, FieldId::Image.label_key()) }</label>
                    <input
                        id="sell-carImage"
                        name={names::IMAGE}
                        type="url"
                        placeholder={t(lang, Key::PlaceholderImage)}
                        oninput={on_image_input}
                    />
                    if !preview.is_empty() {
                        <img
                            id="image-preview"
                            class="image-preview"
                            src={(*preview).clone()}
                            alt={t(lang, Key::SellImagePreview)}
                        />
                    }
                </div>
                <button type="submit" class="submit-button">{ t(lang, Key::SellSubmit) }</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_every_named_control() {
        let props = Props {
            lang: Lang::En,
            on_submit: Callback::from(|_: SellerListingInput| false),
        };
        let html = block_on(LocalServerRenderer::<SellForm>::with_props(props).render());
        for name in [
            names::SELLER_NAME,
            names::SELLER_EMAIL,
            names::MAKE,
            names::MODEL,
            names::YEAR,
            names::MILEAGE,
            names::PRICE,
            names::CONDITION,
            names::FEATURES,
            names::IMAGE,
        ] {
            assert!(html.contains(&format!("name=\"{name}\"")), "missing {name}");
        }
        assert!(!html.contains("image-preview"));
    }
}
