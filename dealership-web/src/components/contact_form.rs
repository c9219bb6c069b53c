use crate::dom::SubmittedForm;
use crate::i18n::t;
use dealership_core::{ContactInput, FieldId, Key, Lang};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    /// Returns true when the message was accepted and the form should reset
    pub on_submit: Callback<ContactInput, bool>,
}

#[function_component(ContactForm)]
pub fn contact_form(p: &Props) -> Html {
    let lang = p.lang;
    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = SubmittedForm::from_event(&e) else {
                return;
            };
            let input = ContactInput {
                name: form.value("contactName"),
                email: form.value("contactEmail"),
                phone: form.value("contactPhone"),
                subject: form.value("contactSubject"),
                message: form.value("contactMessage"),
            };
            if cb.emit(input) {
                form.reset();
            }
        })
    };
    let label = |field: FieldId| t(lang, field.label_key());

    html! {
        <section id="contact" class="contact-section">
            <h2>{ t(lang, Key::ContactTitle) }</h2>
            <p class="section-subtitle">{ t(lang, Key::ContactSubtitle) }</p>
            <form id="contact-form" class="contact-form" novalidate=true {onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="contact-name">{ label(FieldId::Name) }</label>
                        <input id="contact-name" name="contactName" type="text" required=true />
                    </div>
                    <div class="form-group">
                        <label for="contact-email">{ label(FieldId::Email) }</label>
                        <input id="contact-email" name="contactEmail" type="email" required=true />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="contact-phone">{ label(FieldId::Phone) }</label>
                        <input id="contact-phone" name="contactPhone" type="tel" />
                    </div>
                    <div class="form-group">
                        <label for="contact-subject">{ label(FieldId::Subject) }</label>
                        <input id="contact-subject" name="contactSubject" type="text" required=true />
                    </div>
                </div>
                <div class="form-group">
                    <label for="contact-message">{ label(FieldId::Message) }</label>
                    <textarea
                        id="contact-message"
                        name="contactMessage"
                        rows="5"
                        required=true
                        placeholder={t(lang, Key::PlaceholderMessage)}
                    ></textarea>
                </div>
                <button type="submit" class="submit-button">{ t(lang, Key::ContactSubmit) }</button>
            </form>
        </section>
    }
}
