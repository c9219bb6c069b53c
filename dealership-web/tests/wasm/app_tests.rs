#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, InputEvent,
    KeyboardEvent, KeyboardEventInit,
};
use yew::{AppHandle, Renderer};

use dealership_core::AUTO_DISMISS_MS;
use dealership_web::app::App;
use dealership_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() -> AppHandle<App> {
    let app = Renderer::<App>::with_root(ensure_app_root()).render();
    // Let the first render and its effects run.
    settle().await;
    app
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

async fn settle() {
    sleep(50).await;
}

fn card_count() -> u32 {
    dom::document()
        .expect("document")
        .query_selector_all("#car-listings .car-card")
        .expect("query cards")
        .length()
}

fn exists(selector: &str) -> bool {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .is_some()
}

fn html_element(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("cast to element")
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

async fn open_first_detail() {
    html_element("#car-listings .car-card").click();
    settle().await;
    assert!(exists("#car-modal"));
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    let app = render_app().await;
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    app.destroy();
}

#[wasm_bindgen_test]
async fn search_narrows_the_inventory() {
    let app = render_app().await;
    assert!(card_count() > 1);
    let input: HtmlInputElement = html_element("#search-input")
        .dyn_into()
        .expect("cast to input");
    input.set_value("civic");
    input
        .dispatch_event(&InputEvent::new("input").expect("input event"))
        .expect("dispatch input");
    settle().await;
    assert_eq!(card_count(), 1);
    app.destroy();
}

#[wasm_bindgen_test]
async fn language_toggle_updates_document_lang() {
    let app = render_app().await;
    let doc = dom::document().expect("document");
    let toggle = html_element("#language-toggle");
    toggle.click();
    settle().await;
    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("es".into()));
    toggle.click();
    settle().await;
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
    app.destroy();
}

#[wasm_bindgen_test]
async fn selecting_a_card_opens_the_detail_view() {
    let app = render_app().await;
    open_first_detail().await;
    html_element("#car-modal .close-modal").click();
    settle().await;
    assert!(!exists("#car-modal"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_closes_the_detail_view() {
    let app = render_app().await;
    open_first_detail().await;
    press_escape();
    settle().await;
    assert!(!exists("#car-modal"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_the_detail_view() {
    let app = render_app().await;
    open_first_detail().await;

    // Clicks inside the content stay open.
    html_element("#car-modal .modal-content").click();
    settle().await;
    assert!(exists("#car-modal"));

    html_element("#car-modal").click();
    settle().await;
    assert!(!exists("#car-modal"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn escape_closes_the_purchase_form() {
    let app = render_app().await;
    open_first_detail().await;
    html_element("#purchase-button").click();
    settle().await;
    assert!(exists("#purchase-modal"));
    assert!(!exists("#car-modal"));

    press_escape();
    settle().await;
    assert!(!exists("#purchase-modal"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn contact_confirmation_dismisses_itself() {
    let app = render_app().await;
    for (selector, value) in [
        ("#contact-name", "Lee Park"),
        ("#contact-email", "lee@example.com"),
        ("#contact-subject", "Test drive"),
    ] {
        let input: HtmlInputElement = html_element(selector).dyn_into().expect("cast to input");
        input.set_value(value);
    }
    let message: HtmlTextAreaElement = html_element("#contact-message")
        .dyn_into()
        .expect("cast to textarea");
    message.set_value("Is the Civic still available?");

    let form: HtmlFormElement = html_element("#contact-form")
        .dyn_into()
        .expect("cast to form");
    form.request_submit().expect("submit contact form");
    settle().await;
    assert!(exists(".success-modal"));

    let ms = i32::try_from(AUTO_DISMISS_MS).expect("dismiss delay fits i32");
    sleep(ms + 250).await;
    assert!(!exists(".success-modal"));
    app.destroy();
}
