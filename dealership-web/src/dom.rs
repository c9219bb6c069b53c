use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement, ScrollBehavior,
    Storage, SubmitEvent, Window,
};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log a message to the browser console.
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from(message));
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Show a blocking notification.
pub fn alert(message: &str) {
    if let Some(win) = window()
        && let Err(err) = win.alert_with_message(message)
    {
        console_error(&js_error_message(&err));
    }
}

/// Run `callback` once after `delay_ms`.
///
/// # Errors
/// Returns an error if there is no window or the timer cannot be scheduled.
pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let closure = Closure::once(callback);
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    let handle = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();
    Ok(handle)
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Calendar year from the browser clock.
#[must_use]
pub fn current_year() -> i32 {
    let year = js_sys::Date::new_0().get_full_year();
    i32::try_from(year).unwrap_or(i32::MAX)
}

/// Set an attribute on `<html>`.
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|doc| doc.document_element())
        && let Err(err) = root.set_attribute(name, value)
    {
        console_error(&js_error_message(&err));
    }
}

/// Freeze page scrolling behind an open dialog.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    if let Err(err) = body.style().set_property("overflow", value) {
        console_error(&js_error_message(&err));
    }
}

/// Current vertical scroll offset in CSS pixels.
#[must_use]
pub fn scroll_offset() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
        log::warn!("No section with id '{id}'");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Focus the element with `id`, if it exists and is focusable.
pub fn focus_element(id: &str) {
    if let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el: Element| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Values of a submitted `<form>`, keyed by control `name`.
pub struct SubmittedForm {
    form: HtmlFormElement,
    data: FormData,
}

impl SubmittedForm {
    #[must_use]
    pub fn from_event(event: &SubmitEvent) -> Option<Self> {
        let form = event.target()?.dyn_into::<HtmlFormElement>().ok()?;
        let data = FormData::new_with_form(&form).ok()?;
        Some(Self { form, data })
    }

    /// The control's text value, empty when absent.
    #[must_use]
    pub fn value(&self, name: &str) -> String {
        self.data.get(name).as_string().unwrap_or_default()
    }

    pub fn reset(&self) {
        self.form.reset();
    }
}

/// A DOM event listener that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Listen for `kind` events on `target`.
    #[must_use]
    pub fn attach(
        target: EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(err) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            console_error(&js_error_message(&err));
            return None;
        }
        Some(Self {
            target,
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
