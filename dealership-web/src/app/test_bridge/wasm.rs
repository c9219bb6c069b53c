use super::BridgeSnapshot;
use crate::app::state::AppState;
use crate::app::view::AppHandlers;
use crate::dom;
use dealership_core::{ConditionFilter, DetailEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

type Latest = Rc<RefCell<AppState>>;

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _search: Closure<dyn FnMut(JsValue)>,
    _condition: Closure<dyn FnMut(JsValue)>,
    _select: Closure<dyn FnMut(JsValue)>,
    _close: Closure<dyn FnMut()>,
    _toggle_language: Closure<dyn FnMut()>,
    _toggle_theme: Closure<dyn FnMut()>,
}

impl BridgeBindings {
    fn keep(&self) {
        let _ = (
            &self._state,
            &self._search,
            &self._condition,
            &self._select,
            &self._close,
            &self._toggle_language,
            &self._toggle_theme,
        );
    }
}

fn test_mode_enabled() -> bool {
    dom::window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| search.contains("test=1"))
}

fn handlers(latest: &Latest) -> AppHandlers {
    AppHandlers::new(&latest.borrow())
}

fn build_bridge(latest: &Latest) -> BridgeBindings {
    let state_latest = latest.clone();
    let state_fn = Closure::wrap(Box::new(move || {
        let snapshot = BridgeSnapshot::capture(&state_latest.borrow());
        serde_wasm_bindgen::to_value(&snapshot).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let search_latest = latest.clone();
    let search = Closure::wrap(Box::new(move |value: JsValue| {
        let term = value.as_string().unwrap_or_default();
        handlers(&search_latest).search.emit(term);
    }) as Box<dyn FnMut(JsValue)>);

    let condition_latest = latest.clone();
    let condition = Closure::wrap(Box::new(move |value: JsValue| {
        let raw = value.as_string().unwrap_or_default();
        handlers(&condition_latest)
            .condition
            .emit(ConditionFilter::parse(&raw));
    }) as Box<dyn FnMut(JsValue)>);

    let select_latest = latest.clone();
    let select = Closure::wrap(Box::new(move |value: JsValue| {
        if let Some(id) = value.as_f64().and_then(|raw| u32::try_from(raw as i64).ok()) {
            handlers(&select_latest).select.emit(id);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let close_latest = latest.clone();
    let close = Closure::wrap(Box::new(move || {
        handlers(&close_latest)
            .detail_event
            .emit(DetailEvent::CloseButton);
    }) as Box<dyn FnMut()>);

    let language_latest = latest.clone();
    let toggle_language = Closure::wrap(Box::new(move || {
        handlers(&language_latest).toggle_language.emit(());
    }) as Box<dyn FnMut()>);

    let theme_latest = latest.clone();
    let toggle_theme = Closure::wrap(Box::new(move || {
        handlers(&theme_latest).toggle_theme.emit(());
    }) as Box<dyn FnMut()>);

    BridgeBindings {
        _state: state_fn,
        _search: search,
        _condition: condition,
        _select: select,
        _close: close,
        _toggle_language: toggle_language,
        _toggle_theme: toggle_theme,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let entries: [(&str, &JsValue); 7] = [
        ("state", bindings._state.as_ref()),
        ("search", bindings._search.as_ref()),
        ("condition", bindings._condition.as_ref()),
        ("select", bindings._select.as_ref()),
        ("close", bindings._close.as_ref()),
        ("toggleLanguage", bindings._toggle_language.as_ref()),
        ("toggleTheme", bindings._toggle_theme.as_ref()),
    ];
    for (name, function) in entries {
        if let Err(err) = js_sys::Reflect::set(&bridge, &JsValue::from_str(name), function) {
            dom::console_error(&dom::js_error_message(&err));
        }
    }
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__dealershipTest"), &bridge);
    dom::console_log("Test bridge attached");
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let latest = use_mut_ref(|| app_state.clone());
    *latest.borrow_mut() = app_state.clone();

    use_effect_with((), move |()| {
        if test_mode_enabled() {
            let bindings = build_bridge(&latest);
            attach_bridge(&bindings);
            bindings.keep();
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        || {}
    });
}
