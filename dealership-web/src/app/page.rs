//! Page-wide effects: document attributes, scroll lock and global listeners
use crate::app::state::AppState;
use dealership_core::SessionState;
use yew::prelude::*;

/// Key names that close an open dialog.
#[must_use]
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Mirror the session on `<html lang>` and `<html data-theme>`.
#[hook]
pub fn use_document_session(session: SessionState) {
    use_effect_with(session, |session| {
        crate::i18n::apply_document_lang(session.lang);
        #[cfg(target_arch = "wasm32")]
        crate::dom::set_root_attribute("data-theme", session.theme.as_str());
        || {}
    });
}

/// Freeze the page while the detail or purchase dialog is open.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        #[cfg(target_arch = "wasm32")]
        crate::dom::set_body_scroll_locked(*locked);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = locked;
        || {}
    });
}

/// Escape anywhere on the page closes the open dialog.
#[hook]
pub fn use_escape_closes_dialogs(state: &AppState) {
    let detail = state.detail.dispatcher();
    let purchase = state.purchase_target.clone();
    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        let listener = {
            use wasm_bindgen::JsCast;
            crate::dom::document().and_then(|doc| {
                crate::dom::EventListener::attach(doc.into(), "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<web_sys::KeyboardEvent>()
                        .is_some_and(|key| is_escape_key(&key.key()));
                    if escape {
                        detail.dispatch(dealership_core::DetailEvent::Escape);
                        purchase.set(None);
                    }
                })
            })
        };
        #[cfg(not(target_arch = "wasm32"))]
        let listener = {
            let _ = (detail, purchase);
            None::<()>
        };
        move || drop(listener)
    });
}

/// Track the scroll offset for the back-to-top button.
#[hook]
pub fn use_back_to_top_tracking(state: &AppState) {
    let visible = state.back_to_top.clone();
    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        let listener = crate::dom::window().and_then(|win| {
            crate::dom::EventListener::attach(win.into(), "scroll", move |_| {
                visible.set(crate::components::back_to_top::back_to_top_visible(
                    crate::dom::scroll_offset(),
                ));
            })
        });
        #[cfg(not(target_arch = "wasm32"))]
        let listener = {
            let _ = visible;
            None::<()>
        };
        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_key_names() {
        assert!(is_escape_key("Escape"));
        assert!(is_escape_key("Esc"));
        assert!(!is_escape_key("Enter"));
        assert!(!is_escape_key("escape"));
    }
}
