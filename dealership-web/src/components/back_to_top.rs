use crate::i18n::t;
use dealership_core::{Key, Lang};
use yew::prelude::*;

/// Scroll offset past which the button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

#[must_use]
pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD_PX
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub visible: bool,
    pub on_click: Callback<()>,
}

#[function_component(BackToTop)]
pub fn back_to_top(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button
            id="back-to-top"
            type="button"
            class={classes!("back-to-top", p.visible.then_some("show"))}
            aria-label={t(p.lang, Key::BackToTop)}
            {onclick}
        >
            { "↑" }
        </button>
    }
}
