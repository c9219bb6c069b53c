use crate::i18n::t;
use dealership_core::{Key, Lang};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(p: &Props) -> Html {
    let browse = {
        let cb = p.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit("inventory");
        })
    };
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{ t(p.lang, Key::HeroTitle) }</h1>
                <p>{ t(p.lang, Key::HeroSubtitle) }</p>
                <a href="#inventory" class="cta-button" onclick={browse}>{ t(p.lang, Key::HeroCta) }</a>
            </div>
        </section>
    }
}
