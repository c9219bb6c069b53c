use crate::i18n::t;
use dealership_core::{Key, Lang};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    html! {
        <footer role="contentinfo">
            <p class="footer-brand">{ t(p.lang, Key::BrandName) }</p>
            <p class="footer-tagline">{ t(p.lang, Key::FooterTagline) }</p>
            <p class="footer-copyright">{ t(p.lang, Key::FooterCopyright) }</p>
        </footer>
    }
}
