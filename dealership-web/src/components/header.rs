use crate::i18n::t;
use dealership_core::{Key, Lang, Theme};
use yew::prelude::*;

/// In-page sections reachable from the navigation bar.
pub const NAV_SECTIONS: [(&str, Key); 4] = [
    ("home", Key::NavHome),
    ("inventory", Key::NavInventory),
    ("sell", Key::NavSell),
    ("contact", Key::NavContact),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub theme: Theme,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_language: Callback<()>,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_menu = {
        let cb = p.on_toggle_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_language = {
        let cb = p.on_toggle_language.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let theme_icon = match p.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };
    let links = NAV_SECTIONS.iter().map(|&(section, key)| {
        let cb = p.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(section);
        });
        html! {
            <li><a href={format!("#{section}")} class="nav-link" {onclick}>{ t(p.lang, key) }</a></li>
        }
    });
    let menu_class = classes!("nav-links", p.menu_open.then_some("active"));

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only skip-link">{ t(p.lang, Key::SkipToContent) }</a>
            <nav class="navbar" aria-label={t(p.lang, Key::BrandName)}>
                <a href="#home" class="logo">{ t(p.lang, Key::BrandName) }</a>
                <ul id="nav-links" class={menu_class}>
                    { for links }
                </ul>
                <div class="nav-actions">
                    <button
                        id="language-toggle"
                        type="button"
                        aria-label={t(p.lang, Key::NavToggleLanguage)}
                        onclick={toggle_language}
                    >
                        { p.lang.toggled().code().to_ascii_uppercase() }
                    </button>
                    <button
                        id="theme-toggle"
                        type="button"
                        aria-label={t(p.lang, Key::NavToggleTheme)}
                        onclick={toggle_theme}
                    >
                        { theme_icon }
                    </button>
                    <button
                        id="nav-toggle"
                        type="button"
                        class="hamburger"
                        aria-controls="nav-links"
                        aria-expanded={p.menu_open.to_string()}
                        aria-label={t(p.lang, Key::NavToggleMenu)}
                        onclick={toggle_menu}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
