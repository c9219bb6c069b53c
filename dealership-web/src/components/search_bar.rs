use crate::i18n::t;
use dealership_core::{ConditionFilter, Key, Lang};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub search: AttrValue,
    pub condition: ConditionFilter,
    pub on_search: Callback<String>,
    pub on_condition: Callback<ConditionFilter>,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };
    let onchange = {
        let cb = p.on_condition.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(ConditionFilter::parse(&sel.value()));
            }
        })
    };
    let options = ConditionFilter::ALL.iter().map(|filter| {
        html! {
            <option value={filter.as_str()} selected={*filter == p.condition}>
                { t(p.lang, filter.label_key()) }
            </option>
        }
    });

    html! {
        <div class="search-filter">
            <input
                id="search-input"
                type="search"
                placeholder={t(p.lang, Key::PlaceholderSearch)}
                aria-label={t(p.lang, Key::PlaceholderSearch)}
                value={p.search.clone()}
                {oninput}
            />
            <label for="condition-filter" class="sr-only">{ t(p.lang, Key::FilterLabel) }</label>
            <select id="condition-filter" {onchange}>
                { for options }
            </select>
        </div>
    }
}
