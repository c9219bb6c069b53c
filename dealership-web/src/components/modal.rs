use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub title: AttrValue,
    pub close_label: AttrValue,
    pub on_close: Callback<()>,
    /// Click on the dimmed area outside the content
    pub on_backdrop: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog shell. Rendered only while open; Escape is handled at the page level.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let title_id = format!("{}-title", props.id);
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_backdrop = {
        let cb = props.on_backdrop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div id={props.id.clone()} class="modal" role="presentation" onclick={on_backdrop}>
            <div
                class={classes!("modal-content", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onclick={stop}
            >
                <button type="button" class="close-modal" aria-label={props.close_label.clone()} onclick={on_close}>
                    { "×" }
                </button>
                <h2 id={title_id} class="modal-title">{ props.title.clone() }</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
