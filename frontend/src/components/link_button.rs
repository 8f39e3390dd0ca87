use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub icon: Html,
    pub text: AttrValue,
    /// Renders an anchor opening this address in a new tab instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    let body = html! {
        <>
            <span class="link-icon">{props.icon.clone()}</span>
            <span class="link-text">{props.text.clone()}</span>
        </>
    };

    if let Some(href) = &props.href {
        return html! {
            <a class="link-button" href={href.clone()} target="_blank" rel="noopener noreferrer">
                {body}
            </a>
        };
    }

    let onclick = props.onclick.clone().map(|callback| {
        Callback::from(move |_: MouseEvent| callback.emit(()))
    });

    html! {
        <button type="button" class="link-button" {onclick}>
            {body}
        </button>
    }
}
