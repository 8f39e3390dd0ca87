use web_sys::MouseEvent;
use yew::prelude::*;

use super::icons::CloseIcon;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay shell. Renders nothing while closed; the backdrop and the close
/// button both call `on_close`, clicks inside the dialog stay inside.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog" role="dialog" aria-modal="true" onclick={on_modal_click}>
                <button type="button" class="modal-close" aria-label="Fechar" onclick={on_close_click}>
                    <CloseIcon />
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
