use shared::{FaqAccordion, FaqEntry, FAQ_ENTRIES};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::icons::FaqGlyph;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <FaqGlyph icon={props.entry.icon} />
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

/// Frequently asked questions; opening one entry closes the others.
#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let accordion = use_state(FaqAccordion::default);

    html! {
        <section class="faq-section">
            <h2 class="panel-title">{"Dúvidas Frequentes"}</h2>
            { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_| {
                        let mut next = *accordion;
                        next.toggle(index);
                        accordion.set(next);
                    })
                };
                html! {
                    <FaqItem
                        key={index}
                        entry={*entry}
                        is_open={accordion.is_open(index)}
                        on_toggle={on_toggle}
                    />
                }
            }) }
        </section>
    }
}
