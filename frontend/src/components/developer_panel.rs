use shared::{DeveloperContact, DeveloperStage};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::icons::{InstagramIcon, WhatsAppIcon};
use crate::hooks::use_site_config;
use crate::services::logging::Logger;
use crate::services::navigation::run_effects;

#[function_component(DeveloperPanel)]
pub fn developer_panel() -> Html {
    let config = use_site_config();
    let contact = use_state(DeveloperContact::new);

    let on_name_input = {
        let contact = contact.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*contact).clone();
            next.name = input.value();
            contact.set(next);
        })
    };

    let on_contact = {
        let contact = contact.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*contact).clone();
            match next.activate(&config) {
                Ok(effects) => {
                    contact.set(next);
                    // The panel stays open after sending.
                    run_effects(effects, &Callback::noop());
                }
                Err(e) => {
                    Logger::warn_with_component("developer", "contact attempted without a name");
                    gloo::dialogs::alert(&e.to_string());
                }
            }
        })
    };

    html! {
        <div class="panel developer-panel">
            <h2 class="panel-title">{"InteligenciArte.IA"}</h2>
            <p class="muted">{"Desenvolvimento Web com Inteligência Artificial"}</p>

            <div class="developer-links">
                <a href={config.developer_instagram_url.clone()} target="_blank" rel="noopener noreferrer">
                    <InstagramIcon />
                    <span>{"Instagram"}</span>
                </a>
            </div>

            <div class="developer-contact">
                if contact.stage() == DeveloperStage::NameCapture {
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Qual seu nome?"
                        value={contact.name.clone()}
                        oninput={on_name_input}
                    />
                }
                <button type="button" class="whatsapp-button" onclick={on_contact}>
                    <WhatsAppIcon />
                    <span>{contact.button_label()}</span>
                </button>
            </div>
        </div>
    }
}
