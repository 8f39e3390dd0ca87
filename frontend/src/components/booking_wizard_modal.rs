use shared::{BookingField, BookingWizard, WizardView, EVENT_TYPES};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use super::icons::WhatsAppIcon;
use crate::hooks::use_site_config;
use crate::services::logging::Logger;
use crate::services::navigation::run_effects;

#[derive(Properties, PartialEq)]
pub struct BookingWizardModalProps {
    pub on_close: Callback<()>,
}

/// Step-by-step quote request ending in a prefilled WhatsApp message.
#[function_component(BookingWizardModal)]
pub fn booking_wizard_modal(props: &BookingWizardModalProps) -> Html {
    let config = use_site_config();
    let wizard = use_state(BookingWizard::new);

    let set_field = {
        let wizard = wizard.clone();
        Callback::from(move |(field, value): (BookingField, String)| {
            let mut next = (*wizard).clone();
            next.set_field(field, value);
            wizard.set(next);
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            let from = next.current_step();
            match next.next() {
                Ok(()) => {
                    Logger::debug_with_component(
                        "booking-wizard",
                        &format!("step {} -> {}", from, next.current_step()),
                    );
                    wizard.set(next);
                }
                Err(e) => Logger::warn_with_component("booking-wizard", &e.to_string()),
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.back();
            wizard.set(next);
        })
    };

    let on_age_change = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*wizard).clone();
            next.set_age_confirmed(input.checked());
            wizard.set(next);
        })
    };

    let on_submit = {
        let wizard = wizard.clone();
        let on_close = props.on_close.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.submit(&config) {
                Ok(effects) => {
                    if effects.is_empty() {
                        Logger::info_with_component("booking-wizard", "submit without age confirmation");
                    } else {
                        Logger::info_with_component("booking-wizard", "sending quote request");
                    }
                    wizard.set(next);
                    run_effects(effects, &on_close);
                }
                Err(e) => Logger::warn_with_component("booking-wizard", &e.to_string()),
            }
        })
    };

    let on_acknowledge = {
        let wizard = wizard.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            let effects = next.acknowledge_warning();
            wizard.set(next);
            run_effects(effects, &on_close);
        })
    };

    let body = match wizard.view() {
        WizardView::AgeWarning => {
            return html! {
                <div class="panel booking-warning">
                    <h2 class="panel-title warning">{"Atenção!"}</h2>
                    <p>{"Apenas maiores de 18 anos podem solicitar orçamentos. Peça a um responsável para entrar em contato."}</p>
                    <button type="button" class="secondary-button" onclick={on_acknowledge}>
                        {"Entendi"}
                    </button>
                </div>
            };
        }
        WizardView::Field(field) => html! {
            <div key={wizard.current_step()} class="booking-step fade-in">
                <label class="step-prompt">{field.prompt()}</label>
                {render_field(field, wizard.form.value(field), &set_field)}
                <div class="step-actions">
                    <button
                        type="button"
                        class="text-button"
                        onclick={on_back}
                        disabled={!wizard.can_go_back()}
                    >
                        {"Voltar"}
                    </button>
                    <button
                        type="button"
                        class="primary-button"
                        onclick={on_next}
                        disabled={!wizard.can_advance()}
                    >
                        {"Prosseguir"}
                    </button>
                </div>
            </div>
        },
        WizardView::Summary => {
            let form = &wizard.form;
            html! {
                <div key="summary" class="booking-summary fade-in">
                    <h3 class="summary-title">{"Resumo do Pedido"}</h3>
                    <div class="summary-box">
                        <p><strong>{"Nome: "}</strong>{form.name.trim().to_string()}</p>
                        <p><strong>{"Data: "}</strong>{form.formatted_date()}</p>
                        <p><strong>{"Local: "}</strong>{form.location.trim().to_string()}</p>
                        <p><strong>{"Evento: "}</strong>{form.event_type.clone()}</p>
                        <p><strong>{"Convidados: "}</strong>{form.guest_count.trim().to_string()}</p>
                        <p><strong>{"Obs: "}</strong>{form.observations_display().to_string()}</p>
                    </div>
                    <div class="age-check">
                        <input
                            type="checkbox"
                            id="age-check"
                            checked={wizard.age_confirmed()}
                            onchange={on_age_change}
                        />
                        <label for="age-check">{"Confirmo que sou maior de 18 anos."}</label>
                    </div>
                    <div class="step-actions">
                        <button type="button" class="text-button" onclick={on_back}>
                            {"Voltar"}
                        </button>
                        <button
                            type="button"
                            class={classes!("whatsapp-button", (!wizard.age_confirmed()).then_some("muted"))}
                            onclick={on_submit}
                        >
                            <WhatsAppIcon />
                            <span>{"Solicitar Orçamento"}</span>
                        </button>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="panel booking-panel">
            <h2 class="panel-title">{"Contato WhatsApp"}</h2>
            {body}
        </div>
    }
}

fn render_field(field: BookingField, value: &str, set_field: &Callback<(BookingField, String)>) -> Html {
    let from_input = set_field.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });

    match field {
        BookingField::Name | BookingField::Location => html! {
            <input
                type="text"
                class="form-input"
                placeholder={field.placeholder()}
                value={value.to_string()}
                oninput={from_input}
                required=true
            />
        },
        BookingField::Date => html! {
            <input
                type="date"
                class="form-input"
                value={value.to_string()}
                oninput={from_input}
                required=true
            />
        },
        BookingField::GuestCount => html! {
            <input
                type="number"
                min="1"
                class="form-input"
                placeholder={field.placeholder()}
                value={value.to_string()}
                oninput={from_input}
                required=true
            />
        },
        BookingField::EventType => {
            let on_change = set_field.reform(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                (field, select.value())
            });
            html! {
                <select class="form-input" onchange={on_change} required=true>
                    <option value="" selected={value.is_empty()}>{field.placeholder()}</option>
                    { for EVENT_TYPES.iter().map(|event_type| html! {
                        <option value={*event_type} selected={value == *event_type}>{*event_type}</option>
                    }) }
                </select>
            }
        }
        BookingField::Observations => {
            let on_input = set_field.reform(move |e: InputEvent| {
                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                (field, textarea.value())
            });
            html! {
                <textarea
                    class="form-input"
                    rows="3"
                    placeholder={field.placeholder()}
                    value={value.to_string()}
                    oninput={on_input}
                ></textarea>
            }
        }
    }
}
