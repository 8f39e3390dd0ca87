use shared::{ReviewFlow, ReviewStage, MAX_STARS};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::icons::StarIcon;
use crate::hooks::use_site_config;
use crate::services::logging::Logger;
use crate::services::navigation::run_effects;

#[derive(Properties, PartialEq)]
pub struct ReviewPanelProps {
    pub on_close: Callback<()>,
}

#[function_component(ReviewPanel)]
pub fn review_panel(props: &ReviewPanelProps) -> Html {
    let config = use_site_config();
    let flow = use_state(ReviewFlow::new);

    if flow.stage() == ReviewStage::Feedback {
        return html! {
            <form class="panel feedback-form" action={config.feedback_form_action.clone()} method="POST">
                <h2 class="panel-title warning">{"Que pena!"}</h2>
                <p>{"Lamentamos não ter atendido 100% suas expectativas. Por favor, conte-nos como podemos melhorar."}</p>
                <textarea
                    name="feedback"
                    class="form-input"
                    rows="4"
                    placeholder="Sua sugestão é muito importante para nós..."
                ></textarea>
                <input type="hidden" name="_next" value={config.feedback_redirect_url.clone()} />
                <button type="submit" class="primary-button">{"Enviar Feedback"}</button>
            </form>
        };
    }

    let on_leave = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *flow;
            next.leave();
            flow.set(next);
        })
    };

    let star = |value: u8| {
        let on_click = {
            let flow = flow.clone();
            let on_close = props.on_close.clone();
            let config = config.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *flow;
                match next.select_star(value, &config) {
                    Ok(effects) => {
                        Logger::info_with_component("review", &format!("rated {} stars", value));
                        flow.set(next);
                        run_effects(effects, &on_close);
                    }
                    Err(e) => Logger::warn_with_component("review", &e.to_string()),
                }
            })
        };
        let on_enter = {
            let flow = flow.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *flow;
                next.hover(value);
                flow.set(next);
            })
        };
        html! {
            <button
                type="button"
                class="star-button"
                aria-label={format!("{} estrelas", value)}
                onclick={on_click}
                onmouseenter={on_enter}
                onmouseleave={on_leave.clone()}
            >
                <StarIcon filled={flow.is_highlighted(value)} />
            </button>
        }
    };

    html! {
        <div class="panel review-panel">
            <h2 class="panel-title">{"Sua Opinião Importa"}</h2>
            <p>{"Como você avalia nosso serviço?"}</p>
            <div class="stars">
                { for (1..=MAX_STARS).map(star) }
            </div>
        </div>
    }
}
