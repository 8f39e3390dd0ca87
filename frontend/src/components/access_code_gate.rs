use shared::AccessGate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AccessCodeGateProps {
    pub on_success: Callback<()>,
}

/// Code prompt shown before the budget panel.
#[function_component(AccessCodeGate)]
pub fn access_code_gate(props: &AccessCodeGateProps) -> Html {
    let gate = use_state(AccessGate::new);

    let on_input = {
        let gate = gate.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*gate).clone();
            next.edit(input.value());
            gate.set(next);
        })
    };

    let on_submit = {
        let gate = gate.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*gate).clone();
            let result = next.submit();
            gate.set(next);
            match result {
                Ok(()) => {
                    Logger::info_with_component("access-code", "budget unlocked");
                    on_success.emit(());
                }
                Err(_) => Logger::info_with_component("access-code", "rejected access code"),
            }
        })
    };

    let error = gate.error();
    let input_class = classes!(
        "form-input",
        "code-input",
        error.as_ref().map(|_| classes!("input-error", shake_class(gate.failed_attempts())))
    );

    html! {
        <div class="panel access-gate">
            <h2 class="panel-title">{"Acesso ao Orçamento"}</h2>
            <p>{"Insira o código que você recebeu para visualizar os detalhes do orçamento de 2025."}</p>
            <form onsubmit={on_submit}>
                <input
                    type="text"
                    class={input_class}
                    placeholder="Seu código de acesso"
                    value={gate.code().to_string()}
                    oninput={on_input}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={error.as_ref().map(|_| "code-error")}
                />
                if let Some(message) = error.clone() {
                    <p id="code-error" class="error-text">{message}</p>
                }
                <button type="submit" class="primary-button" disabled={!gate.can_submit()}>
                    {"Acessar Orçamento"}
                </button>
            </form>
        </div>
    }
}

/// Alternates between two identical animations so every failed attempt
/// replays the shake without recreating the input, which would drop focus.
fn shake_class(failed_attempts: u32) -> &'static str {
    if failed_attempts % 2 == 0 {
        "shake-again"
    } else {
        "shake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_consecutive_failures_switch_shake_animation() {
        assert_eq!(shake_class(1), "shake");
        assert_ne!(shake_class(1), shake_class(2));
        assert_ne!(shake_class(2), shake_class(3));
    }
}
