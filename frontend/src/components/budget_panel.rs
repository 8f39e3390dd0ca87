use shared::catalog::{
    AddOn, Plan, ADD_ONS, DISCOUNT_NOTE, IMPORTANT_NOTES, INCLUDED, PAYMENT_TERMS, SERVICE_HOURS,
    UPCOMING_NOTE,
};
use shared::{BudgetTab, BudgetView, SiteConfig};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::access_code_gate::AccessCodeGate;
use super::faq_accordion::FaqList;
use super::icons::DownloadIcon;
use crate::hooks::use_site_config;

/// Budget modal body: the access gate when configured, then the price list.
#[function_component(BudgetModal)]
pub fn budget_modal() -> Html {
    let config = use_site_config();
    let unlocked = use_state(|| !config.budget_requires_code);

    let on_unlocked = {
        let unlocked = unlocked.clone();
        Callback::from(move |_| unlocked.set(true))
    };

    if *unlocked {
        html! { <BudgetPanel /> }
    } else {
        html! { <AccessCodeGate on_success={on_unlocked} /> }
    }
}

#[function_component(BudgetPanel)]
pub fn budget_panel() -> Html {
    let config = use_site_config();
    let view = use_state(BudgetView::default);

    let tab_button = |tab: BudgetTab| {
        let onclick = {
            let view = view.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *view;
                next.select_tab(tab);
                view.set(next);
            })
        };
        html! {
            <button
                type="button"
                class={classes!("tab-button", (view.active_tab == tab).then_some("active"))}
                {onclick}
            >
                {tab.label()}
            </button>
        }
    };

    let toggle_details = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *view;
            next.toggle_details();
            view.set(next);
        })
    };

    let active = view.active_tab;
    let catalog = match active {
        BudgetTab::Gold | BudgetTab::Diamond => html! {
            <div class="plan-grid">
                { for active.plans().iter().map(plan_card) }
            </div>
        },
        BudgetTab::Addons => html! {
            <div class="addon-grid">
                { for ADD_ONS.iter().map(addon_card) }
            </div>
        },
    };

    html! {
        <div class="panel budget-panel">
            <div class="budget-header">
                <h2 class="panel-title">{"Orçamento 2025"}</h2>
                {download_link(&config.portfolio_pdf_path, "Baixar Portfólio Completo", "text-link")}
            </div>

            <div class="tabs">
                { for BudgetTab::ALL.into_iter().map(tab_button) }
            </div>

            <div key={format!("{:?}", active)} class="tab-content fade-in">
                <p class="tab-blurb">{active.blurb()}</p>
                {catalog}
            </div>

            if view.shows_plan_terms() {
                <div class="plan-terms fade-in">
                    <p class="discount">{DISCOUNT_NOTE}</p>
                    <p><strong>{"Carga horária: "}</strong>{SERVICE_HOURS}</p>
                    <p><strong>{"Forma de Pagamento: "}</strong>{PAYMENT_TERMS}</p>
                    <p class="upcoming">{UPCOMING_NOTE}</p>
                </div>
            }

            {download_link(&config.budget_pdf_path, "Baixar Orçamento Detalhado", "primary-button")}

            <div class="details">
                <button type="button" class="text-button" onclick={toggle_details}>
                    {details_label(view.details_expanded)}
                </button>
                <div class={classes!("collapsible", view.details_expanded.then_some("expanded"))}>
                    <div class="details-grid">
                        <div>
                            <h4>{"Tudo que está incluso"}</h4>
                            <ul>{ for INCLUDED.iter().map(|item| html! { <li>{format!("- {}", item)}</li> }) }</ul>
                        </div>
                        <div>
                            <h4>{"Observações Importantes"}</h4>
                            <ul>{ for IMPORTANT_NOTES.iter().map(|item| html! { <li>{format!("- {}", item)}</li> }) }</ul>
                        </div>
                    </div>
                </div>
            </div>

            <FaqList />
        </div>
    }
}

fn details_label(expanded: bool) -> String {
    if expanded {
        "Ocultar detalhes e observações importantes ▲".to_string()
    } else {
        "Ver detalhes e observações importantes ▼".to_string()
    }
}

fn download_link(path: &str, label: &'static str, class: &'static str) -> Html {
    html! {
        <a class={class} href={path.to_string()} download={SiteConfig::download_name(path).to_string()}>
            <DownloadIcon />
            <span>{label}</span>
        </a>
    }
}

fn plan_card(plan: &Plan) -> Html {
    html! {
        <div key={plan.name} class="plan-card">
            <h3>{plan.name}</h3>
            <p class="price">{plan.price}</p>
            <p class="per-guest">{"por convidado"}</p>
            <p class="brands-title">{"Marcas utilizadas:"}</p>
            <ul class="brands">
                { for plan.brands.iter().map(|brand| html! { <li><span class="bullet">{"◆"}</span>{*brand}</li> }) }
            </ul>
        </div>
    }
}

fn addon_card(add_on: &AddOn) -> Html {
    html! {
        <div key={add_on.name} class="addon-card">
            <h3>{add_on.name}</h3>
            if let Some(description) = add_on.description {
                <p class="addon-description">{description}</p>
            }
            { for add_on.options.iter().map(|(option, price)| html! {
                <p><strong>{format!("{}: ", option)}</strong>{*price}</p>
            }) }
            if let Some(price) = add_on.starting_price {
                <p class="price">{format!("a partir de {}", price)}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_details_label_flips_with_state() {
        assert!(details_label(false).starts_with("Ver"));
        assert!(details_label(true).starts_with("Ocultar"));
    }
}
