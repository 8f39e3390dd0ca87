use shared::{ModalSelector, SiteConfig};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::icons::{AboutIcon, CalendarIcon, InstagramIcon, LocationIcon, ReviewIcon, WhatsAppIcon};
use components::{
    AboutPanel, BookingWizardModal, BudgetModal, DeveloperPanel, LinkButton, LocationPanel, Modal, ReviewPanel,
};
use hooks::use_landing;
use services::logging::Logger;
use services::site_config::load_site_config;

fn modal_content(modal: ModalSelector, on_close: &Callback<()>) -> Html {
    match modal {
        ModalSelector::None => html! {},
        ModalSelector::About => html! { <AboutPanel /> },
        ModalSelector::Booking => html! { <BookingWizardModal on_close={on_close.clone()} /> },
        ModalSelector::Location => html! { <LocationPanel /> },
        ModalSelector::Review => html! { <ReviewPanel on_close={on_close.clone()} /> },
        ModalSelector::Developer => html! { <DeveloperPanel /> },
        ModalSelector::Budget => html! { <BudgetModal /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(load_site_config);
    let landing = use_landing();
    let actions = landing.actions.clone();
    let state = landing.state;

    let open = |modal: ModalSelector| {
        let open_modal = actions.open_modal.clone();
        Callback::from(move |_: ()| open_modal.emit(modal))
    };

    let on_logo_click = {
        let logo_clicked = actions.logo_clicked.clone();
        Callback::from(move |_: MouseEvent| logo_clicked.emit(()))
    };

    let on_logo_animation_end = {
        let finished = actions.logo_animation_finished.clone();
        Callback::from(move |_: AnimationEvent| finished.emit(()))
    };

    let on_developer_click = {
        let open_modal = actions.open_modal.clone();
        Callback::from(move |_: MouseEvent| open_modal.emit(ModalSelector::Developer))
    };

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <div class="page">
                <main class="card">
                    <div class="profile">
                        <img
                            src="/logo.png"
                            alt="Milano Bartenders Logo"
                            class={classes!("logo", state.is_logo_animating().then_some("animate-coin-flip"))}
                            onclick={on_logo_click}
                            onanimationend={on_logo_animation_end}
                        />
                        <h1 class="title">{"Milano Bartenders"}</h1>
                        <p class="subtitle">{"Os melhores cocktails do mundo🍸"}</p>
                    </div>

                    <div class="links">
                        <LinkButton icon={html! { <AboutIcon /> }} text="Quem Somos?" onclick={actions.logo_clicked.clone()} />
                        <LinkButton icon={html! { <CalendarIcon /> }} text="Orçamento 2025" onclick={open(ModalSelector::Budget)} />
                        <LinkButton icon={html! { <WhatsAppIcon /> }} text="Contato WhatsApp" onclick={open(ModalSelector::Booking)} />
                        <LinkButton icon={html! { <InstagramIcon /> }} text="Instagram" href={AttrValue::from(config.instagram_url.clone())} />
                        <LinkButton icon={html! { <LocationIcon /> }} text="Localização" onclick={open(ModalSelector::Location)} />
                        <LinkButton icon={html! { <ReviewIcon /> }} text="Avalie-nos" onclick={open(ModalSelector::Review)} />
                    </div>
                </main>

                <footer class="footer">
                    <p>
                        {"Desenvolvido por "}
                        <button type="button" class="footer-link" onclick={on_developer_click}>
                            {"InteligenciArte.IA ✨"}
                        </button>
                    </p>
                </footer>

                // Keyed by the active modal so each open starts from fresh panel state.
                <Modal
                    key={state.active_modal.name()}
                    is_open={state.active_modal.is_open()}
                    on_close={actions.close_modal.clone()}
                >
                    {modal_content(state.active_modal, &actions.close_modal)}
                </Modal>
            </div>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    Logger::info_with_component("main", "starting Milano Bartenders link page");
    yew::Renderer::<App>::new().render();
}
