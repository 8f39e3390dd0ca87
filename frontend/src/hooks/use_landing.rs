use shared::{LandingState, ModalSelector};
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseLandingResult {
    pub state: LandingState,
    pub actions: UseLandingActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLandingActions {
    pub open_modal: Callback<ModalSelector>,
    pub close_modal: Callback<()>,
    pub logo_clicked: Callback<()>,
    pub logo_animation_finished: Callback<()>,
}

/// Root-shell state: the single active modal plus the logo flip.
#[hook]
pub fn use_landing() -> UseLandingResult {
    let state = use_state(LandingState::default);

    let open_modal = {
        let state = state.clone();
        Callback::from(move |modal: ModalSelector| {
            let mut next = *state;
            next.open(modal);
            Logger::info_with_component("landing", &format!("open modal: {}", modal.name()));
            state.set(next);
        })
    };

    let close_modal = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = *state;
            let closing = next.active_modal;
            next.close();
            Logger::info_with_component("landing", &format!("close modal: {}", closing.name()));
            state.set(next);
        })
    };

    let logo_clicked = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = *state;
            if next.logo_clicked() {
                Logger::debug_with_component("landing", "logo flip started");
                state.set(next);
            } else {
                Logger::debug_with_component("landing", "logo flip already running, click ignored");
            }
        })
    };

    let logo_animation_finished = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = *state;
            if next.logo_animation_finished() {
                Logger::info_with_component("landing", "logo flip finished, opening about");
                state.set(next);
            }
        })
    };

    UseLandingResult {
        state: *state,
        actions: UseLandingActions {
            open_modal,
            close_modal,
            logo_clicked,
            logo_animation_finished,
        },
    }
}
