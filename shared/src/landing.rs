/// Which modal the root shell is showing. Exactly one value at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalSelector {
    #[default]
    None,
    About,
    Booking,
    Location,
    Review,
    Developer,
    Budget,
}

impl ModalSelector {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalSelector::None)
    }

    /// Stable name used for logging and as the render key of the modal body.
    pub fn name(&self) -> &'static str {
        match self {
            ModalSelector::None => "none",
            ModalSelector::About => "about",
            ModalSelector::Booking => "booking",
            ModalSelector::Location => "location",
            ModalSelector::Review => "review",
            ModalSelector::Developer => "developer",
            ModalSelector::Budget => "budget",
        }
    }
}

/// One-shot logo flip. Clicks while a flip runs are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoAnimation {
    #[default]
    Idle,
    Animating,
}

/// State owned by the root shell: the active modal and the logo flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LandingState {
    pub active_modal: ModalSelector,
    pub logo: LogoAnimation,
}

impl LandingState {
    pub fn open(&mut self, modal: ModalSelector) {
        self.active_modal = modal;
    }

    pub fn close(&mut self) {
        self.active_modal = ModalSelector::None;
    }

    /// Start the logo flip. Returns `false` when a flip is already running.
    pub fn logo_clicked(&mut self) -> bool {
        match self.logo {
            LogoAnimation::Animating => false,
            LogoAnimation::Idle => {
                self.logo = LogoAnimation::Animating;
                true
            }
        }
    }

    /// Animation-completion signal. Ends the flip and opens About; a stray
    /// signal while idle changes nothing.
    pub fn logo_animation_finished(&mut self) -> bool {
        match self.logo {
            LogoAnimation::Idle => false,
            LogoAnimation::Animating => {
                self.logo = LogoAnimation::Idle;
                self.active_modal = ModalSelector::About;
                true
            }
        }
    }

    pub fn is_logo_animating(&self) -> bool {
        self.logo == LogoAnimation::Animating
    }
}
