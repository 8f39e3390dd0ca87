//! Domain logic for the Milano Bartenders link page.
//!
//! Everything here is plain Rust with no browser dependency: the panel state
//! machines, their validation predicates, the static catalog and the deep
//! links they produce. The Yew frontend only renders these types.

pub mod access_code;
pub mod booking;
pub mod budget;
pub mod catalog;
pub mod config;
pub mod developer;
pub mod effect;
pub mod error;
pub mod faq;
pub mod landing;
pub mod review;

pub use access_code::{AccessGate, VALID_ACCESS_CODES};
pub use booking::{BookingField, BookingForm, BookingWizard, WizardView, EVENT_TYPES, SUMMARY_STEP};
pub use budget::{BudgetTab, BudgetView};
pub use catalog::{AddOn, Plan};
pub use config::SiteConfig;
pub use developer::{DeveloperContact, DeveloperStage};
pub use effect::Effect;
pub use error::{ConfigError, FormError};
pub use faq::{FaqAccordion, FaqEntry, FaqIcon, FAQ_ENTRIES};
pub use landing::{LandingState, LogoAnimation, ModalSelector};
pub use review::{ReviewFlow, ReviewStage, MAX_STARS};
