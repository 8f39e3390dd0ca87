pub mod about_panel;
pub mod access_code_gate;
pub mod booking_wizard_modal;
pub mod budget_panel;
pub mod developer_panel;
pub mod faq_accordion;
pub mod icons;
pub mod link_button;
pub mod location_panel;
pub mod modal;
pub mod review_panel;

pub use about_panel::AboutPanel;
pub use booking_wizard_modal::BookingWizardModal;
pub use budget_panel::BudgetModal;
pub use developer_panel::DeveloperPanel;
pub use link_button::LinkButton;
pub use location_panel::LocationPanel;
pub use modal::Modal;
pub use review_panel::ReviewPanel;
