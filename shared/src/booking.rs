use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::effect::Effect;
use crate::error::FormError;

/// Options offered by the event-type select.
pub const EVENT_TYPES: [&str; 5] = [
    "Casamento",
    "15 anos",
    "Formatura",
    "Evento Corporativo",
    "Outro",
];

/// Index of the summary view; steps `0..SUMMARY_STEP` are the field prompts.
pub const SUMMARY_STEP: usize = 6;

/// Shown in place of empty observations, both in the summary and the message.
pub const NO_OBSERVATIONS: &str = "Nenhuma";

/// Field prompts in the order the wizard asks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Date,
    Location,
    EventType,
    GuestCount,
    Observations,
}

impl BookingField {
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Date,
        BookingField::Location,
        BookingField::EventType,
        BookingField::GuestCount,
        BookingField::Observations,
    ];

    pub fn at_step(step: usize) -> Option<BookingField> {
        Self::ALL.get(step).copied()
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            BookingField::Name => "Qual seu nome?",
            BookingField::Date => "Qual a data do evento?",
            BookingField::Location => "Onde será o evento?",
            BookingField::EventType => "Qual o tipo de evento?",
            BookingField::GuestCount => "Quantos convidados?",
            BookingField::Observations => "Alguma observação?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BookingField::Name => "Seu nome completo",
            BookingField::Date => "",
            BookingField::Location => "Cidade e local",
            BookingField::EventType => "Selecione...",
            BookingField::GuestCount => "Acima de 8 anos",
            BookingField::Observations => "(Opcional)",
        }
    }
}

/// Raw input of the booking wizard, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub name: String,
    /// `YYYY-MM-DD` as produced by a date input
    pub date: String,
    pub location: String,
    pub event_type: String,
    pub guest_count: String,
    pub observations: String,
}

impl BookingForm {
    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Date => &self.date,
            BookingField::Location => &self.location,
            BookingField::EventType => &self.event_type,
            BookingField::GuestCount => &self.guest_count,
            BookingField::Observations => &self.observations,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Date => self.date = value,
            BookingField::Location => self.location = value,
            BookingField::EventType => self.event_type = value,
            BookingField::GuestCount => self.guest_count = value,
            BookingField::Observations => self.observations = value,
        }
    }

    pub fn is_valid(&self, field: BookingField) -> bool {
        match field {
            BookingField::Name => !self.name.trim().is_empty(),
            BookingField::Date => !self.date.is_empty(),
            BookingField::Location => !self.location.trim().is_empty(),
            BookingField::EventType => !self.event_type.trim().is_empty(),
            BookingField::GuestCount => is_valid_guest_count(&self.guest_count),
            BookingField::Observations => true,
        }
    }

    /// Event date as `dd/mm/yyyy`, or the raw input when it is not a date.
    pub fn formatted_date(&self) -> String {
        format_event_date(&self.date)
    }

    pub fn observations_display(&self) -> &str {
        let trimmed = self.observations.trim();
        if trimmed.is_empty() {
            NO_OBSERVATIONS
        } else {
            trimmed
        }
    }

    /// The WhatsApp message sent to the booking number.
    pub fn compose_message(&self) -> String {
        [
            "*Solicitação de Orçamento - Milano Bartenders*".to_string(),
            String::new(),
            format!("*Nome:* {}", self.name.trim()),
            format!("*Data do Evento:* {}", self.formatted_date()),
            format!("*Local:* {}", self.location.trim()),
            format!("*Tipo de Evento:* {}", self.event_type.trim()),
            format!("*Nº de Convidados (+8 anos):* {}", self.guest_count.trim()),
            format!("*Observações:* {}", self.observations_display()),
        ]
        .join("\n")
    }
}

/// A guest count is valid when it parses to a strictly positive integer.
pub fn is_valid_guest_count(input: &str) -> bool {
    input.trim().parse::<i64>().map(|n| n > 0).unwrap_or(false)
}

/// Format a `YYYY-MM-DD` date as `dd/mm/yyyy`.
///
/// The input is a calendar date, not an instant, so it is never shifted by a
/// timezone offset.
pub fn format_event_date(input: &str) -> String {
    match NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => input.to_string(),
    }
}

/// What the booking modal is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardView {
    Field(BookingField),
    Summary,
    AgeWarning,
}

/// Multi-step booking form. Steps 0-5 ask one field each, step 6 is the
/// summary with the age confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingWizard {
    pub form: BookingForm,
    current_step: usize,
    age_confirmed: bool,
    age_warning: bool,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn age_confirmed(&self) -> bool {
        self.age_confirmed
    }

    pub fn view(&self) -> WizardView {
        if self.age_warning {
            return WizardView::AgeWarning;
        }
        match BookingField::at_step(self.current_step) {
            Some(field) => WizardView::Field(field),
            None => WizardView::Summary,
        }
    }

    /// Whether `Next` is enabled on the current step.
    pub fn can_advance(&self) -> bool {
        match self.view() {
            WizardView::Field(field) => self.form.is_valid(field),
            WizardView::Summary | WizardView::AgeWarning => false,
        }
    }

    /// Whether `Back` is enabled. Allowed everywhere above step 0 except in
    /// the age warning, whose only exit is acknowledging it.
    pub fn can_go_back(&self) -> bool {
        !self.age_warning && self.current_step > 0
    }

    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn next(&mut self) -> Result<(), FormError> {
        match self.view() {
            WizardView::Field(field) if self.form.is_valid(field) => {
                self.current_step += 1;
                Ok(())
            }
            WizardView::Field(field) => Err(FormError::StepIncomplete(field)),
            WizardView::Summary | WizardView::AgeWarning => Err(FormError::NoFurtherStep),
        }
    }

    pub fn back(&mut self) {
        if self.can_go_back() {
            self.current_step -= 1;
        }
    }

    pub fn set_age_confirmed(&mut self, confirmed: bool) {
        self.age_confirmed = confirmed;
    }

    /// Final submit from the summary.
    ///
    /// Without the age confirmation the wizard moves to the age warning and
    /// nothing is opened. Otherwise the message is sent to WhatsApp and the
    /// modal closes.
    pub fn submit(&mut self, config: &SiteConfig) -> Result<Vec<Effect>, FormError> {
        if self.view() != WizardView::Summary {
            return Err(FormError::NotAtSummary);
        }
        if !self.age_confirmed {
            self.age_warning = true;
            return Ok(Vec::new());
        }
        let link = SiteConfig::whatsapp_link(
            &config.booking_whatsapp_number,
            &self.form.compose_message(),
        );
        Ok(vec![Effect::OpenExternal(link), Effect::CloseModal])
    }

    /// Leave the age warning. Closes the modal.
    pub fn acknowledge_warning(&mut self) -> Vec<Effect> {
        if !self.age_warning {
            return Vec::new();
        }
        self.age_warning = false;
        vec![Effect::CloseModal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        let values = [
            (BookingField::Name, "  Maria Silva "),
            (BookingField::Date, "2025-12-31"),
            (BookingField::Location, "Ponta Grossa, Salão Azul"),
            (BookingField::EventType, "Casamento"),
            (BookingField::GuestCount, "120"),
            (BookingField::Observations, ""),
        ];
        for (field, value) in values {
            wizard.set_field(field, value);
            wizard.next().unwrap();
        }
        wizard
    }

    #[test]
    fn test_next_enabled_iff_step_valid() {
        let mut wizard = BookingWizard::new();
        let cases = [
            (BookingField::Name, "   ", "Ana"),
            (BookingField::Date, "", "2025-06-01"),
            (BookingField::Location, "\t", "Curitiba"),
            (BookingField::EventType, "", "Formatura"),
            (BookingField::GuestCount, "abc", "30"),
        ];
        for (field, invalid, valid) in cases {
            assert_eq!(wizard.view(), WizardView::Field(field));
            wizard.set_field(field, invalid);
            assert!(!wizard.can_advance(), "{:?} accepted {:?}", field, invalid);
            assert_eq!(wizard.next(), Err(FormError::StepIncomplete(field)));
            wizard.set_field(field, valid);
            assert!(wizard.can_advance());
            wizard.next().unwrap();
        }
        // Observations are optional.
        assert_eq!(wizard.view(), WizardView::Field(BookingField::Observations));
        assert!(wizard.can_advance());
        wizard.next().unwrap();
        assert_eq!(wizard.view(), WizardView::Summary);
        assert_eq!(wizard.current_step(), SUMMARY_STEP);
        assert_eq!(wizard.next(), Err(FormError::NoFurtherStep));
    }

    #[test]
    fn test_back_disabled_only_at_first_step() {
        let mut wizard = BookingWizard::new();
        assert!(!wizard.can_go_back());
        wizard.back();
        assert_eq!(wizard.current_step(), 0);

        let mut wizard = filled_wizard();
        for step in (1..=SUMMARY_STEP).rev() {
            assert_eq!(wizard.current_step(), step);
            assert!(wizard.can_go_back());
            wizard.back();
        }
        assert_eq!(wizard.current_step(), 0);
        assert!(!wizard.can_go_back());
    }

    #[test]
    fn test_back_keeps_entered_values() {
        let mut wizard = filled_wizard();
        wizard.back();
        wizard.back();
        assert_eq!(wizard.view(), WizardView::Field(BookingField::GuestCount));
        assert_eq!(wizard.form.value(BookingField::GuestCount), "120");
        assert!(wizard.can_advance());
    }

    #[test]
    fn test_guest_count_validity() {
        for invalid in ["0", "-3", "", "abc", "  ", "1.5"] {
            assert!(!is_valid_guest_count(invalid), "{:?} should be invalid", invalid);
        }
        for valid in ["1", "250", " 40 "] {
            assert!(is_valid_guest_count(valid), "{:?} should be valid", valid);
        }
    }

    #[test]
    fn test_submit_without_age_confirmation_only_warns() {
        let mut wizard = filled_wizard();
        let effects = wizard.submit(&SiteConfig::default()).unwrap();
        assert!(effects.is_empty());
        assert_eq!(Effect::navigations(&effects), 0);
        assert_eq!(wizard.view(), WizardView::AgeWarning);
        assert!(!wizard.can_go_back());
        assert!(!wizard.can_advance());

        assert_eq!(wizard.acknowledge_warning(), vec![Effect::CloseModal]);
    }

    #[test]
    fn test_submit_with_age_confirmation_opens_whatsapp_and_closes() {
        let mut wizard = filled_wizard();
        wizard.set_age_confirmed(true);
        let effects = wizard.submit(&SiteConfig::default()).unwrap();
        assert_eq!(effects.len(), 2);
        assert_eq!(Effect::navigations(&effects), 1);
        match &effects[0] {
            Effect::OpenExternal(url) => {
                assert!(url.starts_with("https://wa.me/5542999118913?text="));
                assert!(url.contains("Nenhuma"));
            }
            other => panic!("expected navigation, got {:?}", other),
        }
        assert_eq!(effects[1], Effect::CloseModal);
    }

    #[test]
    fn test_submit_refused_before_summary() {
        let mut wizard = BookingWizard::new();
        wizard.set_age_confirmed(true);
        assert_eq!(wizard.submit(&SiteConfig::default()), Err(FormError::NotAtSummary));
    }

    #[test]
    fn test_acknowledge_outside_warning_is_noop() {
        let mut wizard = filled_wizard();
        assert!(wizard.acknowledge_warning().is_empty());
        assert_eq!(wizard.view(), WizardView::Summary);
    }

    #[test]
    fn test_message_layout() {
        let wizard = filled_wizard();
        assert_eq!(
            wizard.form.compose_message(),
            "*Solicitação de Orçamento - Milano Bartenders*\n\
             \n\
             *Nome:* Maria Silva\n\
             *Data do Evento:* 31/12/2025\n\
             *Local:* Ponta Grossa, Salão Azul\n\
             *Tipo de Evento:* Casamento\n\
             *Nº de Convidados (+8 anos):* 120\n\
             *Observações:* Nenhuma"
        );
    }

    #[test]
    fn test_observations_placeholder_and_trim() {
        let mut form = BookingForm::default();
        assert_eq!(form.observations_display(), NO_OBSERVATIONS);
        form.observations = "   ".to_string();
        assert!(form.compose_message().ends_with("*Observações:* Nenhuma"));

        form.observations = "  Open bar até 2h  ".to_string();
        assert_eq!(form.observations_display(), "Open bar até 2h");
        let message = form.compose_message();
        assert!(message.ends_with("*Observações:* Open bar até 2h"));
        assert!(!message.contains("Nenhuma"));
    }

    #[test]
    fn test_date_format_has_no_day_shift() {
        assert_eq!(format_event_date("2025-01-01"), "01/01/2025");
        assert_eq!(format_event_date("2024-02-29"), "29/02/2024");
        assert_eq!(format_event_date("not a date"), "not a date");
    }

    #[test]
    fn test_every_step_has_a_prompt() {
        for (index, field) in BookingField::ALL.iter().enumerate() {
            assert_eq!(BookingField::at_step(index), Some(*field));
            assert!(!field.prompt().is_empty());
        }
        assert_eq!(BookingField::at_step(SUMMARY_STEP), None);
    }
}
