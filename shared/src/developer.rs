use crate::config::SiteConfig;
use crate::effect::Effect;
use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeveloperStage {
    #[default]
    CollapsedPrompt,
    NameCapture,
}

/// Two-phase contact button of the developer credit panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeveloperContact {
    stage: DeveloperStage,
    pub name: String,
}

impl DeveloperContact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> DeveloperStage {
        self.stage
    }

    pub fn button_label(&self) -> &'static str {
        match self.stage {
            DeveloperStage::CollapsedPrompt => "Quer um site incrível como esse?",
            DeveloperStage::NameCapture => "Confirmar e Chamar no WhatsApp",
        }
    }

    pub fn compose_message(&self) -> String {
        format!(
            "Olá, meu nome é {}! Vi o link da Milano Bartenders e quero um site incrível como esse! 🚀",
            self.name.trim()
        )
    }

    /// First press reveals the name field. Later presses need a name and open
    /// WhatsApp; the panel stays in name capture afterwards.
    pub fn activate(&mut self, config: &SiteConfig) -> Result<Vec<Effect>, FormError> {
        match self.stage {
            DeveloperStage::CollapsedPrompt => {
                self.stage = DeveloperStage::NameCapture;
                Ok(Vec::new())
            }
            DeveloperStage::NameCapture if self.name.trim().is_empty() => {
                Err(FormError::MissingName)
            }
            DeveloperStage::NameCapture => {
                let link = SiteConfig::whatsapp_link(
                    &config.developer_whatsapp_number,
                    &self.compose_message(),
                );
                Ok(vec![Effect::OpenExternal(link)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_only_reveals_name_field() {
        let mut contact = DeveloperContact::new();
        let effects = contact.activate(&SiteConfig::default()).unwrap();
        assert!(effects.is_empty());
        assert_eq!(contact.stage(), DeveloperStage::NameCapture);
    }

    #[test]
    fn test_blank_name_is_refused() {
        let mut contact = DeveloperContact::new();
        contact.activate(&SiteConfig::default()).unwrap();
        contact.name = "   ".to_string();
        assert_eq!(
            contact.activate(&SiteConfig::default()),
            Err(FormError::MissingName)
        );
        assert_eq!(contact.stage(), DeveloperStage::NameCapture);
        assert_eq!(contact.name, "   ");
    }

    #[test]
    fn test_named_press_opens_whatsapp_and_stays() {
        let config = SiteConfig::default();
        let mut contact = DeveloperContact::new();
        contact.activate(&config).unwrap();
        contact.name = " João ".to_string();
        let effects = contact.activate(&config).unwrap();
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::OpenExternal(url) => {
                assert!(url.starts_with("https://wa.me/5541988710303?text="));
                assert!(url.contains(&urlencoding::encode("meu nome é João!").into_owned()));
            }
            other => panic!("expected navigation, got {:?}", other),
        }
        assert!(!Effect::closes(&effects));
        assert_eq!(contact.stage(), DeveloperStage::NameCapture);
    }
}
