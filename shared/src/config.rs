use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fixed external addresses used by the page.
///
/// The defaults are the production values. A page may embed a JSON override
/// (see [`SiteConfig::from_json`]); missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// WhatsApp number receiving booking requests (digits only)
    pub booking_whatsapp_number: String,
    /// WhatsApp number of the site developer (digits only)
    pub developer_whatsapp_number: String,
    pub instagram_url: String,
    pub developer_instagram_url: String,
    pub maps_directions_url: String,
    pub maps_embed_url: String,
    pub street_address: String,
    pub review_url: String,
    /// POST target of the low-rating feedback form
    pub feedback_form_action: String,
    /// Sent as `_next` so the form service redirects back after submission
    pub feedback_redirect_url: String,
    pub portfolio_pdf_path: String,
    pub budget_pdf_path: String,
    /// Show the access-code gate before the budget panel; off unless overridden
    pub budget_requires_code: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking_whatsapp_number: "5542999118913".to_string(),
            developer_whatsapp_number: "5541988710303".to_string(),
            instagram_url: "https://www.instagram.com/milano_bartenders/".to_string(),
            developer_instagram_url: "https://www.instagram.com/inteligenciarte.ia".to_string(),
            maps_directions_url:
                "https://www.google.com/maps/dir/?api=1&destination=Milano+Bartenders+Ponta+Grossa"
                    .to_string(),
            maps_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3613.0573661483227!2d-50.12865152462135!3d-25.099919377773684!2m3!1f0!2f0!3f0!3m2!1i1024!i768!4f13.1!3m3!1m2!s0x94e81b20e21af7e9%3A0x550c38e968d1ce69!2sMilano%20Bartenders!5e0!3m2!1spt-BR!2sbr!4v1762472151598!5m2!1spt-BR!2sbr".to_string(),
            street_address: "R. Siqueira Campos, 761 - Uvaranas, Ponta Grossa - PR, 84940-000"
                .to_string(),
            review_url:
                "https://search.google.com/local/writereview?placeid=ChIJ6fca4iAb6JQRac7RaOk4DFU"
                    .to_string(),
            feedback_form_action: "https://formsubmit.co/your-email@example.com".to_string(),
            feedback_redirect_url: "https://milano-bartenders-linktree.netlify.app/thank-you"
                .to_string(),
            portfolio_pdf_path: "/portfolio-milano-2025.pdf".to_string(),
            budget_pdf_path: "/orcamento-promo-2025.pdf".to_string(),
            budget_requires_code: false,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("booking_whatsapp_number", &self.booking_whatsapp_number),
            ("developer_whatsapp_number", &self.developer_whatsapp_number),
            ("review_url", &self.review_url),
            ("feedback_form_action", &self.feedback_form_action),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// `https://wa.me/<number>?text=<message>` with the message percent-encoded.
    pub fn whatsapp_link(number: &str, message: &str) -> String {
        format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
    }

    /// File name offered by the browser when downloading an asset path.
    pub fn download_name(path: &str) -> &str {
        path.rsplit('/').next().unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = SiteConfig::whatsapp_link("5542999118913", "Olá, tudo bem?\n*Nome:* Ana & Bia");
        assert_eq!(
            link,
            "https://wa.me/5542999118913?text=Ol%C3%A1%2C%20tudo%20bem%3F%0A%2ANome%3A%2A%20Ana%20%26%20Bia"
        );
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "budget_requires_code": true }"#).unwrap();
        assert!(config.budget_requires_code);
        assert_eq!(config.booking_whatsapp_number, "5542999118913");
        assert_eq!(config.review_url, SiteConfig::default().review_url);
    }

    #[test]
    fn test_budget_opens_without_code_by_default() {
        assert!(!SiteConfig::default().budget_requires_code);
        assert!(!SiteConfig::from_json("{}").unwrap().budget_requires_code);
    }

    #[test]
    fn test_override_rejects_blank_number() {
        let err = SiteConfig::from_json(r#"{ "booking_whatsapp_number": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("booking_whatsapp_number")));
    }

    #[test]
    fn test_override_rejects_malformed_json() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_download_name() {
        assert_eq!(SiteConfig::download_name("/portfolio-milano-2025.pdf"), "portfolio-milano-2025.pdf");
        assert_eq!(SiteConfig::download_name("plain.pdf"), "plain.pdf");
    }
}
