use thiserror::Error;

use crate::booking::BookingField;

/// User-facing validation failures. The display strings are shown verbatim
/// in the panels, so they stay in Portuguese.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Código inválido. Tente novamente.")]
    InvalidAccessCode,

    #[error("Por favor, insira seu nome.")]
    MissingName,

    #[error("Preencha o campo para continuar.")]
    StepIncomplete(BookingField),

    #[error("Não há próxima etapa.")]
    NoFurtherStep,

    #[error("O pedido só pode ser enviado a partir do resumo.")]
    NotAtSummary,

    #[error("Avaliação inválida: {0} estrelas")]
    InvalidStar(u8),
}

/// Failures while reading a [`crate::SiteConfig`] override.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_panel_copy() {
        assert_eq!(
            FormError::InvalidAccessCode.to_string(),
            "Código inválido. Tente novamente."
        );
        assert_eq!(FormError::MissingName.to_string(), "Por favor, insira seu nome.");
        assert_eq!(FormError::InvalidStar(7).to_string(), "Avaliação inválida: 7 estrelas");
    }
}
