/// Something a transition asks the host to do once the new state is stored.
///
/// Transitions never touch the browser themselves; they return effects and
/// the frontend runs them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open an address in a new tab. Fire-and-forget.
    OpenExternal(String),
    /// Dismiss the active modal.
    CloseModal,
}

impl Effect {
    /// Count the navigations in a batch of effects.
    pub fn navigations(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, Effect::OpenExternal(_)))
            .count()
    }

    pub fn closes(effects: &[Effect]) -> bool {
        effects.contains(&Effect::CloseModal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_count() {
        let effects = vec![
            Effect::OpenExternal("https://example.com".to_string()),
            Effect::CloseModal,
        ];
        assert_eq!(Effect::navigations(&effects), 1);
        assert!(Effect::closes(&effects));
        assert_eq!(Effect::navigations(&[]), 0);
        assert!(!Effect::closes(&[]));
    }
}
