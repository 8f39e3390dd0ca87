use crate::error::FormError;

/// Codes handed out to prospects; compared case-insensitively.
pub const VALID_ACCESS_CODES: [&str; 5] = ["7DIAS", "MILANO2025", "EXCLUSIVO", "BAR2025", "PROMO2025"];

pub fn is_valid_access_code(input: &str) -> bool {
    let normalized = input.trim().to_uppercase();
    VALID_ACCESS_CODES.contains(&normalized.as_str())
}

/// Code entry guarding the budget panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessGate {
    code: String,
    error: Option<FormError>,
    failed_attempts: u32,
    granted: bool,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Message under the input, if the last attempt failed.
    pub fn error(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Changes on every failed attempt so the shake animation can restart.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn can_submit(&self) -> bool {
        !self.code.is_empty()
    }

    /// Any edit clears the previous error.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.code = value.into();
        self.error = None;
    }

    pub fn submit(&mut self) -> Result<(), FormError> {
        if is_valid_access_code(&self.code) {
            self.error = None;
            self.granted = true;
            Ok(())
        } else {
            self.failed_attempts += 1;
            self.error = Some(FormError::InvalidAccessCode);
            Err(FormError::InvalidAccessCode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_trimmed_and_case_insensitive() {
        assert!(is_valid_access_code(" milano2025 "));
        assert!(is_valid_access_code("MILANO2025"));
        assert!(is_valid_access_code("7dias"));
        assert!(!is_valid_access_code("WRONG"));
        assert!(!is_valid_access_code(""));
    }

    #[test]
    fn test_every_listed_code_unlocks() {
        for code in VALID_ACCESS_CODES {
            let mut gate = AccessGate::new();
            gate.edit(code.to_lowercase());
            assert_eq!(gate.submit(), Ok(()));
            assert!(gate.is_granted());
        }
    }

    #[test]
    fn test_wrong_code_sets_error_until_next_edit() {
        let mut gate = AccessGate::new();
        gate.edit("WRONG");
        assert_eq!(gate.submit(), Err(FormError::InvalidAccessCode));
        assert!(!gate.is_granted());
        let message = gate.error().unwrap();
        assert!(!message.is_empty());
        assert_eq!(gate.failed_attempts(), 1);

        gate.edit("WRONG2");
        assert_eq!(gate.error(), None);
        assert_eq!(gate.code(), "WRONG2");
    }

    #[test]
    fn test_repeated_failures_bump_attempts() {
        let mut gate = AccessGate::new();
        gate.edit("nope");
        let _ = gate.submit();
        let _ = gate.submit();
        assert_eq!(gate.failed_attempts(), 2);
    }

    #[test]
    fn test_submit_needs_input() {
        let mut gate = AccessGate::new();
        assert!(!gate.can_submit());
        gate.edit("x");
        assert!(gate.can_submit());
    }
}
