//! Uppercase section - requires an ASCII letter A-Z.

use secrecy::{ExposeSecret, SecretString};

use crate::verdict::StrengthLevel;

pub fn uppercase_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

pub(super) fn warning(score: usize) -> String {
    format!(
        "{} - Password should contain at least 1 uppercase letter (A-Z). (Score: {})",
        StrengthLevel::from_score(score),
        score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_section_missing() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert!(!uppercase_section(&pwd));
    }

    #[test]
    fn test_uppercase_section_present() {
        let pwd = SecretString::new("lowerUpper".to_string().into());
        assert!(uppercase_section(&pwd));
    }

    #[test]
    fn test_uppercase_section_ignores_non_ascii() {
        let pwd = SecretString::new("ÉÀÖabcdef".to_string().into());
        assert!(!uppercase_section(&pwd));
    }
}
