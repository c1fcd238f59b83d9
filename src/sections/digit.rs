//! Digit section - requires a digit 0-9.

use secrecy::{ExposeSecret, SecretString};

use crate::verdict::StrengthLevel;

pub fn digit_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

pub(super) fn warning(score: usize) -> String {
    format!(
        "{} - Password should contain at least 1 number (0-9). \
         Try adding a number to enhance security. (Score: {})",
        StrengthLevel::from_score(score),
        score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_section_missing() {
        let pwd = SecretString::new("NoNumbers!".to_string().into());
        assert!(!digit_section(&pwd));
    }

    #[test]
    fn test_digit_section_present() {
        let pwd = SecretString::new("Numb3rs".to_string().into());
        assert!(digit_section(&pwd));
    }

    #[test]
    fn test_digit_section_ignores_other_scripts() {
        // Arabic-Indic digits are not 0-9
        let pwd = SecretString::new("Password٣".to_string().into());
        assert!(!digit_section(&pwd));
    }
}
