//! Lowercase section - requires an ASCII letter a-z.

use secrecy::{ExposeSecret, SecretString};

use crate::verdict::StrengthLevel;

pub fn lowercase_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

pub(super) fn warning(score: usize) -> String {
    format!(
        "{} - Password should contain at least 1 lowercase letter (a-z). \
         Try adding numbers and special characters for extra security. (Score: {})",
        StrengthLevel::from_score(score),
        score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_section_missing() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert!(!lowercase_section(&pwd));
    }

    #[test]
    fn test_lowercase_section_present() {
        let pwd = SecretString::new("UPPERcASE".to_string().into());
        assert!(lowercase_section(&pwd));
    }

    #[test]
    fn test_lowercase_warning_mentions_score() {
        let text = warning(2);
        assert!(text.starts_with("Medium - "));
        assert!(text.ends_with("(Score: 2)"));
    }
}
