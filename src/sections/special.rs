//! Special character section - checks membership in the fixed allow-list.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{SPECIAL_CHARACTERS, is_special};

/// Checks if the password contains a character from [`SPECIAL_CHARACTERS`].
///
/// Whitespace and non-ASCII symbols do not count.
pub fn special_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(is_special)
}

// Reached only when the four previous rules passed, so the wording is
// "strong but improvable" and carries no level label.
pub(super) fn warning(score: usize) -> String {
    format!(
        "Your password is strong, but adding a special character ({}) will make it even better! (Score: {})",
        SPECIAL_CHARACTERS, score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_section_missing() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        assert!(!special_section(&pwd));
    }

    #[test]
    fn test_special_section_backslash_and_pipe() {
        for s in ["Abc123\\x", "Abc123|x", "Abc123-x", "Abc123`x"] {
            let pwd = SecretString::new(s.to_string().into());
            assert!(special_section(&pwd), "{s} should pass");
        }
    }

    #[test]
    fn test_special_section_space_is_not_special() {
        let pwd = SecretString::new("Has Space 123".to_string().into());
        assert!(!special_section(&pwd));
    }

    #[test]
    fn test_special_warning_is_improvable_wording() {
        let text = warning(4);
        assert!(text.starts_with("Your password is strong, but"));
        assert!(text.contains(SPECIAL_CHARACTERS));
    }
}
