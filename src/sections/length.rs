//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use crate::verdict::StrengthLevel;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in `char`s, not bytes.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

pub(super) fn warning(score: usize) -> String {
    format!(
        "{} - Password is too short! It should be at least {} characters long. (Score: {})",
        StrengthLevel::from_score(score),
        MIN_LENGTH,
        score
    )
}
