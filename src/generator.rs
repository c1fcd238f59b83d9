//! Secure password generator.
//!
//! Every generated password holds at least one uppercase letter, one
//! lowercase letter, one digit and one special character. Draws and the
//! final shuffle use a cryptographically secure source only: the
//! [`CryptoRng`] bound on [`generate_password_with`] rejects general-purpose
//! generators at compile time.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;

use crate::charset::{DIGITS, LOWERCASE, SPECIAL_CHARACTERS, UPPERCASE, all_characters};

/// Smallest accepted length: one slot per mandatory class, plus four.
pub const MIN_GENERATED_LENGTH: usize = 8;

/// Largest length a UI offers. Not enforced by the generator.
pub const MAX_UI_LENGTH: usize = 20;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least {minimum} to include all required character types (got {length})")]
    InvalidArgument { length: usize, minimum: usize },
}

/// Generates a password of `length` characters with the OS random source.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] if `length` is below
/// [`MIN_GENERATED_LENGTH`]. Nothing is drawn in that case.
pub fn generate_password(length: usize) -> Result<String, GeneratorError> {
    generate_password_with(length, &mut OsRng)
}

/// Generates a password drawing from `rng`.
pub fn generate_password_with<R>(length: usize, rng: &mut R) -> Result<String, GeneratorError>
where
    R: RngCore + CryptoRng,
{
    if length < MIN_GENERATED_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!(length, "Rejected password generation request");
        return Err(GeneratorError::InvalidArgument {
            length,
            minimum: MIN_GENERATED_LENGTH,
        });
    }

    let mut password: Vec<char> = Vec::with_capacity(length);
    for class in [UPPERCASE, LOWERCASE, DIGITS, SPECIAL_CHARACTERS] {
        let class: Vec<char> = class.chars().collect();
        password.push(pick(&class, rng));
    }

    let all = all_characters();
    for _ in 0..length - 4 {
        password.push(pick(&all, rng));
    }

    // Fisher-Yates over the whole sequence, mandatory characters included.
    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "Generated password");

    Ok(password.into_iter().collect())
}

// Uniform pick; `gen_range` rejects out-of-zone samples instead of using modulo.
fn pick<R: RngCore + CryptoRng>(alphabet: &[char], rng: &mut R) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Clamps a user-entered length into `[MIN_GENERATED_LENGTH, MAX_UI_LENGTH]`.
///
/// This is the UI policy only; [`generate_password`] itself never clamps.
pub fn clamp_ui_length(requested: i64) -> usize {
    requested.clamp(MIN_GENERATED_LENGTH as i64, MAX_UI_LENGTH as i64) as usize
}
