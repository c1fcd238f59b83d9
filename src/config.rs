//! Environment-driven settings.
//!
//! Values are read at call time, so hosts may change them between sessions.

use std::path::PathBuf;

use crate::generator::{MIN_GENERATED_LENGTH, clamp_ui_length};

pub const HISTORY_EXPORT_DIR_VAR: &str = "PWD_HISTORY_EXPORT_DIR";
pub const GENERATOR_LENGTH_VAR: &str = "PWD_GENERATOR_LENGTH";

/// Returns the directory the history artifact is written to.
///
/// Priority:
/// 1. Environment variable `PWD_HISTORY_EXPORT_DIR`
/// 2. Default path `./`
pub fn history_export_dir() -> PathBuf {
    std::env::var(HISTORY_EXPORT_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./"))
}

/// Returns the generator length a UI should preselect.
///
/// Reads `PWD_GENERATOR_LENGTH`, clamped into the UI range. Missing or
/// unparsable values fall back to the minimum length.
pub fn default_generator_length() -> usize {
    match std::env::var(GENERATOR_LENGTH_VAR) {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => clamp_ui_length(value),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring unparsable {}: {:?}", GENERATOR_LENGTH_VAR, raw);
                MIN_GENERATED_LENGTH
            }
        },
        Err(_) => MIN_GENERATED_LENGTH,
    }
}
