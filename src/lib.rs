//! Password strength meter library
//!
//! Evaluates passwords against an ordered rule chain, keeps a bounded
//! per-session history of accepted passwords and generates random passwords
//! from a cryptographically secure source.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_HISTORY_EXPORT_DIR`: Directory for `password_history.txt`
//!   (default: `./`)
//! - `PWD_GENERATOR_LENGTH`: Length a UI preselects for the generator
//!   (default: `8`, clamped to `[8, 20]`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{MemorySession, PasswordMeter, config};
//! use secrecy::SecretString;
//!
//! let mut meter = PasswordMeter::new(MemorySession::new());
//!
//! let password = SecretString::new("Str0ng!Pass".to_string().into());
//! let report = meter.check(&password);
//! println!("{}", report.verdict.message);
//!
//! if let Some(accepted) = report.accepted {
//!     for line in accepted.recent {
//!         println!("{line}");
//!     }
//!     meter
//!         .export()
//!         .write_to_dir(config::history_export_dir())
//!         .expect("Failed to export history");
//! }
//!
//! let generated = meter
//!     .generate(config::default_generator_length())
//!     .expect("length is at least 8");
//! println!("Secure Password: {generated}");
//! ```

pub mod charset;
pub mod config;
mod evaluator;
mod generator;
mod history;
mod meter;
mod sections;
mod verdict;

// Public API
pub use evaluator::evaluate_password;
pub use generator::{
    GeneratorError, MAX_UI_LENGTH, MIN_GENERATED_LENGTH, clamp_ui_length, generate_password,
    generate_password_with,
};
pub use history::{
    EXPORT_FILE_NAME, EXPORT_MIME, HISTORY_CAPACITY, HistoryError, HistoryExport, HistoryTracker,
    MemorySession, RecordOutcome, SessionStore,
};
pub use meter::{Accepted, CheckReport, PasswordMeter};
pub use sections::{MIN_LENGTH, RULES, Rule, RuleKind};
pub use verdict::{MessageStyle, StrengthLevel, Verdict};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_cancellable, evaluate_password_tx};
