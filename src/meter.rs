//! Per-session facade tying the evaluator, the history and the generator together.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password;
use crate::generator::{GeneratorError, generate_password};
use crate::history::{HistoryExport, HistoryTracker, MemorySession, RecordOutcome, SessionStore};
use crate::verdict::Verdict;

/// Result of [`PasswordMeter::check`].
///
/// `accepted` is only set for passwords whose verdict passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub accepted: Option<Accepted>,
}

/// Data shown for an accepted password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The evaluated password, for read-only display.
    pub password: String,
    pub outcome: RecordOutcome,
    /// History lines, most recent first, each prefixed with a 1-based index.
    pub recent: Vec<String>,
}

/// One interactive session.
#[derive(Debug, Default)]
pub struct PasswordMeter<S: SessionStore = MemorySession> {
    history: HistoryTracker<S>,
}

impl<S: SessionStore> PasswordMeter<S> {
    pub fn new(store: S) -> Self {
        Self {
            history: HistoryTracker::new(store),
        }
    }

    /// Evaluates `password`; records it in the history only if it passed.
    pub fn check(&mut self, password: &SecretString) -> CheckReport {
        let verdict = evaluate_password(password);
        if !verdict.passed {
            return CheckReport {
                verdict,
                accepted: None,
            };
        }

        let plain = password.expose_secret().to_string();
        let outcome = self.history.record(&plain);
        CheckReport {
            verdict,
            accepted: Some(Accepted {
                password: plain,
                outcome,
                recent: self.history.render_recent(),
            }),
        }
    }

    pub fn generate(&self, length: usize) -> Result<String, GeneratorError> {
        generate_password(length)
    }

    pub fn history(&self) -> &HistoryTracker<S> {
        &self.history
    }

    pub fn export(&self) -> HistoryExport {
        self.history.export_artifact()
    }
}
