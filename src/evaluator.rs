//! Password strength evaluator - runs the rule chain.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::RULES;
use crate::verdict::Verdict;

/// Evaluates a password against the rule chain.
///
/// Rules run in order and the first failure stops the chain: no later rule
/// is checked. Never fails; every input, including the empty string,
/// produces a verdict.
pub fn evaluate_password(password: &SecretString) -> Verdict {
    run_chain(password, || false).unwrap_or_else(|| Verdict::succeeded(RULES.len()))
}

/// Same as [`evaluate_password`], checking `token` before each rule.
///
/// Returns `None` if the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_password_cancellable(
    password: &SecretString,
    token: &CancellationToken,
) -> Option<Verdict> {
    if token.is_cancelled() {
        return None;
    }
    let mut cancelled = false;
    let verdict = run_chain(password, || {
        cancelled = token.is_cancelled();
        cancelled
    });
    if cancelled {
        #[cfg(feature = "tracing")]
        tracing::debug!("password evaluation cancelled");
        return None;
    }
    Some(verdict.unwrap_or_else(|| Verdict::succeeded(RULES.len())))
}

// Returns `Some(verdict)` for the first failing rule, `None` when the chain
// completed. `should_stop` is polled before each rule after the first.
fn run_chain(password: &SecretString, mut should_stop: impl FnMut() -> bool) -> Option<Verdict> {
    for (score, rule) in RULES.iter().enumerate() {
        if score > 0 && should_stop() {
            return None;
        }
        if !(rule.check)(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = %rule.kind, score, "password rule failed");
            return Some(Verdict::failed(score, rule.kind, (rule.warning)(score)));
        }
    }
    None
}

/// Async version that sends the verdict via channel.
///
/// Waits [`DEBOUNCE`] first so that a host can cancel stale evaluations
/// while the user is still typing. Nothing is sent when cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Verdict>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let Some(verdict) = evaluate_password_cancellable(password, &token) else {
        return;
    };

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: {}", _e);
    }
}

#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let verdict = evaluate_password_cancellable(&secret("SomePassword123!"), &token);
        assert!(verdict.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let verdict = evaluate_password_cancellable(&secret("TestPass123!"), &token)
            .expect("not cancelled");
        assert!(verdict.passed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(&secret("TestPass123"), token, tx).await;

        let verdict = rx.recv().await.expect("Should receive verdict");
        assert_eq!(verdict.score, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(&secret("TestPass123!"), token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
