//! Verifier parameters: use case behavior control.
//!
//! [`VerifierParams`] groups the static parameters that control
//! [`VerifyAnswerUseCase`](crate::use_cases::verify_answer::VerifyAnswerUseCase).
//! Whether a judge exists at all is not a parameter: it is decided by
//! handing the use case a judge, or not.

use std::time::Duration;

/// Default upper bound on one judge call.
pub const DEFAULT_JUDGE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierParams {
    /// Upper bound on a single judge call. Expiry counts as a judge failure.
    pub judge_timeout: Duration,
}

impl Default for VerifierParams {
    fn default() -> Self {
        Self {
            judge_timeout: DEFAULT_JUDGE_TIMEOUT,
        }
    }
}

impl VerifierParams {
    pub fn with_judge_timeout(mut self, timeout: Duration) -> Self {
        self.judge_timeout = timeout;
        self
    }
}
