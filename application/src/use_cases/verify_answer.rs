//! Verify Answer use case
//!
//! Decides whether a submitted answer is correct. The AI judge is consulted
//! once when one was injected; when it is absent, fails, times out or gives
//! an ambiguous verdict, the exact-match fallback decides instead.

use crate::config::VerifierParams;
use crate::ports::answer_judge::{AnswerJudge, JudgeError, JudgeQuery};
use crate::ports::question_catalog::QuestionCatalog;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use trivia_domain::core::string::preview;
use trivia_domain::{JudgeVerdict, Question, QuestionId, VerificationResult, answers_match};

/// Errors visible to the caller of the use case
///
/// Judge failures are deliberately absent: they are absorbed by the
/// fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyAnswerError {
    #[error("Question with ID {0} not found")]
    QuestionNotFound(QuestionId),
}

/// Input for the VerifyAnswer use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyAnswerInput {
    pub question_id: QuestionId,
    /// Raw submission; may be empty or padded
    pub user_answer: String,
}

impl VerifyAnswerInput {
    pub fn new(question_id: impl Into<QuestionId>, user_answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            user_answer: user_answer.into(),
        }
    }
}

/// Use case for verifying a trivia answer
///
/// Stateless between calls: safe to share behind an `Arc` and run
/// concurrently.
pub struct VerifyAnswerUseCase<C: QuestionCatalog + 'static> {
    catalog: Arc<C>,
    judge: Option<Arc<dyn AnswerJudge>>,
    params: VerifierParams,
}

impl<C: QuestionCatalog + 'static> VerifyAnswerUseCase<C> {
    /// Create a verifier. `judge: None` puts it in permanent fallback mode.
    pub fn new(catalog: Arc<C>, judge: Option<Arc<dyn AnswerJudge>>) -> Self {
        Self {
            catalog,
            judge,
            params: VerifierParams::default(),
        }
    }

    pub fn with_params(mut self, params: VerifierParams) -> Self {
        self.params = params;
        self
    }

    /// Whether an AI judge was configured
    pub fn judge_configured(&self) -> bool {
        self.judge.is_some()
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        input: VerifyAnswerInput,
    ) -> Result<VerificationResult, VerifyAnswerError> {
        self.verify(input, None).await
    }

    /// Execute the use case, abandoning the judge call if `cancellation`
    /// fires first. The fallback verdict is still returned.
    pub async fn execute_with_cancellation(
        &self,
        input: VerifyAnswerInput,
        cancellation: &CancellationToken,
    ) -> Result<VerificationResult, VerifyAnswerError> {
        self.verify(input, Some(cancellation)).await
    }

    async fn verify(
        &self,
        input: VerifyAnswerInput,
        cancellation: Option<&CancellationToken>,
    ) -> Result<VerificationResult, VerifyAnswerError> {
        let question = self
            .catalog
            .resolve(input.question_id)
            .ok_or(VerifyAnswerError::QuestionNotFound(input.question_id))?;

        info!(
            "Verifying answer for question {}: {}",
            question.id(),
            preview(question.prompt_text(), 50)
        );

        if let Some(judge) = &self.judge {
            match self
                .consult_judge(judge.as_ref(), &question, &input.user_answer, cancellation)
                .await
            {
                Ok(judged) => {
                    info!(
                        question_id = %question.id(),
                        correct = judged.verdict,
                        "AI judge verdict"
                    );
                    return Ok(VerificationResult::from_judge(&question, judged));
                }
                Err(e) => {
                    warn!(
                        "AI judge failed for question {}, using exact match: {}",
                        question.id(),
                        e
                    );
                }
            }
        } else {
            debug!("No AI judge configured, using exact match");
        }

        let is_correct = answers_match(question.expected_answer(), &input.user_answer);
        info!(
            question_id = %question.id(),
            correct = is_correct,
            "Exact-match verdict"
        );
        Ok(VerificationResult::from_exact_match(&question, is_correct))
    }

    /// Single judge attempt, bounded by the configured timeout
    async fn consult_judge(
        &self,
        judge: &dyn AnswerJudge,
        question: &Question,
        user_answer: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<JudgeVerdict, JudgeError> {
        let query = JudgeQuery::for_question(question, user_answer);
        let call = tokio::time::timeout(self.params.judge_timeout, judge.assess(&query));

        let outcome = match cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => return Err(JudgeError::Cancelled),
                    outcome = call => outcome,
                }
            }
            None => call.await,
        };

        match outcome {
            Ok(result) => result,
            Err(_) => Err(JudgeError::Timeout),
        }
    }
}
