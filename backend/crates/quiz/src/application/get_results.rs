//! Get Results Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::QuizAttempt;
use crate::domain::repository::AttemptRepository;
use crate::error::{QuizError, QuizResult};

/// Output DTO for a user's results
///
/// `score` is the total across all quizzes; per-quiz scores come from the
/// attempts themselves. Attempts keep first-answer order.
#[derive(Debug, Clone)]
pub struct UserResults {
    pub user_id: UserId,
    pub score: usize,
    pub attempts: Vec<QuizAttempt>,
}

/// Get Results Use Case
pub struct GetResultsUseCase<A>
where
    A: AttemptRepository,
{
    attempt_repo: Arc<A>,
}

impl<A> GetResultsUseCase<A>
where
    A: AttemptRepository,
{
    pub fn new(attempt_repo: Arc<A>) -> Self {
        Self { attempt_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> QuizResult<UserResults> {
        let attempts = self
            .attempt_repo
            .attempts_for_user(user_id)
            .await?
            .ok_or(QuizError::NoAttempts)?;

        let score = attempts.iter().map(QuizAttempt::score).sum();

        Ok(UserResults {
            user_id: user_id.clone(),
            score,
            attempts,
        })
    }
}
