//! Get Quiz Use Case

use std::sync::Arc;

use kernel::id::QuizId;

use crate::domain::repository::QuizRepository;
use crate::domain::value_objects::SanitizedQuiz;
use crate::error::QuizResult;

/// Get Quiz Use Case
///
/// Returns the sanitized view, so correct options cannot leave this layer.
/// An unknown id is `None`, not an error; callers decide how absence is
/// reported.
pub struct GetQuizUseCase<Q>
where
    Q: QuizRepository,
{
    quiz_repo: Arc<Q>,
}

impl<Q> GetQuizUseCase<Q>
where
    Q: QuizRepository,
{
    pub fn new(quiz_repo: Arc<Q>) -> Self {
        Self { quiz_repo }
    }

    pub async fn execute(&self, quiz_id: &QuizId) -> QuizResult<Option<SanitizedQuiz>> {
        let quiz = self.quiz_repo.get(quiz_id).await?;
        Ok(quiz.map(|q| q.sanitized()))
    }
}
