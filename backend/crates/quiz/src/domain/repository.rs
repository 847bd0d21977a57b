//! Repository Traits
//!
//! Interfaces for quiz and attempt storage. Implementations live in the
//! infrastructure layer.

use kernel::id::{QuizId, UserId};

use crate::domain::entities::{Answer, Question, Quiz, QuizAttempt};
use crate::error::QuizResult;

/// Quiz repository trait
#[trait_variant::make(QuizRepository: Send)]
pub trait LocalQuizRepository {
    /// Store a new quiz, assigning the next sequential id
    ///
    /// Id assignment and insertion must be one atomic step so concurrent
    /// creations never collide on an id.
    async fn insert(&self, title: String, questions: Vec<Question>) -> QuizResult<Quiz>;

    /// Fetch a quiz by id
    async fn get(&self, quiz_id: &QuizId) -> QuizResult<Option<Quiz>>;
}

/// Attempt repository trait
#[trait_variant::make(AttemptRepository: Send)]
pub trait LocalAttemptRepository {
    /// Record an answer for a user
    ///
    /// Lazily creates the user's attempt list and the per-quiz attempt,
    /// rejects a second answer for the same question, and appends, all in
    /// one critical section. The first submission wins.
    async fn record_answer(
        &self,
        user_id: &UserId,
        quiz_id: &QuizId,
        answer: Answer,
    ) -> QuizResult<()>;

    /// All attempts recorded for a user
    ///
    /// Attempts keep first-answer order; `None` means the user has never
    /// submitted an answer.
    async fn attempts_for_user(&self, user_id: &UserId) -> QuizResult<Option<Vec<QuizAttempt>>>;
}
