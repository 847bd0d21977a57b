//! In-Memory Repository Implementation
//!
//! Process-local storage backing both repository traits. State is shared
//! across handlers through `Arc` and guarded by `RwLock`s; everything is
//! lost when the process exits.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use kernel::id::{Id, QuizId, UserId};

use crate::domain::entities::{Answer, Question, Quiz, QuizAttempt};
use crate::domain::repository::{AttemptRepository, QuizRepository};
use crate::error::{QuizError, QuizResult};

/// Shared stores behind the repository handle
///
/// Attempts are kept per user as a `Vec` so quizzes stay in first-answer
/// order when results are reported.
#[derive(Debug, Default)]
struct Stores {
    quizzes: RwLock<HashMap<QuizId, Quiz>>,
    attempts_by_user: RwLock<HashMap<UserId, Vec<QuizAttempt>>>,
}

/// In-memory quiz and attempt repository
///
/// Cheap to clone; clones share the same underlying stores.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizRepository {
    stores: Arc<Stores>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock means another handler panicked mid-write; report an
// internal fault instead of propagating the panic.
fn poisoned<G>(_err: PoisonError<G>) -> QuizError {
    QuizError::Internal("storage lock poisoned".to_string())
}

impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, title: String, questions: Vec<Question>) -> QuizResult<Quiz> {
        let mut quizzes = self.stores.quizzes.write().map_err(poisoned)?;

        // Id assignment and insertion share the write lock, so concurrent
        // creations cannot collide on an id
        let id: QuizId = Id::from_sequence(quizzes.len() + 1);
        let quiz = Quiz {
            id: id.clone(),
            title,
            questions,
        };
        quizzes.insert(id, quiz.clone());

        Ok(quiz)
    }

    async fn get(&self, quiz_id: &QuizId) -> QuizResult<Option<Quiz>> {
        let quizzes = self.stores.quizzes.read().map_err(poisoned)?;
        Ok(quizzes.get(quiz_id).cloned())
    }
}

impl AttemptRepository for InMemoryQuizRepository {
    async fn record_answer(
        &self,
        user_id: &UserId,
        quiz_id: &QuizId,
        answer: Answer,
    ) -> QuizResult<()> {
        let mut attempts_by_user = self.stores.attempts_by_user.write().map_err(poisoned)?;
        let attempts = attempts_by_user.entry(user_id.clone()).or_default();

        let index = match attempts.iter().position(|a| a.quiz_id == *quiz_id) {
            Some(index) => index,
            None => {
                attempts.push(QuizAttempt::new(quiz_id.clone()));
                attempts.len() - 1
            }
        };
        let attempt = &mut attempts[index];

        // Still under the write lock: a racing duplicate loses here
        if attempt.has_answered(&answer.question_id) {
            return Err(QuizError::AlreadyAnswered);
        }
        attempt.answers.push(answer);

        Ok(())
    }

    async fn attempts_for_user(&self, user_id: &UserId) -> QuizResult<Option<Vec<QuizAttempt>>> {
        let attempts_by_user = self.stores.attempts_by_user.read().map_err(poisoned)?;
        Ok(attempts_by_user.get(user_id).cloned())
    }
}
