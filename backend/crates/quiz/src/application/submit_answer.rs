//! Submit Answer Use Case

use std::sync::Arc;

use kernel::id::{QuestionId, QuizId, UserId};

use crate::domain::entities::Answer;
use crate::domain::repository::{AttemptRepository, QuizRepository};
use crate::domain::validation::{validate_selected_option, validate_submission_input};
use crate::domain::value_objects::OptionIndex;
use crate::error::{QuizError, QuizResult};

/// Input DTO for answer submission
///
/// Everything arrives unvalidated; the check order inside `execute`
/// decides which problem a bad submission reports.
#[derive(Debug, Clone, Default)]
pub struct SubmitAnswerInput {
    pub quiz_id: Option<String>,
    pub question_id: Option<String>,
    pub selected_option: Option<OptionIndex>,
    pub user_id: Option<String>,
}

/// Output DTO for answer submission
///
/// The correct option is revealed in both directions: after a right and
/// after a wrong answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerOutput {
    pub is_correct: bool,
    pub correct_option: i64,
}

/// Submit Answer Use Case
///
/// Check order: field presence, selection type, quiz lookup, question
/// lookup, selection range, then the atomic duplicate check and append in
/// the store.
pub struct SubmitAnswerUseCase<Q, A>
where
    Q: QuizRepository,
    A: AttemptRepository,
{
    quiz_repo: Arc<Q>,
    attempt_repo: Arc<A>,
}

impl<Q, A> SubmitAnswerUseCase<Q, A>
where
    Q: QuizRepository,
    A: AttemptRepository,
{
    pub fn new(quiz_repo: Arc<Q>, attempt_repo: Arc<A>) -> Self {
        Self {
            quiz_repo,
            attempt_repo,
        }
    }

    pub async fn execute(&self, input: SubmitAnswerInput) -> QuizResult<SubmitAnswerOutput> {
        let selected_option = validate_submission_input(
            input.user_id.as_deref(),
            input.quiz_id.as_deref(),
            input.question_id.as_deref(),
            input.selected_option.as_ref(),
        )?;

        // Presence was validated above
        let user_id = UserId::from(input.user_id.unwrap_or_default());
        let quiz_id = QuizId::from(input.quiz_id.unwrap_or_default());
        let question_id = QuestionId::from(input.question_id.unwrap_or_default());

        let quiz = self
            .quiz_repo
            .get(&quiz_id)
            .await?
            .ok_or(QuizError::QuizNotFound)?;
        let question = quiz
            .question(&question_id)
            .ok_or(QuizError::QuestionNotFound)?;

        validate_selected_option(selected_option, question.options.len())?;

        let is_correct = question.is_correct(selected_option);
        let correct_option = question.correct_option;
        let answer = Answer {
            question_id: question_id.clone(),
            selected_option,
            is_correct,
        };

        // Duplicate detection and append happen atomically in the store
        self.attempt_repo
            .record_answer(&user_id, &quiz_id, answer)
            .await?;

        tracing::info!(
            quiz_id = %quiz_id,
            question_id = %question_id,
            is_correct,
            "Answer recorded"
        );

        Ok(SubmitAnswerOutput {
            is_correct,
            correct_option,
        })
    }
}
