//! Create Quiz Use Case

use std::sync::Arc;

use kernel::id::Id;

use crate::application::config::QuizConfig;
use crate::domain::entities::{Question, Quiz};
use crate::domain::repository::QuizRepository;
use crate::domain::validation::{
    validate_correct_option, validate_option_counts, validate_quiz_shape,
};
use crate::domain::value_objects::QuestionDraft;
use crate::error::QuizResult;

/// Input DTO for quiz creation
///
/// Fields stay optional here; presence is a validation concern.
#[derive(Debug, Clone, Default)]
pub struct CreateQuizInput {
    pub title: Option<String>,
    pub questions: Option<Vec<QuestionDraft>>,
}

/// Create Quiz Use Case
///
/// Validates the drafts, assigns positional question ids and stores the
/// quiz. Returns the stored quiz including correct options, which only the
/// creation response may show.
pub struct CreateQuizUseCase<Q>
where
    Q: QuizRepository,
{
    quiz_repo: Arc<Q>,
    config: Arc<QuizConfig>,
}

impl<Q> CreateQuizUseCase<Q>
where
    Q: QuizRepository,
{
    pub fn new(quiz_repo: Arc<Q>, config: Arc<QuizConfig>) -> Self {
        Self { quiz_repo, config }
    }

    pub async fn execute(&self, input: CreateQuizInput) -> QuizResult<Quiz> {
        let (title, drafts) =
            validate_quiz_shape(input.title.as_deref(), input.questions.as_deref())?;
        validate_option_counts(drafts, self.config.min_options, self.config.max_options)?;

        // Question ids are positional, assigned once validation has passed
        let mut questions = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.iter().enumerate() {
            let correct_option = validate_correct_option(draft, index)?;
            questions.push(Question {
                id: Id::from_sequence(index + 1),
                text: draft.text.clone().unwrap_or_default(),
                options: draft.options.clone().unwrap_or_default(),
                correct_option,
            });
        }

        let quiz = self.quiz_repo.insert(title.to_string(), questions).await?;

        tracing::info!(
            quiz_id = %quiz.id,
            questions = quiz.questions.len(),
            "Quiz created"
        );

        Ok(quiz)
    }
}
