//! Domain Entities
//!
//! Core entities of the quiz domain. Quizzes are immutable once created;
//! attempts grow by appending answers.

use kernel::id::{QuestionId, QuizId};

use crate::domain::value_objects::{SanitizedQuestion, SanitizedQuiz};

/// A single multiple-choice question inside a quiz
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    /// 1-based index into `options`; never 0, but otherwise unchecked
    pub correct_option: i64,
}

impl Question {
    /// Whether a 1-based selection hits the correct option
    pub fn is_correct(&self, selected_option: i64) -> bool {
        self.correct_option == selected_option
    }
}

/// A titled, ordered collection of questions
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Find a question by its id
    pub fn question(&self, question_id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == *question_id)
    }

    /// View of the quiz safe to show to a quiz-taker (correct options removed)
    pub fn sanitized(&self) -> SanitizedQuiz {
        SanitizedQuiz {
            id: self.id.clone(),
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| SanitizedQuestion {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

/// One recorded selection, immutable once stored
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_option: i64,
    pub is_correct: bool,
}

/// A user's running answer list for one quiz
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    pub quiz_id: QuizId,
    pub answers: Vec<Answer>,
}

impl QuizAttempt {
    /// Empty attempt for a quiz, created on the first answer
    pub fn new(quiz_id: QuizId) -> Self {
        Self {
            quiz_id,
            answers: Vec::new(),
        }
    }

    /// Whether a question was already answered in this attempt
    pub fn has_answered(&self, question_id: &QuestionId) -> bool {
        self.answers.iter().any(|a| a.question_id == *question_id)
    }

    /// Count of correct answers in this attempt
    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}
