//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional on purpose: a missing key must reach the
//! validation rules and report the documented message, not die in the
//! deserializer.

use kernel::id::{QuestionId, QuizId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::get_results::UserResults;
use crate::domain::entities::{Answer, Question, Quiz, QuizAttempt};
use crate::domain::value_objects::{OptionIndex, QuestionDraft, SanitizedQuestion, SanitizedQuiz};

/// Request for POST /quiz
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionDraft>>,
}

/// Response for POST /quiz
///
/// The only payload that shows correct options; it goes to the creator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<QuestionResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
}

/// Response for GET /quiz/{id}, with correct options stripped
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedQuizResponse {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<SanitizedQuestionResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedQuestionResponse {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
}

/// Request for POST /quiz/{id}/answers (quiz id comes from the path)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub selected_option: Option<OptionIndex>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response for POST /quiz/{id}/answers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub is_correct: bool,
    pub correct_option: i64,
}

/// Response for GET /quiz/score/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResultsResponse {
    pub user_id: UserId,
    /// Sum of the per-quiz scores
    pub total_score: usize,
    pub quizzes: Vec<QuizResultResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultResponse {
    pub quiz_id: QuizId,
    pub score: usize,
    pub answers: Vec<AnswerResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub question_id: QuestionId,
    pub selected_option: i64,
    pub is_correct: bool,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: question.options,
            correct_option: question.correct_option,
        }
    }
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            questions: quiz.questions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SanitizedQuestion> for SanitizedQuestionResponse {
    fn from(question: SanitizedQuestion) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: question.options,
        }
    }
}

impl From<SanitizedQuiz> for SanitizedQuizResponse {
    fn from(quiz: SanitizedQuiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            questions: quiz.questions.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            question_id: answer.question_id,
            selected_option: answer.selected_option,
            is_correct: answer.is_correct,
        }
    }
}

impl From<QuizAttempt> for QuizResultResponse {
    fn from(attempt: QuizAttempt) -> Self {
        let score = attempt.score();
        Self {
            quiz_id: attempt.quiz_id,
            score,
            answers: attempt.answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UserResults> for UserResultsResponse {
    fn from(results: UserResults) -> Self {
        Self {
            user_id: results.user_id,
            total_score: results.score,
            quizzes: results.attempts.into_iter().map(Into::into).collect(),
        }
    }
}
