//! Quiz Error Types
//!
//! This module provides quiz-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz-specific error variants
///
/// These map to the HTTP statuses and message texts that clients match on,
/// so both are part of the API contract and must stay stable.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Create payload failed the shape checks (title / questions / text / options)
    #[error("Invalid input data.")]
    InvalidInput,

    /// A question carries more options than allowed
    #[error("Question {position}: Only {max} maximum options allowed.")]
    TooManyOptions { position: usize, max: usize },

    /// A question carries fewer options than allowed
    #[error("Question {position}: At least {min} options required.")]
    TooFewOptions { position: usize, min: usize },

    /// correctOption is the reserved value 0
    #[error("Question {position}: correctOption cannot be 0.")]
    CorrectOptionZero { position: usize },

    /// correctOption is absent or not numeric
    #[error("Question {position}: correctOption must be a number.")]
    CorrectOptionNotNumber { position: usize },

    /// Submission is missing userId, quizId, questionId or selectedOption
    #[error("Missing required fields.")]
    MissingFields,

    /// selectedOption is textual rather than numeric
    #[error("Only Integer value accepted in selectedOption.")]
    NonIntegerOption,

    /// selectedOption falls outside the question's option range
    #[error("Invalid selected option.")]
    InvalidOption,

    /// The question was already answered by this user
    #[error("Question has already been answered.")]
    AlreadyAnswered,

    /// Quiz id is unknown
    #[error("Quiz not found.")]
    QuizNotFound,

    /// Question id is unknown within the quiz
    #[error("Question not found.")]
    QuestionNotFound,

    /// The user has no recorded attempts
    #[error("The User attempt for the quiz not found.")]
    NoAttempts,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::InvalidInput
            | QuizError::TooManyOptions { .. }
            | QuizError::TooFewOptions { .. }
            | QuizError::CorrectOptionZero { .. }
            | QuizError::CorrectOptionNotNumber { .. }
            | QuizError::MissingFields
            | QuizError::NonIntegerOption
            | QuizError::InvalidOption
            | QuizError::AlreadyAnswered => StatusCode::BAD_REQUEST,

            QuizError::QuizNotFound | QuizError::QuestionNotFound | QuizError::NoAttempts => {
                StatusCode::NOT_FOUND
            }

            QuizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::QuizNotFound | QuizError::QuestionNotFound | QuizError::NoAttempts => {
                ErrorKind::NotFound
            }
            QuizError::Internal(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuizError::Internal(message) => {
                tracing::error!(message = %message, "Quiz internal error");
            }
            QuizError::AlreadyAnswered => {
                tracing::warn!("Repeated answer submission rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Quiz request rejected");
            }
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
