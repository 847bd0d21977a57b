//! HTTP Handlers
//!
//! Thin layer wiring requests into use cases. Bodies are parsed with the
//! kernel `Json` extractor, so malformed payloads answer in the same
//! `{"error": ...}` shape as the domain errors.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::Json;
use kernel::id::{QuizId, UserId};

use crate::application::config::QuizConfig;
use crate::application::create_quiz::{CreateQuizInput, CreateQuizUseCase};
use crate::application::get_quiz::GetQuizUseCase;
use crate::application::get_results::GetResultsUseCase;
use crate::application::submit_answer::{SubmitAnswerInput, SubmitAnswerUseCase};
use crate::domain::repository::{AttemptRepository, QuizRepository};
use crate::error::{QuizError, QuizResult};
use crate::presentation::dto::{
    CreateQuizRequest, QuizResponse, SanitizedQuizResponse, SubmitAnswerRequest,
    SubmitAnswerResponse, UserResultsResponse,
};

/// Shared state for quiz handlers
#[derive(Clone)]
pub struct QuizAppState<R>
where
    R: QuizRepository + AttemptRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<QuizConfig>,
}

/// POST /quiz
///
/// Creates a quiz and answers 201 with the stored representation,
/// correct options included.
pub async fn create_quiz<R>(
    State(state): State<QuizAppState<R>>,
    Json(req): Json<CreateQuizRequest>,
) -> QuizResult<impl IntoResponse>
where
    R: QuizRepository + AttemptRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateQuizUseCase::new(state.repo.clone(), state.config.clone());

    let quiz = use_case
        .execute(CreateQuizInput {
            title: req.title,
            questions: req.questions,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(QuizResponse::from(quiz))))
}

/// GET /quiz/{id}
///
/// Answers the quiz without its correct options, or 404.
pub async fn get_quiz<R>(
    State(state): State<QuizAppState<R>>,
    Path(quiz_id): Path<QuizId>,
) -> QuizResult<Json<SanitizedQuizResponse>>
where
    R: QuizRepository + AttemptRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetQuizUseCase::new(state.repo.clone());

    let quiz = use_case
        .execute(&quiz_id)
        .await?
        .ok_or(QuizError::QuizNotFound)?;

    Ok(Json(SanitizedQuizResponse::from(quiz)))
}

/// POST /quiz/{id}/answers
///
/// Records an answer and reveals correctness plus the correct option.
pub async fn submit_answer<R>(
    State(state): State<QuizAppState<R>>,
    Path(quiz_id): Path<QuizId>,
    Json(req): Json<SubmitAnswerRequest>,
) -> QuizResult<Json<SubmitAnswerResponse>>
where
    R: QuizRepository + AttemptRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitAnswerUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(SubmitAnswerInput {
            quiz_id: Some(quiz_id.into_string()),
            question_id: req.question_id,
            selected_option: req.selected_option,
            user_id: req.user_id,
        })
        .await?;

    Ok(Json(SubmitAnswerResponse {
        is_correct: output.is_correct,
        correct_option: output.correct_option,
    }))
}

/// GET /quiz/score/{id}
///
/// Answers the user's attempts across all quizzes with the total score.
pub async fn get_results<R>(
    State(state): State<QuizAppState<R>>,
    Path(user_id): Path<UserId>,
) -> QuizResult<Json<UserResultsResponse>>
where
    R: QuizRepository + AttemptRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetResultsUseCase::new(state.repo.clone());

    let results = use_case.execute(&user_id).await?;

    Ok(Json(UserResultsResponse::from(results)))
}
