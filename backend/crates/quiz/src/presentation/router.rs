//! Quiz Router

use crate::application::config::QuizConfig;
use crate::domain::repository::{AttemptRepository, QuizRepository};
use crate::infra::memory::InMemoryQuizRepository;
use crate::presentation::handlers::{self, QuizAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the quiz router with the in-memory repository
pub fn quiz_router(repo: InMemoryQuizRepository, config: QuizConfig) -> Router {
    let state = QuizAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::create_quiz::<InMemoryQuizRepository>))
        .route("/{id}", get(handlers::get_quiz::<InMemoryQuizRepository>))
        .route(
            "/{id}/answers",
            post(handlers::submit_answer::<InMemoryQuizRepository>),
        )
        .route(
            "/score/{id}",
            get(handlers::get_results::<InMemoryQuizRepository>),
        )
        .with_state(state)
}

/// Create a generic quiz router for any repository implementation
pub fn quiz_router_generic<R>(repo: R, config: QuizConfig) -> Router
where
    R: QuizRepository + AttemptRepository + Clone + Send + Sync + 'static,
{
    let state = QuizAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", post(handlers::create_quiz::<R>))
        .route("/{id}", get(handlers::get_quiz::<R>))
        .route("/{id}/answers", post(handlers::submit_answer::<R>))
        .route("/score/{id}", get(handlers::get_results::<R>))
        .with_state(state)
}
