//! Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Storage implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Storage Model
//! - Quizzes and attempts live in process memory for the lifetime of the server
//! - Repository traits keep the storage swappable without touching the use cases
//! - Answer recording is atomic: the first submission for a question wins and
//!   duplicates are rejected

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use infra::memory::InMemoryQuizRepository;
pub use presentation::router::{quiz_router, quiz_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
