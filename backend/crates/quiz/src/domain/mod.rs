//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Quiz, Question, Answer, QuizAttempt)
//! - Validation rules applied before any state mutation
//! - Repository traits (interfaces)
//! - Domain value objects

pub mod entities;
pub mod validation;
pub mod repository;
pub mod value_objects;
