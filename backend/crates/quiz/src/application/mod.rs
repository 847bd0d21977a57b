//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod create_quiz;
pub mod get_quiz;
pub mod get_results;
pub mod submit_answer;
