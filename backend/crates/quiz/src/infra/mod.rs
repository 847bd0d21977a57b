//! Infrastructure Layer
//!
//! Storage implementations. The only backend here is process memory.

pub mod memory;

pub use memory::InMemoryQuizRepository;
