//! Quiz Configuration

/// Quiz configuration
///
/// Bounds for quiz creation. The defaults match the published API contract;
/// the error messages quote whichever values are configured.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Minimum number of options a question must carry
    pub min_options: usize,
    /// Maximum number of options a question may carry
    pub max_options: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            min_options: 2,
            max_options: 6,
        }
    }
}
