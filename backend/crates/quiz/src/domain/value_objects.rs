//! Domain Value Objects
//!
//! Immutable value types of the quiz domain. `OptionIndex` and
//! `QuestionDraft` model client input before validation, so they carry
//! serde derives; everything else is plain data.

use kernel::id::{QuestionId, QuizId};
use serde::Deserialize;

/// A client-supplied option index before validation
///
/// Clients may send the value as a JSON number or as text. Which error the
/// textual form maps to is a validation decision, so the distinction is kept
/// here instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionIndex {
    Number(i64),
    Text(String),
}

impl OptionIndex {
    /// Numeric value, if the client sent a number
    pub fn as_number(&self) -> Option<i64> {
        match self {
            OptionIndex::Number(n) => Some(*n),
            OptionIndex::Text(_) => None,
        }
    }
}

/// An unvalidated question as supplied by the client
///
/// Every field is optional so that presence checks stay a validation concern
/// and report the documented error messages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_option: Option<OptionIndex>,
}

/// Quiz view with correct options removed, safe for quiz-takers
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedQuiz {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<SanitizedQuestion>,
}

/// Question view for quiz-takers
///
/// The correct option does not exist on this type, so it cannot leak
/// past the use-case layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedQuestion {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
}
