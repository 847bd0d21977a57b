//! Validation Rules
//!
//! Pure validation functions applied before any state mutation. Check order
//! matters: it decides which error a payload with several problems reports,
//! and clients match on the resulting messages.

use crate::domain::value_objects::{OptionIndex, QuestionDraft};
use crate::error::{QuizError, QuizResult};

/// Shape pass for quiz creation
///
/// Title and question list must be present and non-empty, and every question
/// needs non-empty text plus a non-empty option list. Any violation reports
/// the same generic error. Returns the proven-present parts.
pub fn validate_quiz_shape<'a>(
    title: Option<&'a str>,
    questions: Option<&'a [QuestionDraft]>,
) -> QuizResult<(&'a str, &'a [QuestionDraft])> {
    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => return Err(QuizError::InvalidInput),
    };
    let questions = match questions {
        Some(qs) if !qs.is_empty() => qs,
        _ => return Err(QuizError::InvalidInput),
    };

    let drafts_ok = questions.iter().all(|q| {
        q.text.as_deref().is_some_and(|t| !t.is_empty())
            && q.options.as_deref().is_some_and(|o| !o.is_empty())
    });
    if !drafts_ok {
        return Err(QuizError::InvalidInput);
    }

    Ok((title, questions))
}

/// Option-count pass for quiz creation
///
/// Runs after the shape pass, so options are known to be present. Stops at
/// the first offending question; the maximum is checked before the minimum.
pub fn validate_option_counts(
    questions: &[QuestionDraft],
    min_options: usize,
    max_options: usize,
) -> QuizResult<()> {
    for (index, question) in questions.iter().enumerate() {
        let count = question.options.as_deref().map_or(0, |o| o.len());
        if count > max_options {
            return Err(QuizError::TooManyOptions {
                position: index + 1,
                max: max_options,
            });
        }
        if count < min_options {
            return Err(QuizError::TooFewOptions {
                position: index + 1,
                min: min_options,
            });
        }
    }
    Ok(())
}

/// correctOption pass for one question (0-based `index`)
///
/// The reserved value 0 is reported before the non-numeric case. The value
/// is not checked against the option count.
pub fn validate_correct_option(question: &QuestionDraft, index: usize) -> QuizResult<i64> {
    let number = question.correct_option.as_ref().and_then(OptionIndex::as_number);
    if number == Some(0) {
        return Err(QuizError::CorrectOptionZero { position: index + 1 });
    }
    number.ok_or(QuizError::CorrectOptionNotNumber { position: index + 1 })
}

/// Presence and type checks for an answer submission
///
/// Identifier checks come first; an absent or textual selection is only
/// reported once all identifiers are present. Returns the numeric selection.
pub fn validate_submission_input(
    user_id: Option<&str>,
    quiz_id: Option<&str>,
    question_id: Option<&str>,
    selected_option: Option<&OptionIndex>,
) -> QuizResult<i64> {
    let present = |value: Option<&str>| value.is_some_and(|v| !v.is_empty());
    if !present(user_id) || !present(quiz_id) || !present(question_id) {
        return Err(QuizError::MissingFields);
    }

    match selected_option {
        None => Err(QuizError::MissingFields),
        Some(OptionIndex::Text(_)) => Err(QuizError::NonIntegerOption),
        Some(OptionIndex::Number(n)) => Ok(*n),
    }
}

/// Range check for a selection against a question's option count
///
/// Options are 1-indexed for the client; both bounds are inclusive.
pub fn validate_selected_option(selected_option: i64, option_count: usize) -> QuizResult<()> {
    if selected_option < 1 || selected_option > option_count as i64 {
        return Err(QuizError::InvalidOption);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, options: &[&str]) -> QuestionDraft {
        QuestionDraft {
            text: Some(text.to_string()),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            correct_option: Some(OptionIndex::Number(1)),
        }
    }

    #[test]
    fn test_shape_rejects_empty_title() {
        let questions = [draft("Q1", &["a", "b"])];
        let result = validate_quiz_shape(Some(""), Some(&questions));
        assert!(matches!(result, Err(QuizError::InvalidInput)));
    }

    #[test]
    fn test_shape_rejects_empty_question_list() {
        let result = validate_quiz_shape(Some("Quiz"), Some(&[]));
        assert!(matches!(result, Err(QuizError::InvalidInput)));
    }

    #[test]
    fn test_counts_max_reported_before_min() {
        // First question has too many options, second too few; the first wins
        let questions = [
            draft("Q1", &["a", "b", "c", "d", "e", "f", "g"]),
            draft("Q2", &["a"]),
        ];
        let result = validate_option_counts(&questions, 2, 6);
        assert!(matches!(
            result,
            Err(QuizError::TooManyOptions { position: 1, max: 6 })
        ));
    }

    #[test]
    fn test_correct_option_zero_reported_before_type() {
        let question = QuestionDraft {
            correct_option: Some(OptionIndex::Number(0)),
            ..draft("Q1", &["a", "b"])
        };
        let result = validate_correct_option(&question, 0);
        assert!(matches!(result, Err(QuizError::CorrectOptionZero { position: 1 })));
    }

    #[test]
    fn test_submission_missing_ids_win_over_selection_type() {
        let selected = OptionIndex::Text("A".to_string());
        let result = validate_submission_input(None, Some("1"), Some("1"), Some(&selected));
        assert!(matches!(result, Err(QuizError::MissingFields)));
    }

    #[test]
    fn test_selected_option_bounds_inclusive() {
        assert!(validate_selected_option(1, 4).is_ok());
        assert!(validate_selected_option(4, 4).is_ok());
        assert!(matches!(
            validate_selected_option(0, 4),
            Err(QuizError::InvalidOption)
        ));
        assert!(matches!(
            validate_selected_option(5, 4),
            Err(QuizError::InvalidOption)
        ));
    }
}
