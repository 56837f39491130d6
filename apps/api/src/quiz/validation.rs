use std::collections::HashSet;

use crate::quiz::models::Question;

const MIN_OPTIONS: usize = 2;

/// Shape check for an externally produced quiz.
///
/// Point values were already validated when the options were parsed, so
/// this only covers structure: at least one question, non-empty titles, at
/// least two options, option ids unique within their question.
pub fn validate_questions(questions: &[Question]) -> Result<(), String> {
    if questions.is_empty() {
        return Err("quiz contains no questions".to_string());
    }

    for question in questions {
        if question.title.trim().is_empty() {
            return Err(format!("question {} has an empty title", question.id));
        }
        if question.options.len() < MIN_OPTIONS {
            return Err(format!(
                "question {} has {} option(s), expected at least {MIN_OPTIONS}",
                question.id,
                question.options.len()
            ));
        }

        let mut seen = HashSet::new();
        for option in &question.options {
            if option.id.trim().is_empty() {
                return Err(format!("question {} has an option without id", question.id));
            }
            if !seen.insert(option.id.as_str()) {
                return Err(format!(
                    "question {} repeats option id '{}'",
                    question.id, option.id
                ));
            }
        }
    }

    Ok(())
}
