//! Score accumulation: folds answer contributions into a `ScoreSet`.

use crate::quiz::models::Question;
use crate::scoring::{PartialScoreSet, ScoreSet, ScoringError};

/// Returns `current` with every dimension of `contribution` added to it.
///
/// Dimensions absent from the contribution are left unchanged. The input is
/// not modified; on overflow nothing is returned.
pub fn accumulate(
    current: ScoreSet,
    contribution: &PartialScoreSet,
) -> Result<ScoreSet, ScoringError> {
    let mut next = current;
    for (dimension, points) in contribution.iter() {
        next.add(dimension, points)?;
    }
    Ok(next)
}

/// One quiz attempt's running tally.
///
/// `finish` consumes the aggregator, so a final `ScoreSet` cannot be
/// mutated through it afterwards. A new attempt starts from `new`.
#[derive(Debug, Clone)]
pub struct ScoreAggregator {
    scores: ScoreSet,
    answered: usize,
    total: usize,
}

impl ScoreAggregator {
    pub fn new(total_questions: usize) -> Self {
        Self {
            scores: ScoreSet::default(),
            answered: 0,
            total: total_questions,
        }
    }

    pub fn answer(&mut self, contribution: &PartialScoreSet) -> Result<(), ScoringError> {
        if self.is_complete() {
            return Err(ScoringError::AlreadyComplete { total: self.total });
        }
        self.scores = accumulate(self.scores, contribution)?;
        self.answered += 1;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    pub fn finish(self) -> Result<ScoreSet, ScoringError> {
        if !self.is_complete() {
            return Err(ScoringError::Incomplete {
                answered: self.answered,
                total: self.total,
            });
        }
        Ok(self.scores)
    }
}

/// Replays an answer sheet (one option id per question, presentation order).
pub fn score_answers(questions: &[Question], answers: &[String]) -> Result<ScoreSet, ScoringError> {
    if questions.len() != answers.len() {
        return Err(ScoringError::AnswerCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut aggregator = ScoreAggregator::new(questions.len());
    for (question, option_id) in questions.iter().zip(answers) {
        let option = question
            .options
            .iter()
            .find(|o| &o.id == option_id)
            .ok_or_else(|| ScoringError::UnknownOption {
                question_id: question.id,
                option_id: option_id.clone(),
            })?;
        aggregator.answer(&option.points)?;
    }

    aggregator.finish()
}
