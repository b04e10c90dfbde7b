use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// A contiguous run of numeric-entry questions. Indices are 1-based;
/// `start` is inclusive and `end` is exclusive, so `[20, 30)` covers
/// questions 20 through 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericBand {
    pub start: usize,
    pub end: usize,
}

impl NumericBand {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, question: usize) -> bool {
        question >= self.start && question < self.end
    }

    pub fn slot_count(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    NumericEntry,
}

/// The shape of one exam paper. Every grading and synthesis call takes
/// this value explicitly; nothing in the crate hardcodes the paper layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamConfig {
    pub question_count: usize,
    pub numeric_bands: Vec<NumericBand>,
    pub choice_min: u8,
    pub choice_max: u8,
    /// How many numeric-entry questions a synthetic student attempts.
    pub attempted_numeric_count: usize,
    pub numeric_min: f64,
    pub numeric_max: f64,
}

impl Default for ExamConfig {
    /// The reference JEE-style paper: 90 questions, numeric-entry bands
    /// at [20,30), [50,60) and [80,90), four choices per MCQ.
    fn default() -> Self {
        Self {
            question_count: 90,
            numeric_bands: vec![
                NumericBand::new(20, 30),
                NumericBand::new(50, 60),
                NumericBand::new(80, 90),
            ],
            choice_min: 1,
            choice_max: 4,
            attempted_numeric_count: 5,
            numeric_min: -100.0,
            numeric_max: 100.0,
        }
    }
}

impl ExamConfig {
    /// Kind of the question at a 1-based index. Derived from band
    /// membership, never stored per question.
    pub fn question_kind(&self, question: usize) -> QuestionKind {
        if self.numeric_bands.iter().any(|b| b.contains(question)) {
            QuestionKind::NumericEntry
        } else {
            QuestionKind::MultipleChoice
        }
    }

    /// All 1-based numeric-entry question indices, in ascending band order.
    pub fn numeric_positions(&self) -> Vec<usize> {
        self.numeric_bands
            .iter()
            .flat_map(|b| b.start..b.end)
            .collect()
    }

    pub fn numeric_slot_count(&self) -> usize {
        self.numeric_bands.iter().map(|b| b.slot_count()).sum()
    }

    pub fn validate(&self) -> Result<(), GradeError> {
        if self.question_count == 0 {
            return Err(GradeError::InvalidConfig(
                "question count must be at least 1".to_string(),
            ));
        }
        if self.choice_min < 1 || self.choice_min > self.choice_max {
            return Err(GradeError::InvalidConfig(format!(
                "choice range [{}, {}] is empty or starts below 1",
                self.choice_min, self.choice_max
            )));
        }
        if self.numeric_min > self.numeric_max {
            return Err(GradeError::InvalidConfig(format!(
                "numeric value range [{}, {}] is empty",
                self.numeric_min, self.numeric_max
            )));
        }
        for band in &self.numeric_bands {
            if band.start < 1 || band.start >= band.end {
                return Err(GradeError::InvalidConfig(format!(
                    "numeric band [{}, {}) is empty or starts below 1",
                    band.start, band.end
                )));
            }
            if band.end > self.question_count + 1 {
                return Err(GradeError::InvalidConfig(format!(
                    "numeric band [{}, {}) extends past question {}",
                    band.start, band.end, self.question_count
                )));
            }
        }
        let slots = self.numeric_slot_count();
        if slots < self.attempted_numeric_count {
            return Err(GradeError::InvalidConfig(format!(
                "numeric bands hold {} questions but {} attempts are required",
                slots, self.attempted_numeric_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape_is_valid() {
        let config = ExamConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.question_count, 90);
        assert_eq!(config.numeric_slot_count(), 30);
    }

    #[test]
    fn test_question_kind_band_boundaries() {
        let config = ExamConfig::default();
        assert_eq!(config.question_kind(1), QuestionKind::MultipleChoice);
        assert_eq!(config.question_kind(19), QuestionKind::MultipleChoice);
        assert_eq!(config.question_kind(20), QuestionKind::NumericEntry);
        assert_eq!(config.question_kind(29), QuestionKind::NumericEntry);
        assert_eq!(config.question_kind(30), QuestionKind::MultipleChoice);
        assert_eq!(config.question_kind(80), QuestionKind::NumericEntry);
        assert_eq!(config.question_kind(89), QuestionKind::NumericEntry);
        assert_eq!(config.question_kind(90), QuestionKind::MultipleChoice);
    }

    #[test]
    fn test_numeric_positions_in_order() {
        let config = ExamConfig {
            question_count: 10,
            numeric_bands: vec![NumericBand::new(2, 4), NumericBand::new(7, 9)],
            attempted_numeric_count: 2,
            ..ExamConfig::default()
        };
        assert_eq!(config.numeric_positions(), vec![2, 3, 7, 8]);
    }

    #[test]
    fn test_validate_rejects_undersized_bands() {
        let config = ExamConfig {
            question_count: 10,
            numeric_bands: vec![NumericBand::new(2, 4)],
            attempted_numeric_count: 5,
            ..ExamConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GradeError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_out_of_range_band() {
        let config = ExamConfig {
            question_count: 10,
            numeric_bands: vec![NumericBand::new(8, 15)],
            attempted_numeric_count: 1,
            ..ExamConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_choice_range() {
        let config = ExamConfig {
            choice_min: 3,
            choice_max: 2,
            ..ExamConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
