use chrono::Local;
use serde::Serialize;

use crate::error::GradeError;
use crate::models::{Answer, AnswerKey, StudentResponse, Verdict};

/// Positional comparison of a response against the key.
///
/// Fails fast on a length mismatch rather than zipping to the shorter
/// sequence; silently dropping trailing questions would misreport the
/// grade. Each verdict depends only on the key and answer at its own
/// index.
pub fn compare(key: &AnswerKey, response: &StudentResponse) -> Result<Vec<Verdict>, GradeError> {
    if key.len() != response.len() {
        return Err(GradeError::LengthMismatch {
            key_len: key.len(),
            response_len: response.len(),
        });
    }

    let verdicts = key
        .values()
        .iter()
        .zip(response.answers())
        .map(|(correct, answer)| match answer {
            Answer::NotAttempted => Verdict::NotAttempted,
            given if given.matches(*correct) => Verdict::Correct,
            _ => Verdict::Incorrect,
        })
        .collect();

    Ok(verdicts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub not_attempted: usize,
    pub total: usize,
}

pub fn summarize(verdicts: &[Verdict]) -> GradeSummary {
    let mut summary = GradeSummary {
        correct: 0,
        incorrect: 0,
        not_attempted: 0,
        total: verdicts.len(),
    };
    for verdict in verdicts {
        match verdict {
            Verdict::Correct => summary.correct += 1,
            Verdict::Incorrect => summary.incorrect += 1,
            Verdict::NotAttempted => summary.not_attempted += 1,
        }
    }
    summary
}

/// One row of the downstream JSON report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_index: usize,
    pub student_answer: Answer,
    pub correct_answer: u32,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub graded_at: String,
    pub summary: GradeSummary,
    pub questions: Vec<QuestionResult>,
}

pub fn build_report(
    key: &AnswerKey,
    response: &StudentResponse,
) -> Result<GradeReport, GradeError> {
    let verdicts = compare(key, response)?;
    let summary = summarize(&verdicts);

    let questions = verdicts
        .iter()
        .enumerate()
        .map(|(i, verdict)| QuestionResult {
            question_index: i + 1,
            student_answer: response.answers()[i],
            correct_answer: key.values()[i],
            verdict: *verdict,
        })
        .collect();

    Ok(GradeReport {
        graded_at: Local::now().to_rfc3339(),
        summary,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(answers: Vec<Answer>) -> StudentResponse {
        StudentResponse::new(answers)
    }

    #[test]
    fn test_worked_example() {
        let key = AnswerKey::new(vec![1, 3, 2]);
        let verdicts = compare(
            &key,
            &response(vec![Answer::Choice(1), Answer::NotAttempted, Answer::Choice(4)]),
        )
        .unwrap();
        assert_eq!(
            verdicts,
            vec![Verdict::Correct, Verdict::NotAttempted, Verdict::Incorrect]
        );
    }

    #[test]
    fn test_length_preserved() {
        let key = AnswerKey::new(vec![2; 17]);
        let verdicts = compare(&key, &response(vec![Answer::Choice(2); 17])).unwrap();
        assert_eq!(verdicts.len(), key.len());
    }

    #[test]
    fn test_empty_sequences() {
        let key = AnswerKey::new(vec![]);
        assert_eq!(
            compare(&key, &response(vec![])).unwrap(),
            Vec::<Verdict>::new()
        );
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let key = AnswerKey::new(vec![1, 2]);
        let err = compare(&key, &response(vec![Answer::Choice(1)])).unwrap_err();
        assert_eq!(
            err,
            GradeError::LengthMismatch {
                key_len: 2,
                response_len: 1
            }
        );
    }

    #[test]
    fn test_numeric_exact_equality() {
        let key = AnswerKey::new(vec![7, 7]);
        let verdicts = compare(
            &key,
            &response(vec![Answer::Numeric(7.0), Answer::Numeric(7.05)]),
        )
        .unwrap();
        assert_eq!(verdicts, vec![Verdict::Correct, Verdict::Incorrect]);
    }

    #[test]
    fn test_deterministic() {
        let key = AnswerKey::new(vec![1, 2, 3, 4]);
        let resp = response(vec![
            Answer::Choice(1),
            Answer::Choice(3),
            Answer::NotAttempted,
            Answer::Numeric(4.0),
        ]);
        assert_eq!(compare(&key, &resp).unwrap(), compare(&key, &resp).unwrap());
    }

    #[test]
    fn test_summary_counts() {
        let verdicts = vec![
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Incorrect,
            Verdict::NotAttempted,
        ];
        let summary = summarize(&verdicts);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.not_attempted, 1);
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn test_report_rows_aligned() {
        let key = AnswerKey::new(vec![1, 3]);
        let report = build_report(
            &key,
            &response(vec![Answer::Choice(2), Answer::Choice(3)]),
        )
        .unwrap();
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[0].question_index, 1);
        assert_eq!(report.questions[0].verdict, Verdict::Incorrect);
        assert_eq!(report.questions[1].correct_answer, 3);
        assert_eq!(report.questions[1].verdict, Verdict::Correct);
        assert_eq!(report.summary.total, 2);
    }
}
