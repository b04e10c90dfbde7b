use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GradeError;

/// One submitted answer. Serializes to the JSON shape the extraction
/// pipeline dumps: the string "NA", a bare integer choice, or a decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    NotAttempted,
    Choice(u8),
    Numeric(f64),
}

impl Answer {
    /// Exact-equality match against a key value. No tolerance for
    /// numeric-entry answers; 7.0 matches a key of 7, 7.05 does not.
    pub fn matches(&self, key: u32) -> bool {
        match self {
            Answer::NotAttempted => false,
            Answer::Choice(c) => u32::from(*c) == key,
            Answer::Numeric(v) => *v == f64::from(key),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::NotAttempted => write!(f, "NA"),
            Answer::Choice(c) => write!(f, "{}", c),
            Answer::Numeric(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Answer::NotAttempted => serializer.serialize_str("NA"),
            Answer::Choice(c) => serializer.serialize_u8(*c),
            Answer::Numeric(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) if s == "NA" => Ok(Answer::NotAttempted),
            Raw::Text(s) => Err(DeError::custom(format!("unknown answer marker '{}'", s))),
            Raw::Int(n) if (1..=i64::from(u8::MAX)).contains(&n) => Ok(Answer::Choice(n as u8)),
            Raw::Int(n) => Ok(Answer::Numeric(n as f64)),
            Raw::Float(v) => Ok(Answer::Numeric(v)),
        }
    }
}

/// Ordered ground-truth answers, one integer per question. Immutable
/// once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(Vec<u32>);

impl AnswerKey {
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The caller-side check for a complete key. Parsing never counts
    /// markers, so anything graded against this key should verify the
    /// length first.
    pub fn expect_len(&self, expected: usize) -> Result<(), GradeError> {
        if self.0.len() != expected {
            return Err(GradeError::KeyCountMismatch {
                expected,
                found: self.0.len(),
            });
        }
        Ok(())
    }
}

/// One student's answers, positionally aligned with the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentResponse(Vec<Answer>);

impl StudentResponse {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self(answers)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Per-question grading outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    NotAttempted,
}
