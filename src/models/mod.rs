pub mod answer;
pub mod config;
pub mod exam;

pub use answer::{Answer, AnswerKey, StudentResponse, Verdict};
// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use exam::{ExamConfig, NumericBand, QuestionKind};
