use std::fs;
use std::path::Path;

use chrono::Local;

use crate::display::display_report;
use crate::evaluate::build_report;
use crate::models::{config, AnswerKey, StudentResponse};

pub fn grade_responses(key_path: &Path, responses_path: &Path, json: bool) {
    let key: AnswerKey = match read_json(key_path) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let responses: Vec<StudentResponse> = match read_json(responses_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut user_config = config::load_config();
    if let Err(e) = key.expect_len(user_config.exam.question_count) {
        eprintln!("Warning: {}", e);
    }

    let mut reports = Vec::with_capacity(responses.len());
    for (i, response) in responses.iter().enumerate() {
        match build_report(&key, response) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Student {}: {}", i + 1, e);
                std::process::exit(1);
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Failed to serialize reports: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for (i, report) in reports.iter().enumerate() {
            display_report(&format!("student {}", i + 1), report);
        }
    }

    user_config.papers_graded += reports.len() as u32;
    user_config.last_graded_date = Some(Local::now().format("%Y-%m-%d").to_string());
    if let Err(e) = config::save_config(&user_config) {
        eprintln!("Failed to save progress: {}", e);
        std::process::exit(1);
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
