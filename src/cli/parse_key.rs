use std::fs;
use std::path::Path;

use crate::keyparse::parse_answer_key;
use crate::models::config;

pub fn parse_key(file: &Path, out: Option<&Path>) {
    let text = match fs::read_to_string(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read {}: {}", file.display(), e);
            std::process::exit(1);
        }
    };

    let key = match parse_answer_key(&text) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("Failed to parse answer key: {}", e);
            std::process::exit(1);
        }
    };

    // Recoverable: the extraction step often misses pages, so emit the
    // partial key but tell the user it will not grade as-is.
    let user_config = config::load_config();
    if let Err(e) = key.expect_len(user_config.exam.question_count) {
        eprintln!("Warning: {}", e);
    }

    let json = match serde_json::to_string_pretty(&key) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Failed to serialize answer key: {}", e);
            std::process::exit(1);
        }
    };

    match out {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!("Wrote {} answers to {}", key.len(), path.display());
        }
        None => println!("{}", json),
    }
}
