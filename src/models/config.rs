use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::exam::ExamConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub exam: ExamConfig,
    pub cohort_size: usize,
    pub papers_graded: u32,
    pub cohorts_generated: u32,
    #[serde(default)]
    pub last_graded_date: Option<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            exam: ExamConfig::default(),
            cohort_size: 100,
            papers_graded: 0,
            cohorts_generated: 0,
            last_graded_date: None,
        }
    }
}

pub fn get_config_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("examgrade").join("config.json")
}

pub fn load_config() -> UserConfig {
    let path = get_config_path();
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => UserConfig::default(),
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), std::io::Error> {
    let path = get_config_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}
