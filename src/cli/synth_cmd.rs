use std::fs;
use std::path::Path;

use crate::models::config;
use crate::synth::generate_cohort;

pub fn synth_cohort(count: Option<usize>, seed: Option<u64>, out: Option<&Path>) {
    let mut user_config = config::load_config();
    let population = count.unwrap_or(user_config.cohort_size);

    let cohort = match generate_cohort(&user_config.exam, population, seed) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to generate cohort: {}", e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&cohort) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Failed to serialize cohort: {}", e);
            std::process::exit(1);
        }
    };

    match out {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!(
                "Wrote {} synthetic responses to {}",
                cohort.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    user_config.cohorts_generated += 1;
    if let Err(e) = config::save_config(&user_config) {
        eprintln!("Failed to save progress: {}", e);
        std::process::exit(1);
    }
}
