mod exam_cmd;
mod grade;
mod parse_key;
mod synth_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::config;

#[derive(Parser)]
#[command(name = "examgrade")]
#[command(about = "Grade exam papers against AI-extracted answer keys", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse extraction text into an ordered answer key
    ParseKey {
        /// Solution text produced by the extraction step
        file: PathBuf,
        /// Write the key JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Grade responses against an answer key
    Grade {
        /// Answer key JSON (array of integers)
        #[arg(long)]
        key: PathBuf,
        /// Responses JSON (array of response arrays)
        #[arg(long)]
        responses: PathBuf,
        /// Dump the full reports as JSON instead of a terminal summary
        #[arg(long)]
        json: bool,
    },
    /// Generate a synthetic response cohort
    Synth {
        /// Cohort size (defaults to the configured size)
        #[arg(long)]
        count: Option<usize>,
        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
        /// Write the cohort JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the active exam shape
    Exam {
        /// Restore the reference 90-question shape
        #[arg(long)]
        reset: bool,
    },
    Info,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => exam_cmd::handle_exam(false),
        Some(Commands::ParseKey { file, out }) => parse_key::parse_key(&file, out.as_deref()),
        Some(Commands::Grade {
            key,
            responses,
            json,
        }) => grade::grade_responses(&key, &responses, json),
        Some(Commands::Synth { count, seed, out }) => {
            synth_cmd::synth_cohort(count, seed, out.as_deref())
        }
        Some(Commands::Exam { reset }) => exam_cmd::handle_exam(reset),
        Some(Commands::Info) => generic_info(),
    }
}

fn generic_info() {
    let user_config = config::load_config();

    if let Some(ref last) = user_config.last_graded_date {
        println!("Last graded: {}", last);
    } else {
        println!("Nothing graded yet");
    }

    println!("\nPapers graded: {}", user_config.papers_graded);
    println!("Cohorts generated: {}", user_config.cohorts_generated);
    println!("Default cohort size: {}", user_config.cohort_size);
    println!("Config file: {}", config::get_config_path().display());
}
