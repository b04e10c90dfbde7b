mod cli;
mod display;
mod error;
mod evaluate;
mod keyparse;
mod models;
mod synth;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
