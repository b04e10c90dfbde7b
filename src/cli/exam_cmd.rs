use crate::models::{config, ExamConfig};

pub fn handle_exam(reset: bool) {
    let mut user_config = config::load_config();

    if reset {
        user_config.exam = ExamConfig::default();
        if let Err(e) = config::save_config(&user_config) {
            eprintln!("Failed to save config: {}", e);
            std::process::exit(1);
        }
        println!("Exam shape reset to the reference 90-question paper");
        return;
    }

    let exam = &user_config.exam;
    println!("Questions: {}", exam.question_count);
    println!("Numeric-entry bands (start inclusive, end exclusive):");
    for band in &exam.numeric_bands {
        println!("  [{}, {})", band.start, band.end);
    }
    println!("Choice range: {}-{}", exam.choice_min, exam.choice_max);
    println!(
        "Synthetic numeric attempts: {} of {} slots",
        exam.attempted_numeric_count,
        exam.numeric_slot_count()
    );
    println!(
        "Numeric value range: [{}, {}]",
        exam.numeric_min, exam.numeric_max
    );

    if let Err(e) = exam.validate() {
        println!();
        println!("Warning: {}", e);
    }

    println!();
    println!(
        "Edit {} to change the shape",
        config::get_config_path().display()
    );
    println!("To restore defaults: examgrade exam --reset");
}
