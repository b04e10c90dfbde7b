use crate::evaluate::GradeReport;
use crate::models::Verdict;

pub fn display_report(label: &str, report: &GradeReport) {
    println!("\n{}", "=".repeat(60));
    println!("  EXAMGRADE - Grading Report ({})", label);
    println!("{}\n", "=".repeat(60));

    let summary = &report.summary;
    let accuracy = if summary.total > 0 {
        summary.correct as f64 * 100.0 / summary.total as f64
    } else {
        0.0
    };

    println!("Questions:     {}", summary.total);
    println!("Correct:       {}", summary.correct);
    println!("Incorrect:     {}", summary.incorrect);
    println!("Not attempted: {}", summary.not_attempted);
    println!("Accuracy:      {:.1}%", accuracy);

    let wrong: Vec<_> = report
        .questions
        .iter()
        .filter(|q| q.verdict == Verdict::Incorrect)
        .collect();

    if !wrong.is_empty() {
        println!("\n{}", "-".repeat(60));
        println!("Incorrect answers:");
        for q in wrong {
            println!(
                "  Q{}: answered {}, correct {}",
                q.question_index, q.student_answer, q.correct_answer
            );
        }
        println!("{}", "-".repeat(60));
    }

    println!("\n{}\n", "=".repeat(60));
}
