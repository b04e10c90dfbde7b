use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::GradeError;
use crate::models::{Answer, ExamConfig, QuestionKind, StudentResponse};

/// Generate a cohort of synthetic student responses.
///
/// Models typical behavior on this paper: every multiple-choice question
/// gets a uniform guess in the configured choice range, numeric-entry
/// questions are left unattempted except for `attempted_numeric_count`
/// positions sampled without replacement across all bands, which get a
/// uniform decimal rounded to one place.
///
/// A seed makes generation fully reproducible; without one the OS-seeded
/// thread RNG is used. The generator state is local to this call, so
/// concurrent callers never share it.
pub fn generate_cohort(
    config: &ExamConfig,
    population: usize,
    seed: Option<u64>,
) -> Result<Vec<StudentResponse>, GradeError> {
    config.validate()?;

    let mut seeded_rng;
    let mut thread_rng;
    let rng: &mut dyn RngCore = match seed {
        Some(s) => {
            seeded_rng = StdRng::seed_from_u64(s);
            &mut seeded_rng
        }
        None => {
            thread_rng = rand::rng();
            &mut thread_rng
        }
    };

    let numeric_positions = config.numeric_positions();
    let mut cohort = Vec::with_capacity(population);
    for _ in 0..population {
        cohort.push(generate_response(config, &numeric_positions, &mut *rng));
    }

    Ok(cohort)
}

fn generate_response(
    config: &ExamConfig,
    numeric_positions: &[usize],
    rng: &mut dyn RngCore,
) -> StudentResponse {
    let mut answers: Vec<Answer> = (1..=config.question_count)
        .map(|question| match config.question_kind(question) {
            QuestionKind::NumericEntry => Answer::NotAttempted,
            QuestionKind::MultipleChoice => {
                Answer::Choice(rng.random_range(config.choice_min..=config.choice_max))
            }
        })
        .collect();

    // Sampled without replacement across every band
    let attempted = rand::seq::index::sample(
        &mut *rng,
        numeric_positions.len(),
        config.attempted_numeric_count,
    );
    for slot in attempted {
        let question = numeric_positions[slot];
        let value: f64 = rng.random_range(config.numeric_min..=config.numeric_max);
        answers[question - 1] = Answer::Numeric((value * 10.0).round() / 10.0);
    }

    StudentResponse::new(answers)
}
