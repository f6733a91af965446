use std::sync::Arc;

use serde::Serialize;

use adaptive_tutor::config::Config;
use adaptive_tutor::logging::{init_tracing, LogSettings};
use adaptive_tutor::tutor::StyleResponse;
use adaptive_tutor::{AnswerValue, ContentBank, TutorEngine};

type DemoResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = init_tracing(&LogSettings::from_env(&config.log_level));

    if let Err(err) = run(&config) {
        tracing::error!(error = %err, "demo walkthrough failed");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> DemoResult<()> {
    let bank = match config.content_path.as_ref() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading content bank");
            ContentBank::from_path(path)?
        }
        None => ContentBank::builtin(),
    };
    let engine = TutorEngine::new(config.tutor.clone(), Arc::new(bank));

    engine.create_profile("john_doe", "John Doe")?;
    engine.create_profile("jane_smith", "Jane Smith")?;
    engine.create_profile("alex_johnson", "Alex Johnson")?;

    take_quiz(
        &engine,
        "john_doe",
        "math",
        vec![AnswerValue::from(12), AnswerValue::from(7)],
    )?;
    take_quiz(
        &engine,
        "john_doe",
        "chemistry",
        vec![AnswerValue::from("H2O"), AnswerValue::from(7)],
    )?;
    take_quiz(
        &engine,
        "jane_smith",
        "physics",
        vec![AnswerValue::from("Wrong answer"), AnswerValue::from("Newton")],
    )?;

    let responses = vec![
        StyleResponse::new("hands_on"),
        StyleResponse::new("verbal_explanation"),
        StyleResponse::new("hands_on"),
    ];
    let style = engine.assess_learning_style("alex_johnson", &responses)?;
    println!("\nLearning style for Alex Johnson: {style}");
    println!(
        "{}",
        engine.provide_explanation("physics", "momentum", "alex_johnson")?
    );

    for learner_id in engine.profiles().learner_ids() {
        let report = engine.track_progress(&learner_id)?;
        println!("\nProgress report for {}:", report.name);
        for (subject, avg) in &report.average_scores {
            println!("  {subject}: {avg:.1}%");
        }
        print_json(&report)?;
    }

    Ok(())
}

/// Generates a quiz and answers it with `answers`, trimmed or padded to the
/// quiz length so the walkthrough never trips the length check.
fn take_quiz(
    engine: &TutorEngine,
    learner_id: &str,
    subject: &str,
    mut answers: Vec<AnswerValue>,
) -> DemoResult<()> {
    let quiz = engine.generate_quiz(learner_id, subject)?;
    println!("\n{subject} quiz for {learner_id} ({}):", quiz.level);
    for (i, question) in quiz.questions.iter().enumerate() {
        println!("  Question {}: {}", i + 1, question.text);
    }

    answers.resize(quiz.len(), AnswerValue::from(""));
    let result = engine.evaluate_quiz(learner_id, subject, answers)?;
    println!(
        "Score: {:.1}% | level {} -> {}",
        result.score, result.previous_level, result.new_level
    );
    print_json(&result)
}

fn print_json<T: Serialize>(value: &T) -> DemoResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
