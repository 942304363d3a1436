//! Interactive questionnaire: identity, questions, result, export
use crate::bank::{LoadOptions, QuestionBank};
use crate::commands::prompt::Prompter;
use crate::core::{Question, ResultRecord};
use crate::io::{self, OutputFormat};
use crate::scoring::BandSet;
use crate::session::identity::{validate_dob, validate_name, validate_student_id};
use crate::session::{IdRegistry, Identity, Session, SessionError};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use colored::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const TITLE: &str = "Social Media Use & Apathy Level Assessment";

const BANNER_WIDTH: usize = 70;

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// External bank file; the embedded bank is used when absent or unusable
    pub questions: Option<PathBuf>,
    /// Result format; asked interactively when absent
    pub format: Option<OutputFormat>,
    pub output_dir: PathBuf,
    pub load_options: LoadOptions,
    pub bands: BandSet,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            questions: None,
            format: None,
            output_dir: PathBuf::from("."),
            load_options: LoadOptions::default(),
            bands: BandSet::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub record: ResultRecord,
    pub path: PathBuf,
}

pub fn run_questionnaire<R: BufRead, W: Write>(
    config: &RunConfig,
    prompter: &mut Prompter<R, W>,
    registry: &mut dyn IdRegistry,
) -> Result<RunSummary> {
    write_banner(prompter)?;

    let (bank, bands) = resolve_bank(config, prompter)?;
    let today = Local::now().date_naive();
    let identity = collect_identity(prompter, &*registry, today)?;

    let mut session = Session::new(&bank, &bands);
    session.submit_identity(identity, registry, today)?;

    while let Some((index, question)) = session.current_question() {
        present_question(prompter, index, session.question_count(), question)?;
        loop {
            let raw = prompter.ask("Choose (1-5): ")?;
            let choice = raw.trim().parse::<usize>().unwrap_or(0);
            match session.select(choice) {
                Ok(_) => break,
                Err(SessionError::InvalidSelection { .. }) => {
                    prompter.say("Enter a number between 1-5")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    let finished_at = Local::now().naive_local();
    let record = session.into_record(finished_at)?;
    write_result(prompter, &record)?;

    let format = match config.format {
        Some(format) => format,
        None => OutputFormat::from_answer(&prompter.ask("Save as (json/csv/txt) [json]: ")?),
    };

    let path = io::save_result(&record, format, &config.output_dir, finished_at)
        .with_context(|| format!("Failed to save result to {}", config.output_dir.display()))?;
    prompter.say(format!("Saved: {}", path.display()))?;

    Ok(RunSummary { record, path })
}

/// Pick the bank for this run, falling back to the embedded one when the
/// external file cannot be used.
fn resolve_bank<R: BufRead, W: Write>(
    config: &RunConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<(QuestionBank, BandSet)> {
    let Some(raw_path) = &config.questions else {
        return Ok((QuestionBank::default(), config.bands.clone()));
    };

    let path = io::clean_user_path(&raw_path.to_string_lossy());
    let loaded = io::read_bank_file(&path)
        .and_then(|value| QuestionBank::load_with_options(&value, &config.load_options));

    match loaded {
        Ok(loaded) => {
            for warning in &loaded.warnings {
                prompter.say(format!("Warning: {}", warning))?;
            }
            prompter.say(format!(
                "Loaded {} questions from {}",
                loaded.bank.len(),
                path.display()
            ))?;
            let bands = loaded.bands.unwrap_or_else(|| config.bands.clone());
            Ok((loaded.bank, bands))
        }
        Err(e) if e.is_bank_fallback() => {
            log::warn!("Cannot use bank {}: {}", path.display(), e);
            prompter.say(format!("{}. Using the embedded questions.", e))?;
            Ok((QuestionBank::default(), config.bands.clone()))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn collect_identity<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    registry: &dyn IdRegistry,
    today: NaiveDate,
) -> Result<Identity> {
    const NAME_COMPLAINT: &str = "Only letters, space, -, '";

    let given_name = prompter.ask_until("Given name: ", NAME_COMPLAINT, validate_name)?;
    let surname = prompter.ask_until("Surname: ", NAME_COMPLAINT, validate_name)?;
    let dob = prompter.ask_until("Date of birth (YYYY-MM-DD): ", "Invalid date", |d| {
        validate_dob(d, today)
    })?;
    let student_id = prompter.ask_until(
        "Student ID (digits only): ",
        "Invalid or duplicate ID",
        |id| validate_student_id(id.trim()) && !registry.contains(id.trim()),
    )?;

    Ok(Identity::new(
        given_name.trim(),
        surname.trim(),
        dob.trim(),
        student_id.trim(),
    ))
}

fn write_banner<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    prompter.say(&rule)?;
    prompter.say(format!("{:^width$}", TITLE, width = BANNER_WIDTH).bold().to_string())?;
    prompter.say(&rule)
}

fn present_question<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    index: usize,
    count: usize,
    question: &Question,
) -> Result<()> {
    prompter.say(format!("\nQuestion {}/{}: {}", index + 1, count, question.prompt))?;
    for (i, option) in question.options.iter().enumerate() {
        prompter.say(format!("  {}. {}", i + 1, option.label))?;
    }
    Ok(())
}

fn write_result<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    record: &ResultRecord,
) -> Result<()> {
    let rule = "=".repeat(30);
    prompter.say(format!("\n{} RESULT {}", rule, rule))?;
    prompter.say(format!(
        "Name: {} {} | ID: {}",
        record.given_name, record.surname, record.student_id
    ))?;
    prompter.say(format!("Total score: {}/100", record.total_score))?;
    prompter.say(format!("Result: {}", record.result.bold()))
}
