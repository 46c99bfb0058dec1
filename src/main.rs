//! choice-dialog - Terminal checklist dialog for multiple-choice questions
//!
//! Loads a question (and optionally a prior answer), shows the dialog, and
//! prints the outcome as JSON on stdout.

mod output;

use std::path::{Path, PathBuf};

use choice_app::config::{config_path, init_config_dir, load_settings};
use choice_app::DialogResult;
use choice_core::{load_prior, load_question, logging, ResultExt};
use choice_tui::{show_select_dialog, DialogHost, EventSource};
use clap::Parser;
use ratatui::backend::Backend;

use crate::output::Report;

/// Terminal checklist dialog for multiple-choice questions
#[derive(Parser, Debug)]
#[command(name = "choice-dialog")]
#[command(about = "Answer a multiple-choice question in a terminal dialog", long_about = None)]
struct Args {
    /// Question file (.toml or .json)
    #[arg(value_name = "QUESTION", required_unless_present = "init_config")]
    question: Option<PathBuf>,

    /// Previously recorded answer to edit (.toml or .json)
    #[arg(long, value_name = "FILE")]
    prior: Option<PathBuf>,

    /// Dialog title (defaults to the question file name)
    #[arg(long)]
    title: Option<String>,

    /// Directory containing .choice-dialog/config.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        init_config_dir(&base_dir)?;
        eprintln!("Config written to {}", config_path(&base_dir).display());
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let Some(question_path) = args.question else {
        color_eyre::eyre::bail!("no question file given");
    };

    let settings = load_settings(&base_dir);
    let title = args.title.unwrap_or_else(|| {
        question_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Select".to_string())
    });

    let mut host = DialogHost::init(settings);
    let outcome = run(&mut host, &question_path, args.prior.as_deref(), &title);
    host.restore();

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_fatal() {
                tracing::error!("Dialog aborted: {}", e);
            }
            if let Ok(log_file) = logging::get_current_log_file() {
                eprintln!("Details logged to {}", log_file.display());
            }
            return Err(e.into());
        }
    };

    if let Some(result) = outcome {
        tracing::debug!("Dialog closed with {:?}", result);
        println!("{}", Report::from_result(&result).to_json()?);
    }

    Ok(())
}

/// Load the question and optional prior answer, then run the dialog on
/// `host`. Returns the outcome handed to the dialog callback.
fn run<B: Backend, E: EventSource>(
    host: &mut DialogHost<B, E>,
    question_path: &Path,
    prior_path: Option<&Path>,
    title: &str,
) -> choice_core::Result<Option<DialogResult>> {
    let question = load_question(question_path)
        .with_context(|| format!("Failed to load question {}", question_path.display()))?;
    let prior = match prior_path {
        Some(path) => load_prior(path, &question)
            .with_context(|| format!("Failed to load prior answer {}", path.display()))?,
        None => None,
    };

    let mut outcome = None;
    show_select_dialog(host, title, &question, prior.as_ref(), |result| {
        outcome = Some(result)
    })?;
    Ok(outcome)
}
