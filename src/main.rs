use anyhow::Result;
use apathymeter::cli::{Cli, Commands};
use apathymeter::commands::{self, Prompter, RunConfig};
use apathymeter::config::{self, ApathymeterConfig};
use apathymeter::session::InMemoryIdRegistry;
use clap::Parser;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if cli.plain {
        colored::control::set_override(false);
    }

    let config = config::load_config();

    match cli.command {
        Commands::Run {
            questions,
            format,
            output_dir,
        } => {
            let run_config = build_run_config(&config, questions, format, output_dir);
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            let mut registry = InMemoryIdRegistry::new();
            commands::run_questionnaire(&run_config, &mut prompter, &mut registry)?;
        }
        Commands::Show { path } => {
            commands::show_result(&path, &mut std::io::stdout())?;
        }
        Commands::ExportBank { output } => {
            commands::export_bank(&output, &config.effective_bands())?;
        }
        Commands::CheckBank { path } => {
            commands::check_bank(&path, &config.load_options(), &mut std::io::stdout())?;
        }
        Commands::Classify { total } => {
            commands::classify_total(total, &config.effective_bands(), &mut std::io::stdout())?;
        }
        Commands::Init { force } => {
            commands::init_config(&std::env::current_dir()?, force)?;
        }
    }

    Ok(())
}

// Pure function to map -v counts onto a default log filter
fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbosity)))
        .format_timestamp(None)
        .init();
}

// Pure function: command-line flags win over config file values
fn build_run_config(
    config: &ApathymeterConfig,
    questions: Option<PathBuf>,
    format: Option<apathymeter::OutputFormat>,
    output_dir: Option<PathBuf>,
) -> RunConfig {
    RunConfig {
        questions: questions.or_else(|| config.bank_path()),
        format: format.or_else(|| config.default_format()),
        output_dir: output_dir.unwrap_or_else(|| config.output_directory()),
        load_options: config.load_options(),
        bands: config.effective_bands(),
    }
}
