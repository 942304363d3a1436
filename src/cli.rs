use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apathymeter")]
#[command(about = "Social media use and apathy level assessment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new questionnaire
    Run {
        /// Questions file (.json); the embedded questions are used otherwise
        #[arg(short, long, env = "APATHYMETER_QUESTIONS")]
        questions: Option<PathBuf>,

        /// Result format (asked interactively when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Directory for the result file
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print an existing result file
    Show {
        /// Result file to print
        path: PathBuf,
    },

    /// Save the survey questions and psychological states to a JSON file
    ExportBank {
        /// Output file
        #[arg(short, long, default_value = crate::io::DEFAULT_BANK_FILE)]
        output: PathBuf,
    },

    /// Validate a questions file without starting a questionnaire
    CheckBank {
        /// Questions file (.json)
        path: PathBuf,
    },

    /// Show the band a total score falls into
    Classify {
        /// Total score
        #[arg(allow_negative_numbers = true)]
        total: i64,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
