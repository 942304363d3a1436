//! CLI command implementations.
//!
//! Available commands:
//! - **run**: Administer the questionnaire and save the result
//! - **show**: Print a saved result file
//! - **export-bank**: Write the questions and bands for external editing
//! - **check-bank**: Validate an external bank file
//! - **classify**: Look up the band for a total score
//! - **init**: Write a default configuration file

pub mod check_bank;
pub mod classify;
pub mod export_bank;
pub mod init;
pub mod prompt;
pub mod run;
pub mod show;

pub use check_bank::check_bank;
pub use classify::classify_total;
pub use export_bank::export_bank;
pub use init::init_config;
pub use prompt::Prompter;
pub use run::{run_questionnaire, RunConfig, RunSummary};
pub use show::show_result;
