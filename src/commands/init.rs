use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# apathymeter configuration

[output]
# json, csv or txt
default_format = "json"
directory = "."

[bank]
# path = "survey_questions_and_states.json"
min_questions = 10
# Fail loads that drop below min_questions after skipping malformed questions
enforce_minimum_after_drop = false

# Severity bands must cover 0..=100 with no gaps or overlaps.
# [[bands]]
# name = "Low"
# low = 0
# high = 49
"#;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
