//! Line-oriented prompting over any reader/writer pair
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line ending.
    ///
    /// End of input is an error: there is nobody left to answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the questionnaire was finished");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `accept` returns true, printing `complaint` after each
    /// rejected answer.
    pub fn ask_until(
        &mut self,
        prompt: &str,
        complaint: &str,
        mut accept: impl FnMut(&str) -> bool,
    ) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if accept(&answer) {
                return Ok(answer);
            }
            self.say(complaint)?;
        }
    }
}
