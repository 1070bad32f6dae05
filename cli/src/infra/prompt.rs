//! Infrastructure implementation of the `OperatorInput` port.
//!
//! Uses dialoguer when stdin is a terminal. Piped input (scripts, tests) is
//! read line by line so the console can be driven non-interactively.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use dialoguer::Input;

use crate::application::ports::OperatorInput;

/// Reads one line per prompt from the operator.
///
/// Empty answers are allowed so callers can apply their own defaults.
pub struct TerminalInput {
    interactive: bool,
}

impl TerminalInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorInput for TerminalInput {
    fn read_line(&self, prompt: &str) -> Result<String> {
        if self.interactive {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .with_context(|| format!("reading answer to '{prompt}'"));
        }

        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{prompt}: ").context("writing prompt")?;
        stdout.flush().context("writing prompt")?;
        drop(stdout);

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .with_context(|| format!("reading answer to '{prompt}'"))?;
        anyhow::ensure!(read > 0, "input closed while waiting for '{prompt}'");
        println!();
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
