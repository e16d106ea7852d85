use anyhow::{Result, bail};
use forecast_core::Prompter;
use inquire::Text;
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompter for the controlling terminal.
///
/// Uses `inquire` when stdin is a TTY; redirected input is read line by line.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            return Ok(Text::new(message).prompt()?);
        }

        print!("{message} ");
        io::stdout().flush()?;
        read_answer(&mut io::stdin().lock())
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Read one answer line without its line terminator. EOF means no more input.
fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
