use crate::error_formatter::format_error;
use crate::formatter::{Formatter, GOODBYE, PROMPT};
use anyhow::{Context, Result};
use proofer::Session;
use std::io::{BufRead, Write};

/// Read lines from `input` until `exit` or end of input, writing prompts,
/// replies and errors to `output`.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    color: bool,
) -> Result<()> {
    let formatter = Formatter::default();
    write!(output, "{}", formatter.format_welcome())?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            writeln!(output, "{}", GOODBYE)?;
            break;
        };
        let line = line.context("Failed to read input")?;

        match session.handle(&line) {
            Ok(reply) => {
                write!(output, "{}", formatter.format_reply(&reply))?;
                if reply.is_exit() {
                    break;
                }
            }
            Err(err) => writeln!(output, "{}", format_error(&err, "<input>", line.trim(), color))?,
        }
    }

    Ok(())
}
