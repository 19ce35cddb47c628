use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no,
/// including end of input.
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_from(question, &mut stdin.lock(), &mut io::stdout().lock())
}

fn confirm_from<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    write!(output, "{} (y/N): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    if read == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
