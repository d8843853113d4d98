// src/prompt.rs
use std::io::{self, BufRead, Write};

/// Interactive confirmation capability.
///
/// The scan-without-ignore-file prompt is the one blocking read in the whole
/// run; keeping it behind a trait lets tests script the answer instead of
/// attaching a terminal.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Reads the answer from standard input. Accepts the literal "yes"
/// (trimmed, case-insensitive); anything else declines.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Fixed answer, for scripted runs and tests.
#[derive(Debug)]
pub struct ScriptedConfirm(pub bool);

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_yes_case_insensitive_and_trimmed() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  Yes \n"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("y"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yes please"));
    }
}
