//where `lire` gets its lines from,
//the interpreter only sees this trait so runs stay testable without a terminal

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait InputSource {
    /// One line without its trailing newline, `None` once the source is exhausted.
    fn read_line(&mut self, variable: &str) -> io::Result<Option<String>>;
}

/// Prompts on stderr and blocks on stdin.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, variable: &str) -> io::Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "Enter value for {}: ", variable)?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_newline(line)))
    }
}

/// Pre-supplied lines, consumed front to back.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _variable: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
