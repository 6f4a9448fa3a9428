// repl.rs

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::{self, Write};

use crate::completion::CommandCompleter;
use crate::history::{History, HistoryEntry};
use crate::parser::{parse_line, Command};
use crate::util::{format_number, writeln_ignore_broken_pipe};

const PROMPT: &str = "calc> ";

/// Whether the loop keeps going after a line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopSignal {
    Continue,
    Exit,
}

/// One calculator session: the history plus the per-line dispatch. Output
/// goes to whatever `Write` the caller hands in, so the interactive loop and
/// the tests share the same core.
pub struct Session {
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one raw input line. Every error is reported on `out` and the
    /// session keeps running; only `exit` signals termination.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<LoopSignal> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LoopSignal::Continue);
        }
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(err) => {
                writeln_ignore_broken_pipe(&mut *out, err.to_string())?;
                return Ok(LoopSignal::Continue);
            }
        };
        log::debug!("dispatching {:?}", command);
        match command {
            Command::Exit => {
                writeln_ignore_broken_pipe(out, "Exiting calculator...")?;
                return Ok(LoopSignal::Exit);
            }
            Command::List => {
                if self.history.is_empty() {
                    writeln_ignore_broken_pipe(&mut *out, "No calculations in history.")?;
                } else {
                    for entry in self.history.iter() {
                        writeln_ignore_broken_pipe(&mut *out, entry.to_string())?;
                    }
                }
            }
            Command::Clear => {
                self.history.clear();
                writeln_ignore_broken_pipe(out, "History cleared.")?;
            }
            Command::Eval { op, lhs, rhs } => match op.apply(lhs, rhs) {
                Ok(result) => {
                    writeln_ignore_broken_pipe(
                        &mut *out,
                        format!("Result: {}", format_number(result)),
                    )?;
                    self.history.record(HistoryEntry { lhs, op, rhs, result });
                }
                // Only DivisionByZero can come out of apply; no history append.
                Err(err) => {
                    writeln_ignore_broken_pipe(&mut *out, err.to_string())?;
                }
            },
        }
        Ok(LoopSignal::Continue)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a session from any line source. Stops at `exit` or end of input.
pub fn run_lines<I, S, W>(lines: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut session = Session::new();
    for line in lines {
        if session.handle_line(line.as_ref(), out)? == LoopSignal::Exit {
            break;
        }
    }
    Ok(())
}

/// Interactive front end: a rustyline editor over the same session core.
/// Ctrl-C and Ctrl-D end the loop like `exit`, without the exit message.
pub fn start_repl() -> anyhow::Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));
    let mut session = Session::new();
    let mut stdout = io::stdout();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if session.handle_line(&line, &mut stdout)? == LoopSignal::Exit {
                    break;
                }
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> (String, usize) {
        let mut session = Session::new();
        let mut out = Vec::new();
        for line in lines {
            if session.handle_line(line, &mut out).unwrap() == LoopSignal::Exit {
                break;
            }
        }
        (String::from_utf8(out).unwrap(), session.history().len())
    }

    #[test]
    fn successful_arithmetic_prints_and_records() {
        let (out, len) = run(&["add 2 3"]);
        assert!(out.contains("Result: 5.0"));
        assert_eq!(len, 1);
    }

    #[test]
    fn divide_by_zero_reports_and_skips_history() {
        let (out, len) = run(&["divide 5 0"]);
        assert!(out.contains("Division by zero is not allowed"));
        assert!(out.contains("Error: Improper Inputs"));
        assert_eq!(len, 0);
    }

    #[test]
    fn malformed_input_leaves_history_untouched() {
        let (out, len) = run(&["add two three", "add 1", "modulus 5 3"]);
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Unknown operation 'modulus'"));
        assert_eq!(len, 0);
    }

    #[test]
    fn history_length_tracks_successes() {
        let (_, len) = run(&["add 1 1", "subtract 9 4", "divide 8 2"]);
        assert_eq!(len, 3);
        let (_, len) = run(&["add 1 1", "clear"]);
        assert_eq!(len, 0);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (out, len) = run(&["", "   "]);
        assert!(out.is_empty());
        assert_eq!(len, 0);
    }

    #[test]
    fn exit_stops_processing_further_lines() {
        let (out, _) = run(&["exit", "add 2 3"]);
        assert!(out.contains("Exiting calculator..."));
        assert!(!out.contains("Result:"));
    }
}
