//! Interactive date picker shown after a browsing listing.
//!
//! Commands: `<n>` show details, `s <n>` select, `l` list, `c` clear,
//! `w` write and finish, `q` quit without saving.

use std::io::{BufRead, Write};

use anyhow::Result;
use chatmine_archive::SelectedDates;
use chatmine_core::Period;
use chatmine_curate::DateCandidate;

use crate::render::render_candidate_detail;

pub const HELP: &str = "\
Commands:
  <n>      Show details for result n
  s <n>    Select the date of result n
  l        List selected dates
  c        Clear selection
  w        Write selection and exit
  q        Quit without saving";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Write(SelectedDates),
    Quit,
}

/// Selection state over a ranked candidate list.
pub struct PickerSession<'a> {
    ranked: &'a [DateCandidate],
    period: Period,
    selected: Vec<String>,
}

impl<'a> PickerSession<'a> {
    pub fn new(ranked: &'a [DateCandidate], period: Period) -> Self {
        Self {
            ranked,
            period,
            selected: Vec::new(),
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// `n` is 1-based, matching the listing.
    fn candidate(&self, n: &str) -> Option<&'a DateCandidate> {
        let n: usize = n.parse().ok()?;
        n.checked_sub(1).and_then(|i| self.ranked.get(i))
    }

    pub fn handle(&mut self, line: &str) -> Step {
        let cmd = line.trim().to_lowercase();

        if let Some(arg) = cmd.strip_prefix("s ") {
            return Step::Continue(match self.candidate(arg.trim()) {
                Some(c) if self.selected.iter().any(|d| d == &c.date) => {
                    format!("Already selected: {}", c.date)
                }
                Some(c) => {
                    self.selected.push(c.date.clone());
                    format!("Selected: {}", c.date)
                }
                None if arg.trim().parse::<usize>().is_ok() => "Invalid index".to_string(),
                None => "Invalid command, expected: s <n>".to_string(),
            });
        }

        match cmd.as_str() {
            "l" if self.selected.is_empty() => Step::Continue("No dates selected yet".to_string()),
            "l" => {
                let mut out = format!("{} dates selected:", self.selected.len());
                for (i, date) in self.selected.iter().enumerate() {
                    out.push_str(&format!("\n  {}. {}", i + 1, date));
                }
                Step::Continue(out)
            }
            "c" => {
                self.selected.clear();
                Step::Continue("Selection cleared".to_string())
            }
            "w" if self.selected.is_empty() => {
                Step::Continue("Nothing selected, nothing to write".to_string())
            }
            "w" => Step::Write(SelectedDates::new(
                self.selected.clone(),
                format!("從 {} 瀏覽選擇的日期", self.period),
            )),
            "q" => Step::Quit,
            n if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => {
                Step::Continue(match self.candidate(n) {
                    Some(c) => render_candidate_detail(c),
                    None => "Invalid index".to_string(),
                })
            }
            _ => Step::Continue("Unknown command".to_string()),
        }
    }
}

/// Run the picker until the user writes or quits. Returns the selection to
/// persist, if any. End of input counts as quitting.
pub fn run_picker<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    ranked: &[DateCandidate],
    period: Period,
) -> Result<Option<SelectedDates>> {
    let mut session = PickerSession::new(ranked, period);
    writeln!(output, "{}", HELP)?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        match session.handle(&line?) {
            Step::Continue(msg) => writeln!(output, "{}", msg)?,
            Step::Write(selection) => return Ok(Some(selection)),
            Step::Quit => {
                writeln!(output, "Quit without saving")?;
                return Ok(None);
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(None)
}
