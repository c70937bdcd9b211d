// EventLens - app/repl.rs
//
// The interactive loop: render the menu, read one line, dispatch to the
// filter session, render results. Blocking line reads; the loop only
// ends on submit with a non-empty result, quit, or end of input.
//
// Generic over the input source and the two output sinks so scripted
// sessions are testable without a terminal. Recoverable errors go to
// the error sink and never corrupt session state.

use crate::core::filter::FilterSession;
use crate::core::model::FilterKind;
use crate::ui::{menu, table};
use std::io::{self, BufRead, Write};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A non-empty filtered result was rendered.
    Submitted,
    /// The user quit (or input ended) without showing results.
    Quit,
}

pub struct Repl<R, O, E> {
    input: R,
    out: O,
    err: E,
    session: FilterSession,
}

impl<R: BufRead, O: Write, E: Write> Repl<R, O, E> {
    pub fn new(session: FilterSession, input: R, out: O, err: E) -> Self {
        Self {
            input,
            out,
            err,
            session,
        }
    }

    /// Drive the session until it ends. Only terminal I/O failures are
    /// returned as errors.
    pub fn run(mut self) -> io::Result<SessionEnd> {
        loop {
            write!(self.out, "{}", menu::render_menu(&self.session))?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                // End of input is an implicit quit.
                return Ok(SessionEnd::Quit);
            };

            match line.trim() {
                "q" => return Ok(SessionEnd::Quit),
                "c" => {
                    self.session.clear();
                    writeln!(self.out, "Filters cleared.")?;
                }
                "" => {
                    if self.submit()? {
                        return Ok(SessionEnd::Submitted);
                    }
                }
                "1" => self.apply_type()?,
                "2" => self.apply_field()?,
                "3" => self.apply_date_range()?,
                other => {
                    writeln!(self.err, "Invalid input '{other}'. Please try again.")?;
                }
            }
        }
    }

    /// Attempt to show the final result. Returns true when a non-empty
    /// subset was rendered and the session should end.
    fn submit(&mut self) -> io::Result<bool> {
        match self.session.subset() {
            None => {
                writeln!(
                    self.err,
                    "No filters applied. Select a filter before submitting."
                )?;
                Ok(false)
            }
            Some(events) if events.is_empty() => {
                writeln!(self.err, "No events found with the current filters.")?;
                Ok(false)
            }
            Some(events) => {
                write!(self.out, "{}", table::render_table(&events))?;
                Ok(true)
            }
        }
    }

    fn apply_type(&mut self) -> io::Result<()> {
        if self.report_already_applied(FilterKind::EntityType)? {
            return Ok(());
        }
        let Some(selector) =
            self.prompt("Entity type (INSERTED [I], UPDATED [U], DELETED [D]): ")?
        else {
            return Ok(());
        };
        match self.session.filter_by_type(&selector) {
            Ok(count) => writeln!(self.out, "{count} event(s) match.")?,
            Err(e) => writeln!(self.err, "{e}")?,
        }
        Ok(())
    }

    fn apply_field(&mut self) -> io::Result<()> {
        if self.report_already_applied(FilterKind::Field)? {
            return Ok(());
        }
        let Some(field) = self.prompt("Field name: ")? else {
            return Ok(());
        };
        match self.session.filter_by_field(&field) {
            Ok(count) => writeln!(self.out, "{count} event(s) match.")?,
            Err(e) => writeln!(self.err, "{e}")?,
        }
        Ok(())
    }

    fn apply_date_range(&mut self) -> io::Result<()> {
        if self.report_already_applied(FilterKind::DateRange)? {
            return Ok(());
        }
        let Some(start) = self.prompt("Start date (YYYY-MM-DD [HH:MM:SS.fff]): ")? else {
            return Ok(());
        };
        let Some(end) = self.prompt("End date (YYYY-MM-DD [HH:MM:SS.fff]): ")? else {
            return Ok(());
        };
        match self.session.filter_by_date_range(&start, &end) {
            Ok(count) => writeln!(self.out, "{count} event(s) match.")?,
            Err(e) => writeln!(self.err, "{e}")?,
        }
        Ok(())
    }

    /// Intercept re-application before prompting so the user is not
    /// asked for a value that would be rejected anyway. The session
    /// enforces the same guard internally.
    fn report_already_applied(&mut self, kind: FilterKind) -> io::Result<bool> {
        if self.session.is_applied(kind) {
            writeln!(
                self.err,
                "The {} filter is already applied. Clear filters to select it again.",
                kind.label()
            )?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Write a prompt and read one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
