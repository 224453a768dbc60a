//! `history`: list past inputs, or re-execute one by its index.

use std::cell::RefCell;
use std::rc::Rc;

use crate::command::{Command, CommandResult};
use crate::console::Sink;
use crate::error::CommandError;
use crate::history::CommandHistory;

pub struct HistoryCommand {
    history: Rc<RefCell<CommandHistory>>,
    sink: Sink,
}

impl HistoryCommand {
    pub fn new(history: Rc<RefCell<CommandHistory>>, sink: Sink) -> Self {
        Self { history, sink }
    }
}

impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> &str {
        "Shows command history or executes command by index"
    }

    fn usage(&self) -> Option<&str> {
        Some("[index]")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        match args {
            [] => {
                let history = self.history.borrow();
                if history.is_empty() {
                    return Ok(Some("No entries".to_string()));
                }
                let listing = history
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| format!("{}: {entry}", i + 1))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Some(listing))
            }
            [index] => {
                let index: usize = index
                    .parse()
                    .map_err(|_| CommandError::usage_with("Index must be number"))?;
                // Indices are 1-based, matching the listing.
                let entry = index
                    .checked_sub(1)
                    .and_then(|i| self.history.borrow().get(i).map(str::to_string))
                    .ok_or_else(|| CommandError::usage_with("Index out of bounds"))?;
                self.sink.submit(entry);
                Ok(None)
            }
            _ => Err(CommandError::usage()),
        }
    }
}
