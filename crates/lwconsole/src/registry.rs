//! Command registry: unique-name collection with sorted listings.

use std::rc::Rc;

use crate::command::{Command, CommandResult};
use crate::error::RegistryError;

/// The live collection of commands available for dispatch.
///
/// Entries are kept sorted ascending by lowercase name; insertion order is
/// irrelevant to identity. No two entries share a lowercase name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Rc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Fails when a command with the same name (same or
    /// different instance) already exists.
    pub fn add(&mut self, command: Rc<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name().to_lowercase();
        if let Some(existing) = self.get(&name) {
            return Err(RegistryError::Duplicate(existing.name().to_string()));
        }
        self.commands.push(command);
        self.commands
            .sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
        Ok(())
    }

    /// Remove a command by name (case-insensitive). Returns false when
    /// nothing matches; absence is not an error.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.to_lowercase();
        let before = self.commands.len();
        self.commands.retain(|cmd| cmd.name().to_lowercase() != name);
        self.commands.len() != before
    }

    /// Remove a command by instance (pointer identity).
    pub fn remove_instance(&mut self, command: &Rc<dyn Command>) -> bool {
        let before = self.commands.len();
        self.commands.retain(|cmd| !Rc::ptr_eq(cmd, command));
        self.commands.len() != before
    }

    /// Case-insensitive exact match. Absence is a normal outcome.
    pub fn get(&self, name: &str) -> Option<Rc<dyn Command>> {
        let name = name.to_lowercase();
        self.commands
            .iter()
            .find(|cmd| cmd.name().to_lowercase() == name)
            .cloned()
    }

    /// Handler lookup with a fallback: when nothing matches, the returned
    /// callable yields the literal "Unknown command" string. An unrecognized
    /// name is a successful no-op from the dispatcher's point of view.
    pub fn handler(&self, name: &str) -> Box<dyn Fn(&[&str]) -> CommandResult> {
        match self.get(name) {
            Some(cmd) => Box::new(move |args| cmd.run(args)),
            None => Box::new(|_| Ok(Some("Unknown command".to_string()))),
        }
    }

    /// All commands whose names start with `prefix`, case-insensitively.
    /// Hidden commands are included.
    pub fn matching_by_prefix(&self, prefix: &str) -> Vec<Rc<dyn Command>> {
        let prefix = prefix.to_lowercase();
        self.commands
            .iter()
            .filter(|cmd| cmd.name().to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Commands in ascending lowercase-lexicographic order by name.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Command>> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
