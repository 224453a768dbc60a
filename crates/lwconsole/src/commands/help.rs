//! `help`: list visible commands or describe a single one.

use std::cell::RefCell;
use std::rc::Weak;

use crate::command::{Command, CommandResult};
use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// Holds a weak registry handle; the registry owns this command, so a
/// strong handle would cycle.
pub struct HelpCommand {
    registry: Weak<RefCell<CommandRegistry>>,
}

impl HelpCommand {
    pub fn new(registry: Weak<RefCell<CommandRegistry>>) -> Self {
        Self { registry }
    }

    fn describe(command: &dyn Command) -> String {
        let mut text = format!("{}:", command.name());
        if !command.description().is_empty() {
            text.push_str(&format!("\nDescription: {}", command.description()));
        }
        if let Some(usage) = command.usage() {
            text.push_str(&format!("\nUsage: {} {usage}", command.name()));
        }
        if let Some(author) = command.author() {
            text.push_str(&format!("\nAuthor: {author}"));
        }
        text
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Shows a list of commands"
    }

    fn usage(&self) -> Option<&str> {
        Some("[command]")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        if args.len() > 1 {
            return Err(CommandError::usage());
        }
        let registry = self
            .registry
            .upgrade()
            .ok_or_else(|| CommandError::failure("StateError", "command registry is gone"))?;
        let registry = registry.borrow();

        match args.first() {
            // Listing shows visible commands only, in registry (sorted) order.
            None => {
                let mut msg = String::from("Available commands:");
                for command in registry.iter().filter(|cmd| cmd.visible()) {
                    msg.push_str(&format!("\n {}: {}", command.name(), command.description()));
                }
                Ok(Some(msg))
            }
            // Direct lookup also documents hidden commands.
            Some(name) => match registry.get(name) {
                Some(command) => Ok(Some(Self::describe(command.as_ref()))),
                None => Ok(Some("No help page available: Unknown command.".to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::command::SimpleCommand;

    fn registry_with_help() -> Rc<RefCell<CommandRegistry>> {
        let registry = Rc::new(RefCell::new(CommandRegistry::new()));
        let help: Rc<dyn Command> = Rc::new(HelpCommand::new(Rc::downgrade(&registry)));
        registry.borrow_mut().add(help).unwrap();
        registry
            .borrow_mut()
            .add(Rc::new(
                SimpleCommand::text("echo", "Displays message", "hi").with_author("Trikolon"),
            ))
            .unwrap();
        registry
            .borrow_mut()
            .add(Rc::new(SimpleCommand::text("kleinhase", "Secret message", "<3").hidden()))
            .unwrap();
        registry
    }

    #[test]
    fn listing_skips_hidden_commands() {
        let registry = registry_with_help();
        let help = registry.borrow().get("help").unwrap();
        let listing = help.run(&[]).unwrap().unwrap();
        assert!(listing.contains("\n echo: Displays message"));
        assert!(listing.contains("\n help: "));
        assert!(!listing.contains("kleinhase"));
    }

    #[test]
    fn direct_lookup_documents_hidden_commands() {
        let registry = registry_with_help();
        let help = registry.borrow().get("help").unwrap();
        let page = help.run(&["kleinhase"]).unwrap().unwrap();
        assert!(page.starts_with("kleinhase:"));
        assert!(page.contains("Description: Secret message"));
    }

    #[test]
    fn unknown_command_has_no_help_page() {
        let registry = registry_with_help();
        let help = registry.borrow().get("help").unwrap();
        assert_eq!(
            help.run(&["frobnicate"]).unwrap(),
            Some("No help page available: Unknown command.".to_string())
        );
    }

    #[test]
    fn too_many_args_is_a_usage_error() {
        let registry = registry_with_help();
        let help = registry.borrow().get("help").unwrap();
        assert_eq!(help.run(&["a", "b"]).unwrap_err(), CommandError::usage());
    }
}
