//! `echo`: print the arguments back.

use crate::command::{Command, CommandResult};
use crate::error::CommandError;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Displays message on console - no pipes yet :-("
    }

    fn usage(&self) -> Option<&str> {
        Some("<message>")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        if args.is_empty() {
            return Err(CommandError::usage());
        }
        Ok(Some(args.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_args_with_spaces() {
        assert_eq!(
            EchoCommand.run(&["a", "b", "c"]).unwrap(),
            Some("a b c".to_string())
        );
    }

    #[test]
    fn no_args_is_a_usage_error() {
        assert_eq!(EchoCommand.run(&[]).unwrap_err(), CommandError::usage());
    }
}
