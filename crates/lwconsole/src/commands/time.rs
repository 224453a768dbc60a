//! `time`: current time in UTC, local, or unix-epoch form.

use chrono::{Local, Utc};

use crate::command::{Command, CommandResult};
use crate::error::CommandError;

pub struct TimeCommand;

impl Command for TimeCommand {
    fn name(&self) -> &str {
        "time"
    }

    fn description(&self) -> &str {
        "Show time in different formats"
    }

    fn usage(&self) -> Option<&str> {
        Some("<utc/local/unix>")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        let [mode] = args else {
            return Err(CommandError::usage());
        };
        let text = match mode.to_lowercase().as_str() {
            "utc" => Utc::now().to_rfc2822(),
            "local" => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "unix" => Utc::now().timestamp().to_string(),
            _ => return Err(CommandError::usage()),
        };
        Ok(Some(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_mode_returns_an_integer() {
        let text = TimeCommand.run(&["unix"]).unwrap().unwrap();
        assert!(text.parse::<i64>().is_ok());
    }

    #[test]
    fn mode_is_case_insensitive() {
        assert!(TimeCommand.run(&["UTC"]).is_ok());
    }

    #[test]
    fn missing_or_unknown_mode_is_a_usage_error() {
        assert_eq!(TimeCommand.run(&[]).unwrap_err(), CommandError::usage());
        assert_eq!(
            TimeCommand.run(&["stardate"]).unwrap_err(),
            CommandError::usage()
        );
        assert_eq!(
            TimeCommand.run(&["utc", "extra"]).unwrap_err(),
            CommandError::usage()
        );
    }
}
