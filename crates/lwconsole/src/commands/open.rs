//! `open`: resolve a service shortcut to its URL.
//!
//! Prints the URL rather than launching a browser; spawning programs from
//! a raw-mode terminal is not worth the mess.

use crate::command::{Command, CommandResult};
use crate::error::CommandError;

const SERVICES: &[(&str, &str)] = &[
    ("keybase", "https://keybase.io/pbz"),
    ("github", "https://github.com/Trikolon"),
    ("twitter", "https://twitter.com/deppaws"),
    ("email", "mailto:paul@zuehlcke.de"),
    ("liquidradio", "https://liquidradio.pro"),
    ("source", "https://github.com/Trikolon/pbz-uber"),
];

pub struct OpenCommand;

impl Command for OpenCommand {
    fn name(&self) -> &str {
        "open"
    }

    fn description(&self) -> &str {
        "Opens page from main navigation"
    }

    fn usage(&self) -> Option<&str> {
        Some("[keybase/github/twitter/email/liquidradio/source]")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        let [service] = args else {
            return Err(CommandError::usage());
        };
        let service = service.to_lowercase();
        let url = SERVICES
            .iter()
            .find(|(name, _)| *name == service)
            .map(|(_, url)| *url)
            .ok_or_else(|| CommandError::usage_with("Sorry, I don't know this service"))?;
        Ok(Some(format!("{service}: {url}")))
    }
}
