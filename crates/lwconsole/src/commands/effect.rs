//! `effect`: toggle or set the cosmetic render effects.
//!
//! The command only flips persisted flags; the frontend applies them at
//! render time (invert swaps the color scheme, flicker dims alternate
//! frames).

use std::cell::RefCell;
use std::rc::Rc;

use crate::command::{Command, CommandResult};
use crate::config::ConfigStore;
use crate::error::CommandError;

pub const KEY_INVERT: &str = "invert";
pub const KEY_FLICKER: &str = "flicker";

pub struct EffectCommand {
    config: Rc<RefCell<ConfigStore>>,
}

impl EffectCommand {
    pub fn new(config: Rc<RefCell<ConfigStore>>) -> Self {
        Self { config }
    }
}

impl Command for EffectCommand {
    fn name(&self) -> &str {
        "effect"
    }

    fn description(&self) -> &str {
        "Toggle effects, such as invert and flicker"
    }

    fn usage(&self) -> Option<&str> {
        Some("<flicker|invert> [true|false]")
    }

    fn author(&self) -> Option<&str> {
        Some("Trikolon")
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        let (effect, state_arg) = match args {
            [effect] => (effect.to_lowercase(), None),
            [effect, state] => (effect.to_lowercase(), Some(*state)),
            _ => return Err(CommandError::usage()),
        };
        if effect != KEY_INVERT && effect != KEY_FLICKER {
            return Err(CommandError::usage());
        }

        let mut config = self.config.borrow_mut();
        let state = match state_arg {
            // One argument toggles the current state.
            None => !config.get_bool(&effect),
            Some(value) => value == "true",
        };
        config.set(&effect, state);

        Ok(Some(format!(
            "Effect {effect} turned {}",
            if state { "ON" } else { "OFF" }
        )))
    }
}
