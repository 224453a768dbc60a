//! Builtin command implementations.
//!
//! Each non-trivial command lives in its own file and implements the
//! [`Command`](crate::command::Command) trait; the one-liners are
//! [`SimpleCommand`]s assembled in [`install_defaults`]. To add a command,
//! implement the trait (or build a `SimpleCommand`) and register it here or
//! dynamically through [`crate::console::Console::add_command`].

pub mod calc;
pub mod convert;
pub mod echo;
pub mod effect;
pub mod help;
pub mod history;
pub mod open;
pub mod time;

use std::cell::RefCell;
use std::rc::Rc;

use crate::command::SimpleCommand;
use crate::config::ConfigStore;
use crate::console::Sink;
use crate::history::CommandHistory;
use crate::registry::CommandRegistry;

/// Register the builtin command set. Panics on a duplicate name, which can
/// only be a programming error in this table.
pub fn install_defaults(
    registry: &Rc<RefCell<CommandRegistry>>,
    history: &Rc<RefCell<CommandHistory>>,
    config: &Rc<RefCell<ConfigStore>>,
    sink: &Sink,
    motd: &str,
) {
    let defaults: Vec<Rc<dyn crate::command::Command>> = vec![
        Rc::new(help::HelpCommand::new(Rc::downgrade(registry))),
        Rc::new(echo::EchoCommand),
        Rc::new(history::HistoryCommand::new(
            Rc::clone(history),
            sink.clone(),
        )),
        Rc::new(time::TimeCommand),
        Rc::new(effect::EffectCommand::new(Rc::clone(config))),
        Rc::new(open::OpenCommand),
        Rc::new(calc::CalcCommand),
        Rc::new(convert::ConvertCommand),
        Rc::new(
            SimpleCommand::text("motd", "Shows the message of the day", motd).with_author("Trikolon"),
        ),
        Rc::new({
            let sink = sink.clone();
            SimpleCommand::func("clear", "Clears the console", move |_| {
                sink.clear();
                Ok(None)
            })
            .with_author("Trikolon")
        }),
        Rc::new({
            let sink = sink.clone();
            SimpleCommand::func("exit", "Exit console", move |_| {
                sink.show(false);
                Ok(None)
            })
            .with_author("Trikolon")
        }),
        Rc::new(
            SimpleCommand::func(
                "ridb",
                "A simple command that confirms that Robert is the best.",
                |args| {
                    let mut output = String::from("Paul:\t'Robert ist der Beste!'");
                    if args.is_empty() {
                        output.push_str("\nThere was no response...");
                    } else {
                        output.push_str(&format!("\nRobert:\t'{}'", args.join(" ")));
                    }
                    Ok(Some(output))
                },
            )
            .with_usage("[reply]")
            .with_author("Endebert")
            .hidden(),
        ),
        Rc::new(SimpleCommand::text("kleinhase", "Secret message", "<3").hidden()),
        Rc::new(
            SimpleCommand::text(
                "shutdown",
                "Halt, power-off or reboot the machine",
                "You're not my master!",
            )
            .hidden(),
        ),
        Rc::new(
            SimpleCommand::text(
                "rm",
                "remove files or directories",
                "Please don't delete anything. We don't have backups.",
            )
            .hidden(),
        ),
        Rc::new(
            SimpleCommand::text(
                "ls",
                "list directory contents",
                "cia_secrets, cute_cat_gifs, videos, passwords.txt",
            )
            .hidden(),
        ),
    ];

    let mut registry = registry.borrow_mut();
    for command in defaults {
        registry
            .add(command)
            .expect("builtin command names are unique");
    }
}
