//! The console: REPL dispatch loop, transcript, print sink and MOTD.
//!
//! One call to [`Console::submit`] turns one line of raw input into one
//! block of transcript output: echo, lookup, guarded invocation, outcome
//! classification, history append, persistence. All failures are converted
//! to display strings at this boundary; nothing escapes to the host.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use toml::{Table, Value};

use crate::command::Command;
use crate::commands;
use crate::config::ConfigStore;
use crate::error::{CommandError, RegistryError};
use crate::history::CommandHistory;
use crate::registry::CommandRegistry;

/// Result text shown for an unrecognized command name. Not an error.
const UNKNOWN_COMMAND: &str = "Unknown command.";

/// Shown when a command panics instead of returning a typed error.
const CONTRACT_VIOLATION: &str = "Unknown error in command execution, check log for details";

/// Config keys used by the console itself.
pub const KEY_CONSOLE_OPEN: &str = "console_open";
pub const KEY_HISTORY: &str = "history";
pub const KEY_VISIT_COUNT: &str = "visit_count";

/// Requests emitted by commands through the [`Sink`], applied by the
/// console (prints, clears, re-submissions) or surfaced to the host
/// (visibility).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Print(String),
    Clear,
    Show(bool),
    /// Feed a line back through the full submit path (echo, dispatch,
    /// history append), as if the user had typed it.
    Submit(String),
}

/// Cloneable print sink handed to commands at construction.
///
/// Safe to call zero or more times per invocation, including after the
/// synchronous `run` call has returned; deferred results arrive whenever
/// the console next drains its event channel. A sink outliving its console
/// drops the events silently.
#[derive(Clone)]
pub struct Sink {
    tx: Sender<ConsoleEvent>,
}

impl Sink {
    pub(crate) fn from_sender(tx: Sender<ConsoleEvent>) -> Self {
        Self { tx }
    }

    pub fn print(&self, text: impl Into<String>) {
        let _ = self.tx.send(ConsoleEvent::Print(text.into()));
    }

    pub fn clear(&self) {
        let _ = self.tx.send(ConsoleEvent::Clear);
    }

    pub fn show(&self, state: bool) {
        let _ = self.tx.send(ConsoleEvent::Show(state));
    }

    pub fn submit(&self, line: impl Into<String>) {
        let _ = self.tx.send(ConsoleEvent::Submit(line.into()));
    }
}

/// Default configuration snapshot for a console scope.
pub fn default_config() -> Table {
    let mut table = Table::new();
    table.insert(KEY_CONSOLE_OPEN.into(), Value::Boolean(false));
    table.insert(commands::effect::KEY_INVERT.into(), Value::Boolean(false));
    table.insert(commands::effect::KEY_FLICKER.into(), Value::Boolean(false));
    table.insert(KEY_HISTORY.into(), Value::Array(Vec::new()));
    table.insert(KEY_VISIT_COUNT.into(), Value::Integer(0));
    table
}

pub struct Console {
    registry: Rc<RefCell<CommandRegistry>>,
    history: Rc<RefCell<CommandHistory>>,
    config: Rc<RefCell<ConfigStore>>,
    sink: Sink,
    events: Receiver<ConsoleEvent>,
    output: String,
    motd: String,
}

impl Console {
    /// Build a console with the builtin command set, seeded from the given
    /// config store (persisted history, effect flags, open state).
    pub fn new(hostname: &str, mut config: ConfigStore) -> Self {
        let visits = config.get_as::<i64>(KEY_VISIT_COUNT).unwrap_or(0) + 1;
        config.set(KEY_VISIT_COUNT, visits);
        let motd = format!(
            "Welcome to {hostname}! [Visit {visits}]\nType 'help' for a list of commands.\n"
        );

        let seeded: Vec<String> = config.get_as(KEY_HISTORY).unwrap_or_default();
        let history = Rc::new(RefCell::new(CommandHistory::from_entries(seeded)));
        let registry = Rc::new(RefCell::new(CommandRegistry::new()));
        let config = Rc::new(RefCell::new(config));

        let (tx, events) = mpsc::channel();
        let sink = Sink { tx };

        commands::install_defaults(&registry, &history, &config, &sink, &motd);

        let mut console = Self {
            registry,
            history,
            config,
            sink,
            events,
            output: String::new(),
            motd,
        };
        let motd = console.motd.clone();
        console.print(&motd);
        console
    }

    pub fn motd(&self) -> &str {
        &self.motd
    }

    /// A fresh sink handle for deferred printers.
    pub fn sink(&self) -> Sink {
        self.sink.clone()
    }

    pub fn add_command(&self, command: Rc<dyn Command>) -> Result<(), RegistryError> {
        self.registry.borrow_mut().add(command)
    }

    pub fn remove_command(&self, name: &str) -> bool {
        self.registry.borrow_mut().remove(name)
    }

    /// The transcript accumulated so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Append one message plus a trailing newline. Empty messages are
    /// dropped.
    pub fn print(&mut self, text: &str) {
        if !text.is_empty() {
            self.output.push_str(text);
            self.output.push('\n');
        }
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Submit one line of user input: echo it, dispatch it, record it.
    /// Empty input is rejected before reaching the dispatcher and never
    /// recorded to history.
    pub fn submit(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.print(&format!("> {raw}"));
        if let Some(result) = self.execute(raw) {
            self.print(&result);
        }
        self.history.borrow_mut().add(raw);
        let recent = self.history.borrow().recent().to_vec();
        self.config.borrow_mut().set(KEY_HISTORY, recent);
    }

    /// Dispatch one line and return its display text, if any. The
    /// transcript and history are untouched; `submit` owns those.
    pub fn execute(&mut self, raw: &str) -> Option<String> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let (name, args) = tokens.split_first()?;

        let command = self.registry.borrow().get(name);
        let Some(command) = command else {
            return Some(UNKNOWN_COMMAND.to_string());
        };

        match panic::catch_unwind(AssertUnwindSafe(|| command.run(args))) {
            Ok(Ok(text)) => text,
            Ok(Err(CommandError::Usage { message })) => {
                Some(format_usage(command.as_ref(), message))
            }
            Ok(Err(err @ CommandError::Failure { .. })) => Some(err.to_string()),
            Err(payload) => {
                let detail = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_string());
                log::warn!(
                    "command '{}' violated the error contract: {detail}; args: {args:?}",
                    command.name()
                );
                Some(CONTRACT_VIOLATION.to_string())
            }
        }
    }

    /// Interactive recall: previous (older) history entry, `None` at the
    /// boundary.
    pub fn recall_prev(&mut self) -> Option<String> {
        self.history.borrow_mut().prev().map(str::to_string)
    }

    /// Interactive recall: next (newer) history entry, `None` at the
    /// boundary.
    pub fn recall_next(&mut self) -> Option<String> {
        self.history.borrow_mut().next().map(str::to_string)
    }

    /// Tab-completion. Returns the replacement for the input field, or
    /// `None` to leave it unchanged. Multiple matches print a space-joined
    /// name list to the transcript instead.
    pub fn complete(&mut self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }
        let matches = self.registry.borrow().matching_by_prefix(input);
        match matches.as_slice() {
            [] => None,
            [only] => {
                if only.name().eq_ignore_ascii_case(input) {
                    match only.usage() {
                        Some(usage) => Some(format!("{} {usage}", only.name())),
                        None => Some(only.name().to_string()),
                    }
                } else {
                    Some(only.name().to_string())
                }
            }
            many => {
                let names: Vec<&str> = many.iter().map(|cmd| cmd.name()).collect();
                self.print(&names.join(" "));
                None
            }
        }
    }

    /// Apply pending sink events to the transcript. Returns the last
    /// visibility request, if any, for the host to act on.
    pub fn drain_events(&mut self) -> Option<bool> {
        let mut show = None;
        while let Ok(event) = self.events.try_recv() {
            match event {
                ConsoleEvent::Print(text) => self.print(&text),
                ConsoleEvent::Clear => self.clear_output(),
                ConsoleEvent::Show(state) => show = Some(state),
                ConsoleEvent::Submit(line) => self.submit(&line),
            }
        }
        if let Some(state) = show {
            self.set_open(state);
        }
        show
    }

    pub fn is_open(&self) -> bool {
        self.config.borrow().get_bool(KEY_CONSOLE_OPEN)
    }

    pub fn set_open(&mut self, open: bool) {
        self.config.borrow_mut().set(KEY_CONSOLE_OPEN, open);
    }

    pub fn effect_enabled(&self, key: &str) -> bool {
        self.config.borrow().get_bool(key)
    }
}

/// Usage-error rendering: optional message line, then `Usage: <name>
/// <usage>` when the command declares usage, else a generic line.
fn format_usage(command: &dyn Command, message: Option<String>) -> String {
    let head = message
        .filter(|m| !m.is_empty())
        .map(|m| format!("{m} \n"))
        .unwrap_or_default();
    match command.usage() {
        Some(usage) if !usage.is_empty() => format!("{head}Usage: {} {usage}", command.name()),
        _ => format!("{head}Invalid usage."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::SimpleCommand;

    fn console() -> Console {
        Console::new("test.host", ConfigStore::in_memory("console", default_config()))
    }

    #[test]
    fn motd_is_printed_at_start() {
        let console = console();
        assert!(console.output().starts_with("Welcome to test.host! [Visit 1]"));
    }

    #[test]
    fn visit_count_increments_and_persists() {
        let mut store = ConfigStore::in_memory("console", default_config());
        store.set(KEY_VISIT_COUNT, 4);
        let console = Console::new("test.host", store);
        assert!(console.output().starts_with("Welcome to test.host! [Visit 5]"));
        assert_eq!(
            console.config.borrow().get_as::<i64>(KEY_VISIT_COUNT),
            Some(5)
        );
    }

    #[test]
    fn history_index_reexecutes_through_submit() {
        let mut console = console();
        console.submit("echo hi");
        console.submit("history 1");
        console.drain_events();
        assert_eq!(console.output().matches("> echo hi\nhi\n").count(), 2);
        // The re-executed line is recorded like a typed one.
        assert_eq!(console.recall_prev(), Some("echo hi".to_string()));
    }

    #[test]
    fn unknown_command_is_a_plain_result() {
        let mut console = console();
        assert_eq!(
            console.execute("frobnicate"),
            Some("Unknown command.".to_string())
        );
    }

    #[test]
    fn dispatch_echo_matches_direct_invocation() {
        let mut console = console();
        let direct = console
            .registry
            .borrow()
            .get("echo")
            .unwrap()
            .run(&["a", "b", "c"])
            .unwrap();
        assert_eq!(console.execute("echo a b c"), direct);
        assert_eq!(console.execute("echo a b c"), Some("a b c".to_string()));
    }

    #[test]
    fn usage_error_without_message_renders_usage_line() {
        let mut console = console();
        console
            .add_command(Rc::new(
                SimpleCommand::func("eval", "", |_| Err(CommandError::usage())).with_usage("<expr>"),
            ))
            .unwrap();
        assert_eq!(
            console.execute("eval"),
            Some("Usage: eval <expr>".to_string())
        );
    }

    #[test]
    fn usage_error_with_message_prepends_it() {
        let mut console = console();
        console
            .add_command(Rc::new(
                SimpleCommand::func("eval", "", |_| Err(CommandError::usage_with("bad")))
                    .with_usage("<expr>"),
            ))
            .unwrap();
        assert_eq!(
            console.execute("eval x"),
            Some("bad \nUsage: eval <expr>".to_string())
        );
    }

    #[test]
    fn usage_error_without_usage_string_is_generic() {
        let mut console = console();
        console
            .add_command(Rc::new(SimpleCommand::func("noop", "", |_| {
                Err(CommandError::usage())
            })))
            .unwrap();
        assert_eq!(console.execute("noop"), Some("Invalid usage.".to_string()));
    }

    #[test]
    fn runtime_failure_renders_kind_and_message() {
        let mut console = console();
        console
            .add_command(Rc::new(SimpleCommand::func("boom", "", |_| {
                Err(CommandError::failure("Error", "it broke"))
            })))
            .unwrap();
        assert_eq!(
            console.execute("boom"),
            Some("Error: it broke".to_string())
        );
    }

    #[test]
    fn panicking_command_does_not_crash_the_loop() {
        let mut console = console();
        console
            .add_command(Rc::new(SimpleCommand::func("bad", "", |_| {
                panic!("not an error object")
            })))
            .unwrap();
        assert_eq!(
            console.execute("bad"),
            Some(CONTRACT_VIOLATION.to_string())
        );
        // The session survives.
        assert_eq!(console.execute("echo ok"), Some("ok".to_string()));
    }

    #[test]
    fn submit_echoes_input_and_records_history() {
        let mut console = console();
        console.submit("echo hi");
        assert!(console.output().contains("> echo hi\nhi\n"));
        assert_eq!(console.recall_prev(), Some("echo hi".to_string()));
    }

    #[test]
    fn empty_input_is_never_dispatched_or_recorded() {
        let mut console = console();
        let before = console.output().len();
        console.submit("");
        console.submit("   ");
        assert_eq!(console.output().len(), before);
        assert_eq!(console.recall_prev(), None);
    }

    #[test]
    fn command_name_lookup_is_case_insensitive() {
        let mut console = console();
        assert_eq!(console.execute("ECHO hi"), Some("hi".to_string()));
    }

    #[test]
    fn deferred_print_arrives_after_run_returns() {
        let mut console = console();
        let sink = console.sink();
        console
            .add_command(Rc::new(SimpleCommand::func("fetch", "", move |_| {
                sink.print("deferred result");
                Ok(Some("Getting data ...".to_string()))
            })))
            .unwrap();
        console.submit("fetch");
        assert!(console.output().contains("Getting data ..."));
        assert!(!console.output().contains("deferred result"));
        console.drain_events();
        assert!(console.output().contains("deferred result"));
    }

    #[test]
    fn clear_command_empties_transcript() {
        let mut console = console();
        console.submit("echo hi");
        console.submit("clear");
        console.drain_events();
        assert_eq!(console.output(), "");
    }

    #[test]
    fn exit_command_requests_close_and_persists() {
        let mut console = console();
        console.set_open(true);
        console.submit("exit");
        assert_eq!(console.drain_events(), Some(false));
        assert!(!console.is_open());
    }

    #[test]
    fn completion_follows_the_contract() {
        let mut console = console();
        // Multiple matches: print the list, leave input unchanged.
        assert_eq!(console.complete("h"), None);
        let listing = console.output().lines().last().unwrap().to_string();
        assert!(listing.contains("help"));
        assert!(listing.contains("history"));
        // Single match completes to the bare name.
        assert_eq!(console.complete("he"), Some("help".to_string()));
        // Full match reveals usage.
        assert_eq!(console.complete("help"), Some("help [command]".to_string()));
        // No match and empty input are no-ops.
        assert_eq!(console.complete("zzz"), None);
        assert_eq!(console.complete(""), None);
    }

    #[test]
    fn history_is_persisted_to_config() {
        let mut console = console();
        console.submit("echo one");
        console.submit("echo two");
        let stored: Vec<String> = console.config.borrow().get_as(KEY_HISTORY).unwrap();
        assert_eq!(stored, vec!["echo one".to_string(), "echo two".to_string()]);
    }
}
