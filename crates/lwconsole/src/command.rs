//! The `Command` trait and the simple constant/closure variant.

use crate::error::CommandError;

/// What a handler produces: text to display, nothing (side effect only),
/// or a typed error classified by the dispatcher.
pub type CommandResult = Result<Option<String>, CommandError>;

/// A named, invocable unit of console behavior.
///
/// Identity is immutable after construction. `name` is matched
/// case-insensitively on lookup but displayed as declared. Hidden commands
/// (`visible() == false`) are excluded from listings yet remain invocable
/// and describable via `help <name>`.
pub trait Command {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Usage string shown on usage errors and in help, e.g. `"<message>"`.
    /// Does not include the command name.
    fn usage(&self) -> Option<&str> {
        None
    }

    fn author(&self) -> Option<&str> {
        None
    }

    fn visible(&self) -> bool {
        true
    }

    /// Execute with the arguments following the command name. Commands that
    /// defer work (e.g. through a cloned [`crate::console::Sink`]) return an
    /// immediate placeholder here; the dispatcher only captures this
    /// synchronous value.
    fn run(&self, args: &[&str]) -> CommandResult;
}

enum Handler {
    /// Constant reply.
    Text(String),
    Func(Box<dyn Fn(&[&str]) -> CommandResult>),
}

/// Command built from metadata plus either a constant reply or a closure.
///
/// The two shapes are selected by constructor, so a handler-less simple
/// command cannot be expressed.
pub struct SimpleCommand {
    name: String,
    description: String,
    usage: Option<String>,
    author: Option<String>,
    visible: bool,
    handler: Handler,
}

impl SimpleCommand {
    /// Simple command replying with a fixed string.
    pub fn text(
        name: impl Into<String>,
        description: impl Into<String>,
        reply: impl Into<String>,
    ) -> Self {
        Self::build(name, description, Handler::Text(reply.into()))
    }

    /// Simple command backed by a closure.
    pub fn func(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl Fn(&[&str]) -> CommandResult + 'static,
    ) -> Self {
        Self::build(name, description, Handler::Func(Box::new(handler)))
    }

    fn build(name: impl Into<String>, description: impl Into<String>, handler: Handler) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "command name must be non-empty");
        Self {
            name,
            description: description.into(),
            usage: None,
            author: None,
            visible: true,
            handler,
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl Command for SimpleCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn run(&self, args: &[&str]) -> CommandResult {
        match &self.handler {
            Handler::Text(reply) => Ok(Some(reply.clone())),
            Handler::Func(handler) => handler(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_command_replies_with_constant() {
        let cmd = SimpleCommand::text("kleinhase", "Secret message", "<3").hidden();
        assert_eq!(cmd.run(&[]).unwrap(), Some("<3".to_string()));
        assert!(!cmd.visible());
    }

    #[test]
    fn func_command_sees_args() {
        let cmd = SimpleCommand::func("shout", "", |args| {
            Ok(Some(args.join(" ").to_uppercase()))
        });
        assert_eq!(cmd.run(&["a", "b"]).unwrap(), Some("A B".to_string()));
    }

    #[test]
    fn builder_sets_metadata() {
        let cmd = SimpleCommand::text("motd", "Shows the message of the day", "hi")
            .with_author("Trikolon")
            .with_usage("[raw]");
        assert_eq!(cmd.author(), Some("Trikolon"));
        assert_eq!(cmd.usage(), Some("[raw]"));
        assert!(cmd.visible());
    }
}
