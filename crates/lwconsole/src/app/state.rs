//! Frontend state: the console plus the input field and view flags.

use crate::console::Console;

pub struct App {
    pub console: Console,
    /// Current content of the input field.
    pub input: String,
    /// Whether the console view is shown (vs. the closed splash).
    pub open: bool,
    /// Frame counter driving the flicker effect.
    pub tick: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(console: Console) -> Self {
        let open = console.is_open();
        Self {
            console,
            input: String::new(),
            open,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn open_console(&mut self) {
        self.open = true;
        self.console.set_open(true);
    }

    pub fn close_console(&mut self) {
        self.open = false;
        self.console.set_open(false);
    }

    /// Apply pending sink events (deferred prints, clear, show requests).
    pub fn pump_console(&mut self) {
        if let Some(open) = self.console.drain_events() {
            self.open = open;
        }
    }
}
