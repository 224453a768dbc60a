//! Terminal frontend for the console.
//!
//! This is the host surface: it owns the terminal, feeds keystrokes into
//! the console core and draws the transcript. No dispatch logic lives
//! here.
//!
//! Submodules:
//! - state: App struct
//! - runner: terminal setup/teardown and the event loop
//! - input: keyboard handling (submit, recall, completion)
//! - render: drawing, including the invert/flicker effects

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
