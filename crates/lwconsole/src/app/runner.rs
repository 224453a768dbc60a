//! Terminal setup/teardown and the main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::ConfigStore;
use crate::console::{default_config, Console};

use super::input::handle_key;
use super::render::render;
use super::state::App;

/// Frame cadence; also drives the flicker effect.
const TICK: Duration = Duration::from_millis(120);

/// Entry point: set up terminal and run the event loop.
pub fn run() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let hostname = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
    let console = Console::new(&hostname, ConfigStore::open("console", default_config()));
    let mut app = App::new(console);

    while !app.should_quit {
        terminal.draw(|frame| render(&app, frame))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Resize(..) => {}
                _ => {}
            }
        } else {
            app.tick = app.tick.wrapping_add(1);
        }

        app.pump_console();
    }

    Ok(())
}
