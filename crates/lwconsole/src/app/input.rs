//! Keyboard handling for the console frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    if app.open {
        handle_console_key(app, key);
    } else {
        handle_splash_key(app, key);
    }
}

fn handle_console_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit on enter; empty input never reaches the dispatcher.
        KeyCode::Enter => {
            if !app.input.trim().is_empty() {
                let line = std::mem::take(&mut app.input);
                app.console.submit(&line);
            }
        }
        // History recall. A None result leaves the field unchanged.
        KeyCode::Up => {
            if let Some(prev) = app.console.recall_prev() {
                app.input = prev;
            }
        }
        KeyCode::Down => {
            if let Some(next) = app.console.recall_next() {
                app.input = next;
            }
        }
        KeyCode::Tab => {
            let current = app.input.clone();
            if let Some(replacement) = app.console.complete(&current) {
                app.input = replacement;
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => app.close_console(),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_splash_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') => app.open_console(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}
