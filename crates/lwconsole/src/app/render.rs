//! Drawing, including the persisted invert/flicker effects.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::commands::effect::{KEY_FLICKER, KEY_INVERT};

use super::state::App;

pub fn render(app: &App, frame: &mut ratatui::Frame) {
    let style = screen_style(app);
    let area = frame.area();

    if !app.open {
        let splash = Paragraph::new(vec![
            Line::from("lwconsole"),
            Line::from(""),
            Line::from("Press 'c' to open the console, 'q' to quit."),
        ])
        .style(style);
        frame.render_widget(splash, area);
        return;
    }

    // Transcript above, one-line prompt below.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let transcript: Vec<Line> = tail_lines(app.console.output(), chunks[0].height as usize)
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(transcript).style(style), chunks[0]);

    let prompt = Paragraph::new(format!("> {}_", app.input)).style(style);
    frame.render_widget(prompt, chunks[1]);
}

/// Green-on-black terminal look; invert swaps the pair, flicker dims
/// alternate frames.
fn screen_style(app: &App) -> Style {
    let inverted = app.console.effect_enabled(KEY_INVERT);
    let style = if inverted {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::Green).bg(Color::Black)
    };
    if app.console.effect_enabled(KEY_FLICKER) && app.tick % 2 == 1 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// The last `height` transcript lines, console-style (always scrolled to
/// the bottom).
fn tail_lines(output: &str, height: usize) -> Vec<String> {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.len().saturating_sub(height);
    lines[start..].iter().map(|line| line.to_string()).collect()
}
