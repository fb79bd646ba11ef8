//! Stateless UI rendering for the guessing game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::TerminalApp;
use crate::games::guess::{HighlightColor, StatusText};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &TerminalApp) {
    let area = center_rect(frame.area(), 56, 19);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Length(3), // Guesses
            Constraint::Length(3), // Attempts
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help
        ])
        .split(area);

    let config = app.config();
    let title = Paragraph::new(format!(
        "Guess a number between {} and {}",
        config.min_number(),
        config.max_number()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Strictly Guess"));
    frame.render_widget(title, chunks[0]);

    let instruction = app.instruction();
    let status = Paragraph::new(app.status_message())
        .style(status_style(instruction.status, *app.highlight()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[1]);

    let guesses = Paragraph::new(instruction.history_text.as_str())
        .block(Block::default().borders(Borders::ALL).title("Guesses"));
    frame.render_widget(guesses, chunks[2]);

    let attempts_style = if instruction.low_attempts_warning {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let attempts = Paragraph::new(Line::from(Span::styled(
        instruction.attempts_remaining.to_string(),
        attempts_style,
    )))
    .block(Block::default().borders(Borders::ALL).title("Attempts left"));
    frame.render_widget(attempts, chunks[3]);

    let input = Paragraph::new(Line::from(vec![
        Span::raw(app.draft().as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Enter: {}", instruction.action_label)),
    );
    frame.render_widget(input, chunks[4]);

    let help = Paragraph::new("Enter: submit | Ctrl-R: new game | Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn status_style(status: StatusText, highlight: Option<HighlightColor>) -> Style {
    if let Some(color) = highlight {
        return Style::default()
            .fg(palette_color(color))
            .add_modifier(Modifier::BOLD);
    }
    match status {
        StatusText::TooLow => Style::default().fg(Color::Green),
        StatusText::TooHigh => Style::default().fg(Color::Red),
        StatusText::Win => Style::default().add_modifier(Modifier::BOLD),
        StatusText::GameOver => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        status if status.is_rejection() => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

/// Terminal color for a palette entry.
pub fn palette_color(color: HighlightColor) -> Color {
    match color {
        HighlightColor::Red => Color::Red,
        HighlightColor::Green => Color::Green,
        HighlightColor::Blue => Color::Blue,
        HighlightColor::Yellow => Color::Yellow,
        HighlightColor::Purple => Color::Magenta,
        HighlightColor::Orange => Color::Rgb(255, 165, 0),
        HighlightColor::Pink => Color::Rgb(255, 105, 180),
        HighlightColor::Brown => Color::Rgb(139, 69, 19),
        HighlightColor::Gray => Color::Gray,
        HighlightColor::Black => Color::Black,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
