//! TUI rendering with ratatui
//!
//! Guess grid, alert line and on-screen keyboard.

use super::app::App;
use crate::core::{KEYBOARD_ROWS, NUM_GUESSES, NUM_LETTERS};
use crate::game::{BoardRow, Message};
use crate::output::{Palette, Rgb};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Rows between tiles plus the block border
const GRID_HEIGHT: u16 = (NUM_GUESSES * 2 + 1) as u16;

const fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(GRID_HEIGHT), // Guess grid
            Constraint::Length(3),           // Alert
            Constraint::Length(5),           // Keyboard
            Constraint::Min(1),              // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_alert(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn tile<'a>(letter: char, background: Rgb, palette: &Palette) -> Span<'a> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(rgb(palette.text))
            .bg(rgb(background))
            .add_modifier(Modifier::BOLD),
    )
}

fn grid_line<'a>(row: BoardRow<'_>, palette: &Palette) -> Line<'a> {
    let tiles: Vec<Span> = match row {
        BoardRow::Scored(record) => record
            .word
            .text()
            .chars()
            .zip(record.feedback.verdicts())
            .map(|(letter, &verdict)| tile(letter, palette.verdict(verdict), palette))
            .collect(),
        BoardRow::Typing(typed) => typed
            .chars()
            .chain(std::iter::repeat('_'))
            .take(NUM_LETTERS)
            .map(|letter| tile(letter, palette.empty, palette))
            .collect(),
        BoardRow::Empty => (0..NUM_LETTERS)
            .map(|_| tile(' ', palette.empty, palette))
            .collect(),
    };

    let mut spans = Vec::with_capacity(NUM_LETTERS * 2);
    for (i, span) in tiles.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(span);
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let board = app.game.board();
    let mut lines = Vec::with_capacity(NUM_GUESSES * 2);
    for (i, row) in board.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(grid_line(row, &app.palette));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(rgb(app.palette.border))),
    );
    f.render_widget(grid, area);
}

fn render_alert(f: &mut Frame, app: &App, area: Rect) {
    let palette = &app.palette;
    let line = match app.game.message() {
        Some(message) => {
            let color = match message {
                Message::NotAWord(_) => palette.alert,
                Message::Won => palette.win,
                Message::Lost { .. } => palette.loss,
            };
            Line::from(Span::styled(
                message.to_string(),
                Style::default()
                    .fg(rgb(color))
                    .add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(Span::styled(
            format!("{} guesses left", app.game.guesses_remaining()),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let alert = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(alert, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let palette = &app.palette;
    let hints = app.game.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans: Vec<Span> = Vec::new();
            if i == KEYBOARD_ROWS.len() - 1 {
                spans.push(Span::styled(
                    " ENTER ",
                    Style::default().fg(rgb(palette.text)).bg(rgb(palette.key)),
                ));
                spans.push(Span::raw(" "));
            }
            for (j, letter) in row.chars().enumerate() {
                if j > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(tile(letter, palette.hint(hints.hint(letter)), palette));
            }
            if i == KEYBOARD_ROWS.len() - 1 {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    " ⌫ ",
                    Style::default().fg(rgb(palette.text)).bg(rgb(palette.key)),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.status().is_over() {
        "q/Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
