//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{AlphabetScore, LetterScore};
use crate::output::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(palette: Palette, score: LetterScore) -> Style {
    let (r, g, b) = palette.rgb(score);
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(r, g, b))
        .add_modifier(Modifier::BOLD)
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.engine.state();
    let mut lines: Vec<Line> = state
        .guesses()
        .iter()
        .map(|guess| {
            Line::from(
                guess
                    .letters()
                    .flat_map(|(letter, score)| {
                        [
                            Span::styled(format!(" {letter} "), tile_style(app.palette, score)),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if !state.game_over() {
        let spans: Vec<Span> = state
            .current_guess()
            .slots()
            .flat_map(|slot| {
                [
                    Span::styled(
                        format!(" {} ", slot.unwrap_or('_')),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let input_rows = usize::from(!state.game_over());
    let remaining = app.engine.remaining_guesses().saturating_sub(input_rows);
    for _ in 0..remaining {
        lines.push(Line::from(Span::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(alphabet: &AlphabetScore, palette: Palette) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let score = alphabet.get(letter).unwrap_or_default();
                    let style = if score == LetterScore::NotEvaluated {
                        Style::default().fg(Color::White)
                    } else {
                        tile_style(palette, score)
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(
        app.engine.state().alphabet_score(),
        app.palette,
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.engine.state().game_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit"
    };
    let text = format!(
        "Games: {} | Win Rate: {}% | {help}",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
