//! TUI rendering with ratatui
//!
//! Draws the six guess rows, the alphabet strip and the message log.

use super::app::{App, MessageStyle};
use crate::core::{LetterScore, WORD_LENGTH};
use crate::game::{GuessSlot, MAX_GUESSES};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const EXACT_COLOR: Color = Color::Rgb(0x10, 0x54, 0x22);
const PRESENT_COLOR: Color = Color::Rgb(0x70, 0x6e, 0x01);
const ABSENT_COLOR: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(3), // Letter history
            Constraint::Min(4), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GAME 🟨")
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

fn score_style(score: Option<LetterScore>) -> Style {
    let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    match score {
        Some(LetterScore::Exact) => style.bg(EXACT_COLOR),
        Some(LetterScore::Present) => style.bg(PRESENT_COLOR),
        Some(LetterScore::Absent) => style.bg(ABSENT_COLOR),
        None => style,
    }
}

fn slot_line(slot: &GuessSlot, active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    match slot {
        GuessSlot::Finalized { word, feedback } => {
            for (letter, &score) in word.text().chars().zip(feedback.scores()) {
                spans.push(Span::styled(format!(" {letter} "), score_style(Some(score))));
                spans.push(Span::raw(" "));
            }
        }
        GuessSlot::Active { draft } => {
            let letters = draft.chars().map(Some).chain(std::iter::repeat(None));
            for (i, letter) in letters.take(WORD_LENGTH).enumerate() {
                // Highlight the most recently typed letter
                let latest = active && i + 1 == draft.len();
                let style = if latest {
                    score_style(None).fg(Color::Green)
                } else {
                    score_style(None)
                };
                let text = letter.map_or_else(|| " _ ".to_string(), |l| format!(" {l} "));
                spans.push(Span::styled(text, style.bg(Color::Black)));
                spans.push(Span::raw(" "));
            }
        }
        GuessSlot::Inactive => {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
    }

    Line::from(spans)
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let state = app.game.state();
    let lines: Vec<Line> = state
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| slot_line(slot, state.active_slot() == Some(i)))
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_history<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let spans: Vec<Span> = app
        .game
        .state()
        .history()
        .iter()
        .flat_map(|(letter, score)| {
            let style = match score {
                Some(_) => score_style(score),
                None => Style::default().fg(Color::Gray),
            };
            [Span::styled(letter.to_string(), style), Span::raw(" ")]
        })
        .collect();

    let strip = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(strip, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = app.game.state();
    let turn_text = match state.outcome() {
        Some(true) => format!("Solved in {}", state.turns_used()),
        Some(false) => "Out of guesses".to_string(),
        None => format!("Guess {}/{MAX_GUESSES}", state.turns_used() + 1),
    };
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats = app.game.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if state.is_over() {
        "Enter/r: Replay | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
