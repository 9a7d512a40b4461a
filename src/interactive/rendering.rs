//! TUI rendering with ratatui
//!
//! Board, reveal timer and session panels for spelling practice.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📝 SPELLING PRACTICE")
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

const fn tile_style(mark: Mark) -> Style {
    match mark {
        Mark::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        Mark::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Mark::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        Mark::Missing => Style::new().fg(Color::DarkGray),
    }
}

/// One tile per character, even where uppercase expands (`ß` -> `SS`)
fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// One row of tiles for a scored guess
fn feedback_line(guess: &str, feedback: &Feedback) -> Line<'static> {
    let mut letters = guess.chars().map(upper);
    let spans: Vec<Span> = feedback
        .marks()
        .iter()
        .flat_map(|&mark| {
            let letter = if mark == Mark::Missing {
                '_'
            } else {
                letters.next().unwrap_or('_')
            };
            [
                Span::styled(format!(" {letter} "), tile_style(mark)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn plain_line(text: &str, len: usize, style: Style) -> Line<'static> {
    let mut letters = text.chars().map(upper);
    let spans: Vec<Span> = (0..len.max(text.chars().count()))
        .flat_map(|_| {
            let letter = letters.next().unwrap_or('_');
            [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let len = round.target_len().unwrap_or(0);
    let mut lines = vec![Line::from("")];

    match app.input_mode() {
        InputMode::Watching => {
            if let Some(word) = round.target() {
                lines.push(Line::from("Memorise this word:"));
                lines.push(Line::from(""));
                lines.push(plain_line(
                    word.text(),
                    len,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
        InputMode::Finished => {
            lines.push(Line::from("No words left in the deck."));
        }
        InputMode::Spelling | InputMode::RoundOver => {
            for attempt in round.attempts() {
                lines.push(feedback_line(&attempt.guess, &attempt.feedback));
                lines.push(Line::from(""));
            }

            if app.input_mode() == InputMode::Spelling {
                lines.push(plain_line(
                    &app.input_buffer,
                    len,
                    Style::default().fg(Color::White).bg(Color::Black),
                ));
            } else if let Some(word) = round.target() {
                lines.push(Line::from(vec![
                    Span::raw("Answer: "),
                    Span::styled(
                        word.text().to_uppercase(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Reveal timer
            Constraint::Length(6), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_reveal_timer(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_reveal_timer(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let total = round.config().show_for.as_secs_f64();
    let (percent, label) = match round.reveal_remaining() {
        Some(remaining) if total > 0.0 => {
            let left = remaining.as_secs_f64();
            (((left / total) * 100.0).clamp(0.0, 100.0) as u16, format!("{left:.1}s"))
        }
        _ => (0, "hidden".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Reveal ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let tries = app
        .session
        .round()
        .attempts_left()
        .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
    let average = stats
        .average_attempts()
        .map_or_else(|| "-".to_string(), |a| format!("{a:.2}"));

    let content = vec![
        Line::from(format!(
            "Spelled:    {}/{}",
            stats.rounds_solved, stats.rounds_played
        )),
        Line::from(format!("Solve rate: {:.0}%", stats.solve_rate() * 100.0)),
        Line::from(format!("Avg tries:  {average}")),
        Line::from(format!("Tries left: {tries}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::Watching => (
            " Watch closely | Enter to start spelling now ",
            "",
            Color::Cyan,
        ),
        InputMode::Spelling => (
            " Type the word | Enter to submit | ESC to give up ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Press 'n' for the next word or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Finished => (" 🎉 Deck complete! | Press 'q' to quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Phase: {} | Words left: {} | Ctrl-C: Quit",
        app.session.round().phase(),
        app.session.remaining()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use crate::game::{RoundConfig, Session};
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn feedback_line_shows_missing_tiles() {
        let line = feedback_line("ca", &classify("cat", "ca"));
        assert_eq!(line_text(&line), " C   A   _  ");
        assert_eq!(line.spans[4].style, tile_style(Mark::Missing));
    }

    #[test]
    fn feedback_line_keeps_one_tile_per_letter() {
        let line = feedback_line("straße", &classify("straße", "straße"));
        assert_eq!(line_text(&line), " S   T   R   A   S   E  ");
        assert_eq!(line.spans.len(), 12);
    }

    #[test]
    fn plain_line_pads_to_length() {
        let line = plain_line("ab", 4, Style::default());
        assert_eq!(line_text(&line), " A   B   _   _  ");
    }

    #[test]
    fn renders_every_mode() {
        let config = RoundConfig::new(Duration::from_secs(5), 3);
        let mut app = App::new(Session::new(words_from_slice(&["cat"]), config));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        app.next_round();
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.skip_reveal();
        app.input_buffer.push_str("ca");
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.handle_submit();
        app.give_up();
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.next_round();
        assert_eq!(app.input_mode(), InputMode::Finished);
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
