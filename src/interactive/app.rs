//! TUI application state and logic

use crate::game::{Outcome, Phase, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the reveal timer is advanced while waiting for keys
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Word is on screen, waiting for the timer or a key
    Watching,
    /// Typing the word from memory
    Spelling,
    /// Round resolved, waiting to continue
    RoundOver,
    /// Deck exhausted
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Memorise each word, then spell it from memory.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.finished {
            return InputMode::Finished;
        }
        match self.session.round().phase() {
            Phase::Showing => InputMode::Watching,
            Phase::Guessing => InputMode::Spelling,
            Phase::Idle | Phase::Resolved | Phase::NextRound => InputMode::RoundOver,
        }
    }

    /// Start the next word, or finish when the deck is empty
    pub fn next_round(&mut self) {
        self.input_buffer.clear();
        match self.session.next_round() {
            Ok(true) => {
                let left = self.session.remaining();
                self.add_message(
                    &format!("New word! {left} more after this one."),
                    MessageStyle::Info,
                );
            }
            Ok(false) => {
                self.finished = true;
                let stats = self.session.stats();
                let text = format!(
                    "All done! Spelled {}/{} words. Press 'q' to quit.",
                    stats.rounds_solved, stats.rounds_played
                );
                self.add_message(&text, MessageStyle::Success);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        let before = self.session.round().phase();
        if self.session.tick(elapsed) != before {
            self.add_message("Now spell it!", MessageStyle::Info);
        }
    }

    pub fn skip_reveal(&mut self) {
        if self.session.skip_reveal().is_ok() {
            self.add_message("Now spell it!", MessageStyle::Info);
        }
    }

    pub fn handle_submit(&mut self) {
        let guess = self.input_buffer.trim().to_string();
        if guess.is_empty() {
            self.add_message("Type the word first!", MessageStyle::Error);
            return;
        }

        match self.session.submit(&guess) {
            Ok(feedback) => {
                self.input_buffer.clear();
                if let Some(note) = feedback.length_mismatch() {
                    self.add_message(&format!("Careful: {note}"), MessageStyle::Error);
                }
                self.announce_outcome();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn give_up(&mut self) {
        if self.session.give_up().is_ok() {
            self.input_buffer.clear();
            self.announce_outcome();
        }
    }

    fn announce_outcome(&mut self) {
        let round = self.session.round();
        let answer = round
            .target()
            .map(|w| w.text().to_uppercase())
            .unwrap_or_default();

        let (text, style) = match round.outcome() {
            Some(Outcome::Solved) => {
                let celebration = match round.attempts().len() {
                    1 => "🎯 First try! Perfect spelling! 🌟",
                    2 => "🔥 Two tries! Great memory! 🔥",
                    3 => "✨ Three tries! Well done! ✨",
                    _ => "🎉 Got it! 🎉",
                };
                (celebration.to_string(), MessageStyle::Success)
            }
            Some(Outcome::OutOfAttempts) => {
                (format!("Out of tries. The word was {answer}."), MessageStyle::Error)
            }
            Some(Outcome::GaveUp) => (format!("The word was {answer}."), MessageStyle::Info),
            None => return,
        };

        self.add_message(&text, style);
        self.add_message("Press 'n' for the next word or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("tui exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.next_round();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                handle_key(&mut app, key.code, key.modifiers);
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= TICK_RATE {
            app.on_tick(elapsed);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode() {
        InputMode::Watching => match code {
            KeyCode::Enter | KeyCode::Char(' ') => app.skip_reveal(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        InputMode::Spelling => match code {
            // Letters are input here, so Esc gives up instead of quitting
            KeyCode::Esc => app.give_up(),
            KeyCode::Char(c) => app.input_buffer.push(c),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Enter => app.handle_submit(),
            _ => {}
        },
        InputMode::RoundOver => match code {
            KeyCode::Char('n') | KeyCode::Enter => app.next_round(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        InputMode::Finished => {
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                app.should_quit = true;
            }
        }
    }
}
