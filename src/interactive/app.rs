//! TUI application state and logic

use crate::catalog::PuzzleCatalog;
use crate::core::Guess;
use crate::engine::{CryptogramGame, GameStatus, PromptView, WordleGame};
use crate::progress::ProgressStore;
use crate::wordlists::WordSet;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// How long a transient notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Wordle,
    Cryptogram,
    Prompt,
}

/// A transient or informational message
///
/// Replacing the notice on retrigger also replaces its expiry, so a stale
/// timer can never clear a newer message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
    expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub catalog: PuzzleCatalog,
    pub words: WordSet,
    pub store: ProgressStore,
    pub today: NaiveDate,
    pub date: Option<NaiveDate>,
    pub screen: Screen,
    pub home_cursor: usize,
    pub wordle: Option<WordleGame>,
    pub cryptogram: Option<CryptogramGame>,
    pub prompt: PromptView,
    pub should_quit: bool,
    notice: Option<Notice>,
    rng: ThreadRng,
}

impl App {
    #[must_use]
    pub fn new(
        catalog: PuzzleCatalog,
        words: WordSet,
        store: ProgressStore,
        today: NaiveDate,
        requested: Option<NaiveDate>,
    ) -> Self {
        let date = requested
            .filter(|d| *d <= today && catalog.get(*d).is_some())
            .or_else(|| catalog.latest_on_or_before(today));

        let mut app = Self {
            catalog,
            words,
            store,
            today,
            date,
            screen: Screen::Home,
            home_cursor: 0,
            wordle: None,
            cryptogram: None,
            prompt: PromptView::default(),
            should_quit: false,
            notice: None,
            rng: rand::rng(),
        };
        app.load_date();
        app
    }

    /// Rebuild every engine for the selected date from catalog and progress
    fn load_date(&mut self) {
        let Some(date) = self.date else {
            self.wordle = None;
            self.cryptogram = None;
            self.prompt = PromptView::default();
            return;
        };

        let bundle = self.catalog.get(date).cloned().unwrap_or_default();
        let day = self.store.day(date);

        self.wordle = bundle
            .wordle
            .as_deref()
            .and_then(|solution| Guess::new(solution).ok())
            .map(|solution| {
                let saved = day.wordle.as_ref().map(|w| w.guesses()).unwrap_or_default();
                WordleGame::new(solution, &saved)
            });

        self.cryptogram = bundle
            .scryptogram
            .as_ref()
            .map(|puzzle| CryptogramGame::new(puzzle, day.scryptogram.as_ref()));

        self.prompt = PromptView::new(bundle.prompt);

        // A restored already-solved cryptogram celebrates once per load
        if let Some(game) = &mut self.cryptogram
            && game.take_celebration()
        {
            self.notice("🎉 Cryptogram solved! 🎉", NoticeStyle::Success);
        }
    }

    /// Move to the previous catalog date, clamped at the first
    pub fn prev_date(&mut self) {
        if let Some(prev) = self.date.and_then(|d| self.catalog.prev_date(d)) {
            self.date = Some(prev);
            self.load_date();
        }
    }

    /// Move to the next catalog date, never past today
    pub fn next_date(&mut self) {
        if let Some(next) = self
            .date
            .and_then(|d| self.catalog.next_date(d, self.today))
        {
            self.date = Some(next);
            self.load_date();
        }
    }

    /// Show a message; transient notices expire after [`NOTICE_TTL`]
    pub fn notice(&mut self, text: &str, style: NoticeStyle) {
        let expires_at = match style {
            NoticeStyle::Error => Some(Instant::now() + NOTICE_TTL),
            NoticeStyle::Info | NoticeStyle::Success => None,
        };
        self.notice = Some(Notice {
            text: text.to_string(),
            style,
            expires_at,
        });
    }

    /// The current notice, if it has not expired
    #[must_use]
    pub fn active_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| {
            notice
                .expires_at
                .is_none_or(|deadline| Instant::now() < deadline)
        })
    }

    /// Drop an expired notice
    pub fn tick(&mut self) {
        if self.active_notice().is_none() {
            self.notice = None;
        }
    }

    fn save_wordle(&self) {
        let (Some(date), Some(game)) = (self.date, self.wordle.as_ref()) else {
            return;
        };
        if let Err(err) = self.store.set_wordle(date, game.guesses()) {
            warn!(%err, "failed to persist word-guess progress");
        }
    }

    fn save_cryptogram(&self) {
        let (Some(date), Some(game)) = (self.date, self.cryptogram.as_ref()) else {
            return;
        };
        if let Err(err) = self.store.set_cryptogram(date, game.mapping()) {
            warn!(%err, "failed to persist cryptogram progress");
        }
    }

    /// Dispatch a key press to the active screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('[') => {
                self.prev_date();
                return;
            }
            KeyCode::Char(']') => {
                self.next_date();
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Wordle => self.handle_wordle_key(key),
            Screen::Cryptogram => self.handle_cryptogram_key(key),
            Screen::Prompt => self.handle_prompt_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.home_cursor = self.home_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home_cursor = (self.home_cursor + 1).min(2);
            }
            KeyCode::Left => self.prev_date(),
            KeyCode::Right => self.next_date(),
            KeyCode::Enter => self.open_screen(match self.home_cursor {
                0 => Screen::Wordle,
                1 => Screen::Cryptogram,
                _ => Screen::Prompt,
            }),
            KeyCode::Char('1' | 'w') => self.open_screen(Screen::Wordle),
            KeyCode::Char('2' | 'c') => self.open_screen(Screen::Cryptogram),
            KeyCode::Char('3' | 'p') => self.open_screen(Screen::Prompt),
            _ => {}
        }
    }

    fn open_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.notice = None;
    }

    fn handle_wordle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.open_screen(Screen::Home),
            KeyCode::Backspace => {
                if let Some(game) = &mut self.wordle {
                    game.pop_letter();
                }
            }
            KeyCode::Enter => self.submit_wordle_guess(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if let Some(game) = &mut self.wordle {
                    game.push_letter(c);
                }
            }
            _ => {}
        }
    }

    fn submit_wordle_guess(&mut self) {
        let Some(game) = &mut self.wordle else {
            return;
        };
        let solution = game.solution().text().to_string();

        match game.submit(&self.words) {
            Ok(GameStatus::Won) => {
                self.save_wordle();
                self.notice("🎉 Congratulations! You solved it! 🎉", NoticeStyle::Success);
            }
            Ok(GameStatus::Lost) => {
                self.save_wordle();
                self.notice(&format!("The word was {solution}"), NoticeStyle::Info);
            }
            Ok(GameStatus::Playing) => {
                self.save_wordle();
                self.notice = None;
            }
            Err(rejection) => {
                self.notice(&rejection.to_string(), NoticeStyle::Error);
            }
        }
    }

    fn handle_cryptogram_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.open_screen(Screen::Home);
                return;
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reveal_cryptogram_hint();
                return;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_cryptogram();
                return;
            }
            _ => {}
        }

        let Some(game) = &mut self.cryptogram else {
            return;
        };

        let mutated = match key.code {
            KeyCode::Left => {
                game.move_left();
                false
            }
            KeyCode::Right | KeyCode::Enter => {
                game.move_right();
                false
            }
            KeyCode::Backspace => {
                game.backspace();
                true
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => game.commit_letter(c),
            _ => false,
        };

        if mutated {
            self.after_cryptogram_mutation();
        }
    }

    /// Paste into the focused cryptogram slot
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Cryptogram {
            return;
        }
        let Some(game) = &mut self.cryptogram else {
            return;
        };

        if game.paste(text) {
            self.after_cryptogram_mutation();
        } else {
            self.notice("Paste a single letter (A-Z)", NoticeStyle::Error);
        }
    }

    fn reveal_cryptogram_hint(&mut self) {
        let Some(game) = &mut self.cryptogram else {
            return;
        };

        match game.reveal_hint(&mut self.rng) {
            Some(cipher) => {
                let plain = game.guess_for(cipher).unwrap_or('?');
                self.notice(&format!("Hint revealed: {cipher} = {plain}"), NoticeStyle::Info);
                self.after_cryptogram_mutation();
            }
            None => {
                self.notice("Already solved - no hint needed", NoticeStyle::Info);
            }
        }
    }

    fn reset_cryptogram(&mut self) {
        let Some(game) = &mut self.cryptogram else {
            return;
        };
        game.reset();

        if let Some(date) = self.date
            && let Err(err) = self.store.clear_cryptogram(date)
        {
            warn!(%err, "failed to clear persisted cryptogram progress");
        }
        self.notice("Progress reset for this date", NoticeStyle::Info);
    }

    fn after_cryptogram_mutation(&mut self) {
        self.save_cryptogram();
        if let Some(game) = &mut self.cryptogram
            && game.take_celebration()
        {
            self.notice("🎉 Cryptogram solved! 🎉", NoticeStyle::Success);
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.open_screen(Screen::Home),
            KeyCode::Enter | KeyCode::Char(' ' | 'r') => {
                if self.prompt.is_available() {
                    self.prompt.toggle_response();
                }
            }
            _ => {}
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
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so expired notices clear without input
        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key);
                    }
                }
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
