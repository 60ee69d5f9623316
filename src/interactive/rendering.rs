//! TUI rendering with ratatui
//!
//! Visualizations for the daily puzzle screens.

use super::app::{App, Notice, NoticeStyle, Screen};
use crate::core::{KeyStatus, LetterScore};
use crate::engine::{CryptogramGame, GameStatus, MAX_GUESSES, WORD_LENGTH, WordleGame};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Notice area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Home => render_home(f, app, chunks[1]),
        Screen::Wordle => render_wordle(f, app, chunks[1]),
        Screen::Cryptogram => render_cryptogram(f, app, chunks[1]),
        Screen::Prompt => render_prompt(f, app, chunks[1]),
    }

    render_notice(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let date_text = app
        .date
        .map_or_else(|| "no puzzles loaded".to_string(), |d| d.to_string());

    let header = Paragraph::new(format!("📅 CFM DAILY - {date_text}"))
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

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let entries = [
        ("📗 ScriptureSpell", wordle_home_status(app)),
        ("🔒 Scryptogram", cryptogram_home_status(app)),
        ("📝 Prompt", prompt_home_status(app)),
    ];

    let mut lines = vec![Line::from("")];
    for (i, (name, status)) in entries.iter().enumerate() {
        let cursor = if i == app.home_cursor { "▶ " } else { "  " };
        let name_style = if i == app.home_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{cursor}{name:<18}"), name_style),
            Span::styled(status.clone(), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  ←/→ change date   ↑/↓ select   Enter open",
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Today's Puzzles ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn wordle_home_status(app: &App) -> String {
    match &app.wordle {
        None => "not available".to_string(),
        Some(game) => match game.status() {
            GameStatus::Won => "solved ✔".to_string(),
            GameStatus::Lost => "out of guesses".to_string(),
            GameStatus::Playing if game.guesses().is_empty() => "not started".to_string(),
            GameStatus::Playing => format!("{}/{MAX_GUESSES} guesses", game.guesses().len()),
        },
    }
}

fn cryptogram_home_status(app: &App) -> String {
    match &app.cryptogram {
        None => "not available".to_string(),
        Some(game) if game.is_solved() => "solved ✔".to_string(),
        Some(game) if game.mapping().is_empty() => "not started".to_string(),
        Some(game) => format!(
            "{}/{} letters",
            game.mapping().len(),
            game.unique_letters().len()
        ),
    }
}

fn prompt_home_status(app: &App) -> String {
    if app.prompt.is_available() {
        "available".to_string()
    } else {
        "not available".to_string()
    }
}

fn render_wordle(f: &mut Frame, app: &App, area: Rect) {
    let Some(game) = &app.wordle else {
        render_unavailable(f, area, " ScriptureSpell ", "No word puzzle for this date");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Guess grid
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_wordle_grid(f, game, chunks[0]);
    render_wordle_keyboard(f, game, chunks[1]);
}

fn render_wordle_grid(f: &mut Frame, game: &WordleGame, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_GUESSES {
        let line = if let Some(scores) = game.score_row(row) {
            let guess = &game.guesses()[row];
            let spans: Vec<Span> = guess
                .text()
                .chars()
                .zip(scores)
                .flat_map(|(c, score)| {
                    [
                        Span::styled(format!(" {c} "), score_style(score)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        } else if row == game.guesses().len() && game.status() == GameStatus::Playing {
            // The in-progress row
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for slot in 0..WORD_LENGTH {
                let c = game.current().chars().nth(slot).unwrap_or('_');
                spans.push(Span::styled(
                    format!(" {c} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else {
            Line::from(" ·   ·   ·   ·   · ".to_string())
        };

        lines.push(line.alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let title = match game.status() {
        GameStatus::Won => " ScriptureSpell - solved! ",
        GameStatus::Lost => " ScriptureSpell - out of guesses ",
        GameStatus::Playing => " ScriptureSpell ",
    };

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_wordle_keyboard(f: &mut Frame, game: &WordleGame, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!("{}", letter as char),
                            key_style(game.key_status(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_cryptogram(f: &mut Frame, app: &App, area: Rect) {
    let Some(game) = &app.cryptogram else {
        render_unavailable(f, area, " Scryptogram ", "No cryptogram for this date");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hint
            Constraint::Min(6),    // Puzzle text
            Constraint::Length(4), // Letter slots
        ])
        .split(area);

    let hint_text = if game.hint().is_empty() {
        "(no hint)".to_string()
    } else {
        game.hint().to_string()
    };
    let hint = Paragraph::new(hint_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title(" Hint ").borders(Borders::ALL));
    f.render_widget(hint, chunks[0]);

    render_cryptogram_text(f, game, chunks[1]);
    render_cryptogram_slots(f, game, chunks[2]);
}

/// Pack ciphertext words into guess/cipher line pairs that fit `width`
fn cryptogram_text_lines(game: &CryptogramGame, width: usize) -> Vec<Line<'static>> {
    let solved_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let guess_style = if game.is_solved() {
        solved_style
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let cipher_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    let mut guess_row = String::new();
    let mut cipher_row = String::new();

    let mut flush = |guess_row: &mut String, cipher_row: &mut String| {
        if !cipher_row.is_empty() {
            lines.push(Line::from(Span::styled(guess_row.clone(), guess_style)));
            lines.push(Line::from(Span::styled(cipher_row.clone(), cipher_style)));
            lines.push(Line::from(""));
            guess_row.clear();
            cipher_row.clear();
        }
    };

    for word in game.ciphertext().split_whitespace() {
        // 2 columns per char plus a 2-column word gap
        let needed = word.chars().count() * 2 + 2;
        if !cipher_row.is_empty() && cipher_row.len() + needed > width {
            flush(&mut guess_row, &mut cipher_row);
        }
        if !cipher_row.is_empty() {
            guess_row.push_str("  ");
            cipher_row.push_str("  ");
        }

        for c in word.chars() {
            if c.is_ascii_uppercase() {
                guess_row.push(game.guess_for(c).unwrap_or('_'));
                cipher_row.push(c);
            } else {
                // Punctuation is a fixed point on both rows
                guess_row.push(c);
                cipher_row.push(c);
            }
            guess_row.push(' ');
            cipher_row.push(' ');
        }
    }
    flush(&mut guess_row, &mut cipher_row);

    lines
}

fn render_cryptogram_text(f: &mut Frame, game: &CryptogramGame, area: Rect) {
    let width = area.width.saturating_sub(4).max(10) as usize;
    let lines = cryptogram_text_lines(game, width);

    let title = if game.is_solved() {
        " Scryptogram - solved! "
    } else {
        " Scryptogram "
    };

    let text = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(text, area);
}

fn render_cryptogram_slots(f: &mut Frame, game: &CryptogramGame, area: Rect) {
    let mut guess_spans = Vec::new();
    let mut cipher_spans = Vec::new();

    for (i, &cipher) in game.unique_letters().iter().enumerate() {
        let focused = i == game.focus();
        let guess = game.guess_for(cipher).unwrap_or('_');

        let mut guess_style = Style::default().add_modifier(Modifier::BOLD);
        if focused {
            guess_style = guess_style.add_modifier(Modifier::REVERSED);
        }
        if game.revealed() == Some(cipher) {
            guess_style = guess_style.fg(Color::Yellow);
        }

        guess_spans.push(Span::styled(format!(" {guess} "), guess_style));
        cipher_spans.push(Span::styled(
            format!(" {cipher} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let conflicts = game.conflicts();
    let title = if conflicts.is_empty() {
        " Letters ".to_string()
    } else {
        let letters: String = conflicts
            .iter()
            .map(|c| c.plain)
            .map(String::from)
            .collect::<Vec<_>>()
            .join(", ");
        format!(" Letters - duplicate guesses: {letters} ")
    };
    let border_color = if conflicts.is_empty() {
        Color::White
    } else {
        Color::Yellow
    };

    let slots = Paragraph::new(vec![
        Line::from(guess_spans).alignment(Alignment::Center),
        Line::from(cipher_spans).alignment(Alignment::Center),
    ])
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(slots, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = app.prompt.prompt() else {
        render_unavailable(f, area, " Prompt ", "No reflection prompt for this date");
        return;
    };

    let mut lines = vec![Line::from("")];

    if let Some(reference) = &prompt.reference {
        lines.push(Line::from(Span::styled(
            reference.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    if let Some(text) = &prompt.reference_text {
        lines.push(Line::from(Span::styled(
            format!("“{text}”"),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }
    if let Some(question) = &prompt.question {
        lines.push(Line::from(question.clone()));
        lines.push(Line::from(""));
    }

    if app.prompt.show_response() {
        if let Some(response) = &prompt.response {
            lines.push(Line::from(Span::styled(
                "Additional thoughts:",
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(response.clone()));
        }
    } else if prompt.response.is_some() {
        lines.push(Line::from(Span::styled(
            "Press Enter to show additional thoughts",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Prompt ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_unavailable(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (content, color) = match app.active_notice() {
        Some(Notice { text, style, .. }) => {
            let color = match style {
                NoticeStyle::Info => Color::White,
                NoticeStyle::Success => Color::Green,
                NoticeStyle::Error => Color::Red,
            };
            (text.clone(), color)
        }
        None => (String::new(), Color::DarkGray),
    };

    let notice = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(notice, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let screen_text = match app.screen {
        Screen::Home => "Home",
        Screen::Wordle => "ScriptureSpell",
        Screen::Cryptogram => "Scryptogram",
        Screen::Prompt => "Prompt",
    };
    let screen = Paragraph::new(format!("Screen: {screen_text}")).alignment(Alignment::Center);
    f.render_widget(screen, chunks[0]);

    let dates = Paragraph::new(format!("Dates: {}", app.catalog.len()))
        .alignment(Alignment::Center);
    f.render_widget(dates, chunks[1]);

    let help_text = match app.screen {
        Screen::Home => "↑/↓: Select | Enter: Open | [/]: Date | q: Quit",
        Screen::Wordle => "Type letters | Enter: Submit | [/]: Date | Esc: Home",
        Screen::Cryptogram => "Type letters | Ctrl+G: Hint | Ctrl+R: Reset | Esc: Home",
        Screen::Prompt => "Enter: Toggle thoughts | Esc: Home",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

const fn score_style(score: LetterScore) -> Style {
    match score {
        LetterScore::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterScore::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterScore::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

const fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::new().fg(Color::Green),
        KeyStatus::Present => Style::new().fg(Color::Yellow),
        KeyStatus::Absent => Style::new().fg(Color::DarkGray),
        KeyStatus::Unused => Style::new().fg(Color::White),
    }
}
