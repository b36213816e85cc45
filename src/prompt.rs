//! Interactive terminal prompts.
//!
//! This module provides:
//! - line prompts for the required credentials, re-asked until non-empty
//! - a ratatui menu for choosing the command to execute

use anyhow::Context;
use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use ratatui::{
    Frame, Terminal, TerminalOptions, Viewport,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::{self, BufRead, Write};

use crate::config::CredentialField;
use crate::constants;

/// Commands offered by the selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sync,
    Exit,
}

impl MenuChoice {
    /// Menu entries, in display order.
    pub const ALL: [MenuChoice; 2] = [MenuChoice::Sync, MenuChoice::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Sync => "Sync tasks from ClickUp to GitHub as issues",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Ask for a required value on stdin/stdout.
pub fn prompt_required(field: CredentialField) -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();
    prompt_required_with(&mut reader, &mut stdout, field)
}

/// Ask for a required value using the given reader and writer.
///
/// Empty or whitespace-only answers print the field's "is required" message
/// and ask again. Returns the trimmed answer.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the input ends before
/// a valid answer is given.
pub fn prompt_required_with<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: CredentialField,
) -> anyhow::Result<String> {
    let required_message = field.required_message();

    loop {
        write!(writer, "{} {} ", "?".green(), field.message().bold())?;
        writer.flush()?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {}", field.label()))?;
        if read == 0 {
            anyhow::bail!("Input stream closed while waiting for {}", field.label());
        }

        match crate::validation::validate_required(&line, &required_message) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(writer, "{} {}", ">>".red(), e.to_string().red())?,
        }
    }
}

/// Trait representing an event source (so tests can inject fake events).
pub trait EventSource {
    fn read_event(&mut self) -> anyhow::Result<Event>;
}

/// Present the command menu in an inline terminal viewport.
pub fn select_command() -> anyhow::Result<MenuChoice> {
    // Real event source that delegates to `crossterm::event::read`
    struct CrosstermEventSource;
    impl EventSource for CrosstermEventSource {
        fn read_event(&mut self) -> anyhow::Result<Event> {
            Ok(event::read()?)
        }
    }

    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(MENU_HEIGHT),
        },
    );

    let res = match terminal {
        Ok(mut terminal) => {
            let mut event_src = CrosstermEventSource;
            select_command_with(&mut terminal, &mut event_src)
        }
        Err(e) => Err(e.into()),
    };

    // Restore terminal in all cases
    terminal::disable_raw_mode()?;
    println!();

    if let Ok(choice) = &res {
        println!("{} {}", "✔".green(), choice.label().cyan());
    }
    res
}

/// Two entries inside a bordered list plus one line of instructions.
const MENU_HEIGHT: u16 = 5;

/// Select a command with dependency injection for testing.
///
/// Up/Down move the cursor, Enter confirms. Esc and Ctrl+C choose
/// [`MenuChoice::Exit`].
pub fn select_command_with<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &mut E,
) -> anyhow::Result<MenuChoice> {
    let mut list_state = ListState::default();
    list_state.select(Some(0));

    loop {
        terminal.draw(|frame| {
            render_command_menu(frame, &mut list_state);
        })?;

        if let Event::Key(key) = events.read_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                return Ok(MenuChoice::Exit);
            }

            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if let Some(idx) = list_state.selected()
                        && idx > 0
                    {
                        list_state.select(Some(idx - 1));
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if let Some(idx) = list_state.selected()
                        && idx + 1 < MenuChoice::ALL.len()
                    {
                        list_state.select(Some(idx + 1));
                    }
                }
                KeyCode::Enter => {
                    let idx = list_state.selected().unwrap_or(0);
                    return Ok(MenuChoice::ALL[idx]);
                }
                KeyCode::Esc => return Ok(MenuChoice::Exit),
                _ => {}
            }
        }
    }
}

/// Render the command menu using ratatui.
pub fn render_command_menu(f: &mut Frame, list_state: &mut ListState) {
    let size = f.size();

    let chunks = Layout::default()
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let items: Vec<ListItem> = MenuChoice::ALL
        .iter()
        .map(|choice| ListItem::new(choice.label()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(constants::COMMAND_MENU_TITLE),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, chunks[0], &mut *list_state);

    let instructions = Paragraph::new("↑/↓: navigate | Enter: confirm | Esc: exit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[1]);
}
