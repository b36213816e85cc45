use clickup_to_github::prompt::{EventSource, MenuChoice, select_command_with};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::collections::VecDeque;

struct MockEventSource {
    events: VecDeque<Event>,
}

impl MockEventSource {
    fn new(events: Vec<Event>) -> Self {
        Self {
            events: VecDeque::from(events),
        }
    }
}

impl EventSource for MockEventSource {
    fn read_event(&mut self) -> anyhow::Result<Event> {
        if let Some(event) = self.events.pop_front() {
            Ok(event)
        } else {
            // Running out of events ends the menu like Esc would.
            Ok(key_event(KeyCode::Esc))
        }
    }
}

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    })
}

fn run_menu(events: Vec<Event>) -> MenuChoice {
    let mut event_source = MockEventSource::new(events);
    let backend = TestBackend::new(80, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    select_command_with(&mut terminal, &mut event_source).unwrap()
}

#[test]
fn test_enter_selects_sync_by_default() {
    assert_eq!(run_menu(vec![key_event(KeyCode::Enter)]), MenuChoice::Sync);
}

#[test]
fn test_down_then_enter_selects_exit() {
    assert_eq!(
        run_menu(vec![key_event(KeyCode::Down), key_event(KeyCode::Enter)]),
        MenuChoice::Exit
    );
}

#[test]
fn test_cursor_stays_within_bounds() {
    let events = vec![
        key_event(KeyCode::Down),
        key_event(KeyCode::Down),
        key_event(KeyCode::Down),
        key_event(KeyCode::Up),
        key_event(KeyCode::Up),
        key_event(KeyCode::Up),
        key_event(KeyCode::Enter),
    ];
    assert_eq!(run_menu(events), MenuChoice::Sync);
}

#[test]
fn test_esc_selects_exit() {
    assert_eq!(run_menu(vec![key_event(KeyCode::Esc)]), MenuChoice::Exit);
}

#[test]
fn test_ctrl_c_selects_exit() {
    let ctrl_c = Event::Key(KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    });
    assert_eq!(run_menu(vec![ctrl_c]), MenuChoice::Exit);
}

#[test]
fn test_key_release_events_are_ignored() {
    let release = Event::Key(KeyEvent {
        code: KeyCode::Down,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: crossterm::event::KeyEventState::empty(),
    });
    assert_eq!(
        run_menu(vec![release, key_event(KeyCode::Enter)]),
        MenuChoice::Sync
    );
}

#[test]
fn test_menu_renders_title_and_choices() {
    let mut event_source = MockEventSource::new(vec![key_event(KeyCode::Enter)]);
    let backend = TestBackend::new(80, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    select_command_with(&mut terminal, &mut event_source).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let rendered: String = buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(rendered.contains("Select a command to execute:"));
    assert!(rendered.contains("Sync tasks from ClickUp to GitHub as issues"));
    assert!(rendered.contains("Exit"));
}
