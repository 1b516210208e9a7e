//! Event Handling for MedGo+
//!
//! Key presses are mapped to application events according to what is on
//! screen: the landing page, an open dialog or the welcome shell.

use crate::ui::app::AppMode;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application events that can occur during runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// User requested to quit the application
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    /// Move focus to the next call-to-action button
    FocusNext,
    FocusPrevious,
    /// Press the focused button or confirm the selected dialog choice
    Activate,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Move the dialog selection
    SelectNext,
    SelectPrevious,
    /// Close the dialog without choosing
    Dismiss,
    /// Terminal was resized to new dimensions
    Resize(u16, u16),
    /// No event occurred (timeout)
    None,
}

/// Translate one key event for the given screen
pub fn map_key(key: KeyEvent, mode: AppMode) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return AppEvent::ForceQuit;
    }

    match mode {
        AppMode::Dialog => match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => AppEvent::SelectNext,
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate,
            KeyCode::Esc => AppEvent::Dismiss,
            _ => AppEvent::None,
        },
        AppMode::Landing => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Tab | KeyCode::Right => AppEvent::FocusNext,
            KeyCode::BackTab | KeyCode::Left => AppEvent::FocusPrevious,
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate,
            KeyCode::Up | KeyCode::Char('k') => AppEvent::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::ScrollDown,
            KeyCode::PageUp => AppEvent::PageUp,
            KeyCode::PageDown => AppEvent::PageDown,
            KeyCode::Home => AppEvent::Home,
            KeyCode::End => AppEvent::End,
            _ => AppEvent::None,
        },
        AppMode::Welcome => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Enter => AppEvent::Activate,
            _ => AppEvent::None,
        },
    }
}

/// Input event handler for the application
#[derive(Debug, Clone)]
pub struct EventHandler {
    /// Polling timeout for input events
    timeout: Duration,
}

impl EventHandler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Poll for the next input event and convert it to an AppEvent.
    /// Returns `None` when nothing arrived within the timeout.
    pub fn next_event(&self, mode: AppMode) -> std::io::Result<Option<AppEvent>> {
        if !crossterm::event::poll(self.timeout)? {
            return Ok(None);
        }
        let event = match crossterm::event::read()? {
            Event::Key(key) => map_key(key, mode),
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::None,
        };
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_landing_keys() {
        assert_eq!(map_key(press(KeyCode::Tab), AppMode::Landing), AppEvent::FocusNext);
        assert_eq!(map_key(press(KeyCode::BackTab), AppMode::Landing), AppEvent::FocusPrevious);
        assert_eq!(map_key(press(KeyCode::Enter), AppMode::Landing), AppEvent::Activate);
        assert_eq!(map_key(press(KeyCode::Down), AppMode::Landing), AppEvent::ScrollDown);
        assert_eq!(map_key(press(KeyCode::Esc), AppMode::Landing), AppEvent::Quit);
    }

    #[test]
    fn test_dialog_keys_never_quit() {
        assert_eq!(map_key(press(KeyCode::Esc), AppMode::Dialog), AppEvent::Dismiss);
        assert_eq!(map_key(press(KeyCode::Char('q')), AppMode::Dialog), AppEvent::None);
        assert_eq!(map_key(press(KeyCode::Right), AppMode::Dialog), AppEvent::SelectNext);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in AppMode::iter() {
            assert_eq!(map_key(key, mode), AppEvent::ForceQuit);
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, AppMode::Landing), AppEvent::None);
    }
}
