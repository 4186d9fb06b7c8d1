//! Translation of raw key events into the actions the prompts understand.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pipesel_core::config::PromptMode;
use pipesel_core::state::KeyAction;

/// Maps a key event to an action for a prompt in `mode`.
///
/// Key releases and repeats reported by some terminals are ignored, as are
/// keys without a meaning in the mode.
#[must_use]
pub fn map_key(mode: PromptMode, event: KeyEvent) -> Option<KeyAction> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let control = event.modifiers.contains(KeyModifiers::CONTROL);

    match event.code {
        KeyCode::Enter => return Some(KeyAction::Submit),
        KeyCode::Esc => return Some(KeyAction::Cancel),
        KeyCode::Char('c') if control => return Some(KeyAction::Cancel),
        _ => {}
    }

    match mode {
        PromptMode::Input => map_input_key(event, control),
        PromptMode::Autocomplete => {
            map_navigation_key(event.code).or_else(|| map_filter_key(event, control))
        }
        PromptMode::Single => map_navigation_key(event.code).or_else(|| map_vi_key(event.code)),
        PromptMode::Multiple | PromptMode::Ordered => map_navigation_key(event.code)
            .or_else(|| map_vi_key(event.code))
            .or_else(|| map_checkbox_key(event.code)),
    }
}

fn map_navigation_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Up | KeyCode::BackTab => Some(KeyAction::MoveUp),
        KeyCode::Down | KeyCode::Tab => Some(KeyAction::MoveDown),
        _ => None,
    }
}

fn map_vi_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Char('k') => Some(KeyAction::MoveUp),
        KeyCode::Char('j') => Some(KeyAction::MoveDown),
        _ => None,
    }
}

fn map_checkbox_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Char(' ') => Some(KeyAction::ToggleCurrent),
        KeyCode::Char('a') => Some(KeyAction::ToggleAll),
        KeyCode::Char('i') => Some(KeyAction::InvertSelection),
        _ => None,
    }
}

fn map_filter_key(event: KeyEvent, control: bool) -> Option<KeyAction> {
    match event.code {
        KeyCode::Backspace => Some(KeyAction::DeleteBackward),
        KeyCode::Char(c) if !control && !event.modifiers.contains(KeyModifiers::ALT) => {
            Some(KeyAction::FilterInput(c))
        }
        _ => None,
    }
}

fn map_input_key(event: KeyEvent, control: bool) -> Option<KeyAction> {
    match event.code {
        KeyCode::Char('u') if control => Some(KeyAction::ClearLine),
        KeyCode::Delete => Some(KeyAction::DeleteForward),
        KeyCode::Left => Some(KeyAction::CursorLeft),
        KeyCode::Right => Some(KeyAction::CursorRight),
        KeyCode::Home => Some(KeyAction::CursorHome),
        KeyCode::End => Some(KeyAction::CursorEnd),
        _ => map_filter_key(event, control),
    }
}
