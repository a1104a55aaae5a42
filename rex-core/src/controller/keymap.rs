//! src/controller/keymap.rs
//! Key bindings for each focus mode.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{controller::actions::Action, model::sort::SortColumn, model::ui_state::UIMode};

/// Translates a key press into an action for the given focus mode.
/// Returns `None` for keys with no binding and for key releases.
pub fn map_key(mode: UIMode, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match mode {
        UIMode::Browse => browse_binding(key),
        UIMode::SearchInput => input_binding(key),
        UIMode::CrumbSelect => crumb_binding(key),
    }
}

fn browse_binding(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,

        KeyCode::Up | KeyCode::Char('k') => Action::MoveSelectionUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveSelectionDown,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Action::ActivateSelected,
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Action::GoBack,

        KeyCode::Char('r') | KeyCode::F(5) => Action::Rescan,
        KeyCode::Char('/') => Action::FocusSearch,
        KeyCode::Char('[') => Action::FocusCrumbs,
        KeyCode::Esc => Action::ClearSearch,

        KeyCode::Char('n') => Action::SortBy(SortColumn::Name),
        KeyCode::Char('s') => Action::SortBy(SortColumn::Size),
        KeyCode::Char('t') => Action::SortBy(SortColumn::Type),
        KeyCode::Char('m') => Action::SortBy(SortColumn::LastModified),

        KeyCode::Char(c) if c.is_ascii_digit() => {
            Action::ActivateCrumb(c.to_digit(10).unwrap_or_default() as usize)
        }

        _ => return None,
    };

    Some(action)
}

fn crumb_binding(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => Some(Action::CrumbCursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => {
            Some(Action::CrumbCursorRight)
        }
        KeyCode::Enter => Some(Action::ActivateCrumbCursor),
        KeyCode::Esc => Some(Action::BlurCrumbs),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn input_binding(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SubmitSearch),
        KeyCode::Esc => Some(Action::BlurSearch),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}
