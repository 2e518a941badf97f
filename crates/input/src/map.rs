//! Mapping from terminal events to game actions.

use crate::types::{GameAction, HitRegion, InputSource};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to game actions.
///
/// Keyboard moves use the small step; see [`handle_mouse_event`] for buttons.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(GameAction::MoveLeft(InputSource::Keyboard))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(GameAction::MoveRight(InputSource::Keyboard))
        }
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameAction::ToggleRunning)
        }
        _ => None,
    }
}

/// Map a key event, honouring its kind.
///
/// Held movement keys keep moving the paddle; a held toggle key fires once.
/// Releases are ignored. Terminals that cannot report kinds send repeats as
/// presses, which this cannot tell apart.
pub fn handle_key_event_kind(key: KeyEvent) -> Option<GameAction> {
    let action = handle_key_event(key)?;
    match key.kind {
        KeyEventKind::Press => Some(action),
        KeyEventKind::Repeat => match action {
            GameAction::MoveLeft(_) | GameAction::MoveRight(_) => Some(action),
            _ => None,
        },
        KeyEventKind::Release => None,
    }
}

/// Map a left click to the action of the region under the cursor.
///
/// Only the press is used, so one click is one action.
pub fn handle_mouse_event(event: MouseEvent, regions: &[HitRegion]) -> Option<GameAction> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    regions
        .iter()
        .find(|r| r.contains(event.column, event.row))
        .map(|r| r.action)
}

/// Check if key should leave the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn click(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft(InputSource::Keyboard))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight(InputSource::Keyboard))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(GameAction::MoveLeft(InputSource::Keyboard))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameAction::MoveRight(InputSource::Keyboard))
        );
    }

    #[test]
    fn test_toggle_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::ToggleRunning)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::ToggleRunning)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_click_hits_region() {
        let regions = [
            HitRegion::new(0, 10, 5, 1, GameAction::MoveLeft(InputSource::Button)),
            HitRegion::new(10, 10, 5, 1, GameAction::MoveRight(InputSource::Button)),
        ];

        assert_eq!(
            handle_mouse_event(click(12, 10, MouseEventKind::Down(MouseButton::Left)), &regions),
            Some(GameAction::MoveRight(InputSource::Button))
        );
        assert_eq!(
            handle_mouse_event(click(7, 10, MouseEventKind::Down(MouseButton::Left)), &regions),
            None
        );
    }

    #[test]
    fn test_only_left_press_counts() {
        let regions = [HitRegion::new(0, 0, 5, 1, GameAction::ToggleRunning)];

        assert_eq!(
            handle_mouse_event(click(1, 0, MouseEventKind::Up(MouseButton::Left)), &regions),
            None
        );
        assert_eq!(
            handle_mouse_event(click(1, 0, MouseEventKind::Down(MouseButton::Right)), &regions),
            None
        );
        assert_eq!(
            handle_mouse_event(click(1, 0, MouseEventKind::Moved), &regions),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_key_kinds() {
        let held = |code| KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat);
        let released =
            |code| KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(
            handle_key_event_kind(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::ToggleRunning)
        );
        assert_eq!(handle_key_event_kind(held(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event_kind(released(KeyCode::Char(' '))), None);
        assert_eq!(
            handle_key_event_kind(held(KeyCode::Left)),
            Some(GameAction::MoveLeft(InputSource::Keyboard))
        );
        assert_eq!(handle_key_event_kind(released(KeyCode::Right)), None);
    }
}
