//! Mapping from terminal events to pointer events and UI actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{PointerEventKind, UiAction};

/// A pointer event in terminal coordinates (column, row).
///
/// The view layer owns the conversion into board pixels, since only it knows
/// where the board sits on screen and at what scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub column: u16,
    pub row: u16,
}

/// Map a crossterm mouse event to a pointer event.
///
/// Only the left button picks pegs up and drops them; any motion is a
/// position sample regardless of button state.
pub fn map_mouse_event(ev: MouseEvent) -> Option<PointerEvent> {
    let kind = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerEventKind::Down,
        MouseEventKind::Up(MouseButton::Left) => PointerEventKind::Up,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerEventKind::Move,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        column: ev.column,
        row: ev.row,
    })
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') => Some(UiAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::ToggleHints),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(UiAction::ToggleSound),
        KeyCode::Char(c @ '1'..='5') => {
            Some(UiAction::SelectLayout(c as u8 - b'1'))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_button_maps_to_pointer_events() {
        let down = map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 4)).unwrap();
        assert_eq!(down.kind, PointerEventKind::Down);
        assert_eq!((down.column, down.row), (10, 4));

        let up = map_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 11, 5)).unwrap();
        assert_eq!(up.kind, PointerEventKind::Up);

        let drag = map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 6)).unwrap();
        assert_eq!(drag.kind, PointerEventKind::Move);

        let moved = map_mouse_event(mouse(MouseEventKind::Moved, 1, 1)).unwrap();
        assert_eq!(moved.kind, PointerEventKind::Move);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        assert!(map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)).is_none());
        assert!(map_mouse_event(mouse(MouseEventKind::ScrollUp, 0, 0)).is_none());
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(UiAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(UiAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(UiAction::ToggleHints)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(UiAction::ToggleSound)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(UiAction::SelectLayout(2))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
