//! Keybinding and gesture definitions

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use flashdeck_core::SessionCommand;

/// What an input event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Drive the study session
    Command(SessionCommand),
    /// Quit the application
    Quit,
}

/// Get the intent for a key press
pub fn key_intent(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Intent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => return Some(Intent::Quit),
        KeyCode::Char(' ') => SessionCommand::Flip,
        KeyCode::Left => SessionCommand::Previous,
        KeyCode::Right => SessionCommand::Next,
        KeyCode::Char('s') => SessionCommand::ToggleShuffle,
        KeyCode::Char('f') => SessionCommand::ToggleFullscreen,
        _ => return None,
    };
    Some(Intent::Command(command))
}

/// Turns a horizontal mouse drag into navigation.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    start: Option<u16>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn press(&mut self, column: u16) {
        self.start = Some(column);
    }

    /// Finish a drag. Dragging leftwards past the threshold moves to the
    /// next card, rightwards to the previous one.
    pub fn release(&mut self, column: u16) -> Option<SessionCommand> {
        let start = self.start.take()?;
        if start.saturating_sub(column) > self.threshold {
            Some(SessionCommand::Next)
        } else if column.saturating_sub(start) > self.threshold {
            Some(SessionCommand::Previous)
        } else {
            None
        }
    }

    pub fn mouse_intent(&mut self, mouse: MouseEvent) -> Option<Intent> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(mouse.column);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.release(mouse.column).map(Intent::Command)
            }
            _ => None,
        }
    }
}

/// Translate any terminal event.
pub fn event_intent(event: Event, swipe: &mut SwipeTracker) -> Option<Intent> {
    match event {
        Event::Key(key) => key_intent(key),
        Event::Mouse(mouse) => swipe.mouse_intent(mouse),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_intent(press(KeyCode::Left)),
            Some(Intent::Command(SessionCommand::Previous))
        );
        assert_eq!(
            key_intent(press(KeyCode::Right)),
            Some(Intent::Command(SessionCommand::Next))
        );
        assert_eq!(
            key_intent(press(KeyCode::Char(' '))),
            Some(Intent::Command(SessionCommand::Flip))
        );
        assert_eq!(
            key_intent(press(KeyCode::Char('s'))),
            Some(Intent::Command(SessionCommand::ToggleShuffle))
        );
        assert_eq!(
            key_intent(press(KeyCode::Char('f'))),
            Some(Intent::Command(SessionCommand::ToggleFullscreen))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_intent(press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(key_intent(press(KeyCode::Esc)), Some(Intent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_intent(ctrl_c), Some(Intent::Quit));
    }

    #[test]
    fn test_unbound_and_released_keys() {
        assert_eq!(key_intent(press(KeyCode::Char('x'))), None);
        assert_eq!(key_intent(press(KeyCode::Char('c'))), None);

        let mut release = press(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_intent(release), None);
    }

    #[test]
    fn test_swipe_directions() {
        let mut swipe = SwipeTracker::new(50);
        swipe.press(100);
        assert_eq!(swipe.release(20), Some(SessionCommand::Next));

        swipe.press(20);
        assert_eq!(swipe.release(100), Some(SessionCommand::Previous));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut swipe = SwipeTracker::new(50);
        swipe.press(100);
        assert_eq!(swipe.release(50), None);

        swipe.press(0);
        assert_eq!(swipe.release(50), None);
    }

    #[test]
    fn test_default_threshold_fits_a_terminal() {
        let mut swipe = SwipeTracker::new(crate::config::DEFAULT_SWIPE_THRESHOLD);
        swipe.press(40);
        assert_eq!(swipe.release(25), Some(SessionCommand::Next));

        swipe.press(40);
        assert_eq!(swipe.release(45), None);
    }

    #[test]
    fn test_release_without_press() {
        let mut swipe = SwipeTracker::new(5);
        assert_eq!(swipe.release(80), None);
    }

    #[test]
    fn test_mouse_drag_events() {
        let mut swipe = SwipeTracker::new(10);
        let down = Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40));
        let up = Event::Mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5));

        assert_eq!(event_intent(down, &mut swipe), None);
        assert_eq!(
            event_intent(up, &mut swipe),
            Some(Intent::Command(SessionCommand::Next))
        );
    }

    #[test]
    fn test_other_events_ignored() {
        let mut swipe = SwipeTracker::new(10);
        assert_eq!(event_intent(Event::Resize(80, 24), &mut swipe), None);
        assert_eq!(event_intent(Event::FocusGained, &mut swipe), None);
    }
}
