use super::*;
use crossterm::event::{MouseEvent, MouseEventKind};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

#[test]
fn quit_keys() {
    assert_eq!(
        into_host_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
        HostEvent::Quit
    );
    assert_eq!(
        into_host_event(key(KeyCode::Esc, KeyModifiers::NONE)),
        HostEvent::Quit
    );
    assert_eq!(
        into_host_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        HostEvent::Quit
    );
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(
        into_host_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
        HostEvent::Ignored
    );
    assert_eq!(
        into_host_event(key(KeyCode::Enter, KeyModifiers::NONE)),
        HostEvent::Ignored
    );
}

#[test]
fn key_release_does_not_quit() {
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert_eq!(into_host_event(Event::Key(release)), HostEvent::Ignored);
}

#[test]
fn resize_and_focus_pass_through() {
    assert_eq!(into_host_event(Event::Resize(80, 24)), HostEvent::Resize(80, 24));
    assert_eq!(into_host_event(Event::FocusGained), HostEvent::FocusGained);
    assert_eq!(into_host_event(Event::FocusLost), HostEvent::FocusLost);
}

#[test]
fn mouse_is_ignored() {
    let mouse = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(into_host_event(Event::Mouse(mouse)), HostEvent::Ignored);
}
