use crate::app::HostEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn into_host_event(event: Event) -> HostEvent {
    match event {
        Event::Key(key) => into_key_event(key),
        Event::Resize(w, h) => HostEvent::Resize(w, h),
        Event::FocusGained => HostEvent::FocusGained,
        Event::FocusLost => HostEvent::FocusLost,
        Event::Mouse(_) | Event::Paste(_) => HostEvent::Ignored,
    }
}

fn into_key_event(key: KeyEvent) -> HostEvent {
    if key.kind == KeyEventKind::Release {
        return HostEvent::Ignored;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => HostEvent::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HostEvent::Quit,
        _ => HostEvent::Ignored,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
