//! Keyboard and mouse handling
//!
//! Mouse events go to the region first, so pointer listeners (including
//! the tooltip's) see them before the brush turns them into lifecycle
//! events.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::brush::PointerEvent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') => app.clear_selection(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let pointer = PointerEvent::new(mouse.column as f64, mouse.row as f64);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.region.pointer_down(pointer);
            app.brush.press(&mut app.region, pointer);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.region.pointer_moved(pointer);
            app.brush.drag(&mut app.region, pointer);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.region.pointer_up(pointer);
            app.brush.release(&mut app.region, pointer);
        }
        MouseEventKind::Moved => app.region.pointer_moved(pointer),
        _ => {}
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
