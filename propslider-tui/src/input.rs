//! Input dispatch — global keys plus mouse routing into the slider.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};

use crate::app::AppState;
use crate::widget::MouseOutcome;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('d') => {
            app.toggle_disabled();
        }
        KeyCode::Char('r') => {
            app.reset();
        }
        // Pointer-cancel path: abandon the session without a final commit.
        KeyCode::Esc => {
            if app.slider.cancel_drag() {
                app.set_status("Drag cancelled");
            }
        }
        _ => {}
    }
}

/// Route a mouse event into the slider and commit any proposed value.
pub fn handle_mouse(app: &mut AppState, ev: MouseEvent) {
    match app
        .slider
        .handle_mouse(ev.kind, ev.column, ev.row, app.value)
    {
        MouseOutcome::Changed(pair) => app.commit(pair),
        MouseOutcome::Captured | MouseOutcome::Ignored => {}
    }
}
