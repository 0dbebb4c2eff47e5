//! Event handling for the payment form.
//!
//! Keyboard input edits the focused field; the mouse can focus fields,
//! press the submit button, and every click is forwarded to the
//! outside-click guard, mirroring a document-level listener.

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::format::{format_currency, format_date};
use crate::guard::OutsideClickGuard;
use crate::notify::{self, Severity};
use crate::state::{AppState, Focus, rect_contains};
use crate::theme::reload_theme;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, guard: &OutsideClickGuard) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(ke, app)
        }
        CEvent::Mouse(m) => handle_mouse(m, app, guard),
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: The pressed key with its modifiers.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` when the key requests exit (Esc or Ctrl+C).
///
/// Details:
/// - Tab switches fields, Enter submits, Backspace edits, Ctrl+D dismisses
///   the most recent toast early, Ctrl+T reloads the theme from disk.
fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('d') if ctrl => {
            if let Some(handle) = app.last_toast.take() {
                notify::dismiss(app, handle);
            }
        }
        KeyCode::Char('t') if ctrl => {
            if let Err(msg) = reload_theme() {
                let handle = notify::show(app, msg, Severity::Error);
                app.last_toast = Some(handle);
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Amount => Focus::Date,
                Focus::Date => Focus::Amount,
            };
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            let field = focused_field(app);
            field.pop();
        }
        KeyCode::Char(c) if !ctrl => focused_field(app).push(c),
        _ => {}
    }
    false
}

/// What: Handle one mouse event.
///
/// Inputs:
/// - `m`: Mouse event with position and button.
/// - `app`: Mutable application state holding the recorded rectangles.
/// - `guard`: Outside-click guard consulted for every click.
///
/// Output:
/// - Always `false`; mouse input never requests exit.
fn handle_mouse(m: MouseEvent, app: &mut AppState, guard: &OutsideClickGuard) -> bool {
    if !matches!(m.kind, MouseEventKind::Down(MouseButton::Left)) {
        return false;
    }
    let (mx, my) = (m.column, m.row);

    if let Some(r) = app.submit_rect
        && rect_contains(r, mx, my)
    {
        submit(app);
    } else if let Some(r) = app.amount_rect
        && rect_contains(r, mx, my)
    {
        app.focus = Focus::Amount;
    } else if let Some(r) = app.date_rect
        && rect_contains(r, mx, my)
    {
        app.focus = Focus::Date;
    }

    // Every click also flows through the document-wide guard.
    guard.on_click(app, mx, my);
    false
}

/// Borrow the input buffer of the focused field.
fn focused_field(app: &mut AppState) -> &mut String {
    match app.focus {
        Focus::Amount => &mut app.amount_input,
        Focus::Date => &mut app.date_input,
    }
}

/// What: Submit the form, confirming via a toast.
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output:
/// - No return value; one toast is shown and its handle retained for
///   keyboard dismissal.
///
/// Details:
/// - A non-numeric amount produces a warning toast instead of a saved
///   confirmation; the date passes through the formatter as-is.
fn submit(app: &mut AppState) {
    let amount = format_currency(&app.amount_input);
    if amount == "NaN" {
        let handle = notify::show(app, "Amount is not a number", Severity::Warning);
        app.last_toast = Some(handle);
        return;
    }
    let date = format_date(&app.date_input);
    tracing::info!(%amount, %date, "payment recorded");
    let handle = notify::show(app, format!("Saved {amount} on {date}"), Severity::default());
    app.last_toast = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a left-click event at the given cell.
    fn left_click(column: u16, row: u16) -> CEvent {
        CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Build a plain key press event.
    fn press(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    /// What: Verify typing edits the focused field and Tab switches focus.
    ///
    /// Inputs:
    /// - Characters typed before and after a Tab press.
    ///
    /// Output:
    /// - The amount field receives the first characters, the date field the
    ///   rest, and Backspace removes from the focused field only.
    fn typing_follows_focus() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        for c in ['1', '2'] {
            handle_event(press(KeyCode::Char(c)), &mut app, &guard);
        }
        handle_event(press(KeyCode::Tab), &mut app, &guard);
        handle_event(press(KeyCode::Char('x')), &mut app, &guard);
        handle_event(press(KeyCode::Backspace), &mut app, &guard);

        assert_eq!(app.amount_input, "12");
        assert_eq!(app.date_input, "");
        assert_eq!(app.focus, Focus::Date);
    }

    #[test]
    /// What: Verify Enter submits and shows the formatted confirmation toast.
    ///
    /// Inputs:
    /// - Amount "12.5" and date "2024-03-05", then Enter.
    ///
    /// Output:
    /// - One success toast reading "Saved 12.50 on Mar 5, 2024" and a
    ///   retained handle.
    fn enter_submits_with_formatted_values() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        app.amount_input = "12.5".to_string();
        app.date_input = "2024-03-05".to_string();

        handle_event(press(KeyCode::Enter), &mut app, &guard);

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "Saved 12.50 on Mar 5, 2024");
        assert_eq!(app.toasts[0].severity, Severity::Success);
        assert!(app.last_toast.is_some());
    }

    #[test]
    /// What: Verify a non-numeric amount submits as a warning toast.
    ///
    /// Inputs:
    /// - Amount "abc", then Enter.
    ///
    /// Output:
    /// - One warning toast; no saved confirmation.
    fn non_numeric_amount_warns() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        app.amount_input = "abc".to_string();

        handle_event(press(KeyCode::Enter), &mut app, &guard);

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].severity, Severity::Warning);
    }

    #[test]
    /// What: Verify Ctrl+D dismisses the most recent toast early.
    ///
    /// Inputs:
    /// - A submitted form followed by Ctrl+D, then a second Ctrl+D.
    ///
    /// Output:
    /// - The toast disappears on the first press; the second is a no-op.
    fn ctrl_d_dismisses_latest_toast() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        app.amount_input = "5".to_string();
        handle_event(press(KeyCode::Enter), &mut app, &guard);
        assert_eq!(app.toasts.len(), 1);

        let dismiss = CEvent::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        handle_event(dismiss.clone(), &mut app, &guard);
        assert!(app.toasts.is_empty());
        assert!(app.last_toast.is_none());

        handle_event(dismiss, &mut app, &guard);
        assert!(app.toasts.is_empty());
    }

    #[test]
    /// What: Verify clicking the submit button submits the form.
    ///
    /// Inputs:
    /// - Recorded submit rectangle and a click inside it, plus one outside.
    ///
    /// Output:
    /// - The inside click produces a toast; the outside click does not.
    fn click_on_submit_button_submits() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        app.amount_input = "5".to_string();
        app.submit_rect = Some((10, 12, 16, 1));

        handle_event(left_click(11, 12), &mut app, &guard);
        assert_eq!(app.toasts.len(), 1);

        handle_event(left_click(60, 3), &mut app, &guard);
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    /// What: Verify clicks before the first frame are harmless.
    ///
    /// Inputs:
    /// - Fresh state with no recorded rectangles and an arbitrary click.
    ///
    /// Output:
    /// - No toast, no focus change, no panic.
    fn click_without_layout_is_noop() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        handle_event(left_click(5, 5), &mut app, &guard);
        assert!(app.toasts.is_empty());
        assert_eq!(app.focus, Focus::Amount);
    }

    #[test]
    /// What: Verify Esc requests exit and other keys do not.
    ///
    /// Inputs:
    /// - Esc and a plain character press.
    ///
    /// Output:
    /// - `true` for Esc, `false` for the character.
    fn esc_requests_exit() {
        let mut app = AppState::default();
        let guard = OutsideClickGuard::new();
        assert!(handle_event(press(KeyCode::Esc), &mut app, &guard));
        assert!(!handle_event(press(KeyCode::Char('q')), &mut app, &guard));
    }
}
