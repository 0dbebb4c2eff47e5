//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests verify that the TUI renders correctly without requiring a
//! real terminal: the form and its recorded rectangles, the live formatted
//! preview, and the toast overlay.

use ratatui::{Terminal, backend::TestBackend};

use billform::notify::{self, Severity};
use billform::state::AppState;
use billform::ui::ui;

/// Render the UI to a fresh `TestBackend` and return the terminal.
fn render(width: u16, height: u16, app: &mut AppState) -> Terminal<TestBackend> {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("failed to create test terminal");
    terminal.draw(|f| ui(f, app)).expect("failed to draw frame");
    terminal
}

/// Collect the frame buffer into one string, rows separated by newlines.
fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        out.push('\n');
    }
    out
}

#[test]
/// What: Verify a default frame renders the form and records its geometry.
///
/// Inputs:
/// - Fresh `AppState`, 80x24 frame.
///
/// Output:
/// - The form title and submit button are visible and every interactive
///   rectangle is recorded for mouse hit-testing.
fn renders_form_and_records_rects() {
    let mut app = AppState::default();
    let terminal = render(80, 24, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("New payment"));
    assert!(text.contains("[ Save payment ]"));

    assert!(app.form_frame_rect.is_some());
    assert!(app.form_rect.is_some());
    assert!(app.amount_rect.is_some());
    assert!(app.date_rect.is_some());
    assert!(app.submit_rect.is_some());

    // The inner area sits strictly inside the border frame.
    let frame = app.form_frame_rect.expect("frame rect");
    let inner = app.form_rect.expect("inner rect");
    assert!(inner.0 > frame.0);
    assert!(inner.1 > frame.1);
    assert!(inner.2 < frame.2);
}

#[test]
/// What: Verify the live preview runs both formatters every frame.
///
/// Inputs:
/// - Amount "19.999" and date "2024-03-05".
///
/// Output:
/// - The frame shows the rounded amount and the short date.
fn preview_shows_formatted_values() {
    let mut app = AppState::default();
    app.amount_input = "19.999".to_string();
    app.date_input = "2024-03-05".to_string();
    let terminal = render(80, 24, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("Records 20.00 on Mar 5, 2024"));
}

#[test]
/// What: Verify empty inputs pass through as the platform sentinels.
///
/// Inputs:
/// - Fresh state with both fields empty.
///
/// Output:
/// - The preview shows `NaN` and `Invalid Date` rather than an error.
fn preview_passes_through_sentinels() {
    let mut app = AppState::default();
    let terminal = render(80, 24, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("Records NaN on Invalid Date"));
}

#[test]
/// What: Verify a shown toast is rendered with its severity label.
///
/// Inputs:
/// - One success toast reading "Saved".
///
/// Output:
/// - Both the message and the `success` title appear in the frame.
fn renders_toast_with_severity_label() {
    let mut app = AppState::default();
    notify::show(&mut app, "Saved", Severity::Success);
    let terminal = render(80, 24, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("Saved"));
    assert!(text.contains("success"));
}

#[test]
/// What: Verify overlapping toasts are both visible.
///
/// Inputs:
/// - Two toasts shown in quick succession.
///
/// Output:
/// - Both messages appear in one frame, stacked in the corner.
fn renders_stacked_toasts() {
    let mut app = AppState::default();
    notify::show(&mut app, "first toast", Severity::Info);
    notify::show(&mut app, "second toast", Severity::Warning);
    let terminal = render(80, 24, &mut app);

    let text = buffer_text(&terminal);
    assert!(text.contains("first toast"));
    assert!(text.contains("second toast"));
}

#[test]
/// What: Verify rendering stays panic-free on small frames.
///
/// Inputs:
/// - Frame sizes down to a few cells, with a toast present.
///
/// Output:
/// - Every size renders without panicking.
fn renders_without_panic_on_small_frames() {
    for (w, h) in [(80_u16, 24_u16), (46, 8), (20, 6), (8, 3), (3, 2)] {
        let mut app = AppState::default();
        notify::show(&mut app, "Saved", Severity::Success);
        let _terminal = render(w, h, &mut app);
    }
}
