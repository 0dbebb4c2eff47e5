//! Application state for the payment-entry form.
//!
//! The renderer records the rectangles of interactive regions here on every
//! frame so the mouse handlers and the outside-click guard can hit-test
//! without re-deriving the layout.

use crate::notify::{Toast, ToastHandle};

/// Which form field currently owns keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The amount field (focused on startup).
    #[default]
    Amount,
    /// The date field.
    Date,
}

/// Terminal-cell rectangle as `(x, y, width, height)`.
pub type CellRect = (u16, u16, u16, u16);

/// What: Test whether a cell position falls inside a rectangle.
///
/// Inputs:
/// - `rect`: Rectangle as `(x, y, width, height)`.
/// - `column`: Cell column of the position.
/// - `row`: Cell row of the position.
///
/// Output:
/// - `true` when the position is within the rectangle's bounds.
#[must_use]
pub const fn rect_contains(rect: CellRect, column: u16, row: u16) -> bool {
    let (x, y, w, h) = rect;
    column >= x && column < x.saturating_add(w) && row >= y && row < y.saturating_add(h)
}

/// Mutable state shared by the event handlers and the renderer.
pub struct AppState {
    /// Raw text of the amount field.
    pub amount_input: String,
    /// Raw text of the date field.
    pub date_input: String,
    /// Field owning keyboard input.
    pub focus: Focus,

    // Transient toast stack (bottom-right)
    /// Live toasts, oldest first; each expires on its own deadline.
    pub toasts: Vec<Toast>,
    /// Next toast id handed out by [`crate::notify::show`].
    pub next_toast_id: u64,
    /// Handle of the most recently shown toast, for keyboard dismissal.
    pub last_toast: Option<ToastHandle>,

    // Rectangles recorded by the renderer for mouse hit-testing; `None`
    // until the first frame has been drawn.
    /// Outer form rectangle including its border frame.
    pub form_frame_rect: Option<CellRect>,
    /// Inner form rectangle (content area inside the border).
    pub form_rect: Option<CellRect>,
    /// Amount field line.
    pub amount_rect: Option<CellRect>,
    /// Date field line.
    pub date_rect: Option<CellRect>,
    /// Submit button.
    pub submit_rect: Option<CellRect>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            amount_input: String::new(),
            date_input: String::new(),
            focus: Focus::default(),
            toasts: Vec::new(),
            next_toast_id: 0,
            last_toast: None,
            form_frame_rect: None,
            form_rect: None,
            amount_rect: None,
            date_rect: None,
            submit_rect: None,
        }
    }
}
