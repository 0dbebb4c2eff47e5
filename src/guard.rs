//! Outside-click handling for the form.
//!
//! The guard is constructed by the runtime at startup and consulted for
//! every mouse click. It owns no state beyond its attachment flag; the form
//! geometry it tests against is whatever the renderer recorded last frame.

use crate::state::{AppState, rect_contains};

/// Click subscription watching for presses outside the form.
///
/// Constructed explicitly by the runtime and detached explicitly on
/// shutdown, rather than registered as an implicit process-wide listener.
#[derive(Debug)]
pub struct OutsideClickGuard {
    /// Whether the guard is still attached to the click stream.
    attached: bool,
}

impl OutsideClickGuard {
    /// What: Create an attached guard.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - A guard that evaluates every click passed to [`Self::on_click`].
    #[must_use]
    pub const fn new() -> Self {
        Self { attached: true }
    }

    /// Whether the guard is still attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// What: Detach the guard from the click stream.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - No return value; subsequent clicks are ignored.
    pub const fn detach(&mut self) {
        self.attached = false;
    }

    /// What: Evaluate a single click against the form geometry.
    ///
    /// Inputs:
    /// - `app`: Read-only application state holding the recorded rectangles.
    /// - `column`: Cell column of the click.
    /// - `row`: Cell row of the click.
    ///
    /// Output:
    /// - No return value and no state mutation.
    ///
    /// Details:
    /// - When no form rectangle has been recorded yet, the click is ignored.
    /// - Otherwise the click is classified: outside the form's content area,
    ///   not on the primary (submit) action, and not on the form's own
    ///   border frame. A click matching all three currently triggers
    ///   nothing; upstream never decided what closing the form should do, so
    ///   the branch stays empty until that is specified.
    pub fn on_click(&self, app: &AppState, column: u16, row: u16) {
        if !self.attached {
            return;
        }
        let Some(frame) = app.form_frame_rect else {
            return;
        };
        let inner = app.form_rect.unwrap_or(frame);

        let outside_form = !rect_contains(inner, column, row);
        let on_primary_action = app
            .submit_rect
            .is_some_and(|r| rect_contains(r, column, row));
        let on_form_frame = rect_contains(frame, column, row) && !rect_contains(inner, column, row);

        if outside_form && !on_primary_action && !on_form_frame {
            // Don't close on form clicks
        }
    }
}

impl Default for OutsideClickGuard {
    fn default() -> Self {
        Self::new()
    }
}
