//! Transient toast notifications.
//!
//! A toast is an ephemeral message appended to the application's toast stack
//! and removed again once its deadline passes. Every toast carries its own
//! deadline, so overlapping toasts expire independently and in any order.
//! The runtime's tick handler drives [`expire_due`]; callers that want to
//! remove a toast early keep the [`ToastHandle`] returned by [`show`].

use std::time::{Duration, Instant};

use crate::state::AppState;

/// Fixed lifetime of a toast from the moment it is shown.
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

/// Presentation category of a toast.
///
/// Selects the accent style used by the renderer and the severity field on
/// log events. The set is closed; [`Severity::Success`] is the default used
/// by plain confirmation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    /// Neutral informational message.
    Info,
    /// Positive confirmation (the default).
    #[default]
    Success,
    /// Something worth attention but not fatal.
    Warning,
    /// An operation failed.
    Error,
}

impl Severity {
    /// What: Return the lowercase label for this severity.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - `"info"`, `"success"`, `"warning"`, or `"error"`.
    ///
    /// Details:
    /// - Used as the severity field on tracing events and in the toast title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single on-screen toast.
#[derive(Clone, Debug)]
pub struct Toast {
    /// Monotonically increasing identifier, unique within the process.
    pub id: u64,
    /// Literal message text; rendered as-is, never interpreted as markup.
    pub message: String,
    /// Presentation category.
    pub severity: Severity,
    /// Deadline (Instant) after which the toast is automatically removed.
    pub expires_at: Instant,
}

/// Opaque reference to a shown toast, usable for early dismissal.
///
/// Dropping the handle has no effect; the toast still expires on its own
/// deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastHandle(u64);

/// What: Append a toast to the stack with the fixed removal deadline.
///
/// Inputs:
/// - `app`: Application state owning the toast stack.
/// - `message`: Literal text to display.
/// - `severity`: Presentation category; pass [`Severity::default`] for plain
///   confirmations.
///
/// Output:
/// - A [`ToastHandle`] for optional early dismissal.
///
/// Details:
/// - Each call produces an independent toast and deadline; there is no cap,
///   no de-duplication, and no queueing. Concurrent toasts expire
///   independently of each other.
pub fn show(app: &mut AppState, message: impl Into<String>, severity: Severity) -> ToastHandle {
    let message = message.into();
    let id = app.next_toast_id;
    app.next_toast_id += 1;
    tracing::debug!(id, severity = severity.label(), %message, "toast shown");
    app.toasts.push(Toast {
        id,
        message,
        severity,
        expires_at: Instant::now() + TOAST_TTL,
    });
    ToastHandle(id)
}

/// What: Remove a toast before its deadline.
///
/// Inputs:
/// - `app`: Application state owning the toast stack.
/// - `handle`: Handle returned by [`show`].
///
/// Output:
/// - `true` when the toast was still live and has been removed; `false` when
///   it had already expired or been dismissed.
pub fn dismiss(app: &mut AppState, handle: ToastHandle) -> bool {
    let before = app.toasts.len();
    app.toasts.retain(|t| t.id != handle.0);
    let removed = app.toasts.len() < before;
    if removed {
        tracing::debug!(id = handle.0, "toast dismissed early");
    }
    removed
}

/// What: Remove every toast whose deadline has passed.
///
/// Inputs:
/// - `app`: Application state owning the toast stack.
/// - `now`: Current instant, injected so ticks and tests share one clock read.
///
/// Output:
/// - No return value; expired toasts are dropped from the stack.
///
/// Details:
/// - Called from the runtime tick handler. Unexpired toasts are untouched,
///   so removal order across overlapping toasts follows their own deadlines.
pub fn expire_due(app: &mut AppState, now: Instant) {
    app.toasts.retain(|t| now < t.expires_at);
}
