//! Application runtime: terminal lifecycle, input thread, tick task, and the
//! event loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;
use tokio::sync::mpsc;

use crate::guard::OutsideClickGuard;
use crate::notify;
use crate::state::AppState;
use crate::ui::ui;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Interval between periodic ticks driving toast expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// What: Put the terminal into raw mode with the alternate screen and mouse
/// capture enabled.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// What: Restore the terminal modes changed by [`setup_terminal`].
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// What: Spawn the blocking input-reading thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned (tests, CI).
/// - `event_tx`: Channel carrying terminal events into the event loop.
/// - `cancelled`: Flag checked between polls so the thread exits promptly.
///
/// Output:
/// - No return value; the thread ends when cancelled or when the receiver
///   is dropped.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            // Poll with a timeout so cancellation is observed even when the
            // user produces no input.
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// What: Spawn the periodic tick task.
///
/// Inputs:
/// - `tick_tx`: Channel receiving one message per tick.
///
/// Output:
/// - No return value; the task ends when the receiver is dropped.
fn spawn_tick_task(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Run the billform TUI end-to-end: set up the terminal, drive the
/// event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `headless_flag`: When `true`, skip terminal setup and rendering
///   (also honored via `BILLFORM_TEST_HEADLESS=1`).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup/teardown
///   failures.
///
/// Details:
/// - Input events arrive from a dedicated reading thread; a periodic tick
///   drives toast expiry. The outside-click guard is constructed here and
///   detached explicitly before teardown.
pub async fn run(headless_flag: bool) -> Result<()> {
    let headless =
        headless_flag || std::env::var("BILLFORM_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    let mut guard = OutsideClickGuard::new();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(headless, event_tx, Arc::clone(&cancelled));
    spawn_tick_task(tick_tx);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }
        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &guard) {
                    break;
                }
            }
            Some(()) = tick_rx.recv() => {
                notify::expire_due(&mut app, Instant::now());
            }
            else => {
                break;
            }
        }
    }

    guard.detach();
    cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
