//! Frame rendering: the payment form, the keybind footer, and the toast
//! overlay stacked in the bottom-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    format::{format_currency, format_date},
    state::{AppState, CellRect, Focus},
    theme::{Theme, theme},
};

/// Label of the primary action button.
const SUBMIT_LABEL: &str = "[ Save payment ]";

/// Height of one toast including its border.
const TOAST_HEIGHT: u16 = 3;

/// What: Convert a [`Rect`] into the tuple form recorded in [`AppState`].
const fn cell_rect(r: Rect) -> CellRect {
    (r.x, r.y, r.width, r.height)
}

/// What: Render a full frame and record the interactive rectangles.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; the form geometry is written back for mouse
///   hit-testing.
///
/// Output:
/// - No return value; the frame buffer and `app`'s rect fields are updated.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    draw_form(f, app, &th, area);
    draw_footer(f, &th, area);
    draw_toasts(f, app, &th, area);
}

/// What: Render the centered payment form and record its rectangles.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state providing field text and focus, receiving the
///   recorded geometry.
/// - `th`: Active palette.
/// - `area`: Full frame area.
///
/// Details:
/// - The inner rows are, top to bottom: amount field, date field, spacer,
///   live preview (both formatters run every frame), spacer, submit button.
fn draw_form(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let w = area.width.min(46);
    let h = area.height.min(8);
    let frame_rect = Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    );

    let block = Block::default()
        .title(Span::styled(
            " New payment ",
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(frame_rect);
    f.render_widget(block, frame_rect);

    let lines = vec![
        field_line("Amount", &app.amount_input, app.focus == Focus::Amount, th),
        field_line("Date  ", &app.date_input, app.focus == Focus::Date, th),
        Line::default(),
        preview_line(app, th),
        Line::default(),
        Line::from(Span::styled(
            SUBMIT_LABEL,
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    app.form_frame_rect = Some(cell_rect(frame_rect));
    app.form_rect = Some(cell_rect(inner));
    if inner.height >= 2 {
        app.amount_rect = Some((inner.x, inner.y, inner.width, 1));
        app.date_rect = Some((inner.x, inner.y + 1, inner.width, 1));
    }
    if inner.height >= 6 {
        let submit_w = u16::try_from(SUBMIT_LABEL.width())
            .unwrap_or(inner.width)
            .min(inner.width);
        app.submit_rect = Some((inner.x, inner.y + 5, submit_w, 1));
    }
}

/// What: Build one labeled input line with a focus-aware prompt.
fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, th: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label} "), Style::default().fg(th.overlay1)),
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            value,
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ])
}

/// What: Build the live preview line showing both formatted values.
fn preview_line(app: &AppState, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("Records ", Style::default().fg(th.subtext0)),
        Span::styled(
            format_currency(&app.amount_input),
            Style::default().fg(th.text),
        ),
        Span::styled(" on ", Style::default().fg(th.subtext0)),
        Span::styled(format_date(&app.date_input), Style::default().fg(th.text)),
    ])
}

/// What: Render the keybind footer on the bottom row.
fn draw_footer(f: &mut Frame, th: &Theme, area: Rect) {
    if area.height == 0 {
        return;
    }
    let rect = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let hint = Paragraph::new(Line::from(Span::styled(
        " Tab field   Enter save   Ctrl+D dismiss toast   Ctrl+T reload theme   Esc quit",
        Style::default().fg(th.subtext0),
    )));
    f.render_widget(hint, rect);
}

/// What: Render the toast stack in the bottom-right corner.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state holding the live toasts, oldest first.
/// - `th`: Active palette.
/// - `area`: Full frame area.
///
/// Details:
/// - The newest toast sits closest to the corner; older ones stack upward.
/// - Toasts that no longer fit above the footer are simply not drawn this
///   frame; they stay live and reappear as newer ones expire.
fn draw_toasts(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let max_w = area.width.saturating_sub(2);
    if max_w < 8 {
        return;
    }
    // One past the last usable row, keeping the footer clear.
    let mut bottom = area.y + area.height.saturating_sub(1);
    for toast in app.toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        // Wide enough for the message and the severity title in the border.
        let label_w = u16::try_from(toast.severity.label().len())
            .unwrap_or(0)
            .saturating_add(2);
        let w = u16::try_from(toast.message.width())
            .unwrap_or(u16::MAX)
            .max(label_w)
            .saturating_add(4)
            .min(max_w);
        let rect = Rect::new(
            area.x + area.width.saturating_sub(w + 1),
            bottom - TOAST_HEIGHT,
            w,
            TOAST_HEIGHT,
        );

        let accent = th.severity_accent(toast.severity);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", toast.severity.label()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(th.mantle));
        let body = Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(th.text),
        )))
        .block(block);
        f.render_widget(Clear, rect);
        f.render_widget(body, rect);

        bottom = rect.y;
    }
}
