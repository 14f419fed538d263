//! Top-level demo layout — help line, centered slider, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;
use crate::widget::ProportionSlider;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: help line + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let help = Paragraph::new(Line::from(Span::styled(
        "drag the knob with the mouse   [d]isable  [r]eset  [Esc]cancel drag  [q]uit",
        theme::muted(),
    )));
    f.render_widget(help, chunks[0]);

    let slider_area = centered_slider_rect(chunks[1], app.height);
    let details = app.details.clone();
    let slider = ProportionSlider::new(app.value, &details)
        .knob(app.knob)
        .display(app.display)
        .disabled(app.disabled);
    f.render_stateful_widget(slider, slider_area, &mut app.slider);

    render_status_bar(f, chunks[2], app);
}

/// Center the slider vertically and inset it horizontally.
fn centered_slider_rect(area: Rect, height: u16) -> Rect {
    let height = height.clamp(1, area.height.max(1));
    let y = area.y + area.height.saturating_sub(height) / 2;
    let margin = if area.width > 8 { 4 } else { 0 };
    Rect::new(
        area.x + margin,
        y,
        area.width.saturating_sub(2 * margin),
        height,
    )
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    // The accessibility surface: rounded left share of the total.
    match app.value.left_percent_rounded() {
        Some(percent) => {
            if let Some(aria) = &app.aria_label {
                spans.push(Span::styled(format!("{aria}: "), theme::muted()));
            }
            spans.push(Span::styled(
                format!(
                    " {} {:.1} / {} {:.1} ",
                    app.details[0].label,
                    app.value.left(),
                    app.details[1].label,
                    app.value.right(),
                ),
                theme::accent(),
            ));
            spans.push(Span::styled(format!("({percent}%)"), theme::accent_bold()));
        }
        None => spans.push(Span::styled(" empty total ", theme::muted())),
    }

    if app.disabled {
        spans.push(Span::styled("  DISABLED", theme::warning()));
    }
    if app.slider.is_dragging() {
        spans.push(Span::styled("  dragging", theme::muted()));
    }
    spans.push(Span::styled(
        format!("  changes: {}", app.change_count),
        theme::muted(),
    ));

    if let Some(status) = &app.status {
        let style = match status.level {
            StatusLevel::Info => theme::muted(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(format!("  | {}", status.text), style));
    }

    let bar = Paragraph::new(Line::from(spans)).style(theme::status_bar());
    f.render_widget(bar, area);
}
