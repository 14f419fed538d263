//! The ratatui proportion slider widget.
//!
//! `ProportionSlider` is a `StatefulWidget`: the widget itself carries the
//! per-render configuration (current pair, details, knob style), while
//! `SliderState` owns everything that lives across frames — the drag
//! controller, the two fit samplers, the animated label anchors, and the
//! track geometry measured from the rendered area.
//!
//! Vertical mapping of the anchor vocabulary: when the widget area is at
//! least three rows tall, the first and last rows become gutters for the
//! outside-above / outside-below anchors and the remaining rows form the
//! bar. With fewer rows there is no gutter and outside labels are not
//! drawn.

use propslider_core::{
    place_labels, AnimatedAnchor, Anchor, DisplayValue, DragController, FitMeasurement,
    FitSampler, FitState, PointerInput, ProportionDetail, ProportionPair, Rgb, Side, Span,
    TrackGeometry,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Fit gap in terminal cells (the cell-unit analog of the 5px default).
pub const FIT_GAP_CELLS: f64 = 1.0;

/// Knob sizing in cells. The terminal substitute for the engine's
/// pixel-sized `KnobOptions` defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobStyle {
    pub width: u16,
    pub gap: u16,
    pub color: Option<Rgb>,
}

impl Default for KnobStyle {
    fn default() -> Self {
        Self {
            width: 1,
            gap: 0,
            color: None,
        }
    }
}

impl KnobStyle {
    pub fn span_cells(&self) -> u16 {
        self.width + 2 * self.gap
    }
}

/// How the slider responded to a mouse event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseOutcome {
    /// Not for us — pass it on.
    Ignored,
    /// Accepted (session opened or closed) with no value change.
    Captured,
    /// Accepted, and the drag proposes this replacement pair.
    Changed(ProportionPair),
}

/// The two-segment proportion slider.
#[derive(Debug, Clone)]
pub struct ProportionSlider<'a> {
    value: ProportionPair,
    details: &'a [ProportionDetail; 2],
    knob: KnobStyle,
    display: DisplayValue,
    disabled: bool,
}

impl<'a> ProportionSlider<'a> {
    pub fn new(value: ProportionPair, details: &'a [ProportionDetail; 2]) -> Self {
        Self {
            value,
            details,
            knob: KnobStyle::default(),
            display: DisplayValue::Percentage,
            disabled: false,
        }
    }

    pub fn knob(mut self, knob: KnobStyle) -> Self {
        self.knob = knob;
        self
    }

    pub fn display(mut self, display: DisplayValue) -> Self {
        self.display = display;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Cross-frame slider state: drag session, fit sampling, label animation,
/// and the geometry measured at the last render.
#[derive(Debug)]
pub struct SliderState {
    drag: DragController,
    fit: [FitSampler; 2],
    /// `[side][0]` is the primary (label) node, `[side][1]` the secondary.
    anchors: [[AnimatedAnchor; 2]; 2],
    measurements: [Option<FitMeasurement>; 2],
    geometry: TrackGeometry,
    knob_hit: Span,
    bar_rows: Option<(u16, u16)>,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderState {
    pub fn new() -> Self {
        let left = place_labels(Side::Left, FitState::BothFit);
        let right = place_labels(Side::Right, FitState::BothFit);
        Self {
            drag: DragController::default(),
            fit: [FitSampler::new(FIT_GAP_CELLS), FitSampler::new(FIT_GAP_CELLS)],
            anchors: [
                [
                    AnimatedAnchor::new(left.primary),
                    AnimatedAnchor::new(left.secondary),
                ],
                [
                    AnimatedAnchor::new(right.primary),
                    AnimatedAnchor::new(right.secondary),
                ],
            ],
            measurements: [None, None],
            geometry: TrackGeometry::default(),
            knob_hit: Span::default(),
            bar_rows: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn fit_state(&self, side: Side) -> FitState {
        self.fit[side_index(side)].state()
    }

    /// Cancel an in-flight drag (the pointer-cancel path).
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.release()
    }

    /// Advance fit sampling and label animation by one frame. Uses the
    /// measurements captured at the last render; before the first render
    /// every sampling tick is skipped (the measurement race no-op).
    pub fn tick(&mut self, dt_ms: f64) {
        for (i, side) in [Side::Left, Side::Right].into_iter().enumerate() {
            let measurement = self.measurements[i];
            self.fit[i].tick(dt_ms, || measurement);
            let placement = place_labels(side, self.fit[i].state());
            self.anchors[i][0].set_target(placement.primary);
            self.anchors[i][1].set_target(placement.secondary);
            self.anchors[i][0].advance(dt_ms);
            self.anchors[i][1].advance(dt_ms);
        }
    }

    /// Route a mouse event. `value` is the caller's current committed
    /// pair, snapshotted when a drag session opens.
    pub fn handle_mouse(
        &mut self,
        kind: crossterm::event::MouseEventKind,
        column: u16,
        row: u16,
        value: ProportionPair,
    ) -> MouseOutcome {
        use crossterm::event::{MouseButton, MouseEventKind};

        let input = PointerInput::Mouse { x: column as f64 };
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.row_on_bar(row) {
                    return MouseOutcome::Ignored;
                }
                if self.drag.press(&input, self.knob_hit, value) {
                    MouseOutcome::Captured
                } else {
                    MouseOutcome::Ignored
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                match self.drag.drag(&input, self.geometry) {
                    Some(pair) => MouseOutcome::Changed(pair),
                    None if self.drag.is_dragging() => MouseOutcome::Captured,
                    None => MouseOutcome::Ignored,
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag.release() {
                    MouseOutcome::Captured
                } else {
                    MouseOutcome::Ignored
                }
            }
            _ => MouseOutcome::Ignored,
        }
    }

    fn row_on_bar(&self, row: u16) -> bool {
        self.bar_rows
            .is_some_and(|(start, end)| row >= start && row < end)
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl StatefulWidget for ProportionSlider<'_> {
    type State = SliderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut SliderState) {
        state.drag.set_disabled(self.disabled);

        let span_cells = self.knob.span_cells();
        if area.width <= span_cells || area.height == 0 {
            state.measurements = [None, None];
            state.geometry = TrackGeometry::default();
            state.bar_rows = None;
            state.knob_hit = Span::default();
            return;
        }

        // Rows: gutter / bar / gutter when there is room.
        let has_gutters = area.height >= 3;
        let bar_top = if has_gutters { area.y + 1 } else { area.y };
        let bar_height = if has_gutters { area.height - 2 } else { area.height };
        state.bar_rows = Some((bar_top, bar_top + bar_height));

        // Measure the track. Pointer events arrive in screen columns, so
        // the origin is the area's left edge.
        state.geometry = TrackGeometry {
            origin: area.x as f64,
            track_width: area.width as f64,
            knob_span: span_cells as f64,
        };

        // Segment widths: each side's share of the track minus half the
        // knob span. A zero total degenerates to an even split.
        let usable = area.width - span_cells;
        let left_cells = match self.value.left_fraction() {
            Some(fraction) => {
                let ideal = fraction * area.width as f64 - span_cells as f64 / 2.0;
                (ideal.round().max(0.0) as u16).min(usable)
            }
            None => usable / 2,
        };
        let right_cells = usable - left_cells;

        let left_seg = Rect::new(area.x, bar_top, left_cells, bar_height);
        let knob_rect = Rect::new(
            area.x + left_cells + self.knob.gap,
            bar_top,
            self.knob.width,
            bar_height,
        );
        let right_seg = Rect::new(
            area.x + left_cells + span_cells,
            bar_top,
            right_cells,
            bar_height,
        );
        state.knob_hit = Span::new(
            (area.x + left_cells) as f64,
            (area.x + left_cells + span_cells) as f64,
        );

        // Paint segments and knob.
        let left_bg = self.details[0]
            .background
            .map(theme::to_color)
            .unwrap_or(theme::LEFT_SEGMENT);
        let right_bg = self.details[1]
            .background
            .map(theme::to_color)
            .unwrap_or(theme::RIGHT_SEGMENT);
        let knob_color = if self.disabled {
            theme::KNOB_DISABLED
        } else {
            self.knob.color.map(theme::to_color).unwrap_or(theme::KNOB)
        };
        buf.set_style(left_seg, Style::default().bg(left_bg));
        buf.set_style(right_seg, Style::default().bg(right_bg));
        buf.set_style(knob_rect, Style::default().bg(knob_color));

        // Labels: measure, record for the fit sampler, draw at animated
        // anchor positions.
        let mid_row = bar_top + bar_height / 2;
        let gutters = has_gutters.then(|| (area.y, area.y + area.height - 1));
        for (i, (seg, bg)) in [(left_seg, left_bg), (right_seg, right_bg)]
            .into_iter()
            .enumerate()
        {
            let primary = self.details[i].label.as_str();
            let secondary = match self.display {
                DisplayValue::Percentage => percent_text(self.value, i),
                DisplayValue::None => String::new(),
            };

            state.measurements[i] = Some(FitMeasurement {
                primary_width: primary.width() as f64,
                secondary_width: secondary.width() as f64,
                container_width: seg.width as f64,
            });

            draw_node(
                buf,
                area,
                seg,
                bg,
                gutters,
                mid_row,
                &state.anchors[i][0],
                primary,
            );
            if !secondary.is_empty() {
                draw_node(
                    buf,
                    area,
                    seg,
                    bg,
                    gutters,
                    mid_row,
                    &state.anchors[i][1],
                    &secondary,
                );
            }
        }
    }
}

fn percent_text(value: ProportionPair, side: usize) -> String {
    let percent = if side == 0 {
        value.left_percent_rounded()
    } else {
        value.right_percent_rounded()
    };
    match percent {
        Some(p) => format!("{p}%"),
        None => String::new(),
    }
}

/// Screen position for an anchor, or `None` when it needs a gutter row
/// that this area does not have.
fn anchor_position(
    anchor: Anchor,
    seg: Rect,
    text_cells: u16,
    gutters: Option<(u16, u16)>,
    mid_row: u16,
) -> Option<(f64, u16)> {
    let gap = FIT_GAP_CELLS;
    let start_x = seg.x as f64 + gap;
    let end_x = (seg.x + seg.width) as f64 - text_cells as f64 - gap;
    match anchor {
        Anchor::InsideStart => Some((start_x, mid_row)),
        Anchor::InsideEnd => Some((end_x, mid_row)),
        Anchor::OutsideAboveStart => gutters.map(|(top, _)| (seg.x as f64, top)),
        Anchor::OutsideBelowStart => gutters.map(|(_, bottom)| (seg.x as f64, bottom)),
        Anchor::OutsideAboveEnd => {
            gutters.map(|(top, _)| ((seg.x + seg.width) as f64 - text_cells as f64, top))
        }
        Anchor::OutsideBelowEnd => {
            gutters.map(|(_, bottom)| ((seg.x + seg.width) as f64 - text_cells as f64, bottom))
        }
    }
}

/// Draw one label node, interpolating between its previous and current
/// anchors with the eased (possibly overshooting) blend factor.
#[allow(clippy::too_many_arguments)]
fn draw_node(
    buf: &mut Buffer,
    area: Rect,
    seg: Rect,
    seg_bg: ratatui::style::Color,
    gutters: Option<(u16, u16)>,
    mid_row: u16,
    anchor: &AnimatedAnchor,
    text: &str,
) {
    let text_cells = text.width() as u16;
    if text_cells == 0 {
        return;
    }

    let target = anchor_position(anchor.current(), seg, text_cells, gutters, mid_row);
    let Some((to_x, to_y)) = target else {
        return;
    };

    let (x, y) = if anchor.is_settled() {
        (to_x, to_y)
    } else {
        match anchor_position(anchor.previous(), seg, text_cells, gutters, mid_row) {
            Some((from_x, from_y)) => {
                let blend = anchor.blend();
                let x = from_x + (to_x - from_x) * blend;
                // Rows are discrete; snap halfway through the flight.
                let y = if blend < 0.5 { from_y } else { to_y };
                (x, y)
            }
            None => (to_x, to_y),
        }
    };

    // Clamp the (possibly overshot) position into the widget area.
    let min_x = area.x as f64;
    let max_x = (area.x + area.width).saturating_sub(text_cells) as f64;
    let x = x.clamp(min_x, max_x.max(min_x)).round() as u16;

    let style = if y == mid_row {
        theme::label(seg_bg)
    } else {
        theme::gutter_label()
    };
    let max_width = (area.x + area.width).saturating_sub(x) as usize;
    buf.set_stringn(x, y, text, max_width, style);
}
