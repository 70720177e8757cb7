//! Code reveal: an editor window that types its source out over 60 frames, with a blinking caret,
//! a sweeping scan line and a row of highlight bars.

use crate::{
    components::{FrameCtx, blink, drift, ramp},
    foundation::core::{FrameIndex, Point, Transform2D},
    foundation::error::ReelResult,
    foundation::math::{char_prefix, revealed_count},
    scene::node::{Font, Paint, TextAnchor, VisualNode},
    theme::colors,
};

const MAX_WIDTH: f64 = 896.0;
const PAGE_PADDING: f64 = 48.0;
const HEADER_HEIGHT: f64 = 53.0;
const BODY_PADDING: f64 = 24.0;
const CODE_SIZE: f64 = 19.2;
const LINE_HEIGHT: f64 = CODE_SIZE * 1.8;
const BAR_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Scalar animation state of the code reveal at one frame.
pub struct RevealState {
    /// Characters (Unicode scalar values) of the source shown so far.
    pub visible_chars: usize,
    /// Caret blink opacity.
    pub caret_opacity: f64,
    /// Editor window scale.
    pub container_scale: f64,
    /// Editor window opacity.
    pub container_opacity: f64,
    /// Index of the lit highlight bar; negative before the highlight starts.
    pub highlighted_line: i64,
    /// Scan line offset in pixels.
    pub sweep: f64,
}

/// Compute the reveal state of `code` at `frame`.
pub fn reveal_state(frame: FrameIndex, code: &str) -> ReelResult<RevealState> {
    let f = frame.as_f64();
    let progress = ramp(f, &[0.0, 60.0], &[0.0, 1.0])?;
    Ok(RevealState {
        visible_chars: revealed_count(code.chars().count(), progress),
        caret_opacity: blink(f)?,
        container_scale: ramp(f, &[0.0, 30.0], &[0.8, 1.0])?,
        container_opacity: ramp(f, &[0.0, 20.0], &[0.0, 1.0])?,
        highlighted_line: ramp(f, &[20.0, 80.0], &[0.0, 5.0])?.floor() as i64,
        sweep: drift(f.rem_euclid(120.0), &[0.0, 120.0], &[0.0, 400.0])?,
    })
}

/// Render the code reveal of `code` at `ctx.frame`. `language` only labels the window.
pub fn code_reveal(ctx: FrameCtx, code: &str, language: &str) -> ReelResult<VisualNode> {
    let palette = ctx.palette();
    let state = reveal_state(ctx.frame, code)?;
    let center = ctx.canvas.center();

    let width = (ctx.canvas.w() - 2.0 * PAGE_PADDING).clamp(0.0, MAX_WIDTH);
    let total_lines = code.split('\n').count() as f64;
    let height = HEADER_HEIGHT + 2.0 * BODY_PADDING + total_lines * LINE_HEIGHT;
    let (left, top) = (-width / 2.0, -height / 2.0);
    let body_top = top + HEADER_HEIGHT;

    let panel = VisualNode::rounded_rect("code/panel", width, height, 8.0)
        .paint(Paint::Gradient(palette.background))
        .stroke(palette.border, 2.0)
        .glow(palette.shadow.color, palette.shadow.radius);

    let dots = [colors::RED_500, colors::YELLOW_500, colors::GREEN_500]
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            VisualNode::circle(format!("code/header/dot-{i}"), 6.0)
                .at(left + 22.0 + 20.0 * i as f64, top + HEADER_HEIGHT / 2.0)
                .fill(color)
        });
    let header = VisualNode::group("code/header")
        .child(
            VisualNode::line(
                "code/header/divider",
                Point::new(left, body_top),
                Point::new(-left, body_top),
            )
            .stroke(colors::GRAY_600, 1.0),
        )
        .children(dots)
        .child(
            VisualNode::text(
                "code/header/label",
                format!("main.{language} - Advanced Editor"),
                Font::mono(14.0).anchored(TextAnchor::End),
            )
            .at(-left - 16.0, top + HEADER_HEIGHT / 2.0 + 5.0)
            .fill(colors::GRAY_400),
        );

    let font = Font::mono(CODE_SIZE);
    let visible = char_prefix(code, state.visible_chars);
    let visible_lines: Vec<&str> = visible.split('\n').collect();
    let lines = visible_lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            VisualNode::text(format!("code/lines/line-{i}"), *line, font)
                .at(0.0, i as f64 * LINE_HEIGHT + LINE_HEIGHT * 0.7)
                .fill(colors::CODE_TEXT)
        });
    let lines = VisualNode::group("code/lines")
        .at(left + BODY_PADDING, body_top + BODY_PADDING)
        .children(lines);

    let last = visible_lines.len().saturating_sub(1);
    let tail = visible_lines.last().copied().unwrap_or_default();
    let caret = VisualNode::rect("code/caret", 2.0, 24.0)
        .at(
            left + BODY_PADDING + font.approx_width(tail) + 5.0,
            body_top + BODY_PADDING + last as f64 * LINE_HEIGHT + LINE_HEIGHT / 2.0,
        )
        .opacity(state.caret_opacity)
        .fill(palette.border);

    let scan = VisualNode::line("code/scan", Point::new(left, 0.0), Point::new(-left, 0.0))
        .at(
            0.0,
            body_top + 20.0 + state.highlighted_line as f64 * 30.0 + state.sweep,
        )
        .opacity(0.6)
        .stroke(palette.border, 2.0)
        .glow(palette.primary, 10.0);

    let inner = width - 2.0 * BODY_PADDING;
    let bars = (0..BAR_COUNT).map(|i| {
        let w = inner * (20.0 + 15.0 * i as f64) / 100.0;
        let bar = VisualNode::rounded_rect(format!("code/bars/bar-{i}"), w, 2.0, 1.0)
            .at(
                left + BODY_PADDING + w / 2.0,
                top + BODY_PADDING + 64.0 + 10.0 * i as f64 + 1.0,
            )
            .opacity(0.4);
        if i as i64 == state.highlighted_line {
            bar.fill(palette.primary).glow(palette.primary, 5.0)
        } else {
            bar
        }
    });
    let bars = VisualNode::group("code/bars").children(bars);

    let container = VisualNode::group("code/container")
        .transform(Transform2D::at(center.x, center.y).scaled(state.container_scale))
        .opacity(state.container_opacity)
        .children([panel, header, lines, caret, scan, bars]);

    Ok(VisualNode::group("code").child(container))
}

#[cfg(test)]
#[path = "../../tests/unit/components/code.rs"]
mod tests;
