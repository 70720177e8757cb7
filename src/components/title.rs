//! Kinetic title: letter-by-letter heading, word-by-word subtitle, background grid, two rotating
//! outlines and a scan line sweeping down the canvas.

use crate::{
    components::{FrameCtx, drift, ramp},
    foundation::core::{Point, Transform2D},
    foundation::error::ReelResult,
    scene::node::{Font, VisualNode},
    theme::colors,
};

const TITLE_SIZE: f64 = 96.0;
const SUBTITLE_SIZE: f64 = 30.0;
const WORD_GAP: f64 = 12.0;
const HEADING_Y: f64 = -40.0;
const SUBTITLE_Y: f64 = 64.0;
const GRID_COLS: usize = 12;
const GRID_ROWS: usize = 8;

/// Render the title sequence at `ctx.frame`.
pub fn title_sequence(ctx: FrameCtx, title: &str, subtitle: &str) -> ReelResult<VisualNode> {
    let f = ctx.f();
    let palette = ctx.palette();
    let canvas = ctx.canvas;
    let center = canvas.center();

    let title_scale = ramp(f, &[0.0, 20.0, 40.0], &[0.0, 1.2, 1.0])?;
    let title_opacity = ramp(f, &[0.0, 15.0], &[0.0, 1.0])?;
    let title_rise = ramp(f, &[0.0, 30.0], &[50.0, 0.0])?;
    let subtitle_opacity = ramp(f, &[20.0, 35.0], &[0.0, 1.0])?;
    let subtitle_rise = ramp(f, &[20.0, 40.0], &[30.0, 0.0])?;

    // The rise is applied inside the scale, so it shrinks with the heading.
    let font = Font::sans(TITLE_SIZE).bold();
    let advance = font.approx_width("M");
    let letters: Vec<char> = title.chars().collect();
    let left = -(letters.len() as f64) * advance / 2.0;
    let mut heading = VisualNode::group("title/heading")
        .transform(
            Transform2D::at(
                center.x,
                center.y + HEADING_Y + title_rise * title_scale,
            )
            .scaled(title_scale),
        )
        .opacity(title_opacity)
        .glow(palette.glow.color, palette.glow.radius);
    for (i, ch) in letters.iter().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let start = 2.0 * i as f64;
        let rise = ramp(f, &[start, start + 20.0], &[20.0, 0.0])?;
        let opacity = ramp(f, &[start, start + 15.0], &[0.0, 1.0])?;
        heading.children.push(
            VisualNode::text(format!("title/heading/letter-{i}"), ch.to_string(), font)
                .at(
                    left + (i as f64 + 0.5) * advance,
                    rise + TITLE_SIZE * 0.35,
                )
                .opacity(opacity)
                .fill(palette.title_text),
        );
    }

    let word_font = Font::sans(SUBTITLE_SIZE);
    let words: Vec<&str> = subtitle.split(' ').collect();
    let total = words
        .iter()
        .map(|w| word_font.approx_width(w) + WORD_GAP)
        .sum::<f64>();
    let mut x = -total / 2.0;
    let mut sub = VisualNode::group("title/subtitle")
        .at(center.x, center.y + SUBTITLE_Y + subtitle_rise)
        .opacity(subtitle_opacity);
    for (i, word) in words.iter().enumerate() {
        let width = word_font.approx_width(word);
        let start = 25.0 + 3.0 * i as f64;
        let slide = ramp(f, &[start, start + 10.0], &[30.0, 0.0])?;
        let opacity = ramp(f, &[start, start + 10.0], &[0.0, 1.0])?;
        sub.children.push(
            VisualNode::text(format!("title/subtitle/word-{i}"), *word, word_font)
                .at(x + width / 2.0 + slide, SUBTITLE_SIZE * 0.35)
                .opacity(opacity)
                .fill(palette.subtitle_text),
        );
        x += width + WORD_GAP;
    }

    let ring_scale = drift(f, &[0.0, 60.0], &[0.0, 1.0])?;
    let ring = VisualNode::circle("title/ring", 128.0)
        .transform(
            Transform2D::at(canvas.w() / 4.0 + 128.0, canvas.h() / 4.0 + 128.0)
                .rotated(f * 2.0)
                .scaled(ring_scale),
        )
        .opacity(drift(f, &[0.0, 30.0, 60.0], &[0.0, 0.3, 0.0])?)
        .stroke(colors::CYAN_400, 1.0);
    let square = VisualNode::rect("title/square", 192.0, 192.0)
        .transform(
            Transform2D::at(canvas.w() * 0.75 - 96.0, canvas.h() * 0.75 - 96.0)
                .rotated(f * -1.5)
                .scaled(ring_scale),
        )
        .opacity(drift(f, &[10.0, 40.0, 60.0], &[0.0, 0.3, 0.0])?)
        .stroke(colors::PURPLE_400, 1.0);

    let scan_pct = drift(f, &[0.0, 60.0], &[0.0, 100.0])?;
    let scan = VisualNode::line(
        "title/scan",
        Point::new(0.0, 0.0),
        Point::new(canvas.w(), 0.0),
    )
    .at(0.0, canvas.h() * scan_pct / 100.0)
    .opacity(0.6)
    .stroke(palette.title_text, 2.0)
    .glow(palette.glow.color, 20.0);

    Ok(VisualNode::group("title").children([grid(ctx)?, heading, sub, ring, square, scan]))
}

fn grid(ctx: FrameCtx) -> ReelResult<VisualNode> {
    let cell_opacity = drift(ctx.f(), &[0.0, 60.0], &[0.0, 0.3])?;
    let cw = ctx.canvas.w() / GRID_COLS as f64;
    let ch = ctx.canvas.h() / GRID_ROWS as f64;
    let cells = (0..GRID_COLS * GRID_ROWS).map(|i| {
        let (col, row) = (i % GRID_COLS, i / GRID_COLS);
        VisualNode::rect(format!("title/grid/cell-{i}"), cw, ch)
            .at((col as f64 + 0.5) * cw, (row as f64 + 0.5) * ch)
            .opacity(cell_opacity)
            .stroke(colors::GRAY_600, 1.0)
    });
    Ok(VisualNode::group("title/grid").opacity(0.1).children(cells))
}

#[cfg(test)]
#[path = "../../tests/unit/components/title.rs"]
mod tests;
