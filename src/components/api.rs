//! API documentation cards: staggered endpoint cards with a progress edge and a highlight sweep,
//! plus a client-to-API data-flow strip.

use crate::{
    components::{FrameCtx, drift, ramp},
    foundation::core::{FrameIndex, Rgba8},
    foundation::error::ReelResult,
    scene::node::{Font, TextAnchor, VisualNode},
    theme::colors,
};

const PAGE_PADDING: f64 = 48.0;
const MAX_GRID_WIDTH: f64 = 1152.0;
const GRID_GAP: f64 = 32.0;
const CARD_PADDING: f64 = 24.0;
const CARD_HEIGHT: f64 = 164.0;
const CARD_DELAY: f64 = 30.0;
const FLOW_DOTS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One documented endpoint.
pub struct ApiEndpoint {
    /// HTTP verb, e.g. `GET`.
    pub method: String,
    /// Route path.
    pub path: String,
    /// One-line description.
    pub description: String,
}

impl ApiEndpoint {
    /// Build an endpoint.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            description: description.into(),
        }
    }
}

/// Badge color of an HTTP verb; unknown verbs are gray.
pub fn method_color(method: &str) -> Rgba8 {
    match method {
        "GET" => colors::GREEN_400,
        "POST" => colors::BLUE_400,
        "PUT" => colors::YELLOW_400,
        "DELETE" => colors::RED_400,
        _ => colors::GRAY_400,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Animation state of one endpoint card.
pub struct CardState {
    /// Card opacity.
    pub opacity: f64,
    /// Downward offset in pixels.
    pub rise: f64,
    /// Left-edge bar height in percent of the card.
    pub progress_pct: f64,
    /// Highlight sweep offset in percent of the card width.
    pub sweep_pct: f64,
}

/// State of card `index` at `frame`; each card starts 30 frames after the previous one.
pub fn card_state(frame: FrameIndex, index: usize) -> ReelResult<CardState> {
    let f = frame.as_f64();
    let d = CARD_DELAY * index as f64;
    Ok(CardState {
        opacity: ramp(f, &[d, d + 20.0], &[0.0, 1.0])?,
        rise: ramp(f, &[d, d + 30.0], &[50.0, 0.0])?,
        progress_pct: ramp(f, &[d + 20.0, d + 40.0], &[0.0, 100.0])?,
        sweep_pct: ramp(f, &[d + 40.0, d + 80.0], &[-100.0, 100.0])?,
    })
}

/// Render the API documentation scene at `ctx.frame`.
pub fn api_visualization(
    ctx: FrameCtx,
    api_name: &str,
    endpoints: &[ApiEndpoint],
) -> ReelResult<VisualNode> {
    let f = ctx.f();
    let canvas = ctx.canvas;
    let cx = canvas.w() / 2.0;

    let header = VisualNode::group("api/header").children([
        VisualNode::text("api/header/name", api_name, Font::sans(60.0).bold())
            .at(cx, PAGE_PADDING + 51.0)
            .fill(colors::NEON_BLUE),
        VisualNode::text(
            "api/header/caption",
            "RESTful API Documentation",
            Font::sans(24.0),
        )
        .at(cx, PAGE_PADDING + 76.0 + 20.0)
        .fill(colors::GRAY_400),
    ]);

    let grid_width = (canvas.w() - 2.0 * PAGE_PADDING).clamp(0.0, MAX_GRID_WIDTH);
    let grid_left = cx - grid_width / 2.0;
    let grid_top = PAGE_PADDING + 108.0 + 48.0;
    let card_width = (grid_width - GRID_GAP) / 2.0;
    let (card_left, card_top) = (-card_width / 2.0, -CARD_HEIGHT / 2.0);

    let mut cards = Vec::with_capacity(endpoints.len());
    for (i, endpoint) in endpoints.iter().enumerate() {
        let state = card_state(ctx.frame, i)?;
        let (col, row) = ((i % 2) as f64, (i / 2) as f64);
        let color = method_color(&endpoint.method);
        let badge_font = Font::mono(14.0).anchored(TextAnchor::Middle);
        let badge_width = badge_font.approx_width(&endpoint.method) + 32.0;
        let bar_height = state.progress_pct / 100.0 * CARD_HEIGHT;

        cards.push(
            VisualNode::group(format!("api/card-{i}"))
                .at(
                    grid_left + col * (card_width + GRID_GAP) + card_width / 2.0,
                    grid_top + row * (CARD_HEIGHT + GRID_GAP) + CARD_HEIGHT / 2.0 + state.rise,
                )
                .opacity(state.opacity)
                .clip(card_width, CARD_HEIGHT)
                .children([
                    VisualNode::rounded_rect(
                        format!("api/card-{i}/panel"),
                        card_width,
                        CARD_HEIGHT,
                        8.0,
                    )
                    .fill(colors::TECH_SURFACE)
                    .stroke(colors::GRAY_700, 1.0),
                    VisualNode::group(format!("api/card-{i}/badge"))
                        .at(
                            card_left + CARD_PADDING + badge_width / 2.0,
                            card_top + CARD_PADDING + 18.0,
                        )
                        .children([
                            VisualNode::rounded_rect(
                                format!("api/card-{i}/badge/pill"),
                                badge_width,
                                36.0,
                                18.0,
                            )
                            .stroke(color, 1.0),
                            VisualNode::text(
                                format!("api/card-{i}/badge/method"),
                                endpoint.method.as_str(),
                                badge_font,
                            )
                            .at(0.0, 5.0)
                            .fill(color),
                        ]),
                    VisualNode::text(
                        format!("api/card-{i}/path"),
                        endpoint.path.as_str(),
                        Font::mono(20.0),
                    )
                    .at(card_left + CARD_PADDING, card_top + CARD_PADDING + 72.0)
                    .fill(colors::WHITE),
                    VisualNode::text(
                        format!("api/card-{i}/description"),
                        endpoint.description.as_str(),
                        Font::sans(16.0).anchored(TextAnchor::Start),
                    )
                    .at(card_left + CARD_PADDING, card_top + CARD_PADDING + 104.0)
                    .fill(colors::GRAY_400),
                    VisualNode::rect(format!("api/card-{i}/progress"), 4.0, bar_height)
                        .at(card_left + 2.0, card_top + bar_height / 2.0)
                        .fill(colors::NEON_BLUE)
                        .glow(colors::NEON_BLUE, 10.0),
                    VisualNode::rect(
                        format!("api/card-{i}/sweep"),
                        card_width / 3.0,
                        CARD_HEIGHT,
                    )
                    .at(state.sweep_pct / 100.0 * card_width, 0.0)
                    .fill(colors::CYAN_400.with_alpha(26)),
                ]),
        );
    }

    let flow_y = canvas.h() - PAGE_PADDING - 40.0;
    let endpoint_node = |id: &str, label: &str, x: f64, color: Rgba8| {
        VisualNode::circle(format!("api/flow/{id}"), 32.0)
            .at(x, flow_y)
            .fill(color)
            .glow(colors::NEON_BLUE, 20.0)
            .child(
                VisualNode::text(format!("api/flow/{id}/label"), label, Font::sans(14.0).bold())
                    .at(0.0, 5.0)
                    .fill(colors::WHITE),
            )
    };
    let mut flow = VisualNode::group("api/flow").child(endpoint_node(
        "client",
        "CLIENT",
        cx - 100.0,
        colors::NEON_BLUE,
    ));
    for j in 0..FLOW_DOTS {
        let start = 5.0 * j as f64;
        flow.children.push(
            VisualNode::circle(format!("api/flow/dot-{j}"), 4.0)
                .at(cx - 32.0 + 16.0 * j as f64, flow_y)
                .opacity(drift(f, &[start, start + 30.0], &[0.0, 1.0])?)
                .fill(colors::NEON_GREEN),
        );
    }
    flow.children
        .push(endpoint_node("api", "API", cx + 100.0, colors::NEON_PURPLE));

    Ok(VisualNode::group("api")
        .child(header)
        .children(cards)
        .child(flow))
}

#[cfg(test)]
#[path = "../../tests/unit/components/api.rs"]
mod tests;
