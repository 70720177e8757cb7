//! Terminal session: commands type out in fixed 40-frame slots, each followed by its output line,
//! then a blinking prompt and three system-stat cards.

use crate::{
    components::{FrameCtx, blink, ramp},
    foundation::core::FrameIndex,
    foundation::error::ReelResult,
    foundation::math::{char_prefix, revealed_count},
    scene::node::{Font, TextAnchor, VisualNode},
    theme::colors,
};

/// Frames between the starts of consecutive commands.
pub const SLOT_FRAMES: u64 = 40;
/// Frames spent typing one command, whatever its length.
pub const TYPING_FRAMES: u64 = 30;
const OUTPUT_FADE_FRAMES: f64 = 10.0;

const PROMPT: &str = "user@techcorp:~$ ";
const TITLE: &str = "terminal \u{2014} bash \u{2014} 80\u{d7}24";
const PAGE_PADDING: f64 = 48.0;
const MAX_WIDTH: f64 = 1024.0;
const HEADER_HEIGHT: f64 = 44.0;
const CONTENT_PADDING: f64 = 24.0;
const MIN_CONTENT_HEIGHT: f64 = 384.0;
const TEXT_SIZE: f64 = 16.0;
const LINE_HEIGHT: f64 = 24.0;
const STAT_HEIGHT: f64 = 88.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Line printed once a command finishes typing.
pub struct TerminalOutput {
    /// Output text.
    pub text: String,
    /// Optional second, dimmer line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Bold success styling.
    #[serde(default)]
    pub highlight: bool,
}

impl TerminalOutput {
    /// Regular output line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: None,
            highlight: false,
        }
    }

    /// Highlighted success line with a detail line underneath.
    pub fn success(text: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: Some(detail.into()),
            highlight: true,
        }
    }
}

/// Canned outputs of the default deployment session, one per command slot.
pub fn default_outputs() -> Vec<TerminalOutput> {
    vec![
        TerminalOutput::plain("\u{2713} Dependencies installed successfully"),
        TerminalOutput::plain("\u{2713} Build completed in 2.3s"),
        TerminalOutput::plain("\u{2713} Docker image built: techapp:latest"),
        TerminalOutput::plain("\u{2713} Deployed to Kubernetes cluster"),
        TerminalOutput::success(
            "Deployment successful! \u{1F680}",
            "Application available at: https://app.techcorp.com",
        ),
    ]
}

#[derive(Clone, Debug, PartialEq)]
/// Typing state of one visible command.
pub struct CommandState {
    /// Position in the command list.
    pub index: usize,
    /// Prefix typed so far.
    pub typed: String,
    /// Typing progress in `[0, 1]`.
    pub progress: f64,
    /// Output opacity once typing is complete, `None` while typing.
    pub output_opacity: Option<f64>,
}

impl CommandState {
    /// Whether the typing caret is shown.
    pub fn is_typing(&self) -> bool {
        self.progress < 1.0
    }
}

/// States of every command that has started by `frame`, in order.
pub fn command_states(frame: FrameIndex, commands: &[String]) -> ReelResult<Vec<CommandState>> {
    let f = frame.as_f64();
    let mut states = Vec::new();
    for (i, command) in commands.iter().enumerate() {
        let start_frame = i as u64 * SLOT_FRAMES;
        if frame.0 < start_frame {
            break;
        }
        let start = start_frame as f64;
        let end = start + TYPING_FRAMES as f64;
        let progress = ramp(f, &[start, end], &[0.0, 1.0])?;
        let shown = revealed_count(command.chars().count(), progress);
        let output_opacity = if progress >= 1.0 {
            Some(ramp(f, &[end, end + OUTPUT_FADE_FRAMES], &[0.0, 1.0])?)
        } else {
            None
        };
        states.push(CommandState {
            index: i,
            typed: char_prefix(command, shown).to_string(),
            progress,
            output_opacity,
        });
    }
    Ok(states)
}

/// Render the terminal session at `ctx.frame`. `outputs[i]` is printed after `commands[i]`.
pub fn terminal(
    ctx: FrameCtx,
    commands: &[String],
    outputs: &[TerminalOutput],
) -> ReelResult<VisualNode> {
    let f = ctx.f();
    let width = (ctx.canvas.w() - 2.0 * PAGE_PADDING).clamp(0.0, MAX_WIDTH);
    let left = (ctx.canvas.w() - width) / 2.0;
    let top = PAGE_PADDING;
    let content_top = top + HEADER_HEIGHT;
    let font = Font::mono(TEXT_SIZE);
    let baseline = TEXT_SIZE + 1.0;
    let dollar = font.approx_width("$ ");

    let mut content = Vec::new();
    let mut y = content_top + CONTENT_PADDING;
    content.push(
        VisualNode::text("terminal/prompt", PROMPT, font)
            .at(left + CONTENT_PADDING, y + baseline)
            .fill(colors::PURPLE_400),
    );
    y += LINE_HEIGHT + 8.0;

    for state in command_states(ctx.frame, commands)? {
        let i = state.index;
        let mut block = VisualNode::group(format!("terminal/cmd-{i}"))
            .at(left + CONTENT_PADDING, y)
            .children([
                VisualNode::text(format!("terminal/cmd-{i}/dollar"), "$ ", font)
                    .at(0.0, baseline)
                    .fill(colors::PURPLE_400),
                VisualNode::text(format!("terminal/cmd-{i}/typed"), state.typed.as_str(), font)
                    .at(dollar, baseline)
                    .fill(colors::GREEN_400),
            ]);
        if state.is_typing() {
            let x = dollar + font.approx_width(&state.typed) + font.approx_width("_") / 2.0;
            block.children.push(
                VisualNode::group(format!("terminal/cmd-{i}/caret"))
                    .at(x, LINE_HEIGHT / 2.0)
                    .children([
                        VisualNode::rect(
                            format!("terminal/cmd-{i}/caret/block"),
                            font.approx_width("_"),
                            LINE_HEIGHT - 4.0,
                        )
                        .fill(colors::GREEN_400),
                        VisualNode::text(
                            format!("terminal/cmd-{i}/caret/glyph"),
                            "_",
                            font.anchored(TextAnchor::Middle),
                        )
                        .at(0.0, 5.0)
                        .fill(colors::BLACK),
                    ]),
            );
        }
        let mut block_height = LINE_HEIGHT;
        if let (Some(opacity), Some(output)) = (state.output_opacity, outputs.get(i)) {
            let (text_font, text_color) = if output.highlight {
                (font.bold(), colors::GREEN_400)
            } else {
                (font, colors::GRAY_300)
            };
            let mut out = VisualNode::group(format!("terminal/cmd-{i}/output"))
                .at(8.0, LINE_HEIGHT + 4.0)
                .opacity(opacity)
                .child(
                    VisualNode::text(
                        format!("terminal/cmd-{i}/output/text"),
                        output.text.as_str(),
                        text_font,
                    )
                    .at(0.0, baseline)
                    .fill(text_color),
                );
            block_height += 4.0 + LINE_HEIGHT;
            if let Some(detail) = &output.detail {
                out.children.push(
                    VisualNode::text(
                        format!("terminal/cmd-{i}/output/detail"),
                        detail.as_str(),
                        Font::mono(14.0),
                    )
                    .at(0.0, LINE_HEIGHT + 4.0 + 15.0)
                    .fill(colors::GRAY_400),
                );
                block_height += 4.0 + 20.0;
            }
            block.children.push(out);
        }
        content.push(block);
        y += block_height + 16.0;
    }

    content.push(
        VisualNode::group("terminal/cursor")
            .at(left + CONTENT_PADDING, y)
            .children([
                VisualNode::text("terminal/cursor/dollar", "$ ", font)
                    .at(0.0, baseline)
                    .fill(colors::PURPLE_400),
                VisualNode::rect("terminal/cursor/block", 8.0, 20.0)
                    .at(dollar + 4.0, LINE_HEIGHT / 2.0)
                    .opacity(blink(f)?)
                    .fill(colors::GREEN_400),
            ]),
    );
    y += LINE_HEIGHT;

    let content_height = (y + CONTENT_PADDING - content_top).max(MIN_CONTENT_HEIGHT);
    let window_height = HEADER_HEIGHT + content_height;
    let cx = left + width / 2.0;
    let window = VisualNode::rounded_rect("terminal/window", width, window_height, 8.0)
        .at(cx, top + window_height / 2.0)
        .fill(colors::BLACK)
        .stroke(colors::GRAY_600, 1.0)
        .glow(colors::BLACK.with_alpha(128), 50.0);
    let dots = [colors::RED_500, colors::YELLOW_500, colors::GREEN_500]
        .into_iter()
        .enumerate()
        .map(|(i, color)| {
            VisualNode::circle(format!("terminal/header/dot-{i}"), 6.0)
                .at(left + 22.0 + 20.0 * i as f64, top + HEADER_HEIGHT / 2.0)
                .fill(color)
        });
    let header = VisualNode::group("terminal/header")
        .child(
            VisualNode::rounded_rect("terminal/header/bar", width, HEADER_HEIGHT, 8.0)
                .at(cx, top + HEADER_HEIGHT / 2.0)
                .fill(colors::GRAY_800),
        )
        .children(dots)
        .child(
            VisualNode::text(
                "terminal/header/title",
                TITLE,
                Font::sans(14.0).anchored(TextAnchor::End),
            )
            .at(left + width - 16.0, top + HEADER_HEIGHT / 2.0 + 5.0)
            .fill(colors::GRAY_400),
        );

    let stats_top = top + window_height + 32.0;
    let card_width = (width - 2.0 * CONTENT_PADDING) / 3.0;
    let stats = [
        ("CPU Usage", "23%", colors::GREEN_400),
        ("Memory", "4.2/16 GB", colors::BLUE_400),
        ("Network", "1.2 MB/s", colors::PURPLE_400),
    ];
    let mut cards = Vec::with_capacity(stats.len());
    for (i, (label, value, color)) in stats.into_iter().enumerate() {
        let delay = 100.0 + 10.0 * i as f64;
        cards.push(
            VisualNode::group(format!("terminal/stat-{i}"))
                .at(
                    left + (card_width + CONTENT_PADDING) * i as f64 + card_width / 2.0,
                    stats_top + STAT_HEIGHT / 2.0,
                )
                .opacity(ramp(f, &[delay, delay + 20.0], &[0.0, 1.0])?)
                .children([
                    VisualNode::rounded_rect(
                        format!("terminal/stat-{i}/card"),
                        card_width,
                        STAT_HEIGHT,
                        8.0,
                    )
                    .fill(colors::TECH_SURFACE)
                    .stroke(colors::GRAY_700, 1.0),
                    VisualNode::text(
                        format!("terminal/stat-{i}/value"),
                        value,
                        Font::sans(24.0).bold(),
                    )
                    .at(0.0, -2.0)
                    .fill(color),
                    VisualNode::text(format!("terminal/stat-{i}/label"), label, Font::sans(14.0))
                        .at(0.0, 24.0)
                        .fill(colors::GRAY_400),
                ]),
        );
    }

    Ok(VisualNode::group("terminal")
        .children([window, header])
        .children(content)
        .children(cards))
}

#[cfg(test)]
#[path = "../../tests/unit/components/terminal.rs"]
mod tests;
