use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    composition::registry::{CompositionDescriptor, CompositionProps},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    foundation::math::Fnv1a64,
    render::raster::{FrameRGBA, rasterize_svg},
    scene::node::VisualNode,
    scene::svg::to_svg,
};

/// Evaluate the visual tree of one frame.
///
/// Frames at or past the composition duration are rejected, as are props that belong to another
/// composition.
#[tracing::instrument(skip(desc, props), fields(composition = %desc.id))]
pub fn render_tree(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    frame: FrameIndex,
) -> ReelResult<VisualNode> {
    if frame.0 >= desc.duration_frames {
        return Err(ReelError::evaluation(format!(
            "frame {} is out of range for {} ({} frames)",
            frame.0, desc.id, desc.duration_frames
        )));
    }
    if props.id() != desc.id {
        return Err(ReelError::validation(format!(
            "props for {} cannot render {}",
            props.id(),
            desc.id
        )));
    }
    props.render(desc.stage(), frame)
}

/// Evaluate one frame and serialize it as a standalone SVG document.
pub fn render_svg(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    frame: FrameIndex,
) -> ReelResult<String> {
    let tree = render_tree(desc, props, frame)?;
    Ok(to_svg(&tree, desc.canvas, Some(desc.background)))
}

/// Evaluate and rasterize one frame.
///
/// Returns **premultiplied** RGBA8 pixels.
pub fn render_frame(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    frame: FrameIndex,
) -> ReelResult<FrameRGBA> {
    rasterize_svg(&render_svg(desc, props, frame)?, desc.canvas)
}

/// Render a range of frames (inclusive start, exclusive end) sequentially.
pub fn render_frames(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    range: FrameRange,
) -> ReelResult<Vec<FrameRGBA>> {
    render_frames_with_stats(desc, props, range, &RenderThreading::default())
        .map(|(frames, _)| frames)
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// How a frame range is rasterized.
pub struct RenderThreading {
    /// Rasterize each chunk on a rayon pool.
    pub parallel: bool,
    /// Frames per chunk; 0 is treated as 1.
    pub chunk_size: usize,
    /// Pool size; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Rasterize identical frames once per chunk and clone the pixels.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Counters reported by [`render_frames_with_stats`].
pub struct RenderStats {
    /// Frames returned.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused from an identical earlier frame.
    pub frames_elided: u64,
}

/// Render a range of frames with explicit threading, reporting how much work was skipped.
///
/// Output order and pixels match sequential rendering regardless of `threading`. The whole range
/// is held in memory; use [`render_frames_into`] to stream long ranges.
pub fn render_frames_with_stats(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = render_frames_into(desc, props, range, threading, |_, frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Render a range of frames, handing each one to `sink` in frame order.
///
/// At most one chunk (`threading.chunk_size` frames) is held at a time; a chunk is drained into
/// `sink` before the next one is evaluated. The first error from rendering or from `sink` stops
/// the range.
pub fn render_frames_into<F>(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    range: FrameRange,
    threading: &RenderThreading,
    mut sink: F,
) -> ReelResult<RenderStats>
where
    F: FnMut(FrameIndex, FrameRGBA) -> ReelResult<()>,
{
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > desc.duration_frames {
        return Err(ReelError::validation(format!(
            "render range must be within the {} frames of {}",
            desc.duration_frames, desc.id
        )));
    }

    let mut stats = RenderStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?;
        let (frames, chunk_stats) = render_chunk(desc, props, chunk, threading, pool.as_ref())?;
        for (f, frame) in chunk.frames().zip(frames) {
            sink(f, frame)?;
        }
        stats.frames_total += chunk_stats.frames_total;
        stats.frames_rendered += chunk_stats.frames_rendered;
        stats.frames_elided += chunk_stats.frames_elided;
        chunk_start = chunk_end;
    }

    tracing::debug!(
        composition = %desc.id,
        total = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "rendered frame range"
    );
    Ok(stats)
}

fn render_chunk(
    desc: &CompositionDescriptor,
    props: &CompositionProps,
    range: FrameRange,
    threading: &RenderThreading,
    pool: Option<&rayon::ThreadPool>,
) -> ReelResult<(Vec<FrameRGBA>, RenderStats)> {
    let svgs = range
        .frames()
        .map(|f| render_svg(desc, props, f))
        .collect::<ReelResult<Vec<_>>>()?;

    let (unique_indices, frame_to_unique) = if threading.static_frame_elision {
        dedupe_frames(&svgs)
    } else {
        ((0..svgs.len()).collect(), (0..svgs.len()).collect())
    };

    let rasterize = |idx: &usize| rasterize_svg(&svgs[*idx], desc.canvas);
    let rendered: Vec<ReelResult<FrameRGBA>> = match pool {
        Some(pool) => pool.install(|| {
            unique_indices
                .par_iter()
                .map(rasterize)
                .collect::<Vec<_>>()
        }),
        None => unique_indices.iter().map(rasterize).collect(),
    };
    let unique_frames = rendered.into_iter().collect::<ReelResult<Vec<_>>>()?;

    let out = frame_to_unique
        .iter()
        .map(|&u| unique_frames[u].clone())
        .collect::<Vec<_>>();

    let total = svgs.len() as u64;
    let rendered_count = unique_frames.len() as u64;
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    ))
}

/// Group identical documents: returns the index of each distinct document's first occurrence,
/// and for every document the slot of its distinct group.
///
/// Fingerprints only narrow the search; documents are compared in full before they share a slot.
fn dedupe_frames(svgs: &[String]) -> (Vec<usize>, Vec<usize>) {
    let mut unique_indices = Vec::<usize>::with_capacity(svgs.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(svgs.len());
    let mut by_fingerprint = HashMap::<u64, Vec<usize>>::new();
    for (idx, svg) in svgs.iter().enumerate() {
        let slots = by_fingerprint.entry(fingerprint(svg)).or_default();
        let same = slots
            .iter()
            .copied()
            .find(|&slot| svgs[unique_indices[slot]] == *svg);
        let slot = match same {
            Some(slot) => slot,
            None => {
                unique_indices.push(idx);
                let slot = unique_indices.len() - 1;
                slots.push(slot);
                slot
            }
        };
        frame_to_unique.push(slot);
    }
    (unique_indices, frame_to_unique)
}

fn fingerprint(svg: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(svg.len() as u64);
    h.write_bytes(svg.as_bytes());
    h.finish()
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
