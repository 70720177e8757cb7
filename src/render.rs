//! Preview pipeline: frame bounds checking, SVG serialization, rasterization and range rendering.

pub(crate) mod pipeline;
pub(crate) mod raster;
