//! Rendering collaborator: SVG document output and optional rasterization.
//!
//! The SVG writer is plain string formatting; rasterization goes through `usvg` + `resvg`.

pub(crate) mod raster;
pub(crate) mod svg;
