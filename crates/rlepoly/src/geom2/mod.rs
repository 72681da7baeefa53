//! 2D geometry for traced outlines (polygons, affine maps, coordinate mapping).
//!
//! Purpose
//! - Carry the tracer's output (`Polygon`) and the pieces that consume it:
//!   the coordinate mapper, the collinear simplifier and ring closing.
//!
//! Conventions
//! - Points are `Vector2<f64>` as `(x, y)`; in raster index `x` is the column
//!   and `y` the line (pointing down).
//! - No implicit closing vertex; `Polygon::closed_ring` adds one on request.
//!
//! Code cross-refs: `trace::trace_store`, `vectorize`.

mod mapper;
mod types;
mod util;

pub use mapper::CoordinateMapper;
pub use types::{Affine2, Polygon};
pub use util::parallelogram_area;
