//! RLE boundary tracing: exterior contour of one label object.
//!
//! Purpose
//! - Turn the sorted runs of a connected object into the ordered corners of
//!   its exterior outline, in O(corners · log k) without rasterizing.
//!
//! Model
//! - The outline follows pixel cracks clockwise on screen (x right, y down)
//!   with the object on the right, starting at the top-left corner of the
//!   lexicographically smallest run and stopping at the first return there.
//! - Four states (one per heading) and one turn table drive the walk; the
//!   turn at each corner depends only on the two pixels ahead and the chosen
//!   `Connectivity`.
//! - Output vertices sit on pixel edges: `(column ± 0.5, line ± 0.5)`.
//!
//! Not handled: interior rings (holes are absorbed into the exterior ring)
//! and cross-object topology.
//!
//! Code cross-refs: `rle::RunStore` (lookups), `geom2::CoordinateMapper`.

mod cfg;
mod types;
mod walk;

pub use types::{Connectivity, RunEnd, State, TraceCfg, TraceError, Turn};
pub use walk::{default_step_budget, BoundaryTracer};

use nalgebra::Vector2;

use crate::geom2::Polygon;
use crate::rle::RunStore;

#[inline]
fn edge_to_point(v: Vector2<i64>) -> Vector2<f64> {
    Vector2::new(v.x as f64 - 0.5, v.y as f64 - 0.5)
}

/// Exterior outline of `store` in raster-index coordinates. Empty store →
/// empty polygon.
pub fn trace_store(store: &RunStore, cfg: TraceCfg) -> Polygon {
    match BoundaryTracer::new(store, cfg) {
        Some(tracer) => Polygon::new(tracer.trace().into_iter().map(edge_to_point).collect()),
        None => Polygon::default(),
    }
}

/// Like `trace_store`, but gives up after the corner budget.
pub fn try_trace_store(store: &RunStore, cfg: TraceCfg) -> Result<Polygon, TraceError> {
    match BoundaryTracer::new(store, cfg) {
        Some(tracer) => {
            let vertices = tracer.trace_capped()?;
            Ok(Polygon::new(vertices.into_iter().map(edge_to_point).collect()))
        }
        None => Ok(Polygon::default()),
    }
}
