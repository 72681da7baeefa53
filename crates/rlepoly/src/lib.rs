//! Exterior polygons of run-length encoded label objects.
//!
//! Pipeline: runs of one object → `rle::RunStore` → `trace::BoundaryTracer`
//! (raster-index corners) → `geom2::CoordinateMapper` → optional collinear
//! simplification. `vectorize` runs the whole chain for one object.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` collects the re-exports callers are expected to use.

pub mod api;
pub mod geom2;
pub mod rle;
pub mod trace;
mod vectorize;

pub use vectorize::{try_vectorize, vectorize, vectorize_with, VectorizeCfg};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{CoordinateMapper, Polygon};
    pub use crate::rle::{LabelObject, Run, RunStore};
    pub use crate::trace::{Connectivity, TraceCfg};
    pub use crate::vectorize::{try_vectorize, vectorize, vectorize_with, VectorizeCfg};
    pub use nalgebra::Vector2 as Vec2;
}
