//! Run-length encoded label objects: storage, lookups, extraction.
//!
//! Purpose
//! - Hold the pixel runs of one object per raster line, sorted, so the
//!   boundary tracer can answer "what lies on the next line?" in O(log k).
//!
//! Conventions
//! - Runs address pixel centers `(column, line)`; lookups that talk about
//!   run ends use the integer pixel-edge lattice (`Edge`).
//! - A store is built once per object and never shared across objects.
//!
//! Code cross-refs: `trace::BoundaryTracer`, `geom2::CoordinateMapper`.

mod encode;
mod lookup;
pub mod rand;
mod types;

pub use encode::{encode_label_map, encode_mask, LabelMapError};
pub use types::{Edge, LabelObject, Run, RunStore};
