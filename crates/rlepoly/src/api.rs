//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Convenience surface for callers (CLI, bindings, benches). Breaking
//!   changes are allowed.
//! - Prefer these re-exports for clarity and consistency across callers.

// Runs and stores
pub use crate::rle::{encode_label_map, encode_mask, LabelMapError, LabelObject, Run, RunStore};
// Tracing
pub use crate::trace::{trace_store, try_trace_store, Connectivity, TraceCfg, TraceError};
// Geometry
pub use crate::geom2::{parallelogram_area, Affine2, CoordinateMapper, Polygon};
// Entry points
pub use crate::vectorize::{try_vectorize, vectorize, vectorize_with, VectorizeCfg};
