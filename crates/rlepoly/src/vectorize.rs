//! Entry points: one label object in, one polygon out.
//!
//! Each call builds a fresh `RunStore` and tracer, so nothing is shared
//! between objects and calls may run on separate threads.

use nalgebra::Vector2;

use crate::geom2::{CoordinateMapper, Polygon};
use crate::rle::LabelObject;
use crate::trace::{trace_store, try_trace_store, TraceCfg, TraceError};

/// Vectorization settings shared by all objects of one image.
#[derive(Clone, Copy, Debug)]
pub struct VectorizeCfg {
    pub trace: TraceCfg,
    pub origin: Vector2<f64>,
    pub spacing: Vector2<f64>,
    /// Collinear tolerance in output units; `None` keeps every traced corner.
    pub simplify_tol: Option<f64>,
}

impl Default for VectorizeCfg {
    fn default() -> Self {
        Self {
            trace: TraceCfg::default(),
            origin: Vector2::zeros(),
            spacing: Vector2::new(1.0, 1.0),
            simplify_tol: None,
        }
    }
}

impl VectorizeCfg {
    pub fn mapper_for(&self, object: &LabelObject) -> CoordinateMapper {
        CoordinateMapper::new(self.origin, self.spacing).with_start_index(object.start_index)
    }

    fn finish(&self, raw: Polygon, object: &LabelObject) -> Polygon {
        let mapped = self.mapper_for(object).apply_polygon(&raw);
        match self.simplify_tol {
            Some(tol) => mapped.simplify_collinear(tol),
            None => mapped,
        }
    }
}

/// Exterior outline with default settings (8-connected, identity mapping
/// plus the object's start index). No runs → empty polygon.
pub fn vectorize(object: &LabelObject) -> Polygon {
    vectorize_with(object, &VectorizeCfg::default())
}

/// Exterior outline, uncapped. Runs must form one connected object.
pub fn vectorize_with(object: &LabelObject, cfg: &VectorizeCfg) -> Polygon {
    let store = object.store();
    let raw = trace_store(&store, cfg.trace);
    cfg.finish(raw, object)
}

/// Exterior outline with a corner budget; malformed runs surface as
/// `TraceError::LineGap` or `TraceError::StepLimitExceeded` instead of
/// looping or allocating the gap.
pub fn try_vectorize(object: &LabelObject, cfg: &VectorizeCfg) -> Result<Polygon, TraceError> {
    let store = object.store();
    let raw = try_trace_store(&store, cfg.trace)?;
    Ok(cfg.finish(raw, object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rle::Run;
    use nalgebra::vector;

    #[test]
    fn empty_object_gives_empty_polygon() {
        let obj = LabelObject::default();
        assert!(vectorize(&obj).is_empty());
        assert!(try_vectorize(&obj, &VectorizeCfg::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn start_index_and_affine_are_applied() {
        let obj = LabelObject::new(vec![Run::new(0, 0, 1)]).with_start_index(10, 20);
        let cfg = VectorizeCfg {
            origin: vector![1000.0, 5000.0],
            spacing: vector![10.0, -10.0],
            ..VectorizeCfg::default()
        };
        let p = vectorize_with(&obj, &cfg);
        assert_eq!(p.len(), 4);
        // first vertex: index (-0.5, -0.5) + (10, 20) = (9.5, 19.5)
        assert!((p.vertices[0] - vector![1095.0, 4805.0]).norm() < 1e-9);
        assert!((p.area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn far_apart_lines_come_back_as_error() {
        let obj = LabelObject::new(vec![Run::new(0, 0, 1), Run::new(1 << 61, 0, 1)]);
        let err = try_vectorize(&obj, &VectorizeCfg::default()).unwrap_err();
        assert_eq!(
            err,
            TraceError::LineGap {
                lines: (1 << 61) + 1,
                runs: 2
            }
        );
    }

    #[test]
    fn simplify_tolerance_is_applied_after_mapping() {
        // Staircase of 1-pixel steps: every corner is kept by the tracer.
        let obj = LabelObject::new(vec![Run::new(0, 0, 1), Run::new(1, 0, 2), Run::new(2, 0, 3)]);
        let raw = vectorize(&obj);
        assert_eq!(raw.len(), 8);
        let cfg = VectorizeCfg {
            simplify_tol: Some(0.75),
            ..VectorizeCfg::default()
        };
        let simplified = vectorize_with(&obj, &cfg);
        assert!(simplified.len() < raw.len());
    }
}
