//! Raster index → output coordinates.
//!
//! `point = origin + spacing ⊙ (index + start_index)`, component-wise, with
//! vertices as `(x = column, y = line)`. This is the diagonal affine map
//! `M = diag(spacing)`, `t = origin + spacing ⊙ start_index`.

use nalgebra::{Matrix2, Vector2};

use super::types::{Affine2, Polygon};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub origin: Vector2<f64>,
    pub spacing: Vector2<f64>,
    /// Top-left raster index `(column, line)` of the region the vertices are
    /// expressed in.
    pub start_index: Vector2<i64>,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self {
            origin: Vector2::zeros(),
            spacing: Vector2::new(1.0, 1.0),
            start_index: Vector2::zeros(),
        }
    }
}

impl CoordinateMapper {
    pub fn new(origin: Vector2<f64>, spacing: Vector2<f64>) -> Self {
        Self {
            origin,
            spacing,
            start_index: Vector2::zeros(),
        }
    }

    pub fn with_start_index(mut self, start_index: Vector2<i64>) -> Self {
        self.start_index = start_index;
        self
    }

    #[inline]
    fn start_offset(&self) -> Vector2<f64> {
        Vector2::new(self.start_index.x as f64, self.start_index.y as f64)
    }

    #[inline]
    pub fn apply(&self, index: Vector2<f64>) -> Vector2<f64> {
        self.origin + self.spacing.component_mul(&(index + self.start_offset()))
    }

    /// Map every vertex; order is kept even when the map mirrors.
    pub fn apply_polygon(&self, poly: &Polygon) -> Polygon {
        poly.map(&self.to_affine())
    }

    pub fn to_affine(&self) -> Affine2 {
        Affine2 {
            m: Matrix2::from_diagonal(&self.spacing),
            t: self.origin + self.spacing.component_mul(&self.start_offset()),
        }
    }

    /// Inverse mapping back to (fractional) raster index; `None` when a
    /// spacing component is zero.
    pub fn to_index(&self, point: Vector2<f64>) -> Option<Vector2<f64>> {
        self.to_affine().inverse().map(|inv| inv.apply(point))
    }
}
