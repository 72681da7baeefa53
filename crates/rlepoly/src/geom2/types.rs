//! Basic 2D value types: affine maps and polygons.
//!
//! - `Affine2`: `x ↦ M x + t`; the coordinate mapper is a diagonal instance.
//! - `Polygon`: ordered vertex loop without a closing duplicate.

use nalgebra::{Matrix2, Vector2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    /// False when the map mirrors (e.g. a negative y spacing), which turns a
    /// clockwise outline counter-clockwise.
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}

/// Ordered vertex loop; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vector2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed edges `(v_i, v_{i+1})`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Push every vertex through `f`. Vertex order is kept.
    pub fn map(&self, f: &Affine2) -> Polygon {
        Polygon::new(self.vertices.iter().map(|&v| f.apply(v)).collect())
    }

    /// Copy with the first vertex appended (ring-closing step).
    pub fn closed_ring(&self) -> Vec<Vector2<f64>> {
        let mut ring = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            ring.push(first);
        }
        ring
    }
}
