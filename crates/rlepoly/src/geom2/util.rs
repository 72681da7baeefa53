//! Polygon measures, the collinear simplifier and the 2D cross product.

use nalgebra::{Matrix2, Vector2};

use super::types::Polygon;

/// Chord length below which a neighbour pair counts as coincident.
const DEGENERATE_CHORD: f64 = 1e-12;

/// Signed area of the parallelogram spanned by `(a, b)`, i.e. `det [a b]`.
///
/// Positive when `b` lies clockwise of `a` on screen (y down), which is the
/// turn direction of every traced corner.
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    Matrix2::from_columns(&[a, b]).determinant()
}

impl Polygon {
    /// Shoelace area. Positive for the tracer's output in raster index
    /// (clockwise on screen is counter-clockwise in a y-up frame).
    pub fn signed_area(&self) -> f64 {
        0.5 * self.edges().map(|(p, q)| parallelogram_area(p, q)).sum::<f64>()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(p, q)| (q - p).norm()).sum()
    }

    /// Even-odd ray test. Points on the boundary may go either way.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Drop vertices within `tol` of the chord through their kept neighbours,
    /// including across the wrap-around. Spikes (back-tracking vertices) go
    /// too. Polygons that collapse keep at most two vertices.
    pub fn simplify_collinear(&self, tol: f64) -> Polygon {
        let mut out: Vec<Vector2<f64>> = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            out.push(v);
            while out.len() >= 3 {
                let n = out.len();
                if !is_redundant(out[n - 3], out[n - 2], out[n - 1], tol) {
                    break;
                }
                out.remove(n - 2);
            }
        }
        while out.len() >= 3 {
            let n = out.len();
            if is_redundant(out[n - 2], out[n - 1], out[0], tol) {
                out.pop();
            } else if is_redundant(out[n - 1], out[0], out[1], tol) {
                out.remove(0);
            } else {
                break;
            }
        }
        Polygon::new(out)
    }
}

/// Distance of `b` from the line through `a` and `c` is at most `tol`.
fn is_redundant(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, tol: f64) -> bool {
    let chord = c - a;
    let len = chord.norm();
    if len <= DEGENERATE_CHORD {
        return (b - a).norm() <= tol;
    }
    parallelogram_area(chord, b - a).abs() / len <= tol
}
