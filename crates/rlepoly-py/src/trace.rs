//! Tracing bindings.

use crate::common::{map_trace_err, runs_from_py, vertices_to_py, PyRun, PyVertex};
use nalgebra::Vector2;
use pyo3::prelude::*;
use rlepoly::prelude::*;

/// Exterior outline of one object in output coordinates.
///
/// Raises `RuntimeError` when the runs do not close within the corner budget.
#[pyfunction]
#[pyo3(signature = (runs, origin = (0.0, 0.0), spacing = (1.0, 1.0), start_index = (0, 0), eight_connected = true, simplify = None))]
pub fn vectorize_runs(
    runs: Vec<PyRun>,
    origin: (f64, f64),
    spacing: (f64, f64),
    start_index: (i64, i64),
    eight_connected: bool,
    simplify: Option<f64>,
) -> PyResult<Vec<PyVertex>> {
    let object = LabelObject::new(runs_from_py(runs)).with_start_index(start_index.0, start_index.1);
    let cfg = VectorizeCfg {
        trace: TraceCfg {
            connectivity: if eight_connected {
                Connectivity::Eight
            } else {
                Connectivity::Four
            },
            max_steps: None,
        },
        origin: Vector2::new(origin.0, origin.1),
        spacing: Vector2::new(spacing.0, spacing.1),
        simplify_tol: simplify,
    };
    let poly = try_vectorize(&object, &cfg).map_err(map_trace_err)?;
    Ok(vertices_to_py(&poly))
}

/// Shoelace area of a vertex ring (positive for traced outlines).
#[pyfunction]
pub fn polygon_signed_area(vertices: Vec<PyVertex>) -> f64 {
    Polygon::new(vertices.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()).signed_area()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(vectorize_runs, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_signed_area, m)?)?;
    Ok(())
}
