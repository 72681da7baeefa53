use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use rlepoly::prelude::*;
use rlepoly::rle::LabelMapError;
use rlepoly::trace::TraceError;

pub type PyRun = (i64, i64, i64);
pub type PyVertex = (f64, f64);

pub fn runs_from_py(runs: Vec<PyRun>) -> Vec<Run> {
    runs.into_iter()
        .map(|(line, start, length)| Run::new(line, start, length))
        .collect()
}

pub fn runs_to_py(runs: &[Run]) -> Vec<PyRun> {
    runs.iter().map(|r| (r.line, r.start, r.length)).collect()
}

pub fn vertices_to_py(poly: &Polygon) -> Vec<PyVertex> {
    poly.vertices.iter().map(|v| (v.x, v.y)).collect()
}

pub fn map_trace_err(err: TraceError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

pub fn map_label_err(err: LabelMapError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
