//! Label-image bindings.

use std::collections::BTreeMap;

use crate::common::{map_label_err, runs_to_py, PyRun};
use pyo3::prelude::*;
use rlepoly::rle::encode_label_map;

/// Runs per label of a row-major label image; `background` is skipped.
#[pyfunction]
#[pyo3(signature = (labels, width, height, background = 0))]
pub fn label_map_runs(
    labels: Vec<u32>,
    width: usize,
    height: usize,
    background: u32,
) -> PyResult<BTreeMap<u32, Vec<PyRun>>> {
    let objects = encode_label_map(&labels, width, height, background).map_err(map_label_err)?;
    Ok(objects
        .into_iter()
        .map(|(label, object)| (label, runs_to_py(&object.runs)))
        .collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(label_map_runs, m)?)?;
    Ok(())
}
