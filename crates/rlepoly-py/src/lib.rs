//! PyO3 bindings for selected `rlepoly` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: runs are `(line, start, length)`
//!   tuples and vertices come back as `(x, y)` tuples.
//! - Tracing and mapping stay in Rust (`rlepoly` crate).

use pyo3::prelude::*;

mod common;
mod label;
mod trace;

#[pymodule]
fn rlepoly_native(_py: Python, m: &PyModule) -> PyResult<()> {
    trace::register(m)?;
    label::register(m)?;
    Ok(())
}
