//! PyO3 bindings for selected `orca` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; conversions use simple tuples so
//!   NumPy wrappers can live on the Python side.
//! - All planning stays in Rust (`orca` crate). We only bind the pieces
//!   that are ergonomically valuable for Python callers: single ORCA
//!   lines, one-shot velocity planning, and a batch scenario run.

use pyo3::prelude::*;

mod common;
mod plan;
mod run;

#[pymodule]
fn orca_native(_py: Python, m: &PyModule) -> PyResult<()> {
    plan::register(m)?;
    run::register(m)?;
    Ok(())
}
