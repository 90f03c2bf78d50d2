use pyo3::prelude::*;

mod report;
mod seq;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    seq::register(m)?;
    report::register(m)?;
    Ok(())
}
