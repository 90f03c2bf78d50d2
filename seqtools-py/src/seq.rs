use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::to_py_err;
use seqtools_core::seq as ops;

#[pyfunction]
fn gc_content(seq: &str) -> PyResult<f64> {
    ops::gc_content(seq).map_err(to_py_err)
}

#[pyfunction]
fn motif_positions(seq: &str, motif: &str) -> PyResult<Vec<usize>> {
    ops::motif_positions(seq, motif).map_err(to_py_err)
}

#[pyfunction]
fn transcribe(seq: &str) -> String {
    ops::transcribe(seq)
}

#[pyfunction]
fn translate(seq: &str) -> String {
    ops::translate(seq)
}

#[pyfunction]
fn molecular_weight(seq: &str) -> f64 {
    ops::molecular_weight(seq)
}

#[pyfunction]
fn melting_temperature(seq: &str) -> f64 {
    ops::melting_temperature(seq)
}

#[pyfunction]
fn reverse_complement(seq: &str) -> String {
    ops::reverse_complement(seq)
}

#[pyfunction]
fn hamming(seq1: &str, seq2: &str) -> PyResult<usize> {
    ops::hamming(seq1, seq2).map_err(to_py_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gc_content, m)?)?;
    m.add_function(wrap_pyfunction!(motif_positions, m)?)?;
    m.add_function(wrap_pyfunction!(transcribe, m)?)?;
    m.add_function(wrap_pyfunction!(translate, m)?)?;
    m.add_function(wrap_pyfunction!(molecular_weight, m)?)?;
    m.add_function(wrap_pyfunction!(melting_temperature, m)?)?;
    m.add_function(wrap_pyfunction!(reverse_complement, m)?)?;
    m.add_function(wrap_pyfunction!(hamming, m)?)?;
    Ok(())
}
