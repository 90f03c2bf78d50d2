use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::to_py_err;
use seqtools_core::seq::report::{analyze as analyze_input, SequenceReport as CoreSequenceReport};

#[pyclass(frozen)]
#[derive(Clone)]
pub struct SequenceReport {
    pub(crate) sequence: String,
    pub(crate) gc_content: f64,
    pub(crate) molecular_weight: f64,
    pub(crate) reverse_complement: String,
}

#[pymethods]
impl SequenceReport {
    #[getter]
    fn sequence(&self) -> &str {
        &self.sequence
    }

    #[getter]
    fn gc_content(&self) -> f64 {
        self.gc_content
    }

    #[getter]
    fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }

    #[getter]
    fn reverse_complement(&self) -> &str {
        &self.reverse_complement
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!(
            "SequenceReport(sequence={:?}, gc_content={}, molecular_weight={}, reverse_complement={:?})",
            self.sequence, self.gc_content, self.molecular_weight, self.reverse_complement
        ))
    }
}

impl From<CoreSequenceReport> for SequenceReport {
    fn from(value: CoreSequenceReport) -> Self {
        Self {
            sequence: value.sequence,
            gc_content: value.gc_content,
            molecular_weight: value.molecular_weight,
            reverse_complement: value.reverse_complement,
        }
    }
}

#[pyfunction]
fn analyze(input: &str) -> PyResult<SequenceReport> {
    analyze_input(input).map(SequenceReport::from).map_err(to_py_err)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SequenceReport>()?;
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    Ok(())
}
