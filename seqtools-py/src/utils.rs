use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

use seqtools_core::SeqError;

pub fn to_py_err(err: SeqError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
