//! Wrapper modules to export to Python using pyo3 bindings.

mod calendar;
mod convention;
mod specification;

use crate::scheduling::CalendarError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub(crate) use crate::scheduling::py::specification::PyDateSpecification;

impl From<CalendarError> for PyErr {
    fn from(err: CalendarError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
