//! Wrapper module to export to Python using pyo3 bindings.

use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::scheduling::DateSpecification;
use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Python wrapper for DateSpecification, whose recursive variants cannot be exposed directly.
#[pyclass(module = "buscal.rs", name = "DateSpecification", eq)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct PyDateSpecification {
    pub(crate) inner: DateSpecification,
}

impl From<DateSpecification> for PyDateSpecification {
    fn from(value: DateSpecification) -> Self {
        PyDateSpecification { inner: value }
    }
}

impl From<PyDateSpecification> for DateSpecification {
    fn from(value: PyDateSpecification) -> Self {
        value.inner
    }
}

#[pymethods]
impl PyDateSpecification {
    /// Create a weekend rule.
    ///
    /// Parameters
    /// ----------
    /// week_mask: list[int]
    ///     List of integers defining the weekend, [5, 6] for Saturday and Sunday.
    ///
    /// Returns
    /// -------
    /// DateSpecification
    #[staticmethod]
    fn weekend(week_mask: Vec<u8>) -> PyResult<Self> {
        Ok(DateSpecification::try_weekend_from_mask(week_mask)?.into())
    }

    /// Create a holiday rule.
    ///
    /// Parameters
    /// ----------
    /// dates: list[date]
    ///     List of dates as the specific holiday days.
    ///
    /// Returns
    /// -------
    /// DateSpecification
    #[staticmethod]
    fn holidays(dates: Vec<NaiveDate>) -> Self {
        DateSpecification::holidays(dates).into()
    }

    /// Return whether the `date` satisfies the rule.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     Date to test
    ///
    /// Returns
    /// -------
    /// bool
    #[pyo3(name = "is_satisfied_by")]
    fn is_satisfied_by_py(&self, date: NaiveDate) -> bool {
        self.inner.is_satisfied_by(&date)
    }

    fn __and__(&self, other: PyDateSpecification) -> Self {
        (self.inner.clone() & other.inner).into()
    }

    fn __or__(&self, other: PyDateSpecification) -> Self {
        (self.inner.clone() | other.inner).into()
    }

    fn __invert__(&self) -> Self {
        (!self.inner.clone()).into()
    }

    // JSON
    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::DateSpecification(self.clone()).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `DateSpecification` to JSON.",
            )),
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("<buscal.DateSpecification {} at {:p}>", self.inner, self)
    }
}
