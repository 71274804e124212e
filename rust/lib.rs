//! This is the documentation for buscal: business day calendars and business day conventions.
//!
//! See the [`scheduling`] module for calendars, date specifications and date adjustment.


pub mod json;

pub mod scheduling;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use crate::json::json_py::from_json_py;
    use crate::scheduling::{BusinessCalendar, BusinessDayConvention, PyDateSpecification};

    // JSON
    m.add_function(wrap_pyfunction!(from_json_py, m)?)?;

    // Calendars
    m.add_class::<PyDateSpecification>()?;
    m.add_class::<BusinessCalendar>()?;
    m.add_class::<BusinessDayConvention>()?;

    Ok(())
}
