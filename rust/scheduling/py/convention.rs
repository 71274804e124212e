//! Wrapper module to export to Python using pyo3 bindings.

use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::scheduling::{Adjustment, BusinessCalendar, BusinessDayConvention};
use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pymethods]
impl BusinessDayConvention {
    // Pickling
    #[new]
    fn new_py(variant: u8) -> PyResult<BusinessDayConvention> {
        match variant {
            0_u8 => Ok(BusinessDayConvention::Unadjusted),
            1_u8 => Ok(BusinessDayConvention::Following),
            2_u8 => Ok(BusinessDayConvention::Preceding),
            3_u8 => Ok(BusinessDayConvention::ModifiedFollowing),
            4_u8 => Ok(BusinessDayConvention::ModifiedPreceding),
            5_u8 => Ok(BusinessDayConvention::Nearest),
            6_u8 => Ok(BusinessDayConvention::HalfMonthModifiedFollowing),
            _ => Err(PyValueError::new_err(
                "unreachable code on BusinessDayConvention pickle.",
            )),
        }
    }

    fn __getnewargs__(&self) -> PyResult<(u8,)> {
        Ok((*self as u8,))
    }

    /// Create a convention from its string code, e.g. "MF".
    ///
    /// Parameters
    /// ----------
    /// name: str
    ///     The convention code.
    ///
    /// Returns
    /// -------
    /// BusinessDayConvention
    #[staticmethod]
    #[pyo3(name = "from_str")]
    fn from_str_py(name: &str) -> PyResult<Self> {
        Ok(name.parse::<BusinessDayConvention>()?)
    }

    /// Return a `date` under the date adjustment rule.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     Date to adjust.
    /// calendar: BusinessCalendar
    ///     The calendar to assist with date adjustment.
    ///
    /// Returns
    /// -------
    /// date
    #[pyo3(name = "adjust")]
    fn adjust_py(&self, date: NaiveDate, calendar: PyRef<'_, BusinessCalendar>) -> PyResult<NaiveDate> {
        Ok(self.adjust(&date, &*calendar)?)
    }

    /// Return a list of `dates` adjusted under the date adjustment rule.
    ///
    /// Parameters
    /// ----------
    /// dates: list[date]
    ///     Dates to adjust.
    /// calendar: BusinessCalendar
    ///     The calendar to assist with date adjustment.
    ///
    /// Returns
    /// -------
    /// list[date]
    #[pyo3(name = "adjusts")]
    fn adjusts_py(
        &self,
        dates: Vec<NaiveDate>,
        calendar: PyRef<'_, BusinessCalendar>,
    ) -> PyResult<Vec<NaiveDate>> {
        Ok(self.adjusts(&dates, &*calendar)?)
    }

    /// Return a list of `dates` which result in ``date`` when the adjustment is applied.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     Date to reverse to detect possible unadjusted dates.
    /// calendar: BusinessCalendar
    ///     The calendar to assist with date adjustment.
    ///
    /// Returns
    /// -------
    /// list[date]
    #[pyo3(name = "reverse")]
    fn reverse_py(
        &self,
        date: NaiveDate,
        calendar: PyRef<'_, BusinessCalendar>,
    ) -> PyResult<Vec<NaiveDate>> {
        Ok(self.reverse(&date, &*calendar)?)
    }

    // JSON
    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::BusinessDayConvention(*self).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `BusinessDayConvention` to JSON.",
            )),
        }
    }

    fn __str__(&self) -> String {
        self.to_string()
    }
}
