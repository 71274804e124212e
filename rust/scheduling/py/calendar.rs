//! Wrapper module to export to Python using pyo3 bindings.

use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::scheduling::{
    BusinessCalendar, BusinessDayConvention, CalendarAdjustment, DateRoll, DateSpecification,
    PyDateSpecification,
};
use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

#[pymethods]
impl BusinessCalendar {
    /// Create a new *BusinessCalendar* object.
    ///
    /// Parameters
    /// ----------
    /// start: date
    ///     The first date of the calendar range.
    /// end: date
    ///     The last date of the calendar range.
    /// specifications: list[DateSpecification], optional
    ///     Rules identifying non-business days, combined with `or`.
    #[new]
    #[pyo3(signature = (start, end, specifications=None))]
    fn new_py(
        start: NaiveDate,
        end: NaiveDate,
        specifications: Option<Vec<PyDateSpecification>>,
    ) -> PyResult<Self> {
        let specs: Vec<DateSpecification> = specifications
            .unwrap_or_default()
            .into_iter()
            .map(DateSpecification::from)
            .collect();
        Ok(BusinessCalendar::try_new(start, end, specs)?)
    }

    /// Create a new *BusinessCalendar* object from simple string name.
    ///
    /// Parameters
    /// ----------
    /// name: str
    ///     The names of the calendars to load, separated by commas. Must be pre-defined in the
    ///     Rust core code.
    /// start: date
    ///     The first date of the calendar range.
    /// end: date
    ///     The last date of the calendar range.
    ///
    /// Returns
    /// -------
    /// BusinessCalendar
    #[classmethod]
    #[pyo3(name = "from_name")]
    fn from_name_py(
        _cls: &Bound<'_, PyType>,
        name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PyResult<Self> {
        Ok(BusinessCalendar::try_from_name(name, start, end)?)
    }

    /// The first date of the calendar range.
    #[getter]
    #[pyo3(name = "start")]
    fn start_py(&self) -> NaiveDate {
        self.start()
    }

    /// The last date of the calendar range.
    #[getter]
    #[pyo3(name = "end")]
    fn end_py(&self) -> NaiveDate {
        self.end()
    }

    /// The combined rule identifying non-business days.
    #[getter]
    #[pyo3(name = "specification")]
    fn specification_py(&self) -> Option<PyDateSpecification> {
        self.specification().cloned().map(PyDateSpecification::from)
    }

    /// Return whether the `date` is a business day.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     Date to test
    ///
    /// Returns
    /// -------
    /// bool
    #[pyo3(name = "is_bus_day")]
    fn is_bus_day_py(&self, date: NaiveDate) -> PyResult<bool> {
        Ok(self.is_bus_day(&date)?)
    }

    /// Return whether the `date` is **not** a business day.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     Date to test
    ///
    /// Returns
    /// -------
    /// bool
    #[pyo3(name = "is_non_bus_day")]
    fn is_non_bus_day_py(&self, date: NaiveDate) -> PyResult<bool> {
        Ok(self.is_non_bus_day(&date)?)
    }

    /// Return the `date`, if a business day, or the next business day.
    #[pyo3(name = "next_bus_day")]
    fn next_bus_day_py(&self, date: NaiveDate) -> PyResult<NaiveDate> {
        Ok(self.next_bus_day(&date)?)
    }

    /// Return the `date`, if a business day, or the previous business day.
    #[pyo3(name = "previous_bus_day")]
    fn previous_bus_day_py(&self, date: NaiveDate) -> PyResult<NaiveDate> {
        Ok(self.previous_bus_day(&date)?)
    }

    /// Return a date separated by business days from an input business date.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     The original business date. Raise if a non-business date is given.
    /// days: int
    ///     The number of business days to add.
    ///
    /// Returns
    /// -------
    /// date
    #[pyo3(name = "add_bus_days")]
    fn add_bus_days_py(&self, date: NaiveDate, days: i32) -> PyResult<NaiveDate> {
        Ok(self.add_bus_days(&date, days)?)
    }

    /// Adjust a date under a date adjustment rule.
    ///
    /// Parameters
    /// ----------
    /// date: date
    ///     Date to adjust.
    /// convention: BusinessDayConvention
    ///     The date adjustment rule to use.
    ///
    /// Returns
    /// -------
    /// date
    #[pyo3(name = "adjust")]
    fn adjust_py(&self, date: NaiveDate, convention: BusinessDayConvention) -> PyResult<NaiveDate> {
        Ok(self.adjust(&date, &convention)?)
    }

    /// Adjust a list of dates under a date adjustment rule.
    ///
    /// Parameters
    /// ----------
    /// dates: list[date]
    ///     Dates to adjust.
    /// convention: BusinessDayConvention
    ///     The date adjustment rule to use.
    ///
    /// Returns
    /// -------
    /// list[date]
    #[pyo3(name = "adjusts")]
    fn adjusts_py(
        &self,
        dates: Vec<NaiveDate>,
        convention: BusinessDayConvention,
    ) -> PyResult<Vec<NaiveDate>> {
        Ok(self.adjusts(&dates, &convention)?)
    }

    /// Return a list of business dates in a range.
    ///
    /// Parameters
    /// ----------
    /// start: date
    ///     The start date of the range, inclusive.
    /// end: date
    ///     The end date of the range, inclusive.
    ///
    /// Returns
    /// --------
    /// list[date]
    #[pyo3(name = "bus_date_range")]
    fn bus_date_range_py(&self, start: NaiveDate, end: NaiveDate) -> PyResult<Vec<NaiveDate>> {
        Ok(self.bus_date_range(&start, &end)?)
    }

    /// Return a list of calendar dates in a range.
    ///
    /// Parameters
    /// ----------
    /// start: date
    ///     The start date of the range, inclusive.
    /// end: date
    ///     The end date of the range, inclusive.
    ///
    /// Returns
    /// --------
    /// list[date]
    #[pyo3(name = "cal_date_range")]
    fn cal_date_range_py(&self, start: NaiveDate, end: NaiveDate) -> PyResult<Vec<NaiveDate>> {
        Ok(self.cal_date_range(&start, &end)?)
    }

    /// Return a calendar whose non-business days are those of either calendar.
    #[pyo3(name = "union")]
    fn union_py(&self, other: PyRef<'_, BusinessCalendar>) -> PyResult<Self> {
        Ok(self.union(&other)?)
    }

    /// Return a string representation of a month of the calendar.
    #[pyo3(name = "print_month")]
    fn print_month_py(&self, year: i32, month: u8) -> PyResult<String> {
        Ok(self.print_month(year, month)?)
    }

    /// Return a string representation of a year of the calendar.
    #[pyo3(name = "print_year")]
    fn print_year_py(&self, year: i32) -> PyResult<String> {
        Ok(self.print_year(year)?)
    }

    // JSON
    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::BusinessCalendar(self.clone()).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `BusinessCalendar` to JSON.",
            )),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "<buscal.BusinessCalendar {} to {} at {:p}>",
            self.start(),
            self.end(),
            self
        )
    }
}
