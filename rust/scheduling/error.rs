//! Errors raised by calendar queries and date adjustment.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when building or querying a [`BusinessCalendar`](crate::scheduling::BusinessCalendar).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// A date range whose `start` is after its `end`.
    #[error("`start` ({start}) must not be after `end` ({end}).")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A date that lies outside the range over which the calendar is defined.
    #[error("{date} is outside of the calendar range [{start}, {end}].")]
    OutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// A business day search from `date` reached the calendar `bound` without a result.
    #[error("No business day found searching from {date} up to the calendar bound {bound}.")]
    NoBusinessDayFound { date: NaiveDate, bound: NaiveDate },

    /// An operation that requires a business day as its input was given a non-business day.
    #[error("{0} is not a business day.")]
    NotBusinessDay(NaiveDate),

    /// A week mask value that does not map to a day of the week.
    #[error("'{0}' is not a valid week mask day, expected 0 (Monday) to 6 (Sunday).")]
    InvalidWeekday(u8),

    /// A month number outside 1..=12, or a month whose year cannot be represented as a date.
    #[error("'{year}-{month}' is not a valid calendar month, expected a month from 1 to 12.")]
    InvalidMonth { year: i32, month: u8 },

    /// A calendar name that is not registered.
    #[error("'{0}' is not found in list of existing calendars.")]
    UnknownCalendar(String),

    /// A convention string that does not map to a business day convention.
    #[error("'{0}' is not found in the list of allowed business day conventions.")]
    UnknownConvention(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
