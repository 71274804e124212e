mod calendar;
mod convention;
mod dateroll;
mod named;
mod specification;

pub use crate::scheduling::calendars::{
    calendar::{nd, BusinessCalendar},
    convention::{Adjustment, BusinessDayConvention, CalendarAdjustment},
    dateroll::DateRoll,
    specification::DateSpecification,
};
