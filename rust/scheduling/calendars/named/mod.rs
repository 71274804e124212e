//! Static data for pre-existing named holiday calendars.
//!

pub mod all;
pub mod bus;
pub mod tgt;

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::scheduling::{CalendarError, DateSpecification, Result};

fn get_named_data(name: &str) -> Result<(&'static [u8], &'static [&'static str])> {
    let hmap: HashMap<&str, (&[u8], &[&str])> = HashMap::from([
        ("all", (all::WEEKMASK, all::HOLIDAYS)),
        ("bus", (bus::WEEKMASK, bus::HOLIDAYS)),
        ("tgt", (tgt::WEEKMASK, tgt::HOLIDAYS)),
    ]);
    match hmap.get(name) {
        None => Err(CalendarError::UnknownCalendar(name.to_string())),
        Some(value) => Ok(*value),
    }
}

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<Vec<u8>> {
    Ok(get_named_data(name)?.0.to_vec())
}

pub(crate) fn get_holidays_by_name(name: &str) -> Result<Vec<NaiveDate>> {
    Ok(get_named_data(name)?
        .1
        .iter()
        .map(|x| NaiveDate::parse_from_str(x, "%Y-%m-%d").expect("named calendar data is valid"))
        .collect())
}

/// Return the non-business day [`DateSpecification`] of a pre-defined calendar.
pub(crate) fn get_specification_by_name(name: &str) -> Result<DateSpecification> {
    let weekend = DateSpecification::try_weekend_from_mask(get_weekmask_by_name(name)?)?;
    let holidays = get_holidays_by_name(name)?;
    if holidays.is_empty() {
        Ok(weekend)
    } else {
        Ok(weekend | DateSpecification::holidays(holidays))
    }
}
