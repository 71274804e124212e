use chrono::prelude::*;
#[cfg(feature = "python")]
use pyo3::pyclass;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::scheduling::calendars::named::get_specification_by_name;
use crate::scheduling::{CalendarAdjustment, CalendarError, DateRoll, DateSpecification, Result};

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// A business day calendar defined over a bounded range of dates.
///
/// A business day calendar is formed of 2 components:
///
/// - `start` and `end`: the inclusive range of dates over which the calendar is defined.
///   Querying any date outside of this range is an error.
/// - `specification`: a [`DateSpecification`] identifying the dates that are **not** business
///   days, e.g. weekends and holidays. Multiple specifications supplied on construction are
///   combined with `Or`.
///
/// The business day status of every date in the range is determined once, on construction. The
/// calendar is never mutated afterwards and clones share the same underlying data, so it can be
/// freely shared across threads.
///
/// # Examples
/// ```rust
/// # use buscal::scheduling::{BusinessCalendar, DateSpecification, DateRoll, nd};
/// let cal = BusinessCalendar::try_new(
///     nd(2017, 1, 1),
///     nd(2017, 12, 31),
///     vec![
///         DateSpecification::try_weekend_from_mask(vec![5, 6]).unwrap(),
///         DateSpecification::holidays([nd(2017, 5, 1)]), // UK Early May Bank Holiday
///     ],
/// );
/// # let cal = cal.unwrap();
/// assert!(!cal.is_bus_day(&nd(2017, 5, 1)).unwrap());
/// assert_eq!(cal.next_bus_day(&nd(2017, 4, 29)).unwrap(), nd(2017, 5, 2));
/// ```
#[cfg_attr(feature = "python", pyclass(module = "buscal.rs", eq))]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "BusinessCalendarDataModel")]
pub struct BusinessCalendar {
    start: NaiveDate,
    end: NaiveDate,
    specification: Option<DateSpecification>,
    #[serde(skip_serializing)]
    bus_days: Arc<[bool]>,
}

#[derive(Deserialize)]
struct BusinessCalendarDataModel {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    specification: Option<DateSpecification>,
}

impl TryFrom<BusinessCalendarDataModel> for BusinessCalendar {
    type Error = CalendarError;

    fn try_from(model: BusinessCalendarDataModel) -> Result<Self> {
        BusinessCalendar::try_new(model.start, model.end, model.specification.into_iter().collect())
    }
}

impl BusinessCalendar {
    /// Create a calendar.
    ///
    /// `specifications` identify the dates that cannot be business days and are combined with
    /// `Or`. If none are given every date in the range is a business day.
    ///
    /// One flag is stored per calendar day of the range, so memory grows linearly with the
    /// span: a century costs around 36 kB, the full `NaiveDate` range around 190 MB. Callers
    /// accepting untrusted ranges, e.g. from JSON, should bound them first.
    ///
    /// Fails with [`CalendarError::InvalidRange`] if `start` is after `end`.
    pub fn try_new(
        start: NaiveDate,
        end: NaiveDate,
        specifications: Vec<DateSpecification>,
    ) -> Result<Self> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        let specification = DateSpecification::any_of(specifications);
        let bus_days: Arc<[bool]> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| {
                specification
                    .as_ref()
                    .is_none_or(|spec| !spec.is_satisfied_by(&d))
            })
            .collect();
        Ok(BusinessCalendar {
            start,
            end,
            specification,
            bus_days,
        })
    }

    /// Create a calendar from the names of pre-defined calendars.
    ///
    /// `name` may contain multiple names separated by commas, whose non-business days are
    /// combined.
    ///
    /// # Examples
    /// ```rust
    /// # use buscal::scheduling::{BusinessCalendar, DateRoll, nd};
    /// let cal = BusinessCalendar::try_from_name("bus", nd(2017, 1, 1), nd(2017, 12, 31));
    /// # let cal = cal.unwrap();
    /// assert!(!cal.is_bus_day(&nd(2017, 9, 23)).unwrap());
    /// ```
    pub fn try_from_name(name: &str, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let specifications = name
            .to_lowercase()
            .split(',')
            .map(|n| get_specification_by_name(n.trim()))
            .collect::<Result<Vec<DateSpecification>>>()?;
        BusinessCalendar::try_new(start, end, specifications)
    }

    /// The composite rule identifying non-business days, if any.
    pub fn specification(&self) -> Option<&DateSpecification> {
        self.specification.as_ref()
    }

    /// Create a calendar whose non-business days are those of either calendar.
    ///
    /// The range of the result is the overlap of both ranges; calendars whose ranges do not
    /// overlap fail with [`CalendarError::InvalidRange`].
    pub fn union(&self, other: &BusinessCalendar) -> Result<Self> {
        let specifications = self
            .specification
            .iter()
            .chain(other.specification.iter())
            .cloned()
            .collect();
        BusinessCalendar::try_new(
            self.start.max(other.start),
            self.end.min(other.end),
            specifications,
        )
    }

    fn index(&self, date: &NaiveDate) -> Result<usize> {
        self.check_range(date)?;
        Ok(date.signed_duration_since(self.start).num_days() as usize)
    }
}

impl DateRoll for BusinessCalendar {
    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }

    fn is_bus_day(&self, date: &NaiveDate) -> Result<bool> {
        let i = self.index(date)?;
        Ok(self.bus_days[i])
    }
}

impl CalendarAdjustment for BusinessCalendar {}

/// Calendars are equal if they span the same range and define the same business days.
impl PartialEq for BusinessCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.bus_days == other.bus_days
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::BusinessDayConvention;
    use chrono::Weekday;

    fn fixture_hol_cal() -> BusinessCalendar {
        let hols = vec![nd(2015, 9, 5), nd(2015, 9, 7)]; // Saturday and Monday
        BusinessCalendar::try_new(
            nd(2015, 1, 1),
            nd(2015, 12, 31),
            vec![
                DateSpecification::holidays(hols),
                DateSpecification::weekend([Weekday::Sat, Weekday::Sun]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_range() {
        let result = BusinessCalendar::try_new(nd(2017, 12, 31), nd(2017, 1, 1), vec![]);
        assert_eq!(
            result,
            Err(CalendarError::InvalidRange {
                start: nd(2017, 12, 31),
                end: nd(2017, 1, 1)
            })
        );
    }

    #[test]
    fn test_single_day_range() {
        let cal = BusinessCalendar::try_new(nd(2017, 9, 22), nd(2017, 9, 22), vec![]).unwrap();
        assert!(cal.is_bus_day(&nd(2017, 9, 22)).unwrap());
    }

    #[test]
    fn test_no_specifications() {
        let cal = BusinessCalendar::try_new(nd(2017, 1, 1), nd(2017, 12, 31), vec![]).unwrap();
        assert!(cal.specification().is_none());
        assert!(cal.is_bus_day(&nd(2017, 9, 23)).unwrap()); // Saturday
    }

    #[test]
    fn test_is_bus_day() {
        let cal = fixture_hol_cal();
        assert!(!cal.is_bus_day(&nd(2015, 9, 7)).unwrap()); // Monday in Hol list
        assert!(cal.is_bus_day(&nd(2015, 9, 10)).unwrap()); // Thursday
        assert!(!cal.is_bus_day(&nd(2015, 9, 12)).unwrap()); // Saturday
        assert!(cal.is_bus_day(&nd(2015, 1, 1)).unwrap()); // first day of range
        assert!(cal.is_bus_day(&nd(2015, 12, 31)).unwrap()); // last day of range
    }

    #[test]
    fn test_is_bus_day_out_of_range() {
        let cal = fixture_hol_cal();
        assert_eq!(
            cal.is_bus_day(&nd(2016, 1, 1)),
            Err(CalendarError::OutOfRange {
                date: nd(2016, 1, 1),
                start: nd(2015, 1, 1),
                end: nd(2015, 12, 31),
            })
        );
        assert!(cal.is_bus_day(&nd(2014, 12, 31)).is_err());
    }

    #[test]
    fn test_matches_specification() {
        let cal = fixture_hol_cal();
        let spec = cal.specification().unwrap().clone();
        for date in cal.cal_date_range(&nd(2015, 1, 1), &nd(2015, 12, 31)).unwrap() {
            assert_eq!(cal.is_bus_day(&date).unwrap(), !spec.is_satisfied_by(&date));
        }
    }

    #[test]
    fn test_try_from_name() {
        let cal = BusinessCalendar::try_from_name("BUS", nd(2015, 1, 1), nd(2015, 12, 31)).unwrap();
        assert!(!cal.is_bus_day(&nd(2015, 9, 5)).unwrap());
        assert!(cal.is_bus_day(&nd(2015, 9, 7)).unwrap());

        let cal =
            BusinessCalendar::try_from_name("all, bus", nd(2015, 1, 1), nd(2015, 12, 31)).unwrap();
        assert!(!cal.is_bus_day(&nd(2015, 9, 5)).unwrap());
    }

    #[test]
    fn test_try_from_name_error() {
        let result = BusinessCalendar::try_from_name("bus,xyz", nd(2015, 1, 1), nd(2015, 12, 31));
        assert_eq!(result, Err(CalendarError::UnknownCalendar("xyz".to_string())));
    }

    #[test]
    fn test_union() {
        let cal1 = fixture_hol_cal();
        let cal2 = BusinessCalendar::try_new(
            nd(2015, 6, 1),
            nd(2016, 6, 1),
            vec![DateSpecification::holidays([nd(2015, 9, 8), nd(2015, 9, 9)])],
        )
        .unwrap();
        let ucal = cal1.union(&cal2).unwrap();
        assert_eq!(ucal.start(), nd(2015, 6, 1));
        assert_eq!(ucal.end(), nd(2015, 12, 31));
        assert_eq!(ucal.next_bus_day(&nd(2015, 9, 5)).unwrap(), nd(2015, 9, 10));
    }

    #[test]
    fn test_union_no_overlap() {
        let cal1 = fixture_hol_cal();
        let cal2 = BusinessCalendar::try_new(nd(2016, 6, 1), nd(2016, 7, 1), vec![]).unwrap();
        assert!(matches!(
            cal1.union(&cal2),
            Err(CalendarError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_equality() {
        let cal = fixture_hol_cal();
        // the same business days, written differently
        let cal2 = BusinessCalendar::try_new(
            nd(2015, 1, 1),
            nd(2015, 12, 31),
            vec![
                DateSpecification::weekend([Weekday::Sat, Weekday::Sun]),
                DateSpecification::holidays([nd(2015, 9, 7)]),
            ],
        )
        .unwrap();
        assert_eq!(cal, cal2);

        let cal3 = BusinessCalendar::try_new(
            nd(2015, 1, 1),
            nd(2015, 12, 31),
            vec![DateSpecification::weekend([Weekday::Sat, Weekday::Sun])],
        )
        .unwrap();
        assert_ne!(cal, cal3);
    }

    #[test]
    fn test_clone_shares_flags() {
        let cal = fixture_hol_cal();
        let cal2 = cal.clone();
        assert!(Arc::ptr_eq(&cal.bus_days, &cal2.bus_days));
    }

    #[test]
    fn test_calendar_adjust() {
        let cal = fixture_hol_cal();
        let result = cal.adjust(&nd(2015, 9, 5), &BusinessDayConvention::Following);
        assert_eq!(result.unwrap(), nd(2015, 9, 8));
    }

    #[test]
    fn test_calendar_adjusts() {
        let cal = fixture_hol_cal();
        let result = cal.adjusts(
            &[nd(2015, 9, 5), nd(2015, 9, 6)],
            &BusinessDayConvention::Following,
        );
        assert_eq!(result.unwrap(), vec![nd(2015, 9, 8), nd(2015, 9, 8)]);
    }

    #[test]
    fn test_shared_across_threads() {
        let cal = Arc::new(fixture_hol_cal());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cal = Arc::clone(&cal);
                std::thread::spawn(move || cal.next_bus_day(&nd(2015, 9, 5)).unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), nd(2015, 9, 8));
        }
    }

    #[test]
    fn test_one_flag_per_day() {
        let cal = BusinessCalendar::try_new(nd(2000, 1, 1), nd(2099, 12, 31), vec![]).unwrap();
        assert_eq!(cal.bus_days.len(), 36525);
        assert!(cal.bus_days.iter().all(|b| *b));

        let cal = BusinessCalendar::try_new(nd(2017, 9, 23), nd(2017, 9, 23), vec![]).unwrap();
        assert_eq!(cal.bus_days.len(), 1);
    }
}
