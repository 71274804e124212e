use chrono::prelude::*;
use chrono::Days;
#[cfg(feature = "python")]
use pyo3::pyclass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::scheduling::{CalendarError, DateRoll, Result};

/// A list of rules for adjusting a date to a business day.
#[cfg_attr(feature = "python", pyclass(module = "buscal.rs", eq, eq_int))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// Actual date without adjustment.
    Unadjusted,
    /// The first business day on or after the date.
    Following,
    /// The first business day on or before the date.
    Preceding,
    /// Following adjustment rule, unless that rolls into a new month, then preceding.
    ModifiedFollowing,
    /// Preceding adjustment rule, unless that rolls into a previous month, then following.
    ModifiedPreceding,
    /// The closer of the following and preceding business days, with ties rolling forward.
    Nearest,
    /// Following adjustment rule, unless that rolls across the 15th or into a new month, then
    /// preceding.
    HalfMonthModifiedFollowing,
}

/// Perform date adjustment according to calendar definitions, i.e. a known [`DateRoll`].
pub trait Adjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust<T: DateRoll>(&self, udate: &NaiveDate, calendar: &T) -> Result<NaiveDate>;

    /// Adjust a slice of dates under an adjustment rule.
    fn adjusts<T: DateRoll>(&self, udates: &[NaiveDate], calendar: &T) -> Result<Vec<NaiveDate>> {
        udates
            .iter()
            .map(|udate| self.adjust(udate, calendar))
            .collect()
    }

    /// Return every unadjusted date within the calendar range which adjusts to `date`.
    fn reverse<T: DateRoll>(&self, date: &NaiveDate, calendar: &T) -> Result<Vec<NaiveDate>>;
}

/// Perform date adjustment according to adjustment rules, i.e. a given [`BusinessDayConvention`].
pub trait CalendarAdjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust(&self, udate: &NaiveDate, convention: &BusinessDayConvention) -> Result<NaiveDate>
    where
        Self: Sized + DateRoll,
    {
        convention.adjust(udate, self)
    }

    /// Adjust a slice of dates under an adjustment rule.
    fn adjusts(
        &self,
        udates: &[NaiveDate],
        convention: &BusinessDayConvention,
    ) -> Result<Vec<NaiveDate>>
    where
        Self: Sized + DateRoll,
    {
        convention.adjusts(udates, self)
    }
}

impl Adjustment for BusinessDayConvention {
    fn adjust<T: DateRoll>(&self, udate: &NaiveDate, calendar: &T) -> Result<NaiveDate> {
        match self {
            BusinessDayConvention::Unadjusted => Ok(*udate),
            BusinessDayConvention::Following => calendar.next_bus_day(udate),
            BusinessDayConvention::Preceding => calendar.previous_bus_day(udate),
            BusinessDayConvention::ModifiedFollowing => calendar.roll_mod_forward_bus_day(udate),
            BusinessDayConvention::ModifiedPreceding => calendar.roll_mod_backward_bus_day(udate),
            BusinessDayConvention::Nearest => calendar.roll_nearest_bus_day(udate),
            BusinessDayConvention::HalfMonthModifiedFollowing => {
                calendar.roll_half_month_mod_forward_bus_day(udate)
            }
        }
    }

    fn reverse<T: DateRoll>(&self, date: &NaiveDate, calendar: &T) -> Result<Vec<NaiveDate>> {
        calendar.check_range(date)?;
        if *self == BusinessDayConvention::Unadjusted {
            return Ok(vec![*date]);
        }
        // every candidate lies in the run of non-business days surrounding `date`
        let mut lower = *date;
        while lower > calendar.start() && calendar.is_non_bus_day(&(lower - Days::new(1)))? {
            lower = lower - Days::new(1);
        }
        let mut upper = *date;
        while upper < calendar.end() && calendar.is_non_bus_day(&(upper + Days::new(1)))? {
            upper = upper + Days::new(1);
        }
        let mut vec = Vec::new();
        for udate in lower.iter_days().take_while(|d| *d <= upper) {
            match self.adjust(&udate, calendar) {
                Ok(adjusted) if adjusted == *date => vec.push(udate),
                Ok(_) | Err(CalendarError::NoBusinessDayFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(vec)
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let hmap: HashMap<&str, BusinessDayConvention> = HashMap::from([
            ("none", BusinessDayConvention::Unadjusted),
            ("act", BusinessDayConvention::Unadjusted),
            ("unadjusted", BusinessDayConvention::Unadjusted),
            ("f", BusinessDayConvention::Following),
            ("following", BusinessDayConvention::Following),
            ("p", BusinessDayConvention::Preceding),
            ("preceding", BusinessDayConvention::Preceding),
            ("mf", BusinessDayConvention::ModifiedFollowing),
            ("modifiedfollowing", BusinessDayConvention::ModifiedFollowing),
            ("mp", BusinessDayConvention::ModifiedPreceding),
            ("modifiedpreceding", BusinessDayConvention::ModifiedPreceding),
            ("n", BusinessDayConvention::Nearest),
            ("nearest", BusinessDayConvention::Nearest),
            ("hmmf", BusinessDayConvention::HalfMonthModifiedFollowing),
            (
                "halfmonthmodifiedfollowing",
                BusinessDayConvention::HalfMonthModifiedFollowing,
            ),
        ]);
        match hmap.get(s.to_lowercase().replace([' ', '_', '-'], "").as_str()) {
            None => Err(CalendarError::UnknownConvention(s.to_string())),
            Some(value) => Ok(*value),
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BusinessDayConvention::Unadjusted => "NONE",
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Nearest => "NEAREST",
            BusinessDayConvention::HalfMonthModifiedFollowing => "HMMF",
        };
        write!(f, "{s}")
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{nd, BusinessCalendar, DateSpecification};
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
    fn test_adjusts() {
        let cal = fixture_hol_cal();
        let udates = vec![nd(2015, 9, 4), nd(2015, 9, 5), nd(2015, 9, 6), nd(2015, 9, 7)];
        let result = BusinessDayConvention::Following.adjusts(&udates, &cal).unwrap();
        assert_eq!(
            result,
            vec![nd(2015, 9, 4), nd(2015, 9, 8), nd(2015, 9, 8), nd(2015, 9, 8)]
        );
    }

    #[test]
    fn test_adjusts_error() {
        let cal = fixture_hol_cal();
        let udates = vec![nd(2015, 9, 4), nd(2016, 1, 4)];
        let result = BusinessDayConvention::Following.adjusts(&udates, &cal);
        assert!(matches!(result, Err(CalendarError::OutOfRange { .. })));
    }

    #[test]
    fn test_unadjusted_ignores_status() {
        let cal = fixture_hol_cal();
        let result = BusinessDayConvention::Unadjusted.adjust(&nd(2015, 9, 5), &cal);
        assert_eq!(result.unwrap(), nd(2015, 9, 5));
    }

    #[test]
    fn test_modified_following_fallback() {
        // Wednesday 30th September 2015 is a holiday, following rolls into October
        let cal = BusinessCalendar::try_new(
            nd(2015, 1, 1),
            nd(2015, 12, 31),
            vec![DateSpecification::holidays([nd(2015, 9, 30)])],
        )
        .unwrap();
        let result = BusinessDayConvention::ModifiedFollowing.adjust(&nd(2015, 9, 30), &cal);
        assert_eq!(result.unwrap(), nd(2015, 9, 29));
    }

    #[test]
    fn test_modified_following_year_end() {
        let cal = BusinessCalendar::try_new(
            nd(2017, 12, 1),
            nd(2018, 1, 31),
            vec![DateSpecification::weekend([Weekday::Sat, Weekday::Sun])],
        )
        .unwrap();
        // Saturday 30th December 2017
        let result = BusinessDayConvention::ModifiedFollowing.adjust(&nd(2017, 12, 30), &cal);
        assert_eq!(result.unwrap(), nd(2017, 12, 29));
    }

    #[test]
    fn test_fallback_errors_surface() {
        // range ends on a Saturday, so following cannot be determined
        let cal = BusinessCalendar::try_new(
            nd(2017, 9, 1),
            nd(2017, 9, 30),
            vec![DateSpecification::weekend([Weekday::Sat, Weekday::Sun])],
        )
        .unwrap();
        let result = BusinessDayConvention::ModifiedFollowing.adjust(&nd(2017, 9, 30), &cal);
        assert_eq!(
            result,
            Err(CalendarError::NoBusinessDayFound {
                date: nd(2017, 9, 30),
                bound: nd(2017, 9, 30)
            })
        );
        let result = BusinessDayConvention::Nearest.adjust(&nd(2017, 9, 30), &cal);
        assert_eq!(
            result,
            Err(CalendarError::NoBusinessDayFound {
                date: nd(2017, 9, 30),
                bound: nd(2017, 9, 30)
            })
        );
    }

    #[test]
    fn test_half_month_first_half() {
        // Wednesday 15th and Thursday 16th are holidays: following crosses the 15th.
        let cal = BusinessCalendar::try_new(
            nd(2017, 1, 1),
            nd(2017, 12, 31),
            vec![
                DateSpecification::weekend([Weekday::Sat, Weekday::Sun]),
                DateSpecification::holidays([nd(2017, 11, 15), nd(2017, 11, 16)]),
            ],
        )
        .unwrap();
        let result =
            BusinessDayConvention::HalfMonthModifiedFollowing.adjust(&nd(2017, 11, 15), &cal);
        assert_eq!(result.unwrap(), nd(2017, 11, 14));
        let result =
            BusinessDayConvention::HalfMonthModifiedFollowing.adjust(&nd(2017, 11, 16), &cal);
        assert_eq!(result.unwrap(), nd(2017, 11, 17));
    }

    #[test]
    fn test_reverse() {
        let cal = fixture_hol_cal();
        let result = BusinessDayConvention::Following.reverse(&nd(2015, 9, 8), &cal).unwrap();
        assert_eq!(
            result,
            vec![nd(2015, 9, 5), nd(2015, 9, 6), nd(2015, 9, 7), nd(2015, 9, 8)]
        );

        let result = BusinessDayConvention::Preceding.reverse(&nd(2015, 9, 4), &cal).unwrap();
        assert_eq!(
            result,
            vec![nd(2015, 9, 4), nd(2015, 9, 5), nd(2015, 9, 6), nd(2015, 9, 7)]
        );

        let result = BusinessDayConvention::Nearest.reverse(&nd(2015, 9, 4), &cal).unwrap();
        assert_eq!(result, vec![nd(2015, 9, 4), nd(2015, 9, 5)]);

        let result = BusinessDayConvention::Following.reverse(&nd(2015, 9, 4), &cal).unwrap();
        assert_eq!(result, vec![nd(2015, 9, 4)]);

        // a non-business day is never the result of an adjustment
        let result = BusinessDayConvention::Following.reverse(&nd(2015, 9, 6), &cal).unwrap();
        assert!(result.is_empty());

        let result = BusinessDayConvention::Unadjusted.reverse(&nd(2015, 9, 6), &cal).unwrap();
        assert_eq!(result, vec![nd(2015, 9, 6)]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            BusinessDayConvention::from_str("MF").unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "modified_preceding".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedPreceding
        );
        assert_eq!(
            "Half Month Modified Following"
                .parse::<BusinessDayConvention>()
                .unwrap(),
            BusinessDayConvention::HalfMonthModifiedFollowing
        );
        assert_eq!(
            "xx".parse::<BusinessDayConvention>(),
            Err(CalendarError::UnknownConvention("xx".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for convention in [
            BusinessDayConvention::Unadjusted,
            BusinessDayConvention::Following,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::ModifiedPreceding,
            BusinessDayConvention::Nearest,
            BusinessDayConvention::HalfMonthModifiedFollowing,
        ] {
            assert_eq!(convention.to_string().parse(), Ok(convention));
        }
    }
}
