use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::scheduling::{CalendarError, Result};

/// A composable rule identifying dates which are **not** business days.
///
/// There are two leaf rules:
///
/// - `Weekend`: the date falls on one of a set of days of the week, e.g. Saturday and Sunday.
/// - `Holiday`: the date is one of an explicit set of dates.
///
/// Rules are combined with `And`, `Or` and `Not`. A specification holds no hidden state and can
/// be evaluated any number of times, in any order.
///
/// # Examples
/// ```rust
/// # use buscal::scheduling::{DateSpecification, nd};
/// # use chrono::Weekday;
/// let weekend = DateSpecification::weekend([Weekday::Sat, Weekday::Sun]);
/// let may_day = DateSpecification::holidays([nd(2017, 5, 1)]);
/// let non_bus_day = weekend | may_day;
/// assert!(non_bus_day.is_satisfied_by(&nd(2017, 4, 29)));
/// assert!(non_bus_day.is_satisfied_by(&nd(2017, 5, 1)));
/// assert!(!non_bus_day.is_satisfied_by(&nd(2017, 5, 2)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DateSpecification {
    /// Satisfied by any date falling on one of `weekdays`.
    Weekend { weekdays: IndexSet<Weekday> },
    /// Satisfied by any date contained in `dates`.
    Holiday { dates: IndexSet<NaiveDate> },
    /// Satisfied when both specifications are.
    And(Box<DateSpecification>, Box<DateSpecification>),
    /// Satisfied when either specification is.
    Or(Box<DateSpecification>, Box<DateSpecification>),
    /// Satisfied when the inner specification is not.
    Not(Box<DateSpecification>),
}

impl DateSpecification {
    /// Create a weekend rule from days of the week.
    pub fn weekend<I: IntoIterator<Item = Weekday>>(weekdays: I) -> Self {
        DateSpecification::Weekend {
            weekdays: IndexSet::from_iter(weekdays),
        }
    }

    /// Create a weekend rule from a week mask of integers (0=Mon,.., 6=Sun).
    pub fn try_weekend_from_mask(week_mask: Vec<u8>) -> Result<Self> {
        let weekdays = week_mask
            .into_iter()
            .map(|v| Weekday::try_from(v).map_err(|_| CalendarError::InvalidWeekday(v)))
            .collect::<Result<IndexSet<Weekday>>>()?;
        Ok(DateSpecification::Weekend { weekdays })
    }

    /// Create a holiday rule from a collection of specific dates.
    pub fn holidays<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        DateSpecification::Holiday {
            dates: IndexSet::from_iter(dates),
        }
    }

    /// Combine with `other` such that both must be satisfied.
    pub fn and(self, other: DateSpecification) -> Self {
        DateSpecification::And(Box::new(self), Box::new(other))
    }

    /// Combine with `other` such that either may be satisfied.
    pub fn or(self, other: DateSpecification) -> Self {
        DateSpecification::Or(Box::new(self), Box::new(other))
    }

    /// Fold a collection of specifications with `Or`.
    ///
    /// Returns `None` if there are no specifications, i.e. there is no rule that can be satisfied.
    pub fn any_of<I: IntoIterator<Item = DateSpecification>>(specifications: I) -> Option<Self> {
        specifications.into_iter().reduce(|acc, s| acc.or(s))
    }

    /// Return whether the `date` satisfies the rule.
    pub fn is_satisfied_by(&self, date: &NaiveDate) -> bool {
        match self {
            DateSpecification::Weekend { weekdays } => weekdays.contains(&date.weekday()),
            DateSpecification::Holiday { dates } => dates.contains(date),
            DateSpecification::And(left, right) => {
                left.is_satisfied_by(date) && right.is_satisfied_by(date)
            }
            DateSpecification::Or(left, right) => {
                left.is_satisfied_by(date) || right.is_satisfied_by(date)
            }
            DateSpecification::Not(inner) => !inner.is_satisfied_by(date),
        }
    }
}

impl BitAnd for DateSpecification {
    type Output = DateSpecification;

    fn bitand(self, rhs: DateSpecification) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for DateSpecification {
    type Output = DateSpecification;

    fn bitor(self, rhs: DateSpecification) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for DateSpecification {
    type Output = DateSpecification;

    fn not(self) -> Self::Output {
        DateSpecification::Not(Box::new(self))
    }
}

impl fmt::Display for DateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSpecification::Weekend { weekdays } => {
                write!(f, "Weekend({})", weekdays.iter().join(", "))
            }
            DateSpecification::Holiday { dates } => {
                write!(f, "Holiday({})", dates.iter().join(", "))
            }
            DateSpecification::And(left, right) => write!(f, "({} & {})", left, right),
            DateSpecification::Or(left, right) => write!(f, "({} | {})", left, right),
            DateSpecification::Not(inner) => write!(f, "!{}", inner),
        }
    }
}
