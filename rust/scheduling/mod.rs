//! Create a business day [`BusinessCalendar`] and perform financial date adjustment.
//!
//! The purpose of this module is to replicate the date adjustment rules used in the
//! specification of financial instruments, such as *modified following*, over calendars built
//! from simple, composable rules.
//!
//! # Calendars and Date Adjustment
//!
//! ## Specifications
//!
//! A [`DateSpecification`] is a rule identifying dates that are **not** business days. The
//! leaf rules are a *weekend* (days of the week) and a list of specific *holidays*. Rules can be
//! combined with `And`, `Or` and `Not`, either by method or with the `&`, `|` and `!` operators.
//!
//! ## Calendars
//!
//! A [`BusinessCalendar`] is defined over a bounded, inclusive range of dates and one or more
//! specifications. It implements the [`DateRoll`] trait which provides simple date adjustment,
//! which is called **rolling**. This involves moving forward or backward from non-business days
//! to business days. Rolling never leaves the calendar range: such searches return a
//! [`CalendarError`] instead.
//!
//! ### Example
//! This example creates a business day calendar defining Saturday and Sunday weekends and a
//! specific holiday (the Early May UK Bank Holiday). It rolls Saturday 29th April 2017 under the
//! *'following'* and *'modified following'* rules.
//! ```rust
//! # use buscal::scheduling::{BusinessCalendar, DateSpecification, DateRoll, nd};
//! let cal = BusinessCalendar::try_new(
//!     nd(2017, 1, 1),
//!     nd(2017, 12, 31),
//!     vec![
//!         DateSpecification::try_weekend_from_mask(vec![5, 6]).unwrap(),
//!         DateSpecification::holidays([nd(2017, 5, 1)]),
//!     ],
//! ).unwrap();
//! assert_eq!(nd(2017, 5, 2), cal.next_bus_day(&nd(2017, 4, 29)).unwrap());
//! assert_eq!(nd(2017, 4, 28), cal.roll_mod_forward_bus_day(&nd(2017, 4, 29)).unwrap());
//! ```
//!
//! ## Date Adjustment
//!
//! The [`BusinessDayConvention`] is an enum which defines the standard adjustment rules. It
//! implements the [`Adjustment`] trait requiring some object capable of performing [`DateRoll`].
//! Calendars implement the [`CalendarAdjustment`] trait which permits date adjustment when a
//! [`BusinessDayConvention`] is cross-provided.
//!
//! ### Example
//! ```rust
//! # use buscal::scheduling::{BusinessCalendar, BusinessDayConvention, CalendarAdjustment, nd};
//! let cal = BusinessCalendar::try_from_name("bus", nd(2017, 1, 1), nd(2017, 12, 31)).unwrap();
//! let convention: BusinessDayConvention = "hmmf".parse().unwrap();
//! assert_eq!(nd(2017, 10, 13), cal.adjust(&nd(2017, 10, 14), &convention).unwrap());
//! assert_eq!(nd(2017, 9, 18), cal.adjust(&nd(2017, 9, 16), &convention).unwrap());
//! ```

mod calendars;
mod error;

mod serde;

#[cfg(feature = "python")]
pub(crate) mod py;

pub use crate::scheduling::{
    calendars::{
        nd, Adjustment, BusinessCalendar, BusinessDayConvention, CalendarAdjustment, DateRoll,
        DateSpecification,
    },
    error::{CalendarError, Result},
};
#[cfg(feature = "python")]
pub(crate) use crate::scheduling::py::PyDateSpecification;
