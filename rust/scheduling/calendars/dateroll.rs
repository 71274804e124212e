use chrono::prelude::*;
use chrono::Days;
use std::cmp::Ordering;

use crate::scheduling::{CalendarError, Result};

/// Return whether two dates share the same calendar month.
fn same_month(a: &NaiveDate, b: &NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Return whether two dates share the same half of the month, split after the 15th.
fn same_half_month(a: &NaiveDate, b: &NaiveDate) -> bool {
    same_month(a, b) && ((a.day() <= 15) == (b.day() <= 15))
}

/// Simple date adjustment over a bounded range defining business days and rolling.
///
/// Implementors provide the range bounds and the business day query; all rolling is derived
/// from those. Every search is bounded by [`DateRoll::start`] and [`DateRoll::end`] and fails
/// with [`CalendarError::NoBusinessDayFound`] rather than leaving the range.
pub trait DateRoll {
    /// The first date, inclusive, over which the calendar is defined.
    fn start(&self) -> NaiveDate;

    /// The last date, inclusive, over which the calendar is defined.
    fn end(&self) -> NaiveDate;

    /// Returns whether the date is a business day.
    ///
    /// Fails with [`CalendarError::OutOfRange`] if the date is outside of the calendar range.
    fn is_bus_day(&self, date: &NaiveDate) -> Result<bool>;

    /// Returns whether the date is within the calendar range.
    fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.start() && *date <= self.end()
    }

    /// Returns `Ok(())` if the date is within the calendar range, else an `OutOfRange` error.
    fn check_range(&self, date: &NaiveDate) -> Result<()> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(CalendarError::OutOfRange {
                date: *date,
                start: self.start(),
                end: self.end(),
            })
        }
    }

    /// Returns whether the date is not a business day.
    fn is_non_bus_day(&self, date: &NaiveDate) -> Result<bool> {
        Ok(!self.is_bus_day(date)?)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn next_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date)? {
            if new_date >= self.end() {
                return Err(CalendarError::NoBusinessDayFound {
                    date: *date,
                    bound: self.end(),
                });
            }
            new_date = new_date + Days::new(1);
        }
        Ok(new_date)
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    fn previous_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date)? {
            if new_date <= self.start() {
                return Err(CalendarError::NoBusinessDayFound {
                    date: *date,
                    bound: self.start(),
                });
            }
            new_date = new_date - Days::new(1);
        }
        Ok(new_date)
    }

    /// Return the `date`, if a business day, or get the following business date, without rolling
    /// into a new month.
    fn roll_mod_forward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let new_date = self.next_bus_day(date)?;
        if same_month(&new_date, date) {
            Ok(new_date)
        } else {
            self.previous_bus_day(date)
        }
    }

    /// Return the `date`, if a business day, or get the preceding business date, without rolling
    /// into a previous month.
    fn roll_mod_backward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let new_date = self.previous_bus_day(date)?;
        if same_month(&new_date, date) {
            Ok(new_date)
        } else {
            self.next_bus_day(date)
        }
    }

    /// Return the `date`, if a business day, or the closer of the following and preceding
    /// business dates. Equidistant dates resolve to the following business date.
    fn roll_nearest_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        if self.is_bus_day(date)? {
            return Ok(*date);
        }
        let following = self.next_bus_day(date)?;
        let preceding = self.previous_bus_day(date)?;
        if following.signed_duration_since(*date) <= date.signed_duration_since(preceding) {
            Ok(following)
        } else {
            Ok(preceding)
        }
    }

    /// Return the `date`, if a business day, or get the following business date, without rolling
    /// across the 15th into the second half of the month or into a new month.
    fn roll_half_month_mod_forward_bus_day(&self, date: &NaiveDate) -> Result<NaiveDate> {
        let new_date = self.next_bus_day(date)?;
        if same_half_month(&new_date, date) {
            Ok(new_date)
        } else {
            self.previous_bus_day(date)
        }
    }

    /// Add a given number of business days to a `date`, which must be a business day.
    ///
    /// *Note*: a negative number of `days` moves backwards.
    fn add_bus_days(&self, date: &NaiveDate, days: i32) -> Result<NaiveDate> {
        if self.is_non_bus_day(date)? {
            return Err(CalendarError::NotBusinessDay(*date));
        }
        let mut new_date = *date;
        match days.cmp(&0_i32) {
            Ordering::Equal => {}
            Ordering::Less => {
                for _ in days..0 {
                    if new_date <= self.start() {
                        return Err(CalendarError::NoBusinessDayFound {
                            date: *date,
                            bound: self.start(),
                        });
                    }
                    new_date = self
                        .previous_bus_day(&(new_date - Days::new(1)))
                        .map_err(|_| CalendarError::NoBusinessDayFound {
                            date: *date,
                            bound: self.start(),
                        })?;
                }
            }
            Ordering::Greater => {
                for _ in 0..days {
                    if new_date >= self.end() {
                        return Err(CalendarError::NoBusinessDayFound {
                            date: *date,
                            bound: self.end(),
                        });
                    }
                    new_date = self
                        .next_bus_day(&(new_date + Days::new(1)))
                        .map_err(|_| CalendarError::NoBusinessDayFound {
                            date: *date,
                            bound: self.end(),
                        })?;
                }
            }
        }
        Ok(new_date)
    }

    /// Return a vector of calendar dates between a start and end, inclusive.
    fn cal_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Vec<NaiveDate>> {
        if start > end {
            return Err(CalendarError::InvalidRange {
                start: *start,
                end: *end,
            });
        }
        self.check_range(start)?;
        self.check_range(end)?;
        Ok(start.iter_days().take_while(|d| d <= end).collect())
    }

    /// Return a vector of business dates between a start and end, inclusive.
    fn bus_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Result<Vec<NaiveDate>> {
        let mut vec = Vec::new();
        for date in self.cal_date_range(start, end)? {
            if self.is_bus_day(&date)? {
                vec.push(date);
            }
        }
        Ok(vec)
    }

    /// Print a representation of the month of the object.
    ///
    /// Fails with [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 or the month
    /// cannot be represented as a date.
    fn print_month(&self, year: i32, month: u8) -> Result<String> {
        let first = NaiveDate::from_ymd_opt(year, month.into(), 1)
            .ok_or(CalendarError::InvalidMonth { year, month })?;
        let names = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let mut output = format!("{:>20}\n", format!("{} {}", names[first.month0() as usize], year));
        output += "Su Mo Tu We Th Fr Sa\n";

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        let idx_start = first.weekday().num_days_from_sunday() as usize;
        let dates = first.iter_days().take_while(|d| d.month() == first.month());
        for (i, date) in dates.enumerate() {
            arr[i + idx_start] = match self.is_bus_day(&date) {
                Ok(true) => format!("{:>2}", date.day()),
                Ok(false) if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) => {
                    " .".to_string()
                }
                Ok(false) => " *".to_string(),
                Err(_) => " -".to_string(),
            };
        }

        for row in arr.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        Ok(output)
    }

    /// Print a representation of a year of the object.
    ///
    /// Fails with [`CalendarError::InvalidMonth`] if any month of `year` cannot be represented.
    fn print_year(&self, year: i32) -> Result<String> {
        let data: Vec<Vec<String>> = (1..13)
            .map(|m| {
                Ok(self
                    .print_month(year, m)?
                    .lines()
                    .map(|s| s.to_string())
                    .collect())
            })
            .collect::<Result<_>>()?;
        let mut output = "\n".to_string();
        for quarter_row in 0..3 {
            for i in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[quarter_row][i],
                    data[quarter_row + 3][i],
                    data[quarter_row + 6][i],
                    data[quarter_row + 9][i]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Business day                    '-': Outside of calendar range\n";
        output += "   '.': Non-business weekend            '*': Non-business day\n";
        Ok(output)
    }
}
