//! A calendar in which every date is a business day.

pub const WEEKMASK: &[u8] = &[]; // no weekend

pub const HOLIDAYS: &[&str] = &[]; // no specific holidays
