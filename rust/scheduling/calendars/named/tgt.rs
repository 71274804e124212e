//! TARGET2 closing days for euro settlement: New Year's Day, Good Friday, Easter Monday,
//! Labour Day, Christmas Day and St. Stephen's Day.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const HOLIDAYS: &[&str] = &[
    "2015-01-01", "2015-04-03", "2015-04-06",
    "2015-05-01", "2015-12-25", "2015-12-26",
    "2016-01-01", "2016-03-25", "2016-03-28",
    "2016-05-01", "2016-12-25", "2016-12-26",
    "2017-01-01", "2017-04-14", "2017-04-17",
    "2017-05-01", "2017-12-25", "2017-12-26",
    "2018-01-01", "2018-03-30", "2018-04-02",
    "2018-05-01", "2018-12-25", "2018-12-26",
    "2019-01-01", "2019-04-19", "2019-04-22",
    "2019-05-01", "2019-12-25", "2019-12-26",
    "2020-01-01", "2020-04-10", "2020-04-13",
    "2020-05-01", "2020-12-25", "2020-12-26",
    "2021-01-01", "2021-04-02", "2021-04-05",
    "2021-05-01", "2021-12-25", "2021-12-26",
    "2022-01-01", "2022-04-15", "2022-04-18",
    "2022-05-01", "2022-12-25", "2022-12-26",
    "2023-01-01", "2023-04-07", "2023-04-10",
    "2023-05-01", "2023-12-25", "2023-12-26",
    "2024-01-01", "2024-03-29", "2024-04-01",
    "2024-05-01", "2024-12-25", "2024-12-26",
    "2025-01-01", "2025-04-18", "2025-04-21",
    "2025-05-01", "2025-12-25", "2025-12-26",
    "2026-01-01", "2026-04-03", "2026-04-06",
    "2026-05-01", "2026-12-25", "2026-12-26",
    "2027-01-01", "2027-03-26", "2027-03-29",
    "2027-05-01", "2027-12-25", "2027-12-26",
    "2028-01-01", "2028-04-14", "2028-04-17",
    "2028-05-01", "2028-12-25", "2028-12-26",
    "2029-01-01", "2029-03-30", "2029-04-02",
    "2029-05-01", "2029-12-25", "2029-12-26",
    "2030-01-01", "2030-04-19", "2030-04-22",
    "2030-05-01", "2030-12-25", "2030-12-26",
];
