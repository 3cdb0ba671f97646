use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Every day shown on the calendar page for the month containing
/// `reference`: whole weeks, so the result starts on `week_starts_on`,
/// covers the month, and its length is a multiple of seven. Padding days
/// belong to the neighbouring months; a month that already starts and ends
/// on week boundaries gets no padding at all.
pub fn visible_days(reference: NaiveDate, week_starts_on: Weekday) -> Vec<NaiveDate> {
    let first = first_visible_day(reference, week_starts_on);
    let last = last_visible_day(reference, week_starts_on);
    let mut days = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        days.push(cursor);
        cursor += Duration::days(1);
    }
    days
}

/// First cell of the grid: the `week_starts_on` on or before the first of
/// the month.
pub fn first_visible_day(reference: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let first_of_month = reference.with_day(1).unwrap();
    first_of_month - Duration::days(days_into_week(first_of_month.weekday(), week_starts_on))
}

/// Last cell of the grid: the end of the week containing the last day of
/// the month.
pub fn last_visible_day(reference: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let last_of_month = NaiveDate::from_ymd_opt(
        reference.year(),
        reference.month(),
        days_in_month(reference.year(), reference.month()),
    )
    .unwrap();
    last_of_month + Duration::days(6 - days_into_week(last_of_month.weekday(), week_starts_on))
}

fn days_into_week(day: Weekday, week_starts_on: Weekday) -> i64 {
    ((day.num_days_from_sunday() + 7 - week_starts_on.num_days_from_sunday()) % 7) as i64
}

/// Same day one month later, clamped to the shorter month's end.
pub fn next_month(reference: NaiveDate) -> NaiveDate {
    shift_months(reference, 1)
}

/// Same day one month earlier, clamped to the shorter month's end.
pub fn previous_month(reference: NaiveDate) -> NaiveDate {
    shift_months(reference, -1)
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
