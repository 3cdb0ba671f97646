//! Calendar page building blocks: the visible day range, the national
//! holiday table, and recap aggregation over the store.

pub mod holiday;
pub mod range;
pub mod recap;

pub use holiday::{holiday_on, holidays_in_range, Holiday};
pub use range::{
    days_in_month, first_visible_day, is_leap_year, last_visible_day, month_name, next_month,
    previous_month, visible_days,
};
pub use recap::{
    category_rollup, day_total, month_total, monthly_rollup, overall_total, year_total,
    CategoryRollup, DayTotal, MonthlyTotal,
};
