use chrono::{Datelike, NaiveDate};

use crate::ledger::{Transaction, TransactionStore};

/// One day's records together with their net total. `transactions` keep the
/// store's insertion order.
#[derive(Debug, Clone)]
pub struct DayTotal {
    pub transactions: Vec<Transaction>,
    pub total: i64,
}

/// One category's slice of a monthly recap. `transactions` keep the
/// newest-first order the recap list shows by default.
#[derive(Debug, Clone)]
pub struct CategoryRollup {
    pub category: String,
    pub total: i64,
    pub transactions: Vec<Transaction>,
}

impl CategoryRollup {
    /// Records re-ordered by absolute amount for display. The sort is stable,
    /// so records of equal magnitude keep the newest-first base order.
    pub fn transactions_by_magnitude(&self, ascending: bool) -> Vec<&Transaction> {
        let mut records: Vec<&Transaction> = self.transactions.iter().collect();
        if ascending {
            records.sort_by_key(|txn| txn.amount.abs());
        } else {
            records.sort_by(|a, b| b.amount.abs().cmp(&a.amount.abs()));
        }
        records
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// Zero-based month slot, January = 0, matching how the annual view
    /// indexes its rows.
    pub month_index: u32,
    pub total: i64,
}

/// Net sum of the given records. Income is stored positive and expenses
/// negative, so a plain sum is the balance.
pub fn overall_total<'a, I>(transactions: I) -> i64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(|txn| txn.amount).sum()
}

/// The records on `day` plus their net total, recomputed from the store on
/// every call.
pub fn day_total(store: &TransactionStore, day: NaiveDate) -> DayTotal {
    let transactions: Vec<Transaction> = store.by_day(day).into_iter().cloned().collect();
    let total = overall_total(&transactions);
    DayTotal {
        transactions,
        total,
    }
}

pub fn month_total(store: &TransactionStore, year: i32, month: u32) -> i64 {
    overall_total(store.by_month(year, month))
}

pub fn year_total(store: &TransactionStore, year: i32) -> i64 {
    overall_total(store.by_year(year))
}

/// Groups one month's records by category. Groups are ordered by absolute
/// total, largest first; categories with equal absolute totals keep the
/// order in which they first appear in the store. Records inside a group
/// are newest first.
pub fn category_rollup(store: &TransactionStore, year: i32, month: u32) -> Vec<CategoryRollup> {
    let mut groups: Vec<CategoryRollup> = Vec::new();
    for txn in store.by_month(year, month) {
        match groups.iter_mut().find(|group| group.category == txn.category) {
            Some(group) => {
                group.total += txn.amount;
                group.transactions.push(txn.clone());
            }
            None => groups.push(CategoryRollup {
                category: txn.category.clone(),
                total: txn.amount,
                transactions: vec![txn.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.transactions.sort_by(|a, b| b.date.cmp(&a.date));
    }
    groups.sort_by(|a, b| b.total.abs().cmp(&a.total.abs()));
    groups
}

/// Twelve totals for the year, one per month slot, zero where no records
/// exist.
pub fn monthly_rollup(store: &TransactionStore, year: i32) -> Vec<MonthlyTotal> {
    let mut months: Vec<MonthlyTotal> = (0..12)
        .map(|month_index| MonthlyTotal {
            month_index,
            total: 0,
        })
        .collect();
    for txn in store.by_year(year) {
        months[txn.date.month0() as usize].total += txn.amount;
    }
    months
}
