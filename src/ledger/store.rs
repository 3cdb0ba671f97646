use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{StoreError, StoreResult};

use super::transaction::{Transaction, TransactionInput};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Owned, ordered collection of transactions. Every mutation goes through
/// validation, so records inside the store always carry a non-empty category
/// and an amount whose sign agrees with its kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionStore {
    #[serde(default)]
    transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "TransactionStore::schema_version_default")]
    pub schema_version: u8,
}

impl TransactionStore {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Validates the input, assigns a fresh id, and appends the record.
    /// Returns the stored transaction, sign already normalized.
    pub fn add(&mut self, input: TransactionInput) -> StoreResult<Transaction> {
        let transaction = Transaction::from_input(Uuid::new_v4(), input)?;
        self.transactions.push(transaction.clone());
        self.touch();
        Ok(transaction)
    }

    /// Replaces every field of the identified record except its id and
    /// returns the new version.
    pub fn update(&mut self, id: Uuid, input: TransactionInput) -> StoreResult<Transaction> {
        let position = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let replacement = Transaction::from_input(id, input)?;
        self.transactions[position] = replacement.clone();
        self.touch();
        Ok(replacement)
    }

    /// Removes the identified record, returning the removed instance.
    pub fn remove(&mut self, id: Uuid) -> StoreResult<Transaction> {
        let position = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.transactions.remove(position);
        self.touch();
        Ok(removed)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// All records in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn by_day(&self, day: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.day() == day)
            .collect()
    }

    pub fn by_month(&self, year: i32, month: u32) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.date.year() == year && txn.date.month() == month)
            .collect()
    }

    pub fn by_year(&self, year: i32) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.date.year() == year)
            .collect()
    }

    /// Owned copy of the full record list, suitable for backup files.
    pub fn export_snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Gate for records arriving from outside the store: the per-record
    /// invariants plus id uniqueness.
    pub(crate) fn validate_records(records: &[Transaction]) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for txn in records {
            txn.validate()?;
            if !seen.insert(txn.id) {
                return Err(StoreError::Validation(format!(
                    "Duplicate transaction id {}",
                    txn.id
                )));
            }
        }
        Ok(())
    }

    /// Replaces the store contents with the provided records. Every record is
    /// checked before anything changes; on failure the store is untouched.
    pub fn import_snapshot(&mut self, transactions: Vec<Transaction>) -> StoreResult<()> {
        Self::validate_records(&transactions)?;
        self.transactions = transactions;
        self.touch();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
