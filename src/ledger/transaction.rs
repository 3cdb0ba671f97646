use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{StoreError, StoreResult};

/// Category names the capture form offers by default. The store itself
/// accepts any non-empty category text.
pub const SUGGESTED_CATEGORIES: [&str; 5] =
    ["Makan", "Transportasi", "Gaji", "Hiburan", "Tagihan"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub amount: i64,
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    pub(crate) fn from_input(id: Uuid, input: TransactionInput) -> StoreResult<Self> {
        if input.category.trim().is_empty() {
            return Err(StoreError::Validation("Category must not be empty".into()));
        }
        let amount = input.normalized_amount()?;
        let title = input
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty());
        Ok(Self {
            id,
            date: input.date,
            title,
            amount,
            kind: input.kind,
            category: input.category,
        })
    }

    /// Calendar day the transaction falls on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Label shown for the record; falls back to the category when no title
    /// was captured.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.category)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }

    /// True when the stored sign agrees with the declared kind.
    pub fn sign_matches_kind(&self) -> bool {
        match self.kind {
            TransactionKind::Income => self.amount > 0,
            TransactionKind::Expense => self.amount < 0,
        }
    }

    /// Checks the invariants the store maintains for every held record.
    /// Records arriving from outside the store are re-checked with this
    /// before they are accepted.
    pub(crate) fn validate(&self) -> StoreResult<()> {
        if self.category.trim().is_empty() {
            return Err(StoreError::Validation(format!(
                "Transaction {} has an empty category",
                self.id
            )));
        }
        if self.amount == 0 {
            return Err(StoreError::Validation(format!(
                "Transaction {} has a zero amount",
                self.id
            )));
        }
        if self.amount.checked_abs().is_none() {
            return Err(StoreError::Validation(format!(
                "Transaction {} has an amount out of range",
                self.id
            )));
        }
        if !self.sign_matches_kind() {
            return Err(StoreError::Validation(format!(
                "Transaction {} has a sign that contradicts its kind",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Caller-facing payload for `add` and `update`. The amount carries the
/// magnitude the user entered; the stored sign is derived from `kind`.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub date: NaiveDateTime,
    pub title: Option<String>,
    pub amount: i64,
    pub kind: TransactionKind,
    pub category: String,
}

impl TransactionInput {
    pub fn new(
        date: NaiveDateTime,
        amount: i64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            title: None,
            amount,
            kind,
            category: category.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Signed amount the store persists: expenses negative, income positive,
    /// regardless of the sign the caller supplied.
    pub fn normalized_amount(&self) -> StoreResult<i64> {
        let magnitude = self
            .amount
            .checked_abs()
            .ok_or_else(|| StoreError::Validation("Amount is out of range".into()))?;
        if magnitude == 0 {
            return Err(StoreError::Validation("Amount must not be zero".into()));
        }
        Ok(match self.kind {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        })
    }
}
