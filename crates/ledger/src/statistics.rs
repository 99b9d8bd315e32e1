//! Reporting over a user's transaction history.
//!
//! Both reports return `None` for an empty history and
//! [`LedgerError::Overflow`] when a sum does not fit in a [`Decimal`].
//!
//! Category sums add the stored (always positive) amounts regardless of kind,
//! while [`CategoryTotals::balance`] is signed. The two figures therefore do
//! not net against each other.

use std::{collections::BTreeMap, fmt};

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{LedgerError, Transaction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotals {
    /// Income minus expenses.
    pub balance: Decimal,
    /// Raw stored amounts per category, in first-seen order.
    pub categories: IndexMap<String, Decimal>,
}

/// Calendar month a transaction falls in. Orders chronologically and
/// displays as `YYYY.MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}.{:02}", self.year, self.month)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyTotals {
    /// Months ascending; categories inside a month in first-seen order.
    pub months: BTreeMap<MonthKey, IndexMap<String, Decimal>>,
}

pub fn totals_by_category(
    transactions: &[Transaction],
) -> Result<Option<CategoryTotals>, LedgerError> {
    if transactions.is_empty() {
        return Ok(None);
    }

    let mut balance = Decimal::ZERO;
    let mut categories: IndexMap<String, Decimal> = IndexMap::new();
    for tx in transactions {
        balance = checked_sum(balance, tx.signed_amount(), "balance")?;
        let total = categories.entry(tx.category.clone()).or_default();
        *total = checked_sum(*total, tx.amount, &tx.category)?;
    }

    Ok(Some(CategoryTotals {
        balance,
        categories,
    }))
}

pub fn totals_by_month(transactions: &[Transaction]) -> Result<Option<MonthlyTotals>, LedgerError> {
    if transactions.is_empty() {
        return Ok(None);
    }

    let mut months: BTreeMap<MonthKey, IndexMap<String, Decimal>> = BTreeMap::new();
    for tx in transactions {
        let total = months
            .entry(MonthKey::from(tx.date))
            .or_default()
            .entry(tx.category.clone())
            .or_default();
        *total = checked_sum(*total, tx.amount, &tx.category)?;
    }

    Ok(Some(MonthlyTotals { months }))
}

fn checked_sum(total: Decimal, amount: Decimal, what: &str) -> Result<Decimal, LedgerError> {
    total
        .checked_add(amount)
        .ok_or_else(|| LedgerError::Overflow(what.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, category: &str, y: i32, m: u32, d: u32) -> Transaction {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Transaction::from_signed(amount, category, date).unwrap()
    }

    #[test]
    fn empty_history_has_no_totals() {
        assert_eq!(totals_by_category(&[]), Ok(None));
        assert_eq!(totals_by_month(&[]), Ok(None));
    }

    #[test]
    fn balance_is_signed_and_categories_are_raw() {
        let txs = vec![
            tx(dec!(-150), "groceries", 2024, 5, 1),
            tx(dec!(200), "salary", 2024, 5, 2),
            tx(dec!(-50), "groceries", 2024, 5, 3),
            tx(dec!(30), "groceries", 2024, 5, 4),
        ];

        let totals = totals_by_category(&txs).unwrap().unwrap();
        assert_eq!(totals.balance, dec!(30));
        assert_eq!(totals.categories["groceries"], dec!(230));
        assert_eq!(totals.categories["salary"], dec!(200));
        assert_eq!(
            totals.categories.keys().collect::<Vec<_>>(),
            vec!["groceries", "salary"]
        );
    }

    #[test]
    fn months_are_ascending_regardless_of_input_order() {
        let txs = vec![
            tx(dec!(-10), "food", 2024, 11, 3),
            tx(dec!(-20), "rent", 2023, 12, 30),
            tx(dec!(-5), "food", 2024, 2, 1),
            tx(dec!(-7), "food", 2024, 11, 20),
        ];

        let monthly = totals_by_month(&txs).unwrap().unwrap();
        let keys: Vec<String> = monthly.months.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["2023.12", "2024.02", "2024.11"]);

        let november = &monthly.months[&MonthKey {
            year: 2024,
            month: 11,
        }];
        assert_eq!(november["food"], dec!(17));
    }

    #[test]
    fn categories_keep_first_seen_order_within_month() {
        let txs = vec![
            tx(dec!(-1), "zeta", 2024, 1, 1),
            tx(dec!(-1), "alpha", 2024, 1, 2),
            tx(dec!(-1), "zeta", 2024, 1, 3),
        ];

        let monthly = totals_by_month(&txs).unwrap().unwrap();
        let january = &monthly.months[&MonthKey {
            year: 2024,
            month: 1,
        }];
        assert_eq!(january.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn overflowing_sums_are_reported_not_panicking() {
        let txs = vec![
            tx(Decimal::MAX, "big", 2024, 1, 1),
            tx(Decimal::MAX, "big", 2024, 1, 2),
        ];

        assert_eq!(
            totals_by_category(&txs),
            Err(LedgerError::Overflow("balance".to_string()))
        );
        assert_eq!(
            totals_by_month(&txs),
            Err(LedgerError::Overflow("big".to_string()))
        );
    }

    #[test]
    fn overflow_in_a_category_is_reported() {
        let txs = vec![
            tx(-Decimal::MAX, "big", 2024, 1, 1),
            tx(Decimal::MAX, "big", 2024, 1, 2),
        ];

        // The balance nets to zero but the unsigned category sum overflows.
        assert_eq!(
            totals_by_category(&txs),
            Err(LedgerError::Overflow("big".to_string()))
        );
    }
}
