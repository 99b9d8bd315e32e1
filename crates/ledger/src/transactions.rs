use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Date format used in the ledger file and in the spreadsheet export.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Kind derived from the sign of a user supplied amount: negative amounts
    /// are expenses, everything else is income.
    pub fn from_signed(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            Self::Expense
        } else {
            Self::Income
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger record.
///
/// `amount` is always strictly positive; the sign lives in `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "amount_format")]
    pub amount: Decimal,
    pub category: String,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        category: &str,
        date: NaiveDate,
    ) -> Result<Self, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(format!(
                "{amount} must be greater than zero"
            )));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::EmptyCategory);
        }

        Ok(Self {
            kind,
            amount,
            category: category.to_string(),
            date,
        })
    }

    /// Builds a transaction from a signed amount, storing its magnitude.
    pub fn from_signed(amount: Decimal, category: &str, date: NaiveDate) -> Result<Self, LedgerError> {
        Self::new(TransactionKind::from_signed(amount), amount.abs(), category, date)
    }

    /// Amount with the sign recovered from the kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Expense => -self.amount,
            TransactionKind::Income => self.amount,
        }
    }
}

/// Amounts are written as bare JSON numbers carrying the exact decimal text,
/// so nothing is lost to `f64` on the way to disk and back.
mod amount_format {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
    use serde_json::value::RawValue;

    pub(super) fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = RawValue::from_string(amount.to_string()).map_err(ser::Error::custom)?;
        raw.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get().trim().trim_matches('"');
        crate::parse_amount(text).map_err(de::Error::custom)
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub(super) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn negative_amount_is_expense_with_magnitude() {
        let tx = Transaction::from_signed(dec!(-150), "groceries", day()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, dec!(150));
        assert_eq!(tx.signed_amount(), dec!(-150));
    }

    #[test]
    fn positive_amount_is_income() {
        let tx = Transaction::from_signed(dec!(200), "salary", day()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.signed_amount(), dec!(200));
    }

    #[test]
    fn rejects_zero_and_empty_category() {
        assert!(matches!(
            Transaction::from_signed(dec!(0), "x", day()),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(
            Transaction::from_signed(dec!(5), "   ", day()),
            Err(LedgerError::EmptyCategory)
        );
    }

    #[test]
    fn serializes_with_day_first_date() {
        let tx = Transaction::from_signed(dec!(-12.5), "coffee bar", day()).unwrap();
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(
            json,
            r#"{"type":"expense","amount":12.5,"category":"coffee bar","date":"07.03.2024"}"#
        );
    }

    #[test]
    fn amounts_are_written_without_rounding() {
        let tx = Transaction::from_signed(dec!(12345678901234567.89), "house", day()).unwrap();
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains(r#""amount":12345678901234567.89"#), "{json}");

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount, dec!(12345678901234567.89));
    }

    #[test]
    fn reads_amounts_in_exponent_form() {
        let raw = r#"{"type": "expense", "amount": 1.5e+3, "category": "rent", "date": "01.12.2023"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.amount, dec!(1500));
    }

    #[test]
    fn deserializes_float_amounts() {
        let raw = r#"{"type": "income", "amount": 200.0, "category": "salary", "date": "01.12.2023"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.amount, dec!(200));
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }
}
