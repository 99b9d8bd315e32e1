use rust_decimal::Decimal;

/// A transaction typed by the user, before it is dated and stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EntryDraft {
    /// Signed amount: negative for expenses.
    pub amount: Decimal,
    pub category: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("empty message")]
    Empty,
    #[error("missing category")]
    MissingCategory,
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
}

/// Parses `"<amount> <category>"`.
///
/// The amount is the first whitespace separated token, the category is the
/// trimmed remainder and may contain spaces. Zero amounts are rejected.
pub(crate) fn parse_entry(input: &str) -> Result<EntryDraft, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (amount_str, category) = trimmed
        .split_once(char::is_whitespace)
        .ok_or(ParseError::MissingCategory)?;

    let category = category.trim();
    if category.is_empty() {
        return Err(ParseError::MissingCategory);
    }

    let amount = ledger::parse_amount(amount_str)
        .map_err(|_| ParseError::InvalidAmount(amount_str.to_string()))?;
    if amount.is_zero() {
        return Err(ParseError::InvalidAmount(amount_str.to_string()));
    }

    Ok(EntryDraft {
        amount,
        category: category.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_amount_and_category() {
        let parsed = parse_entry("-150 groceries").unwrap();
        assert_eq!(parsed.amount, dec!(-150));
        assert_eq!(parsed.category, "groceries");
    }

    #[test]
    fn category_keeps_inner_spaces() {
        let parsed = parse_entry("  12,50   coffee at the bar  ").unwrap();
        assert_eq!(parsed.amount, dec!(12.5));
        assert_eq!(parsed.category, "coffee at the bar");
    }

    #[test]
    fn single_token_is_missing_category() {
        assert_eq!(parse_entry("150"), Err(ParseError::MissingCategory));
        assert_eq!(parse_entry("groceries"), Err(ParseError::MissingCategory));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        assert_eq!(
            parse_entry("lots groceries"),
            Err(ParseError::InvalidAmount("lots".to_string()))
        );
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            parse_entry("0 nothing"),
            Err(ParseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn blank_text_is_empty() {
        assert_eq!(parse_entry("   "), Err(ParseError::Empty));
    }
}
