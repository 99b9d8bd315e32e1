use std::str::FromStr;

use rust_decimal::Decimal;

use crate::LedgerError;

/// Parses a user supplied amount into a signed [`Decimal`].
///
/// Accepts `.` or `,` as decimal separator, an optional leading `+`/`-` and
/// scientific notation.
///
/// ```rust
/// use ledger::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("10,5").unwrap(), Decimal::new(105, 1));
/// assert_eq!(parse_amount("-150").unwrap(), Decimal::new(-150, 0));
/// assert!(parse_amount("ten").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount("empty amount".to_string()));
    }

    let normalized = trimmed.replace(',', ".");
    let unsigned = normalized.strip_prefix('+').unwrap_or(&normalized);

    let parsed = if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(unsigned)
    } else {
        Decimal::from_str(unsigned)
    };

    parsed.map_err(|_| LedgerError::InvalidAmount(format!("\"{trimmed}\" is not a number")))
}

/// Formats an amount the way replies and reports show it: trailing zeros are
/// dropped but at least one fractional digit is kept (`150` → `150.0`,
/// `12.50` → `12.5`).
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
