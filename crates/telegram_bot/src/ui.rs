use ledger::{CategoryTotals, ExportError, MonthlyTotals, Transaction, format_amount};
use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::parsing::ParseError;

pub(crate) const NO_DATA: &str = "No data to display.";
pub(crate) const NO_EXPORT_DATA: &str = "No data to export yet. Record an expense or income first.";
pub(crate) const UNKNOWN_USER: &str = "Unable to identify the user.";
pub(crate) const TOTALS_TOO_LARGE: &str = "The totals are too large to compute.";

/// The buttons of the reply keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Statistics,
    MonthlyStatistics,
    Export,
}

impl MenuAction {
    pub(crate) const ALL: [MenuAction; 3] = [
        MenuAction::Statistics,
        MenuAction::MonthlyStatistics,
        MenuAction::Export,
    ];

    pub(crate) const fn label(self) -> &'static str {
        match self {
            MenuAction::Statistics => "Statistics",
            MenuAction::MonthlyStatistics => "Statistics by month",
            MenuAction::Export => "Export",
        }
    }

    /// Exact match on a button label.
    pub(crate) fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == text)
    }
}

pub(crate) fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(MenuAction::Statistics.label()),
            KeyboardButton::new(MenuAction::MonthlyStatistics.label()),
        ],
        vec![KeyboardButton::new(MenuAction::Export.label())],
    ])
    .resize_keyboard()
}

pub(crate) fn welcome_text() -> &'static str {
    "Hi! I keep track of your expenses and income.\n\nSend an amount followed by a category, for example:\n\n-150 groceries\n200 salary\n\nNegative amounts are expenses, the others are income. Use the menu for statistics and export."
}

pub(crate) fn help_text(commands: &str) -> String {
    format!(
        "{commands}\n\nTo record a transaction send \"<amount> <category>\":\n\n-12.50 coffee at the bar\n-150 groceries\n1000 salary\n\nBoth . and , work as decimal separator."
    )
}

pub(crate) fn render_parse_error(err: &ParseError) -> String {
    format!(
        "Input error: {err}. Send the amount and the category separated by a space, e.g. \"-150 groceries\"."
    )
}

pub(crate) fn render_recorded(tx: &Transaction) -> String {
    format!(
        "Added {}: {} in category '{}'",
        tx.kind,
        format_amount(tx.amount),
        tx.category
    )
}

pub(crate) fn render_totals(totals: Option<&CategoryTotals>) -> String {
    let Some(totals) = totals else {
        return NO_DATA.to_string();
    };

    let mut text = format!(
        "Total balance: {}\nBy category:",
        format_amount(totals.balance)
    );
    for (category, amount) in &totals.categories {
        text.push_str(&format!("\n{category}: {}", format_amount(*amount)));
    }
    text
}

pub(crate) fn render_monthly(monthly: Option<&MonthlyTotals>) -> String {
    let Some(monthly) = monthly else {
        return NO_DATA.to_string();
    };

    let mut blocks = Vec::with_capacity(monthly.months.len());
    for (month, categories) in &monthly.months {
        let mut block = format!("📅 {month}");
        for (category, amount) in categories {
            block.push_str(&format!("\n  {category}: {amount:.2}"));
        }
        blocks.push(block);
    }
    blocks.join("\n\n")
}

pub(crate) fn render_export_error(err: &ExportError) -> &'static str {
    match err {
        ExportError::NoData => NO_EXPORT_DATA,
        ExportError::Unrepresentable(_) => "Some transactions cannot be written to a spreadsheet.",
        ExportError::Xlsx(_) => "Export failed. Please try again later.",
    }
}
