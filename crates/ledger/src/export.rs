//! Spreadsheet export of a user's transactions.

use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

use crate::{ExportError, Transaction};

pub const EXPORT_FILE_NAME: &str = "statistics.xlsx";
pub const EXPORT_SHEET_NAME: &str = "Statistics";

const HEADERS: [&str; 4] = ["type", "amount", "category", "date"];

/// Renders `transactions` as an xlsx workbook and returns its bytes.
///
/// One row per transaction under a bold header row, dates formatted
/// `dd.mm.yyyy`, an autofilter over the whole table and autofit columns.
pub fn export_xlsx(transactions: &[Transaction]) -> Result<Vec<u8>, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::NoData);
    }

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("dd.mm.yyyy");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    let mut last_row = 0u32;
    for (row, tx) in (1u32..).zip(transactions) {
        let date = excel_date(tx)?;
        let amount = tx
            .amount
            .to_f64()
            .ok_or_else(|| ExportError::Unrepresentable(format!("amount {}", tx.amount)))?;

        worksheet.write_string(row, 0, tx.kind.as_str())?;
        worksheet.write_number(row, 1, amount)?;
        worksheet.write_string(row, 2, &tx.category)?;
        worksheet.write_datetime_with_format(row, 3, &date, &date_format)?;
        last_row = row;
    }

    worksheet.autofilter(0, 0, last_row, (HEADERS.len() - 1) as u16)?;
    worksheet.autofit();

    tracing::debug!("exported {} transactions", transactions.len());
    Ok(workbook.save_to_buffer()?)
}

fn excel_date(tx: &Transaction) -> Result<ExcelDateTime, ExportError> {
    let out_of_range = || ExportError::Unrepresentable(format!("date {}", tx.date));
    let year = u16::try_from(tx.date.year()).map_err(|_| out_of_range())?;
    let month = u8::try_from(tx.date.month()).map_err(|_| out_of_range())?;
    let day = u8::try_from(tx.date.day()).map_err(|_| out_of_range())?;

    Ok(ExcelDateTime::from_ymd(year, month, day)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_history_is_no_data() {
        assert!(matches!(export_xlsx(&[]), Err(ExportError::NoData)));
    }

    #[test]
    fn produces_a_zip_container() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let txs = vec![
            Transaction::from_signed(dec!(-150), "groceries", date).unwrap(),
            Transaction::from_signed(dec!(200), "salary", date).unwrap(),
        ];

        let bytes = export_xlsx(&txs).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn dates_outside_u16_years_are_an_error() {
        let far = NaiveDate::from_ymd_opt(70_000, 1, 1).unwrap();
        let before_zero = NaiveDate::from_ymd_opt(-5, 1, 1).unwrap();

        for date in [far, before_zero] {
            let txs = vec![Transaction::from_signed(dec!(-1), "time travel", date).unwrap()];
            let err = export_xlsx(&txs).unwrap_err();
            assert!(
                matches!(&err, ExportError::Unrepresentable(msg) if msg.contains(&date.to_string())),
                "{err:?}"
            );
        }
    }
}
