//! Handler for user statistics

use ledger::{LedgerError, Transaction, totals_by_category, totals_by_month};
use teloxide::prelude::*;

use crate::{ConfigParameters, ui};

pub(crate) async fn send_totals(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    user_id: &str,
) -> ResponseResult<()> {
    let transactions = cfg.store.transactions(user_id).await;

    bot.send_message(chat_id, totals_reply(&transactions)).await?;
    Ok(())
}

pub(crate) async fn send_monthly(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    user_id: &str,
) -> ResponseResult<()> {
    let transactions = cfg.store.transactions(user_id).await;

    bot.send_message(chat_id, monthly_reply(&transactions)).await?;
    Ok(())
}

fn totals_reply(transactions: &[Transaction]) -> String {
    match totals_by_category(transactions) {
        Ok(totals) => ui::render_totals(totals.as_ref()),
        Err(err) => report_failed(&err),
    }
}

fn monthly_reply(transactions: &[Transaction]) -> String {
    match totals_by_month(transactions) {
        Ok(monthly) => ui::render_monthly(monthly.as_ref()),
        Err(err) => report_failed(&err),
    }
}

fn report_failed(err: &LedgerError) -> String {
    tracing::warn!("cannot compute statistics: {err}");
    ui::TOTALS_TOO_LARGE.to_string()
}
