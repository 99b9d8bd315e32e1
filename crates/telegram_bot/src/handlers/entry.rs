//! Handler for recording transactions typed as free text

use chrono::{NaiveDate, Utc};
use ledger::{LedgerStore, Transaction};
use teloxide::prelude::*;

use crate::{ConfigParameters, parsing::parse_entry, ui};

pub(crate) async fn handle_entry(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    user_id: &str,
    text: &str,
) -> ResponseResult<()> {
    let today = Utc::now().with_timezone(&cfg.timezone).date_naive();
    let reply = record_entry(&cfg.store, user_id, text, today).await;

    bot.send_message(chat_id, reply)
        .reply_markup(ui::main_menu())
        .await?;

    Ok(())
}

/// Parses `text`, appends the transaction dated `today` and returns the reply
/// for the user. Nothing is stored when parsing fails.
pub(crate) async fn record_entry(
    store: &LedgerStore,
    user_id: &str,
    text: &str,
    today: NaiveDate,
) -> String {
    let draft = match parse_entry(text) {
        Ok(draft) => draft,
        Err(err) => {
            tracing::debug!("rejected entry from {user_id}: {err}");
            return ui::render_parse_error(&err);
        }
    };

    let transaction = match Transaction::from_signed(draft.amount, &draft.category, today) {
        Ok(tx) => tx,
        Err(err) => return format!("Invalid transaction: {err}"),
    };

    let reply = ui::render_recorded(&transaction);
    match store.append(user_id, transaction).await {
        Ok(()) => {
            tracing::info!("recorded transaction for user {user_id}");
            reply
        }
        Err(err) => {
            tracing::error!("failed to record transaction for user {user_id}: {err}");
            "Could not save the transaction. Please try again later.".to_string()
        }
    }
}
