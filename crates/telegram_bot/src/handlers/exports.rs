//! Handler for exporting user data

use ledger::{EXPORT_FILE_NAME, ExportError, export_xlsx};
use teloxide::{prelude::*, types::InputFile};

use crate::{ConfigParameters, ui};

pub(crate) async fn send_export(
    bot: &Bot,
    chat_id: ChatId,
    cfg: &ConfigParameters,
    user_id: &str,
) -> ResponseResult<()> {
    let transactions = cfg.store.transactions(user_id).await;

    match export_xlsx(&transactions) {
        Ok(data) => {
            bot.send_document(chat_id, InputFile::memory(data).file_name(EXPORT_FILE_NAME))
                .await?;
        }
        Err(err) => {
            if !matches!(err, ExportError::NoData) {
                tracing::error!("failed to export transactions of user {user_id}: {err}");
            }
            bot.send_message(chat_id, ui::render_export_error(&err))
                .reply_markup(ui::main_menu())
                .await?;
        }
    }

    Ok(())
}
