//! Message routing.
//!
//! Text messages are either one of the menu buttons or an attempt to record a
//! transaction. Slash commands are handled by [`start`]; unknown ones are
//! ignored.

use teloxide::prelude::*;

use crate::{ConfigParameters, ui, ui::MenuAction};

pub(crate) mod entry;
pub(crate) mod exports;
pub(crate) mod start;
pub(crate) mod statistics;

/// Where a text message should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Menu(MenuAction),
    UnknownCommand,
    Entry,
}

pub(crate) fn classify(text: &str) -> Route {
    if let Some(action) = MenuAction::from_label(text) {
        return Route::Menu(action);
    }
    if text.trim_start().starts_with('/') {
        return Route::UnknownCommand;
    }
    Route::Entry
}

pub(crate) async fn handle_message(
    bot: Bot,
    msg: Message,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let Some(from) = msg.from.as_ref() else {
        bot.send_message(msg.chat.id, ui::UNKNOWN_USER).await?;
        return Ok(());
    };
    let user_id = from.id.to_string();
    let chat_id = msg.chat.id;

    let route = classify(text);
    tracing::debug!("routing message from {user_id} to {route:?}");

    match route {
        Route::Menu(MenuAction::Statistics) => {
            statistics::send_totals(&bot, chat_id, &cfg, &user_id).await
        }
        Route::Menu(MenuAction::MonthlyStatistics) => {
            statistics::send_monthly(&bot, chat_id, &cfg, &user_id).await
        }
        Route::Menu(MenuAction::Export) => exports::send_export(&bot, chat_id, &cfg, &user_id).await,
        Route::UnknownCommand => Ok(()),
        Route::Entry => entry::handle_entry(&bot, chat_id, &cfg, &user_id, text).await,
    }
}

/// Filter for the dispatcher: drops updates from users outside the
/// configured whitelist.
pub(crate) fn is_allowed_message(msg: Message, cfg: ConfigParameters) -> bool {
    let allowed = is_allowed(cfg.allowed_users.as_deref(), msg.from.as_ref().map(|user| user.id));
    if !allowed {
        tracing::debug!("ignoring message from unauthorized chat {}", msg.chat.id);
    }
    allowed
}

/// `None` disables the whitelist. With a whitelist, updates without a sender
/// are rejected.
fn is_allowed(allowed_users: Option<&[UserId]>, from: Option<UserId>) -> bool {
    match allowed_users {
        None => true,
        Some(ids) => from.is_some_and(|from| ids.contains(&from)),
    }
}
