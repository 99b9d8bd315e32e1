//! Handler for the /start and /help commands

use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateHandler},
    prelude::*,
    utils::command::BotCommands,
};

use crate::{commands::MenuCommands, ui};

/// Build the schema for `MenuCommands` commands
pub fn schema() -> UpdateHandler<RequestError> {
    dptree::entry()
        .filter_command::<MenuCommands>()
        .endpoint(handle_menu_command)
}

async fn handle_menu_command(bot: Bot, msg: Message, cmd: MenuCommands) -> ResponseResult<()> {
    let text = match cmd {
        MenuCommands::Start => ui::welcome_text().to_string(),
        MenuCommands::Help => ui::help_text(&MenuCommands::descriptions().to_string()),
    };

    bot.send_message(msg.chat.id, text)
        .reply_markup(ui::main_menu())
        .await?;

    Ok(())
}
