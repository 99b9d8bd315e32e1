//! Command structs

use teloxide::utils::command::BotCommands;

/// Slash commands understood by the bot. Anything else is either a menu
/// button or a transaction.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum MenuCommands {
    #[command(description = "Show the welcome message and the menu.")]
    Start,
    #[command(description = "Show how to record expenses and income.")]
    Help,
}
