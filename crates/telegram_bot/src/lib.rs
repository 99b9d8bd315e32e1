//! Telegram bot.
//!
//! The bot owns no data: every handler receives the shared
//! [`LedgerStore`] through the dispatcher dependencies and goes through it for
//! reads and appends.

use chrono_tz::Tz;
use ledger::LedgerStore;
use teloxide::{
    RequestError, dispatching::UpdateHandler, prelude::*, utils::command::BotCommands,
};
use thiserror::Error;

mod commands;
mod handlers;
mod parsing;
mod ui;

#[derive(Clone)]
pub struct ConfigParameters {
    allowed_users: Option<Vec<UserId>>,
    store: LedgerStore,
    timezone: Tz,
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("missing telegram token")]
    MissingToken,
    #[error("missing ledger store")]
    MissingStore,
    #[error(transparent)]
    Request(#[from] RequestError),
}

pub struct Bot {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    store: LedgerStore,
    timezone: Tz,
}

impl Bot {
    pub fn new(
        token: &str,
        allowed_users: Option<Vec<UserId>>,
        store: LedgerStore,
        timezone: Tz,
    ) -> Result<Self, BotError> {
        if token.trim().is_empty() {
            return Err(BotError::MissingToken);
        }

        Ok(Self {
            token: token.to_string(),
            allowed_users,
            store,
            timezone,
        })
    }

    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    /// Serves updates until the dispatcher is shut down.
    ///
    /// The token is checked with `getMe` first, so an invalid credential is
    /// returned as an error instead of failing inside the polling loop.
    pub async fn run(&self) -> Result<(), BotError> {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let me = bot.get_me().await?;
        tracing::info!("Authorized as @{}", me.username());

        if let Err(err) = bot
            .set_my_commands(commands::MenuCommands::bot_commands())
            .await
        {
            tracing::warn!("failed to register bot commands: {err}");
        }

        let parameters = ConfigParameters {
            allowed_users: self.allowed_users.clone(),
            store: self.store.clone(),
            timezone: self.timezone,
        };

        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        tracing::info!("Telegram bot stopped");
        Ok(())
    }
}

fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter(handlers::is_allowed_message)
        .branch(handlers::start::schema())
        .branch(dptree::endpoint(handlers::handle_message))
}

#[derive(Default, Debug)]
pub struct BotBuilder {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    store: Option<LedgerStore>,
    timezone: Option<Tz>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn allowed_users(mut self, allowed_users: Vec<UserId>) -> BotBuilder {
        if !allowed_users.is_empty() {
            self.allowed_users = Some(allowed_users);
        }
        self
    }

    pub fn store(mut self, store: LedgerStore) -> BotBuilder {
        self.store = Some(store);
        self
    }

    /// Time zone used to date new transactions. Defaults to UTC.
    pub fn timezone(mut self, timezone: Tz) -> BotBuilder {
        self.timezone = Some(timezone);
        self
    }

    pub fn build(self) -> Result<Bot, BotError> {
        tracing::info!("Initializing telegram bot...");
        let store = self.store.ok_or(BotError::MissingStore)?;
        let timezone = self.timezone.unwrap_or(Tz::UTC);
        Bot::new(&self.token, self.allowed_users, store, timezone)
    }
}
