use std::time::Duration;

use chrono_tz::Tz;
use ledger::LedgerStore;
use supervisor::RestartPolicy;
use teloxide::types::UserId;

mod settings;
mod supervisor;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ledgerbot={level},telegram_bot={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    let timezone: Tz = settings
        .ledger
        .timezone
        .parse()
        .map_err(|err| format!("invalid timezone {:?}: {err}", settings.ledger.timezone))?;

    let store = LedgerStore::open(&settings.ledger.path)?;

    let bot = telegram_bot::Bot::builder()
        .token(&settings.telegram.token)
        .allowed_users(
            settings
                .telegram
                .allowed_users
                .iter()
                .copied()
                .map(UserId)
                .collect(),
        )
        .store(store)
        .timezone(timezone)
        .build()?;

    let policy = RestartPolicy {
        max_restarts: settings.app.max_restarts,
        base_backoff: Duration::from_secs(settings.app.restart_backoff_secs),
    };

    let bot = &bot;
    supervisor::supervise(policy, || bot.run()).await?;

    Ok(())
}
