use anyhow::Result;
use todoist_mail_sync::{sync, Config, CookieFetcher, TodoistClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!("todoist-mail-sync starting");
    info!("task store: {}", config.base_url);
    info!("filter: {}", config.task_filter);

    let store = TodoistClient::new(&config)?;
    let attachments = CookieFetcher::new(&config);

    info!(
        "entering poll loop (interval: {}s)",
        config.poll_interval.as_secs()
    );
    sync::run(&store, &attachments, &config.task_filter, config.poll_interval).await;

    Ok(())
}
