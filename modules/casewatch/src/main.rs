use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use casewatch::{
    fetcher::HttpFetcher,
    notify::{backend::NotifyBackend, noop::NoopBackend, telegram::TelegramNotifier},
    scheduler::Scheduler,
    store::RecordStore,
    watcher::Watcher,
    Config,
};
use telegram_client::TelegramClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("casewatch=info".parse()?))
        .init();

    info!("casewatch starting...");

    // Missing credentials abort here, before anything is scheduled
    let config = Config::from_env()?;

    let store = RecordStore::new(&config.state_path);
    let baseline = store.load_or_default().await;

    let fetcher = HttpFetcher::new(config.request_timeout)?;

    let notifier: Box<dyn NotifyBackend> = if config.dry_run {
        Box::new(NoopBackend)
    } else {
        let client = TelegramClient::new(&config.telegram_key, config.request_timeout)?;
        Box::new(TelegramNotifier::new(client, config.destination()))
    };

    let mut watcher = Watcher::new(
        config.source_url.clone(),
        Box::new(fetcher),
        notifier,
        store,
        baseline,
    );
    if config.dry_run {
        watcher = watcher.dry_run();
    }

    let scheduler = Scheduler::new(config.poll_interval);
    tokio::select! {
        _ = scheduler.run(&mut watcher) => {}
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }

    Ok(())
}
