//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use maid_easy::adapters::persistence::{MemoryRepo, SqliteRepo};
use maid_easy::adapters::ui::TuiInputPort;
use maid_easy::adapters::whatsapp::{CloudApiTransport, LinkTransport};
use maid_easy::ports::{DeliveryLogPort, HouseholdRepo, InputPort, MessageTransport};
use maid_easy::shared::config::AppConfig;
use maid_easy::usecases::{AutoSendService, MessagingService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// `data_dir` value that keeps everything in memory.
const IN_MEMORY: &str = ":memory:";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    maid_easy::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be read; using defaults");
        AppConfig::default()
    });

    // --- Phrase dictionary (built-in, plus optional user phrasebook) ---
    let dictionary = cfg
        .load_dictionary()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(phrases = dictionary.len(), "phrase dictionary ready");
    let dictionary = Arc::new(dictionary);

    // --- Storage ---
    let data_dir = cfg.data_dir_or_default();
    let (repo, delivery_log): (Arc<dyn HouseholdRepo>, Arc<dyn DeliveryLogPort>) =
        if data_dir == IN_MEMORY {
            warn!("MAID_EASY_DATA_DIR=:memory: nothing will be saved");
            let memory = Arc::new(MemoryRepo::new());
            (
                Arc::clone(&memory) as Arc<dyn HouseholdRepo>,
                memory as Arc<dyn DeliveryLogPort>,
            )
        } else {
            let sqlite = Arc::new(
                SqliteRepo::connect(&data_dir)
                    .await
                    .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?,
            );
            info!(path = %sqlite.path().display(), "household records on disk");
            (
                Arc::clone(&sqlite) as Arc<dyn HouseholdRepo>,
                sqlite as Arc<dyn DeliveryLogPort>,
            )
        };

    // --- Transport ---
    let transport: Arc<dyn MessageTransport> = if cfg.is_cloud_api_configured() {
        info!(
            url = %cfg.whatsapp_api_url_or_default(),
            "WhatsApp Cloud API transport enabled"
        );
        Arc::new(CloudApiTransport::new(
            cfg.whatsapp_api_url_or_default(),
            cfg.whatsapp_phone_number_id.clone().unwrap_or_default(),
            cfg.whatsapp_token.clone().unwrap_or_default(),
        ))
    } else {
        warn!("MAID_EASY_WHATSAPP_TOKEN not set, messages become wa.me links");
        Arc::new(LinkTransport::new())
    };

    // --- Services ---
    let messaging = Arc::new(MessagingService::new(
        Arc::clone(&repo),
        delivery_log,
        transport,
        dictionary,
    ));

    let offset = cfg.utc_offset();
    let tick_secs = cfg.scheduler_tick_secs_or_default();
    info!(tick_secs, %offset, "auto-send scheduler configured");
    let auto_send = Arc::new(AutoSendService::new(
        Arc::clone(&repo),
        Arc::clone(&messaging),
        offset,
        Duration::from_secs(tick_secs),
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        repo,
        messaging,
        auto_send,
        cfg.default_language(),
        offset,
    ));

    // --- Run (main menu) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
