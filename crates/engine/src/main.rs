//! Vida Loka Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidaloka_engine::infrastructure::clock::{SeededRandom, SystemClock, SystemRandom};
use vidaloka_engine::infrastructure::importers::JsonContentLoader;
use vidaloka_engine::infrastructure::messaging::LogMessageSender;
use vidaloka_engine::infrastructure::persistence::JsonFileStateStore;
use vidaloka_engine::infrastructure::ports::{ClockPort, RandomPort};
use vidaloka_engine::infrastructure::settings::EngineConfig;
use vidaloka_engine::stores::GameStore;
use vidaloka_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root, wherever the binary is started from.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidaloka_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vida Loka Engine");

    let config = EngineConfig::from_env();
    tracing::info!(
        state_path = %config.state_path.display(),
        content_dir = %config.content_dir.display(),
        interval_secs = config.event_interval.as_secs(),
        probability = config.rules.event_probability,
        "Configuration loaded"
    );

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let random: Arc<dyn RandomPort> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded randomness");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(SystemRandom::new()),
    };

    // Content files win over the catalog stored in the snapshot.
    let loader = JsonContentLoader::new(&config.content_dir);
    let catalog = if loader.validate_path() {
        Some(loader.load().await?)
    } else {
        tracing::warn!(
            dir = %config.content_dir.display(),
            "Content directory not found, using the catalog from saved state"
        );
        None
    };

    let persistence = Arc::new(JsonFileStateStore::new(&config.state_path));
    let store = Arc::new(GameStore::restore(persistence, catalog).await?);
    store.flush().await?;

    let sender = Arc::new(LogMessageSender::new(random.clone()));
    let app = App::new(store, clock, random, sender, &config);

    app.scheduler.start().await;
    tracing::info!("Engine running, press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");
    app.scheduler.stop().await;
    app.store.flush().await?;

    tracing::info!("Engine stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
