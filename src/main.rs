//! DataBounty Server
//!
//! Serves the marketplace over HTTP

use std::sync::Arc;

use data_bounty::seed::{demo_users, seed_storage};
use data_bounty::server::{run_server, AppState};
use data_bounty::{AdvisoryService, Config, MarketStorage, Marketplace, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting DataBounty Server");

    let config = Config::load()?;

    let storage = Arc::new(MarketStorage::in_memory());
    let users = if config.marketplace.seed_demo_data {
        seed_storage(&storage);
        info!(
            "Seeded {} demo bounties",
            storage.get_total_bounties()
        );
        demo_users()
    } else {
        Vec::new()
    };

    let state = Arc::new(AppState::new(
        Marketplace::new(storage, config.marketplace.min_reward),
        Session::new(users),
        AdvisoryService::from_config(&config.advisory),
    ));

    run_server(&config.bind_addr(), state).await?;

    Ok(())
}
