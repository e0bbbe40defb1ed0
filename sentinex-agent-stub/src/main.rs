use sentinex_agent_stub::{Scenario, bind_addr, serve};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentinex_agent_stub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sentinex agent stub...");

    let scenario = Scenario::from_env();
    tracing::info!("Scenario: {:?}", scenario);

    serve(&bind_addr(), scenario).await
}
