//! `prodman` — open a view from the command line and print what it loaded.
//!
//! ```text
//! prodman /                      # product list
//! prodman / page=2 type=Books    # list with passthrough filters
//! prodman /edit id=3             # edit view for product 3
//! ```

use anyhow::Context;
use prodman_client::ClientConfig;
use prodman_core::ListQuery;
use prodman_frontend::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    prodman_observability::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/".to_string());
    let params = ListQuery::from_pairs(args).context("invalid view parameters")?;

    let config = ClientConfig::from_env().context("invalid backend configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout.as_millis() as u64,
        "backend configured"
    );

    let app = AppState::from_config(&config).context("failed to build HTTP client")?;
    let rendered = app
        .open(&path, params)
        .await
        .with_context(|| format!("failed to open `{path}`"))?;

    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
