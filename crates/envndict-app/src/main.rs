use std::future::Future;

use anyhow::Context;
use envndict_config::Config;
use tokio::signal;

pub mod bootstrap;
pub mod controller;
pub mod events;
pub mod logging;
pub mod state;


use self::bootstrap::Bootstrap;
use self::controller::AppController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;
    logging::init(config.log_format);

    let app = bootstrap::build(&config).await?;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(app, config.message_queue_capacity, shutdown).await;
    Ok(())
}

pub async fn run(
    app: Bootstrap,
    message_queue_capacity: usize,
    shutdown: impl Future<Output = ()>,
) {
    let controller = AppController::new(app.state, message_queue_capacity);
    let mut tasks = controller.spawn_tasks(app.poller, app.usage_sink, app.usage_rx);

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => tracing::warn!("no tasks were running"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
}
