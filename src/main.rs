use tracing::info;
use vehicle_control::{app, bootstrap};

#[tokio::main]
async fn main() {
    let (config, controller) = bootstrap::app::setup();

    let jobs = app::start(&config, controller).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Vehicle Control shutting down ...");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Vehicle Control successfully shutdown.");
        }
    }
}
