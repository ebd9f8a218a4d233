//! Job that opens the vehicle cloud session when the service starts.
//!
//! Without it the session is opened with the first request, which then takes
//! as long as the authentication with the vehicle cloud. It is enabled with
//! the `session.warm_up` option.
//!
//! The job only logs the outcome. A failure is not fatal: transient errors are
//! retried again with the next request.
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::core::session::Readiness;
use crate::core::Controller;

/// It starts the session warm-up job.
#[must_use]
pub fn start_job(controller: &Arc<Controller>) -> JoinHandle<()> {
    let controller = controller.clone();

    tokio::spawn(async move {
        info!("Opening the vehicle cloud session ...");

        match controller.readiness().await {
            Readiness::Ready(handle) => {
                info!(
                    selector = %handle.selector(),
                    default_vehicle_id = %handle.default_vehicle_id(),
                    "Vehicle cloud session ready"
                );
            }
            Readiness::Failed(err) => {
                error!(terminal = err.is_terminal(), "Unable to open the vehicle cloud session: {err}");
            }
        }
    })
}
