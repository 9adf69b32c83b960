#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
#[cfg(feature = "jaeger")]
use opentelemetry::global;
#[cfg(feature = "jaeger")]
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing::{debug, info};
use webhook::config::Configuration;
use webhook::logging::{get_subscriber, init_subscriber};
use webhook::server;

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "jaeger")]
    global::set_text_map_propagator(TraceContextPropagator::new());

    let (subscriber, _guard) =
        get_subscriber("webhook".into(), "info".into())?;
    init_subscriber(subscriber)?;

    debug!("Tracing initialized.");

    let config = Configuration::from_env()?;
    debug!("Loaded configuration {:?}", config);

    let listener = server::build(&config)?;
    info!(
        "Listening for webhooks on http://{}{}",
        listener.local_addr,
        server::WEBHOOK_PATH
    );
    listener.server.await?;

    // Ensure all spans have been reported
    #[cfg(feature = "jaeger")]
    opentelemetry::global::shutdown_tracer_provider();

    Ok(())
}
