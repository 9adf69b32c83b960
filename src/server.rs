use std::net::SocketAddr;

use actix_web::dev::{Server, Service};
use actix_web::{middleware, web, App, HttpMessage, HttpServer};
#[cfg(feature = "jaeger")]
use actix_web_opentelemetry::RequestTracing;
use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;
#[cfg(feature = "jaeger")]
use tracing_actix_web::TracingLogger;

use crate::config::{Configuration, PayloadLimit};
use crate::handler;

pub const WEBHOOK_PATH: &str = "/webhook";

/// A bound, not yet awaited, HTTP server.
pub struct Listener {
    pub server:     Server,
    pub local_addr: SocketAddr,
}

/// Route table: `POST /webhook` and nothing else. Other methods on the path
/// get a 405, other paths a 404.
pub fn routes(
    payload_limit: PayloadLimit,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::PayloadConfig::new(payload_limit.into_inner()))
            .service(
                web::resource(WEBHOOK_PATH)
                    .route(web::post().to(handler::webhook)),
            );
    }
}

/// Bind the listener described by `config`.
pub fn build(config: &Configuration) -> Result<Listener> {
    let payload_limit = config.payload_limit;

    let server = HttpServer::new(move || {
        let app = App::new().wrap(middleware::Compress::default());

        #[cfg(feature = "jaeger")]
        let app =
            app.wrap(TracingLogger::default()).wrap(RequestTracing::default());

        app.wrap_fn(|req, srv| {
            // Store the instant when the request reached the app in request
            // extensions
            req.extensions_mut().insert(Utc::now());
            debug!("Request received");

            srv.call(req)
        })
        .configure(routes(payload_limit))
    });

    let server = match config.workers {
        Some(workers) => server.workers(workers.into_inner()),
        None => server,
    };

    let addr = config.socket_addr();
    let server =
        server.bind(addr).with_context(|| format!("Cannot bind {}", addr))?;
    let local_addr = server
        .addrs()
        .first()
        .copied()
        .with_context(|| format!("No socket bound for {}", addr))?;

    Ok(Listener { server: server.run(), local_addr })
}
