use actix_web::web::Bytes;
use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::model::{Acknowledgement, Payload};

/// Printed in front of every received payload.
pub const LOG_LABEL: &str = "Received Webhook Data:";

/// Log the payload and acknowledge it.
///
/// Bodies that are not JSON are logged verbatim and still get the 200
/// acknowledgement; nothing about the payload is ever reported back to the
/// sender.
#[instrument(level = "trace", skip_all)]
pub async fn webhook(req: HttpRequest, body: Bytes) -> HttpResponse {
    let payload = Payload::from_bytes(body);
    if let Payload::Raw { reason, .. } = &payload {
        warn!("Webhook body is not valid JSON: {}", reason);
    }

    // Set by the server middleware, absent when the route is mounted alone
    let received_at = req.extensions().get::<DateTime<Utc>>().copied();
    info!(
        received_at = ?received_at,
        json = payload.is_json(),
        "{} {}",
        LOG_LABEL,
        payload
    );

    HttpResponse::Ok().json(Acknowledgement::received())
}
