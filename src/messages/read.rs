//! Marking received messages as read.

use serde::Serialize;

use crate::http::{HttpClient, Payload, Request, RequestError, execute_json};

use super::{Sender, StatusResponse};

/// Wire body for a read-receipt status update.
#[derive(Debug, Serialize)]
struct StatusUpdate<'a> {
    messaging_product: &'a str,
    status: &'a str,
    message_id: &'a str,
}

/// Parameters for [`mark_message_read`].
#[derive(Debug, Clone)]
pub struct MarkMessageReadRequest {
    pub sender: Sender,
    /// ID of the received message to mark as read
    pub message_id: String,
}

/// Marks an incoming message as read.
///
/// The recipient sees two blue check marks on the message, and earlier
/// messages in the conversation are marked as read with it. Only messages
/// you received can be marked; the API recommends doing so within 30 days
/// of receipt.
///
/// This endpoint wants the token twice: as the `Authorization` header and
/// as an `access_token` query parameter. Both are sent deliberately.
///
/// # Errors
///
/// Any [`RequestError`] from the dispatch pipeline.
pub async fn mark_message_read<C: HttpClient>(
    client: &C,
    req: &MarkMessageReadRequest,
) -> Result<StatusResponse, RequestError> {
    let payload = Payload::json(&StatusUpdate {
        messaging_product: crate::models::MESSAGING_PRODUCT,
        status: "read",
        message_id: &req.message_id,
    })?;

    let request = Request::builder()
        .context(req.sender.context("mark message read"))
        .method(http::Method::POST)
        .header("Content-Type", "application/json")
        .bearer(req.sender.access_token.as_str())
        .query_param("access_token", req.sender.access_token.as_str())
        .payload(payload)
        .build()?;

    execute_json(client, &request, &[]).await
}
