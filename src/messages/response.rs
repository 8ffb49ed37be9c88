//! Decoded Cloud API responses.

use serde::Deserialize;

/// Response to a successful message send.
///
/// The `messages` entries carry identifiers prefixed with `wamid.`; keep
/// them to track delivery status through webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub messaging_product: String,
    #[serde(default)]
    pub contacts: Vec<ResponseContact>,
    #[serde(default)]
    pub messages: Vec<MessageId>,
}

/// Recipient resolution echoed back by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseContact {
    /// The recipient as supplied in the request
    #[serde(default)]
    pub input: String,
    /// The canonical account id it resolved to
    #[serde(default)]
    pub wa_id: String,
}

/// One sent-message identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageId {
    pub id: String,
}

/// Response to a status-update call such as mark-as-read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
}
