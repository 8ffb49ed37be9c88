//! Sending media messages.

use std::collections::BTreeMap;
use std::fmt;

use crate::http::{HttpClient, Payload, RequestError};
use crate::models::Media;

use super::{MessageResponse, Sender};

/// Supported media message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// AAC, MP4, MPEG, AMR, OGG; up to 16 MB
    Audio,
    /// Text, PDF, Office formats; up to 100 MB
    Document,
    /// JPEG, PNG; up to 5 MB
    Image,
    /// WebP; up to 100 KB
    Sticker,
    /// MP4, 3GP; up to 16 MB
    Video,
}

impl MediaType {
    /// The wire value used as both the `type` field and the payload key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Image => "image",
            Self::Sticker => "sticker",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media HTTP caching directives.
///
/// Only meaningful for link-based media: when the API fetches the asset
/// from your server, these values are forwarded as request headers so it
/// can cache the asset for reuse in later messages.
#[derive(Debug, Clone, Default)]
pub struct CacheOptions {
    /// Full `Cache-Control` value, e.g. `max-age=604800` or `no-store`
    pub cache_control: String,
    /// `Last-Modified` value; used with `Cache-Control: no-cache`
    pub last_modified: String,
    /// `ETag` asset version; consulted when the other two are absent
    pub etag: String,
    /// Cache lifetime in seconds; shorthand for `max-age=<expires>` when
    /// no explicit `cache_control` is given
    pub expires: i64,
}

/// Parameters for [`send_media`].
///
/// Reference the asset either by the id returned from an upload or by a
/// link to your own server; exactly one of `media_id` / `media_link`
/// should be non-empty. Uploaded media lasts thirty days, so keep the id
/// from the upload call.
#[derive(Debug, Clone, Default)]
pub struct SendMediaRequest {
    pub sender: Sender,
    pub recipient: String,
    pub media_type: Option<MediaType>,
    /// ID of an uploaded asset
    pub media_id: String,
    /// Link to an asset on your server
    pub media_link: String,
    pub caption: String,
    pub filename: String,
    pub provider: String,
    pub cache_options: Option<CacheOptions>,
}

/// Builds the spliced JSON payload for a media message.
///
/// The media object is serialized once and embedded verbatim under the
/// media-type key, e.g.
/// `{"messaging_product":"whatsapp",...,"type":"image","image":{"link":"https://..."}}`.
/// Returned as [`Payload::Bytes`] so the dispatcher sends it unchanged.
///
/// # Errors
///
/// Returns [`RequestError::IncompleteRequest`] when neither `media_id`
/// nor `media_link` is given, or when `media_type` is unset;
/// [`RequestError::PayloadEncoding`] when the media object cannot be
/// serialized.
pub fn build_media_payload(req: &SendMediaRequest) -> Result<Payload, RequestError> {
    if req.media_id.is_empty() && req.media_link.is_empty() {
        return Err(RequestError::IncompleteRequest {
            field: "media_id or media_link",
        });
    }
    let Some(media_type) = req.media_type else {
        return Err(RequestError::IncompleteRequest { field: "media_type" });
    };

    let media = Media {
        id: req.media_id.clone(),
        link: req.media_link.clone(),
        caption: req.caption.clone(),
        filename: req.filename.clone(),
        provider: req.provider.clone(),
    };
    let media_json = serde_json::to_string(&media).map_err(RequestError::PayloadEncoding)?;

    let kind = media_type.as_str();
    let body = format!(
        "{{\"messaging_product\":\"whatsapp\",\"recipient_type\":\"individual\",\"to\":\"{}\",\"type\":\"{}\",\"{}\":{}}}",
        req.recipient, kind, kind, media_json
    );

    Ok(Payload::Bytes(body.into_bytes()))
}

/// Maps caching directives to their request headers.
fn cache_headers(cache: &CacheOptions) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    if !cache.cache_control.is_empty() {
        headers.insert("Cache-Control".to_string(), cache.cache_control.clone());
    } else if cache.expires > 0 {
        headers.insert("Cache-Control".to_string(), format!("max-age={}", cache.expires));
    }
    if !cache.last_modified.is_empty() {
        headers.insert("Last-Modified".to_string(), cache.last_modified.clone());
    }
    if !cache.etag.is_empty() {
        headers.insert("ETag".to_string(), cache.etag.clone());
    }

    headers
}

/// Sends a media message to the recipient.
///
/// For link-based media, check the webhook events delivered to your
/// server to confirm the asset was fetched successfully.
///
/// # Errors
///
/// Any [`RequestError`] from [`build_media_payload`] or the dispatch
/// pipeline.
pub async fn send_media<C: HttpClient>(
    client: &C,
    req: &SendMediaRequest,
) -> Result<MessageResponse, RequestError> {
    let payload = build_media_payload(req)?;

    let headers = req
        .cache_options
        .as_ref()
        .map(cache_headers)
        .unwrap_or_default();

    super::dispatch_payload(client, &req.sender, "send media", headers, payload).await
}
