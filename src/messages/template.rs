//! Sending template messages.

use std::collections::BTreeMap;

use crate::http::{HttpClient, Payload, RequestError};
use crate::models::{self, Message, Template, TemplateComponent, TemplateLanguage};

use super::{MessageResponse, Sender};

/// Parameters for [`send_template`].
#[derive(Debug, Clone)]
pub struct SendTemplateRequest {
    pub sender: Sender,
    pub recipient: String,
    /// Name of the pre-approved template
    pub template_name: String,
    /// BCP-47 language and locale code, e.g. `en_US`
    pub language_code: String,
    /// `deterministic` or `fallback`; empty to let the API decide
    pub language_policy: String,
    /// Values for the template's variable components
    pub components: Vec<TemplateComponent>,
}

/// Sends a pre-approved template message to the recipient.
///
/// # Errors
///
/// Any [`RequestError`] from the dispatch pipeline.
pub async fn send_template<C: HttpClient>(
    client: &C,
    req: &SendTemplateRequest,
) -> Result<MessageResponse, RequestError> {
    let message = Message {
        product: models::MESSAGING_PRODUCT.to_string(),
        recipient_type: models::RECIPIENT_TYPE_INDIVIDUAL.to_string(),
        to: req.recipient.clone(),
        kind: "template".to_string(),
        template: Some(Template {
            name: req.template_name.clone(),
            language: TemplateLanguage {
                code: req.language_code.clone(),
                policy: req.language_policy.clone(),
            },
            components: req.components.clone(),
        }),
        ..Message::default()
    };

    let payload = Payload::json(&message)?;
    super::dispatch_payload(client, &req.sender, "send template", BTreeMap::new(), payload).await
}
