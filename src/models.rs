//! Wire schema for Cloud API message payloads.
//!
//! Optional parts use `skip_serializing_if` so encoded bodies carry only
//! the fields the API expects for the message type at hand.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// The `messaging_product` value for every Cloud API message.
pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// The `recipient_type` value for direct messages.
pub const RECIPIENT_TYPE_INDIVIDUAL: &str = "individual";

/// One outgoing message envelope.
///
/// Exactly one of the content fields should be set, matching `kind`
/// (serialized as `type`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Always [`MESSAGING_PRODUCT`]
    #[serde(rename = "messaging_product", skip_serializing_if = "String::is_empty", default)]
    pub product: String,
    #[serde(rename = "recipient_type", skip_serializing_if = "String::is_empty", default)]
    pub recipient_type: String,
    /// Recipient phone number or account id
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub to: String,
    /// Message type: `text`, `location`, `reaction`, `contact`, `template`
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
}

/// Body of a `text` message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub preview_url: bool,
    pub body: String,
}

/// Body of a `location` message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub address: String,
}

/// Body of a `reaction` message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub message_id: String,
    pub emoji: String,
}

/// One shared contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: ContactName,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub birthday: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Org>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub emails: Vec<Email>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub urls: Vec<ContactUrl>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub addresses: Vec<Address>,
}

/// Name block of a contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactName {
    pub formatted_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub middle_name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub suffix: String,
}

/// Organization block of a contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Org {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub company: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub department: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub title: String,
}

/// One phone entry of a contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub phone: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub wa_id: String,
}

/// One email entry of a contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub email: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub kind: String,
}

/// One URL entry of a contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactUrl {
    pub url: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub kind: String,
}

/// One address entry of a contact card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub street: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub zip: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub country_code: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty", default)]
    pub kind: String,
}

/// Body of a `template` message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub language: TemplateLanguage,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub components: Vec<TemplateComponent>,
}

/// Language selection for a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateLanguage {
    /// BCP-47 language and locale code, e.g. `en_US`
    pub code: String,
    /// `deterministic` or `fallback`; omitted when empty
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub policy: String,
}

/// One component (header, body, button) of a template message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateComponent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub sub_type: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub index: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<TemplateParameter>,
}

/// One parameter of a template component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateParameter {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub text: String,
}

/// A media asset reference, by uploaded id or by link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub link: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub caption: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub filename: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub provider: String,
}
