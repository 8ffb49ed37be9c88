//! Tests for the message wire schema.

use super::*;

fn text_message() -> Message {
    Message {
        product: MESSAGING_PRODUCT.to_string(),
        recipient_type: RECIPIENT_TYPE_INDIVIDUAL.to_string(),
        to: "+15551234567".to_string(),
        kind: "text".to_string(),
        text: Some(Text {
            preview_url: false,
            body: "hello".to_string(),
        }),
        ..Message::default()
    }
}

#[test]
fn text_message_serializes_canonically() {
    let json = serde_json::to_string(&text_message()).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"messaging_product":"whatsapp","recipient_type":"individual","#,
            r#""to":"+15551234567","type":"text","#,
            r#""text":{"preview_url":false,"body":"hello"}}"#
        )
    );
}

#[test]
fn unset_content_fields_are_omitted() {
    let json = serde_json::to_string(&text_message()).unwrap();

    assert!(!json.contains("location"));
    assert!(!json.contains("reaction"));
    assert!(!json.contains("contacts"));
    assert!(!json.contains("template"));
}

#[test]
fn reaction_message_omits_recipient_type_when_empty() {
    let message = Message {
        product: MESSAGING_PRODUCT.to_string(),
        to: "+15551234567".to_string(),
        kind: "reaction".to_string(),
        reaction: Some(Reaction {
            message_id: "wamid.x".to_string(),
            emoji: "\u{1F600}".to_string(),
        }),
        ..Message::default()
    };

    let json = serde_json::to_string(&message).unwrap();

    assert!(!json.contains("recipient_type"));
    assert!(json.contains(r#""reaction":{"message_id":"wamid.x""#));
}

#[test]
fn location_omits_empty_name_and_address() {
    let location = Location {
        latitude: -6.8,
        longitude: 39.28,
        ..Location::default()
    };

    let json = serde_json::to_string(&location).unwrap();

    assert_eq!(json, r#"{"latitude":-6.8,"longitude":39.28}"#);
}

#[test]
fn template_language_policy_is_optional() {
    let template = Template {
        name: "order_update".to_string(),
        language: TemplateLanguage {
            code: "en_US".to_string(),
            policy: String::new(),
        },
        components: vec![TemplateComponent {
            kind: "body".to_string(),
            parameters: vec![TemplateParameter {
                kind: "text".to_string(),
                text: "42".to_string(),
            }],
            ..TemplateComponent::default()
        }],
    };

    let json = serde_json::to_string(&template).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"name":"order_update","language":{"code":"en_US"},"#,
            r#""components":[{"type":"body","parameters":[{"type":"text","text":"42"}]}]}"#
        )
    );
}

#[test]
fn minimal_contact_card_keeps_only_the_name() {
    let contact = Contact {
        name: ContactName {
            formatted_name: "Jane Doe".to_string(),
            ..ContactName::default()
        },
        ..Contact::default()
    };

    let json = serde_json::to_string(&contact).unwrap();

    assert_eq!(json, r#"{"name":{"formatted_name":"Jane Doe"}}"#);
}

#[test]
fn media_serializes_only_set_fields() {
    let media = Media {
        link: "https://cdn.example.com/pic.jpg".to_string(),
        caption: "pic".to_string(),
        ..Media::default()
    };

    let json = serde_json::to_string(&media).unwrap();

    assert_eq!(
        json,
        r#"{"link":"https://cdn.example.com/pic.jpg","caption":"pic"}"#
    );
}

#[test]
fn message_round_trips_through_json() {
    let original = text_message();
    let json = serde_json::to_string(&original).unwrap();

    let decoded: Message = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, original);
}
