//! Tests for sending media messages.

use crate::http::{Payload, RequestError};

use super::testutil::{CapturingClient, sender};
use super::{CacheOptions, MediaType, SendMediaRequest, build_media_payload, send_media};

fn link_request() -> SendMediaRequest {
    SendMediaRequest {
        sender: sender(),
        recipient: "+15551234567".to_string(),
        media_type: Some(MediaType::Image),
        media_link: "https://cdn.example.com/pic.jpg".to_string(),
        ..SendMediaRequest::default()
    }
}

mod payloads {
    use super::*;

    fn payload_bytes(req: &SendMediaRequest) -> Vec<u8> {
        let payload = build_media_payload(req).unwrap();
        Payload::extract(Some(&payload))
    }

    #[test]
    fn link_media_splices_the_link_object() {
        let expected = concat!(
            r#"{"messaging_product":"whatsapp","recipient_type":"individual","#,
            r#""to":"+15551234567","type":"image","#,
            r#""image":{"link":"https://cdn.example.com/pic.jpg"}}"#
        );

        assert_eq!(payload_bytes(&link_request()), expected.as_bytes().to_vec());
    }

    #[test]
    fn id_media_splices_the_id_object() {
        let req = SendMediaRequest {
            sender: sender(),
            recipient: "+15551234567".to_string(),
            media_type: Some(MediaType::Video),
            media_id: "media-object-id".to_string(),
            ..SendMediaRequest::default()
        };

        let expected = concat!(
            r#"{"messaging_product":"whatsapp","recipient_type":"individual","#,
            r#""to":"+15551234567","type":"video","#,
            r#""video":{"id":"media-object-id"}}"#
        );
        assert_eq!(payload_bytes(&req), expected.as_bytes().to_vec());
    }

    #[test]
    fn caption_and_filename_are_carried_when_set() {
        let req = SendMediaRequest {
            caption: "the caption".to_string(),
            filename: "pic.jpg".to_string(),
            ..link_request()
        };

        let body = String::from_utf8(payload_bytes(&req)).unwrap();
        assert!(body.contains(r#""caption":"the caption""#));
        assert!(body.contains(r#""filename":"pic.jpg""#));
    }

    #[test]
    fn missing_id_and_link_are_rejected() {
        let req = SendMediaRequest {
            sender: sender(),
            recipient: "+15551234567".to_string(),
            media_type: Some(MediaType::Image),
            ..SendMediaRequest::default()
        };

        let err = build_media_payload(&req).unwrap_err();
        assert!(matches!(err, RequestError::IncompleteRequest { .. }));
    }

    #[test]
    fn missing_media_type_is_rejected() {
        let req = SendMediaRequest {
            media_type: None,
            ..link_request()
        };

        let err = build_media_payload(&req).unwrap_err();
        assert!(matches!(
            err,
            RequestError::IncompleteRequest {
                field: "media_type"
            }
        ));
    }
}

mod cache_headers {
    use super::*;

    async fn headers_for(cache: CacheOptions) -> http::HeaderMap {
        let client = CapturingClient::message_sent();
        let req = SendMediaRequest {
            cache_options: Some(cache),
            ..link_request()
        };

        send_media(&client, &req).await.unwrap();
        client.last_request().headers
    }

    #[tokio::test]
    async fn explicit_cache_control_is_forwarded() {
        let headers = headers_for(CacheOptions {
            cache_control: "no-store".to_string(),
            ..CacheOptions::default()
        })
        .await;

        assert_eq!(headers.get("Cache-Control").unwrap(), "no-store");
    }

    #[tokio::test]
    async fn expires_becomes_max_age_when_no_explicit_value() {
        let headers = headers_for(CacheOptions {
            expires: 604_800,
            ..CacheOptions::default()
        })
        .await;

        assert_eq!(headers.get("Cache-Control").unwrap(), "max-age=604800");
    }

    #[tokio::test]
    async fn explicit_cache_control_wins_over_expires() {
        let headers = headers_for(CacheOptions {
            cache_control: "no-cache".to_string(),
            expires: 3600,
            ..CacheOptions::default()
        })
        .await;

        assert_eq!(headers.get("Cache-Control").unwrap(), "no-cache");
    }

    #[tokio::test]
    async fn last_modified_and_etag_are_forwarded() {
        let headers = headers_for(CacheOptions {
            last_modified: "Tue, 22 Feb 2022 22:22:22 GMT".to_string(),
            etag: "\"33a64df5\"".to_string(),
            ..CacheOptions::default()
        })
        .await;

        assert_eq!(
            headers.get("Last-Modified").unwrap(),
            "Tue, 22 Feb 2022 22:22:22 GMT"
        );
        assert_eq!(headers.get("ETag").unwrap(), "\"33a64df5\"");
    }

    #[tokio::test]
    async fn no_cache_options_add_no_cache_headers() {
        let client = CapturingClient::message_sent();

        send_media(&client, &link_request()).await.unwrap();

        let headers = client.last_request().headers;
        assert!(!headers.contains_key("Cache-Control"));
        assert!(!headers.contains_key("Last-Modified"));
        assert!(!headers.contains_key("ETag"));
    }
}
