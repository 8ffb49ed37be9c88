//! Tests for HTTP exchange value types and the transport trait.

use super::{HttpClient, HttpRequest, HttpResponse, TransportError};

mod http_request {
    use super::*;

    #[test]
    fn new_starts_with_empty_headers_and_body() {
        let url = url::Url::parse("https://graph.example.com/v16.0/1/messages").unwrap();
        let req = HttpRequest::new(http::Method::POST, url.clone());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_empty());
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://graph.example.com/").unwrap();
        let req = HttpRequest::new(http::Method::POST, url).with_body(b"{}".to_vec());

        assert_eq!(req.body, b"{}".to_vec());
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let url = url::Url::parse("https://graph.example.com/").unwrap();
        let req = HttpRequest::new(http::Method::POST, url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/x-www-form-urlencoded"),
            );

        assert_eq!(
            req.headers.get_all(http::header::CONTENT_TYPE).iter().count(),
            1
        );
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_covers_the_2xx_range() {
        for status in [
            http::StatusCode::OK,
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_success(), "expected {status} to be success");
        }

        for status in [
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_success(), "expected {status} to not be success");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            br#"{"success":true}"#.to_vec(),
        );

        assert_eq!(resp.body_text(), Some(r#"{"success":true}"#));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![0xFF]);

        assert!(resp.body_text().is_none());
    }
}

mod transport_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_preserves_its_source() {
        let error = TransportError::Connection(Box::new(std::io::Error::other("refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(error.source().unwrap().to_string().contains("refused"));
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(TransportError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransportError>();
    }
}

mod transport_trait {
    use super::*;

    struct StaticTransport {
        status: http::StatusCode,
    }

    impl HttpClient for StaticTransport {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(
                self.status,
                http::HeaderMap::new(),
                vec![],
            ))
        }
    }

    #[tokio::test]
    async fn implementations_return_their_response() {
        let transport = StaticTransport {
            status: http::StatusCode::CREATED,
        };
        let url = url::Url::parse("https://graph.example.com/").unwrap();

        let response = transport
            .request(HttpRequest::new(http::Method::GET, url))
            .await
            .unwrap();

        assert_eq!(response.status, http::StatusCode::CREATED);
    }

    #[test]
    fn trait_requires_send_sync() {
        fn assert_send_sync<T: HttpClient>() {}
        assert_send_sync::<StaticTransport>();
    }
}
