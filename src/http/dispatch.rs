//! The dispatch pipeline: compose, build, execute, validate, decode.

use serde::de::DeserializeOwned;

use super::hook::{self, Hook};
use super::url::compose_with_query;
use super::{HttpClient, HttpRequest, HttpResponse, Payload, Request, RequestError};

/// Executes one request and returns the raw successful response.
///
/// The pipeline is linear and one-shot, with no state kept across calls:
///
/// 1. Compose the URL from the request's context and query. Failures
///    abort before any network call.
/// 2. Build the outgoing message: headers (with a `Content-Type:
///    application/json` default unless the caller supplied one) and the
///    bearer token as an `Authorization` header.
/// 3. Construct the body: non-empty form fields are form-urlencoded and
///    override the content type; otherwise the payload is extracted.
/// 4. Execute through the injected transport. Every registered hook is
///    then invoked exactly once, in order, whether the transport
///    succeeded or failed.
/// 5. A non-2xx status aborts with the raw body preserved; nothing is
///    decoded.
///
/// Retries, if desired, are the caller's responsibility: call again.
///
/// # Errors
///
/// Any [`RequestError`] from the stages above. Errors are returned to the
/// caller untouched; nothing is logged or retried here.
pub async fn execute<C: HttpClient>(
    client: &C,
    request: &Request,
    hooks: &[&dyn Hook],
) -> Result<HttpResponse, RequestError> {
    let outgoing = build_outgoing(request)?;

    let outcome = client.request(outgoing.clone()).await;
    hook::notify(hooks, &request.context.name, &outgoing, outcome.as_ref().ok());

    let response = outcome?;
    if !response.is_success() {
        return Err(RequestError::UnexpectedStatus {
            status: response.status,
            body: response.body,
        });
    }

    Ok(response)
}

/// Executes one request and decodes the JSON response body into `T`.
///
/// Identical to [`execute`], with one more stage: on a 2xx response the
/// body is decoded as JSON. A non-2xx response never reaches decoding.
///
/// # Errors
///
/// Any [`RequestError`] from [`execute`], plus
/// [`RequestError::ResponseDecode`] on malformed or schema-mismatched
/// JSON.
pub async fn execute_json<C, T>(
    client: &C,
    request: &Request,
    hooks: &[&dyn Hook],
) -> Result<T, RequestError>
where
    C: HttpClient,
    T: DeserializeOwned,
{
    let response = execute(client, request, hooks).await?;
    serde_json::from_slice(&response.body).map_err(RequestError::ResponseDecode)
}

/// Builds the outgoing message from a request descriptor.
///
/// Fully local; a failure here means the transport is never reached and
/// hooks never fire.
fn build_outgoing(request: &Request) -> Result<HttpRequest, RequestError> {
    let url = compose_with_query(&request.context, &request.query)?;
    let mut outgoing = HttpRequest::new(request.method.clone(), url);

    outgoing.headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );

    for (name, value) in &request.headers {
        let header_name =
            http::HeaderName::try_from(name.as_str()).map_err(|_| RequestError::InvalidHeader {
                name: name.clone(),
            })?;
        let header_value =
            http::HeaderValue::try_from(value.as_str()).map_err(|_| RequestError::InvalidHeader {
                name: name.clone(),
            })?;
        outgoing.headers.insert(header_name, header_value);
    }

    if !request.bearer.is_empty() {
        let value = http::HeaderValue::try_from(format!("Bearer {}", request.bearer)).map_err(
            |_| RequestError::InvalidHeader {
                name: http::header::AUTHORIZATION.to_string(),
            },
        )?;
        outgoing.headers.insert(http::header::AUTHORIZATION, value);
    }

    // Form takes precedence over payload and forces its own content type.
    if request.form.is_empty() {
        outgoing.body = Payload::extract(request.payload.as_ref());
    } else {
        outgoing.headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        outgoing.body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&request.form)
            .finish()
            .into_bytes();
    }

    Ok(outgoing)
}
