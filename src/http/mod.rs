//! Generic request construction and dispatch for the Cloud API.
//!
//! This module turns a declarative description of "where to call, with
//! what body, under which auth" into an executed HTTP exchange and a
//! decoded result, uniformly for every higher-level operation:
//! - Composing request URLs from independent fragments ([`compose`])
//! - Describing one call ([`RequestContext`], [`Request`], [`RequestBuilder`])
//! - Carrying heterogeneous bodies ([`Payload`])
//! - Abstracting the network exchange ([`HttpClient`], [`ReqwestClient`])
//! - Observing completed exchanges ([`Hook`], [`TraceHook`])
//! - Running the pipeline ([`execute`], [`execute_json`])

mod client;
mod dispatch;
mod error;
mod hook;
mod payload;
mod request;
mod transport;
mod url;

#[cfg(test)]
mod transport_tests;

pub use client::ReqwestClient;
pub use dispatch::{execute, execute_json};
pub use error::{RequestError, TransportError};
pub use hook::{Hook, TraceHook};
pub use payload::Payload;
pub use request::{Request, RequestBuilder, RequestContext};
pub use transport::{HttpClient, HttpRequest, HttpResponse};
pub use url::compose;
