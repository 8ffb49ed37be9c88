//! wacloud: a client library for the WhatsApp Cloud API.
//!
//! The crate is layered in two:
//! - [`http`] — the generic request construction and dispatch core:
//!   URL composition, payload extraction, bearer auth, transport
//!   injection, and post-call hooks.
//! - [`messages`] (with [`models`]) — the domain operations built on top:
//!   sending text, location, reaction, contact, template, and media
//!   messages, replying, and marking messages as read.

pub mod http;
pub mod messages;
pub mod models;
