//! HTTP transport layer.
//!
//! Provides the external API routing for the quote and category endpoints.

pub mod handlers;
