//! HTTP transport module
//!
//! Fetches one listing page per call.
//!
//! # Features
//!
//! - **Credential Header**: a single preformatted `Name:token` header line
//! - **Pinned Trust**: TLS roots come only from the configured PEM file
//! - **Streaming Body**: response chunks are appended to a per-page [`ByteSink`]
//!
//! There is no retry or backoff; a transport failure ends the run.

mod client;
mod sink;

pub use client::{
    CredentialHeader, HttpClient, HttpClientConfig, HttpClientConfigBuilder, PageFetcher,
};
pub use sink::ByteSink;
