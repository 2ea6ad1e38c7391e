//! Data-access core for the feed web client.
//!
//! # Overview
//! All data arrives from one JSON-RPC-style endpoint; when it is
//! unreachable the client degrades to a bundled synthetic dataset so the UI
//! stays demonstrable. The rendering layer depends on exactly five
//! operations on [`FeedClient`] and the [`ApiError`] taxonomy, nothing else.
//!
//! # Design
//! - [`rpc`] frames requests and classifies responses as pure functions;
//!   [`transport`] composes them with one POST per call and a hard timeout.
//! - [`mock`] holds the seed dataset and per-method synthesis; the facade
//!   treats its output exactly like a decoded transport result.
//! - [`Config`] is an explicit immutable value, so differently-configured
//!   clients coexist in one process.
//! - No retries, no caching, no write paths.

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod rpc;
pub mod transport;
pub mod types;

pub use client::FeedClient;
pub use config::Config;
pub use error::ApiError;
pub use transport::Transport;
pub use types::{
    Author, Comment, FeedFilter, FeedPage, Poll, PollOption, Post, User, ViewEvent, VoteEvent,
};
