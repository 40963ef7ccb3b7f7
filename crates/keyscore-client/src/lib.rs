//! HTTP client for the keysco.re API.
//!
//! This crate provides the main [`KeyscoreClient`] for interacting with the keysco.re API.
//! Endpoints are grouped behind accessor methods:
//!
//! ```rust,ignore
//! let client = KeyscoreClient::builder().api_key("secret").build()?;
//!
//! let total = client.count().total(&CountRequest::new(["example.com"])).await?;
//! let hashes = client.lookup().hashes(["5f4dcc3b5aa765d61d8327deb882cf99"]).await?;
//! let machine = client.machine().info("0b7c...").await?;
//! ```

#![doc(html_root_url = "https://docs.rs/keyscore-client/0.1.0")]

mod client;
mod config;
mod download;
pub mod api;

pub use client::{KeyscoreClient, KeyscoreClientBuilder};
pub use config::*;
pub use download::Download;
pub use keyscore_core::{KeyscoreError, Result};
