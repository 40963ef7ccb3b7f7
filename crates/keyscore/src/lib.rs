//! Rust client for the keysco.re threat-intelligence API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use keyscore::{CountRequest, KeyscoreClient};
//!
//! #[tokio::main]
//! async fn main() -> keyscore::Result<()> {
//!     let client = KeyscoreClient::with_api_key("your-api-key")?;
//!
//!     // How many records mention a domain
//!     let total = client
//!         .count()
//!         .total(&CountRequest::new(["example.com"]).types(["domain"]))
//!         .await?;
//!     println!("Matches: {}", total.count);
//!
//!     // Search leaked credentials
//!     let results = client.search()
//!         .query(["alice@example.com"])
//!         .types(["email"])
//!         .send()
//!         .await?;
//!     println!("Hits: {}", results.len());
//!
//!     // Profile of an infected machine
//!     let machine = client.machine().info("0b7c2a1e-...").await?;
//!     println!("{} on {}", machine.user_name, machine.operating_system);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/keyscore/0.1.0")]

// Re-export core types
pub use keyscore_core::*;

// Re-export client
pub use keyscore_client::{api, ClientConfig, Download, KeyscoreClient, KeyscoreClientBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
