//! Core types and errors for the keysco.re API client.
//!
//! This crate provides the foundational types used across the keyscore library:
//!
//! - **Types**: Request and response entities for every keysco.re endpoint
//! - **Normalization**: Tolerant decoding of the loosely-shaped machine info payload
//! - **Errors**: Uniform error handling with [`KeyscoreError`]
//!
//! # Example
//!
//! ```rust
//! use keyscore_core::MachineInfo;
//!
//! let payload = r#"{"data": {"BuildID": "b-17", "gpus": ["NVIDIA X"]}}"#;
//! let info: MachineInfo = serde_json::from_str(payload).unwrap();
//! assert_eq!(info.build_id, "b-17");
//! assert_eq!(info.graphics_card, "NVIDIA X");
//! ```

#![doc(html_root_url = "https://docs.rs/keyscore-core/0.1.0")]

mod error;
pub mod normalize;
pub mod types;

pub use error::{BoxError, KeyscoreError, Result};
pub use types::*;
