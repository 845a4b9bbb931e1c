//! A clean, typed Rust client for the organisation accounts REST API.
//!
//! **account-kit** talks to a JSON:API-inspired accounts service in which
//! every payload travels inside a `{"data": ..., "links": ...}` envelope and
//! errors arrive as an `{"error_message": "..."}` body, possibly with any
//! HTTP status code.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use account_kit::{AccountClient, ClientConfig, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), account_kit::Error> {
//!     // Configure once; the configuration is immutable afterwards.
//!     let accounts = AccountClient::new(RestClient::new(ClientConfig::default()));
//!
//!     let reply = accounts.fetch_by_id("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc").await?;
//!     println!("status: {}, account: {:?}", reply.status, reply.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Generic transport, thin resources**: [`RestClient`] knows the envelope
//!    convention and nothing about accounts; [`AccountClient`] knows URLs and
//!    nothing about HTTP.
//! 2. **Errors are explicit**: a non-2xx status with no error envelope is not
//!    an error — callers branch on [`ApiResponse::status`]. See [`Error`] for
//!    the transport / API / decode taxonomy.
//! 3. **Strict success bodies**: a success envelope that does not match the
//!    requested destination types fails with a decode error rather than
//!    silently producing zeroed values.
//!
//! # Core Types
//!
//! - [`RestClient`] - Envelope-aware HTTP transport
//! - [`AccountClient`] - Fetch, list, create, and delete accounts
//! - [`ApiResponse`] - Decoded `data`/`links` plus the HTTP status
//! - [`AccountData`], [`AccountAttributes`], [`Links`] - The account resource model

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::Error;

pub use client::{
    AccountClient, ApiResponse, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PageParams,
    RestClient,
};

pub use types::{AccountAttributes, AccountData, Links};

// Callers match on response status codes; spare them a direct http dependency.
pub use reqwest::StatusCode;
