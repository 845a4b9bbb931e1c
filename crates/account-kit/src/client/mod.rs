//! Client module for the accounts API.
//!
//! Two layers:
//!
//! - [`RestClient`] — envelope-aware HTTP transport, generic over the
//!   payload and link types it decodes into
//! - [`AccountClient`] — account CRUD built on top of the transport
//!
//! The transport is the interesting part: it owns the request envelope, the
//! error-envelope screening, and the two-phase success decode. Resource
//! clients only compose URLs and pick destination types.

mod account;
mod rest;

pub use account::{AccountClient, PageParams};
pub use rest::{ApiResponse, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, RestClient};
