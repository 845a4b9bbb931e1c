//! Error types for account-kit.
//!
//! Every operation returns [`Error`], which keeps the three failure classes
//! of the API contract distinct:
//!
//! - [`Error::Transport`] — the request never produced a response (DNS,
//!   connection refused, malformed URL, timeout)
//! - [`Error::Api`] — a response arrived whose body carried a non-empty
//!   `error_message`; the original status code stays inspectable
//! - [`Error::Decode`] — a success body violated the envelope contract
//!
//! # Pattern Matching
//!
//! ```rust,no_run
//! use account_kit::{AccountClient, Error};
//!
//! # async fn example(accounts: AccountClient) -> Result<(), Error> {
//! match accounts.fetch_by_id("some-id").await {
//!     Ok(reply) => println!("fetched: {:?}", reply.data),
//!     Err(Error::Api { status, message }) => {
//!         println!("server rejected the call ({status}): {message}");
//!     }
//!     Err(e) if e.is_timeout() => println!("gave up waiting"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for all account-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP exchange failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body carried a non-empty `error_message`.
    ///
    /// The display form is exactly the message the server sent.
    #[error("{message}")]
    Api {
        /// Status code of the response that carried the error body.
        status: StatusCode,
        /// The verbatim `error_message` value.
        message: String,
    },

    /// The response body could not be decoded into the requested types.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// True when the configured timeout expired before the exchange finished.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// True for errors signalled by the API through an error envelope.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Status code of the response, when one was received.
    ///
    /// Only [`Error::Api`] has a response attached; transport and decode
    /// failures return `None`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
