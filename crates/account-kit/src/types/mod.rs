//! Resource model for the accounts API.

mod account;
mod links;

pub use account::{AccountAttributes, AccountData};
pub use links::Links;
