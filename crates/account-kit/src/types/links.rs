//! Named navigation links returned alongside resource payloads.

use serde::{Deserialize, Serialize};

/// The `links` object of a response envelope.
///
/// Every field is a relative URL; which ones are present depends on the
/// endpoint (single resources carry `self`, paged lists add `first`,
/// `last`, `next`, `prev`). A success envelope with no `links` at all
/// decodes to the default value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}
