//! The bank account resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single account record as carried in the `data` field of the envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub id: String,

    pub organisation_id: String,

    /// Resource type discriminator; `"accounts"` on this endpoint.
    #[serde(rename = "type")]
    pub account_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AccountAttributes>,
}

/// Attributes of an account record.
///
/// Optional flags stay `Option<bool>` rather than defaulting to `false` so
/// that "not stated" and "explicitly false" remain distinguishable, and so
/// absent flags are omitted from request bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub account_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_names: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_currency: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bic: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub iban: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secondary_identification: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub switched: Option<bool>,
}
