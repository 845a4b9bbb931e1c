//! Account resource operations.
//!
//! Thin CRUD glue over [`RestClient`]: each operation composes a URL from
//! the configured base URL, delegates the call, and surfaces whatever the
//! transport returned. The only side effect added here is a `tracing`
//! warning on failure.

use reqwest::StatusCode;
use tracing::warn;

use crate::error::Error;
use crate::types::{AccountData, Links};

use super::rest::{ApiResponse, RestClient};

/// Paging parameters for [`AccountClient::list`].
///
/// Passed through verbatim as `page[number]` and `page[size]`; slicing the
/// result is the server's job, never the client's.
#[derive(Clone, Debug)]
pub struct PageParams {
    /// Page selector, e.g. `"0"`, `"first"`, `"last"`.
    pub number: String,
    /// Maximum number of records per page.
    pub size: i64,
}

impl PageParams {
    pub fn new(number: impl Into<String>, size: i64) -> Self {
        Self {
            number: number.into(),
            size,
        }
    }
}

/// Client for the organisation accounts resource.
///
/// Shares the transport's connection pool; cloning is cheap and safe for
/// concurrent use.
#[derive(Clone, Debug, Default)]
pub struct AccountClient {
    rest: RestClient,
}

impl AccountClient {
    /// Create an account client over the given transport.
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// The underlying transport.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Fetch a single account by its ID.
    pub async fn fetch_by_id(&self, id: &str) -> Result<ApiResponse<AccountData, Links>, Error> {
        let url = fetch_account_url(self.rest.base_url(), id);
        let reply = self
            .rest
            .get::<AccountData, Option<Links>>(&url)
            .await
            .inspect_err(|err| warn!(account_id = id, error = %err, "failed to fetch account"))?;
        Ok(with_default_links(reply))
    }

    /// List accounts, optionally bounded by paging parameters.
    pub async fn list(
        &self,
        params: Option<&PageParams>,
    ) -> Result<ApiResponse<Vec<AccountData>, Links>, Error> {
        let url = list_accounts_url(self.rest.base_url(), params);
        let reply = self
            .rest
            .get::<Vec<AccountData>, Option<Links>>(&url)
            .await
            .inspect_err(|err| warn!(error = %err, "failed to list accounts"))?;
        Ok(with_default_links(reply))
    }

    /// Create an account from the given payload.
    pub async fn create(
        &self,
        account: &AccountData,
    ) -> Result<ApiResponse<AccountData, Links>, Error> {
        let reply = self
            .rest
            .post::<AccountData, AccountData, Option<Links>>(self.rest.base_url(), account)
            .await
            .inspect_err(
                |err| warn!(account_id = %account.id, error = %err, "failed to create account"),
            )?;
        Ok(with_default_links(reply))
    }

    /// Delete an account by ID and version.
    ///
    /// Returns the response status; callers branch on it (a 404 with an
    /// empty body is `Ok`, not an error).
    pub async fn delete(&self, id: &str, version: i64) -> Result<StatusCode, Error> {
        let url = delete_account_url(self.rest.base_url(), id, version);
        self.rest
            .delete(&url)
            .await
            .inspect_err(|err| warn!(account_id = id, version, error = %err, "failed to delete account"))
    }
}

/// A success envelope without `links` yields the zero value.
fn with_default_links<T>(reply: ApiResponse<T, Option<Links>>) -> ApiResponse<T, Links> {
    ApiResponse {
        data: reply.data,
        links: reply.links.unwrap_or_default(),
        status: reply.status,
    }
}

fn fetch_account_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/{id}")
}

fn list_accounts_url(base_url: &str, params: Option<&PageParams>) -> String {
    match params {
        Some(params) => format!(
            "{base_url}?page[number]={}&page[size]={}",
            params.number, params.size
        ),
        None => base_url.to_string(),
    }
}

fn delete_account_url(base_url: &str, id: &str, version: i64) -> String {
    format!("{base_url}/{id}?version={version}")
}
