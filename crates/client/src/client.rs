//! Twilio client handle and request plumbing
//!
//! `TwilioClient` owns the HTTP wrapper, the Basic credentials, and the
//! per-product base URLs. Every API-area module funnels through the
//! request helpers here, which normalize failures into the domain
//! taxonomy with the originating operation's name.

use std::env;
use std::time::Duration;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use relaykit_domain::validation::validate_auth_token;
use relaykit_domain::{validate_sid, AccountSid, RelayError, Result, SidKind};

use crate::errors::{decode_error, error_from_response, is_not_found, transport_error};
use crate::http::HttpClient;
use crate::page::{accumulate, ListEnvelope, Page};

/// Base URLs of the Twilio products this library talks to.
#[derive(Debug, Clone)]
pub struct ProductUrls {
    pub conversations: String,
    pub content: String,
    pub studio: String,
    pub sync: String,
    pub taskrouter: String,
}

impl Default for ProductUrls {
    fn default() -> Self {
        Self {
            conversations: "https://conversations.twilio.com/v1".into(),
            content: "https://content.twilio.com/v1".into(),
            studio: "https://studio.twilio.com/v2".into(),
            sync: "https://sync.twilio.com/v1".into(),
            taskrouter: "https://taskrouter.twilio.com/v1".into(),
        }
    }
}

impl ProductUrls {
    /// Point every product at one host. Intended for tests against a
    /// local mock server.
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            conversations: base.clone(),
            content: base.clone(),
            studio: base.clone(),
            sync: base.clone(),
            taskrouter: base,
        }
    }
}

/// Direct account credentials.
#[derive(Debug, Clone)]
pub struct ClientParams {
    /// Account SID (`AC` prefix).
    pub account_sid: String,
    /// Auth token, 32 non-whitespace characters.
    pub auth_token: String,
}

/// Optional construction settings.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Per-request timeout, defaults to 30 seconds.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    /// Base-URL overrides, defaults to the public Twilio hosts.
    pub urls: Option<ProductUrls>,
}

/// Authenticated handle over the Twilio REST API.
///
/// Cheap to clone; all API-area accessors borrow from one handle.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    http: HttpClient,
    account_sid: AccountSid,
    auth_token: String,
    urls: ProductUrls,
}

impl TwilioClient {
    /// Build a client from direct credentials with default options.
    pub fn new(params: ClientParams) -> Result<Self> {
        Self::with_options(params, ClientOptions::default())
    }

    /// Build a client from direct credentials.
    ///
    /// The account SID and auth token are validated before any handle is
    /// constructed; no network call is made.
    pub fn with_options(params: ClientParams, options: ClientOptions) -> Result<Self> {
        validate_sid(SidKind::Account, &params.account_sid, "create_client")?;
        validate_auth_token("create_client", &params.auth_token)?;
        let account_sid = AccountSid::new(params.account_sid)?;

        let mut builder = HttpClient::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = options.user_agent {
            builder = builder.user_agent(agent);
        }
        let http = builder.build().map_err(|e| {
            RelayError::client_config("failed to build HTTP client", e.to_string())
        })?;

        Ok(Self {
            http,
            account_sid,
            auth_token: params.auth_token,
            urls: options.urls.unwrap_or_default(),
        })
    }

    /// Build a client from `TWILIO_ACCOUNT_SID` / `TWILIO_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let account_sid = env::var("TWILIO_ACCOUNT_SID").map_err(|_| {
            RelayError::client_config(
                "TWILIO_ACCOUNT_SID is not set",
                "export TWILIO_ACCOUNT_SID with your account SID, or pass credentials explicitly",
            )
        })?;
        let auth_token = env::var("TWILIO_AUTH_TOKEN").map_err(|_| {
            RelayError::client_config(
                "TWILIO_AUTH_TOKEN is not set",
                "export TWILIO_AUTH_TOKEN with your auth token, or pass credentials explicitly",
            )
        })?;
        Self::new(ClientParams { account_sid, auth_token })
    }

    /// The authenticated account.
    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub(crate) fn urls(&self) -> &ProductUrls {
        &self.urls
    }

    fn authorized(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(self.account_sid.as_str(), Some(&self.auth_token))
    }

    async fn execute(
        &self,
        operation: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<Response> {
        let response =
            self.http.send(builder).await.map_err(|e| transport_error(operation, &e))?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(operation, response).await)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut builder = self.authorized(Method::GET, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.execute(operation, builder).await?;
        response.json().await.map_err(|e| decode_error(operation, &e))
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: String,
        form: &[(&str, String)],
    ) -> Result<T> {
        self.post_form_with_headers(operation, url, form, &[]).await
    }

    pub(crate) async fn post_form_with_headers<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: String,
        form: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> Result<T> {
        let mut builder = self.authorized(Method::POST, &url).form(form);
        for (name, value) in headers {
            builder = builder.header(*name, value.as_str());
        }
        let response = self.execute(operation, builder).await?;
        response.json().await.map_err(|e| decode_error(operation, &e))
    }

    pub(crate) async fn delete(&self, operation: &str, url: String) -> Result<()> {
        self.execute(operation, self.authorized(Method::DELETE, &url)).await?;
        Ok(())
    }

    /// DELETE where an already-absent resource counts as removed.
    pub(crate) async fn delete_idempotent(&self, operation: &str, url: String) -> Result<bool> {
        match self.delete(operation, url).await {
            Ok(()) => Ok(true),
            Err(error) if is_not_found(&error) => {
                tracing::debug!(operation, "resource already absent, treating delete as success");
                Ok(true)
            }
            Err(error) => Err(error),
        }
    }

    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: String,
        query: &[(&str, String)],
    ) -> Result<Page<T>> {
        let envelope: ListEnvelope = self.get_json(operation, url, query).await?;
        Page::from_envelope(operation, envelope)
    }

    pub(crate) async fn fetch_page<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
    ) -> Result<Page<T>> {
        self.get_page(operation, url.to_string(), &[]).await
    }

    /// Fetch the first page at `url` and drain the whole cursor chain.
    pub(crate) async fn list_all<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: String,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let first = self.get_page(operation, url, query).await?;
        accumulate(self, operation, first).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(prefix: &str) -> String {
        format!("{prefix}{}", "a".repeat(32))
    }

    #[test]
    fn builds_from_well_formed_credentials() {
        let client = TwilioClient::new(ClientParams {
            account_sid: sid("AC"),
            auth_token: "b".repeat(32),
        })
        .expect("client");
        assert_eq!(client.account_sid().as_str(), sid("AC"));
    }

    #[test]
    fn rejects_malformed_account_sid() {
        let err = TwilioClient::new(ClientParams {
            account_sid: "not-a-sid".into(),
            auth_token: "b".repeat(32),
        })
        .unwrap_err();
        assert!(matches!(err, RelayError::Validation { .. }));
        assert!(err.to_string().starts_with("create_client:"));
    }

    #[test]
    fn rejects_short_auth_token() {
        let err = TwilioClient::new(ClientParams {
            account_sid: sid("AC"),
            auth_token: "short".into(),
        })
        .unwrap_err();
        assert!(matches!(err, RelayError::Validation { .. }));
    }

    #[test]
    fn single_host_points_every_product_at_one_base() {
        let urls = ProductUrls::single_host("http://127.0.0.1:9");
        assert_eq!(urls.conversations, urls.taskrouter);
        assert_eq!(urls.content, urls.sync);
    }
}
