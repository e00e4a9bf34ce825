//! Serverless execution context
//!
//! When a function runs inside the vendor's serverless runtime, the host
//! hands it a context carrying environment identifiers and a
//! pre-authenticated client factory. The factory is modeled as a trait so
//! hosts and tests can inject their own construction.

use std::fmt;
use std::sync::Arc;

use relaykit_domain::{RelayError, Result};

use crate::client::{ClientOptions, TwilioClient};

pub(crate) const MISSING_FACTORY_DETAILS: &str = "The serverless context did not provide a \
    client factory. This happens when no context was passed in or the code is not running \
    inside the serverless environment. Provide account_sid and auth_token instead: \
    { account_sid: \"ACxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx\", auth_token: \
    \"xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx\" }";

/// Host-provided construction of a pre-authenticated client.
pub trait ClientFactory: Send + Sync {
    /// Build a client, honoring the caller's construction options.
    fn twilio_client(&self, options: &ClientOptions) -> Result<TwilioClient>;
}

/// Execution context handed to a serverless function by its host.
#[derive(Clone)]
pub struct ServerlessContext {
    /// Domain the function is served from.
    pub domain_name: String,
    /// Path of the invoked function.
    pub path: String,
    /// Serverless service the function belongs to.
    pub service_sid: Option<String>,
    /// Deployment environment within the service.
    pub environment_sid: Option<String>,
    factory: Option<Arc<dyn ClientFactory>>,
}

impl ServerlessContext {
    /// Context with environment identifiers and no client factory.
    pub fn new(domain_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            path: path.into(),
            service_sid: None,
            environment_sid: None,
            factory: None,
        }
    }

    /// Attach the host's client factory.
    #[must_use]
    pub fn with_factory(mut self, factory: Arc<dyn ClientFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Whether this context can construct a client.
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// Build a client through the host factory.
    ///
    /// Raises a client configuration error when the context lacks the
    /// factory capability.
    pub fn create_twilio_client(&self, options: &ClientOptions) -> Result<TwilioClient> {
        match &self.factory {
            Some(factory) => factory.twilio_client(options),
            None => Err(RelayError::client_config(
                "the context client factory was not found",
                MISSING_FACTORY_DETAILS,
            )),
        }
    }
}

impl fmt::Debug for ServerlessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerlessContext")
            .field("domain_name", &self.domain_name)
            .field("path", &self.path)
            .field("service_sid", &self.service_sid)
            .field("environment_sid", &self.environment_sid)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}
