//! Explicitly owned client cell
//!
//! The original runtime kept one client in a hidden module global; here
//! the cache is an owned value the embedding function constructs and
//! passes where needed. The observable contract is unchanged: the first
//! `get_or_create` builds the client, later calls return the same handle,
//! and `reset` clears the slot (test teardown only).

use std::sync::Arc;

use parking_lot::RwLock;

use relaykit_domain::{RelayError, Result};

use crate::client::{ClientOptions, ClientParams, TwilioClient};
use crate::context::{ServerlessContext, MISSING_FACTORY_DETAILS};

/// Inputs for constructing the process's client.
///
/// Direct credentials win when both are present; otherwise the serverless
/// context's factory is tried.
#[derive(Debug, Clone, Default)]
pub struct CreateClientOptions {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub context: Option<ServerlessContext>,
    pub options: Option<ClientOptions>,
}

/// Single-slot cache for the process's client handle.
#[derive(Default)]
pub struct ClientCell {
    slot: RwLock<Option<Arc<TwilioClient>>>,
}

impl ClientCell {
    /// An empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached handle, constructing and caching it on first use.
    pub fn get_or_create(&self, options: &CreateClientOptions) -> Result<Arc<TwilioClient>> {
        if let Some(existing) = self.slot.read().as_ref() {
            return Ok(Arc::clone(existing));
        }
        let client = Arc::new(build_client(options)?);
        *self.slot.write() = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Return the cached handle, erring when none was created yet.
    pub fn get(&self) -> Result<Arc<TwilioClient>> {
        self.slot.read().as_ref().map(Arc::clone).ok_or_else(|| {
            RelayError::client_config(
                "Twilio client not found",
                "The Twilio client is not initialized. Provide account_sid and auth_token, \
                 or a serverless context with a client factory, and call get_or_create first.",
            )
        })
    }

    /// Clear the slot. Intended for test teardown, not production use.
    pub fn reset(&self) {
        *self.slot.write() = None;
    }
}

fn build_client(options: &CreateClientOptions) -> Result<TwilioClient> {
    let client_options = options.options.clone().unwrap_or_default();

    match (&options.account_sid, &options.auth_token) {
        (Some(account_sid), Some(auth_token)) => TwilioClient::with_options(
            ClientParams {
                account_sid: account_sid.clone(),
                auth_token: auth_token.clone(),
            },
            client_options,
        ),
        // Incomplete credential pair: fall through to the context path.
        _ => match &options.context {
            Some(context) => context.create_twilio_client(&client_options),
            None => Err(RelayError::client_config(
                "the context client factory was not found",
                MISSING_FACTORY_DETAILS,
            )),
        },
    }
}
