//! Cursor-based pagination accumulation
//!
//! Twilio list responses share one envelope shape: a `meta` block naming
//! the item key and the next-page link, and the items themselves under
//! that key. [`accumulate`] drains the cursor chain into a single vector,
//! preserving page order and within-page order. The signature is always
//! async; callers await one future whether or not further fetches happen.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use relaykit_domain::Result;

use crate::client::TwilioClient;
use crate::errors::decode_error;

/// The `meta` block of a Twilio list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// Name of the envelope field holding the items.
    pub key: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub first_page_url: Option<String>,
    pub previous_page_url: Option<String>,
    /// Link to the next slice; absent on the last page.
    pub next_page_url: Option<String>,
    pub url: Option<String>,
}

/// Raw list envelope: `meta` plus the keyed item list.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub meta: PageMeta,
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

/// One slice of a paginated result set.
#[derive(Debug)]
pub struct Page<T> {
    /// Items of this slice. `None` when the envelope carried no item
    /// collection at all — a terminal state distinct from an empty page.
    pub items: Option<Vec<T>>,
    /// Link to the next slice.
    pub next_page_url: Option<String>,
}

impl<T: DeserializeOwned> Page<T> {
    pub(crate) fn from_envelope(operation: &str, envelope: ListEnvelope) -> Result<Self> {
        let ListEnvelope { meta, mut body } = envelope;

        let items = match meta.key.as_deref().and_then(|key| body.remove(key)) {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => {
                Some(serde_json::from_value(value).map_err(|e| decode_error(operation, &e))?)
            }
        };

        Ok(Self { items, next_page_url: meta.next_page_url })
    }
}

/// Drain a paginated result set into one ordered vector.
///
/// A page without an item collection terminates the drain with an empty
/// result, regardless of what earlier pages contributed. A failure
/// fetching any subsequent page propagates to the caller unwrapped.
pub(crate) async fn accumulate<T: DeserializeOwned>(
    client: &TwilioClient,
    operation: &str,
    first: Page<T>,
) -> Result<Vec<T>> {
    let mut page = first;
    let mut accumulator = Vec::new();

    loop {
        let Some(items) = page.items else {
            return Ok(Vec::new());
        };
        accumulator.extend(items);

        match page.next_page_url {
            Some(url) => page = client.fetch_page(operation, &url).await?,
            None => return Ok(accumulator),
        }
    }
}
