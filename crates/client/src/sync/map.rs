//! Sync maps and their items

use tracing::{debug, info};

use relaykit_domain::validation::{
    validate_non_empty, validate_sync_item_key, validate_sync_item_params,
};
use relaykit_domain::{RelayError, Result, SyncItemParams, SyncMap, SyncMapItem};

use crate::errors::is_not_found;

use super::SyncService;

impl SyncService<'_> {
    /// Ensure a map with the given unique name exists in this service.
    ///
    /// Fetches the map; when the vendor reports it absent, creates it
    /// instead. Any other failure propagates normalized.
    pub async fn ensure_map(&self, unique_name: &str) -> Result<SyncMap> {
        validate_non_empty("ensure_map", "unique_name", unique_name)?;

        let fetched: Result<SyncMap> = self
            .client
            .get_json("ensure_map", self.url(&format!("/Maps/{unique_name}")), &[])
            .await;

        match fetched {
            Ok(map) => Ok(map),
            Err(error) if is_not_found(&error) => {
                debug!(unique_name, "sync map absent, creating it");
                let map: SyncMap = self
                    .client
                    .post_form(
                        "ensure_map",
                        self.url("/Maps"),
                        &[("UniqueName", unique_name.to_string())],
                    )
                    .await?;
                info!(sid = %map.sid, unique_name, "created sync map");
                Ok(map)
            }
            Err(error) => Err(error),
        }
    }

    /// Create an item in a map.
    pub async fn create_item(
        &self,
        map: &SyncMap,
        params: &SyncItemParams,
    ) -> Result<SyncMapItem> {
        validate_sync_item_params("create_item", params)?;

        let data = serde_json::to_string(&params.data).map_err(|e| {
            RelayError::validation("create_item", format!("data must serialize to JSON: {e}"))
        })?;

        let mut form: Vec<(&str, String)> =
            vec![("Key", params.key.clone()), ("Data", data)];
        if let Some(ttl) = params.item_ttl {
            form.push(("ItemTtl", ttl.to_string()));
        }

        let item: SyncMapItem = self
            .client
            .post_form("create_item", self.url(&format!("/Maps/{}/Items", map.sid)), &form)
            .await?;
        info!(key = %item.key, map_sid = %map.sid, "created sync map item");
        Ok(item)
    }

    /// Fetch an item of a map by its key.
    pub async fn fetch_item(&self, map: &SyncMap, key: &str) -> Result<SyncMapItem> {
        validate_sync_item_key("fetch_item", key)?;
        self.client
            .get_json(
                "fetch_item",
                self.url(&format!("/Maps/{}/Items/{key}", map.sid)),
                &[],
            )
            .await
    }

    /// Remove an item of a map by its key.
    ///
    /// Removing an item that does not exist counts as success: the vendor's
    /// not-found rejection is swallowed and `Ok(true)` returned.
    pub async fn remove_item(&self, map: &SyncMap, key: &str) -> Result<bool> {
        validate_sync_item_key("remove_item", key)?;
        self.client
            .delete_idempotent(
                "remove_item",
                self.url(&format!("/Maps/{}/Items/{key}", map.sid)),
            )
            .await
    }
}
