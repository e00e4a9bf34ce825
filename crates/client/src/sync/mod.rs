//! Sync API area
//!
//! A [`SyncService`] handle is bound to one validated service SID and
//! owns all map operations; the original's module-global "current
//! service" became this explicitly passed value.

mod map;

use relaykit_domain::{validate_sid, Result, SidKind, SyncServiceSid};

use crate::client::TwilioClient;

/// Handle to one sync service.
#[derive(Debug)]
pub struct SyncService<'a> {
    client: &'a TwilioClient,
    service_sid: SyncServiceSid,
}

impl TwilioClient {
    /// Bind a handle to the sync service with the given SID.
    ///
    /// The SID is validated here, so every later map operation can rely
    /// on it.
    pub fn sync_service(&self, service_sid: &str) -> Result<SyncService<'_>> {
        validate_sid(SidKind::SyncService, service_sid, "sync_service")?;
        Ok(SyncService { client: self, service_sid: SyncServiceSid::new(service_sid)? })
    }
}

impl SyncService<'_> {
    /// The bound service SID.
    pub fn service_sid(&self) -> &SyncServiceSid {
        &self.service_sid
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/Services/{}{path}",
            self.client.urls().sync,
            self.service_sid
        )
    }
}
