//! TaskRouter API area
//!
//! A [`Workspace`] handle is bound to one validated workspace SID and
//! owns all task, queue, and worker operations; the original's
//! module-global "current workspace" became this explicitly passed value.

mod task;
mod task_queue;
mod worker;

use relaykit_domain::{validate_sid, Result, SidKind, WorkspaceSid};

use crate::client::TwilioClient;

/// Handle to one task-routing workspace.
#[derive(Debug)]
pub struct Workspace<'a> {
    client: &'a TwilioClient,
    workspace_sid: WorkspaceSid,
}

impl TwilioClient {
    /// Bind a handle to the workspace with the given SID.
    pub fn workspace(&self, workspace_sid: &str) -> Result<Workspace<'_>> {
        validate_sid(SidKind::Workspace, workspace_sid, "initializer_workspace")?;
        Ok(Workspace { client: self, workspace_sid: WorkspaceSid::new(workspace_sid)? })
    }
}

impl Workspace<'_> {
    /// The bound workspace SID.
    pub fn workspace_sid(&self) -> &WorkspaceSid {
        &self.workspace_sid
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/Workspaces/{}{path}",
            self.client.urls().taskrouter,
            self.workspace_sid
        )
    }
}
