//! Resource identifier (SID) kinds and typed wrappers
//!
//! Every Twilio resource is addressed by a SID: a fixed two-letter prefix
//! followed by 32 non-whitespace characters. Operations accept a SID only
//! after it matches its kind's pattern.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{RelayError, Result};

/// The 32-character token that follows a SID prefix.
static SID_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S{32}$").expect("valid SID token pattern"));

/// Kinds of resource identifiers, with their prefix and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidKind {
    /// `AC` — account
    Account,
    /// `CH` — conversation
    Conversation,
    /// `HX` — content template
    Content,
    /// `FW` — studio flow
    StudioFlow,
    /// `IS` — sync service
    SyncService,
    /// `MP` — sync map
    SyncMap,
    /// `WS` — task-routing workspace
    Workspace,
    /// `WT` — task
    Task,
    /// `WK` — worker
    Worker,
}

impl SidKind {
    /// The two-letter prefix for this kind.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Account => "AC",
            Self::Conversation => "CH",
            Self::Content => "HX",
            Self::StudioFlow => "FW",
            Self::SyncService => "IS",
            Self::SyncMap => "MP",
            Self::Workspace => "WS",
            Self::Task => "WT",
            Self::Worker => "WK",
        }
    }

    /// Human-readable label used in error details.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Account => "Account SID",
            Self::Conversation => "Conversation SID",
            Self::Content => "Content SID",
            Self::StudioFlow => "Studio Flow SID",
            Self::SyncService => "Sync Service SID",
            Self::SyncMap => "Sync Map SID",
            Self::Workspace => "Workspace SID",
            Self::Task => "Task SID",
            Self::Worker => "Worker SID",
        }
    }

    /// Whether `value` matches `<prefix><32 non-whitespace chars>`.
    pub fn matches(self, value: &str) -> bool {
        value
            .strip_prefix(self.prefix())
            .is_some_and(|token| SID_TOKEN.is_match(token))
    }
}

impl fmt::Display for SidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check a SID against its kind's pattern, raising a validation error
/// attributed to `operation` on mismatch.
pub fn validate_sid(kind: SidKind, value: &str, operation: &str) -> Result<()> {
    if kind.matches(value) {
        return Ok(());
    }
    Err(RelayError::validation(
        operation,
        format!(
            "{} must match \"{}\" followed by 32 non-whitespace characters, got {value:?}",
            kind.label(),
            kind.prefix(),
        ),
    ))
}

macro_rules! sid_newtype {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The SID kind this wrapper enforces.
            pub const KIND: SidKind = $kind;

            /// Wrap a SID after checking it against the kind's pattern.
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                validate_sid(Self::KIND, &value, concat!(stringify!($name), "::new"))?;
                Ok(Self(value))
            }

            /// The raw SID string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = RelayError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

sid_newtype!(
    /// Account identifier (`AC` prefix).
    AccountSid => SidKind::Account
);
sid_newtype!(
    /// Conversation identifier (`CH` prefix).
    ConversationSid => SidKind::Conversation
);
sid_newtype!(
    /// Content template identifier (`HX` prefix).
    ContentSid => SidKind::Content
);
sid_newtype!(
    /// Studio flow identifier (`FW` prefix).
    FlowSid => SidKind::StudioFlow
);
sid_newtype!(
    /// Sync service identifier (`IS` prefix).
    SyncServiceSid => SidKind::SyncService
);
sid_newtype!(
    /// Sync map identifier (`MP` prefix).
    SyncMapSid => SidKind::SyncMap
);
sid_newtype!(
    /// Workspace identifier (`WS` prefix).
    WorkspaceSid => SidKind::Workspace
);
sid_newtype!(
    /// Task identifier (`WT` prefix).
    TaskSid => SidKind::Task
);
sid_newtype!(
    /// Worker identifier (`WK` prefix).
    WorkerSid => SidKind::Worker
);

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(prefix: &str) -> String {
        format!("{prefix}{}", "a".repeat(32))
    }

    #[test]
    fn accepts_well_formed_sids_for_every_kind() {
        let kinds = [
            SidKind::Account,
            SidKind::Conversation,
            SidKind::Content,
            SidKind::StudioFlow,
            SidKind::SyncService,
            SidKind::SyncMap,
            SidKind::Workspace,
            SidKind::Task,
            SidKind::Worker,
        ];
        for kind in kinds {
            assert!(kind.matches(&sid(kind.prefix())), "kind {kind} rejected its own SID");
        }
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert!(!SidKind::Conversation.matches(&sid("AC")));
        assert!(validate_sid(SidKind::Conversation, &sid("AC"), "test_op").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!SidKind::Account.matches("ACshort"));
        assert!(!SidKind::Account.matches(&format!("AC{}", "a".repeat(33))));
    }

    #[test]
    fn rejects_whitespace_in_token() {
        let value = format!("CH{} {}", "a".repeat(15), "b".repeat(16));
        assert!(!SidKind::Conversation.matches(&value));
    }

    #[test]
    fn newtype_parses_and_displays() {
        let raw = sid("CH");
        let parsed: ConversationSid = raw.parse().expect("valid SID");
        assert_eq!(parsed.as_str(), raw);
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn newtype_rejects_mismatch_with_validation_error() {
        let err = ConversationSid::new(sid("MP")).unwrap_err();
        assert!(matches!(err, RelayError::Validation { .. }));
        assert!(err.details().contains("Conversation SID"));
    }

    #[test]
    fn validation_error_names_the_operation() {
        let err = validate_sid(SidKind::Workspace, "nope", "initializer_workspace").unwrap_err();
        assert!(err.to_string().starts_with("initializer_workspace:"));
    }
}
