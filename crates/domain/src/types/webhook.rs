//! Conversation-scoped webhook types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sids::FlowSid;

/// HTTP method a webhook target is invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Get,
    Post,
}

impl WebhookMethod {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Kind of endpoint a conversation webhook points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookTarget {
    /// Plain HTTP callback.
    Webhook,
    /// Studio flow.
    Studio,
    /// Legacy trigger words.
    Trigger,
}

impl WebhookTarget {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Webhook => "webhook",
            Self::Studio => "studio",
            Self::Trigger => "trigger",
        }
    }
}

/// Post-event filters a conversation webhook may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventFilter {
    OnMessageAdded,
    OnMessageRemoved,
    OnMessageUpdated,
    OnConversationAdded,
    OnConversationRemoved,
    OnConversationUpdated,
    OnParticipantAdded,
    OnParticipantRemoved,
    OnParticipantUpdated,
    OnConversationStateUpdated,
    OnDeliveryUpdated,
    OnUserAdded,
    OnUserUpdated,
}

impl EventFilter {
    /// Wire representation (camelCase event name).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnMessageAdded => "onMessageAdded",
            Self::OnMessageRemoved => "onMessageRemoved",
            Self::OnMessageUpdated => "onMessageUpdated",
            Self::OnConversationAdded => "onConversationAdded",
            Self::OnConversationRemoved => "onConversationRemoved",
            Self::OnConversationUpdated => "onConversationUpdated",
            Self::OnParticipantAdded => "onParticipantAdded",
            Self::OnParticipantRemoved => "onParticipantRemoved",
            Self::OnParticipantUpdated => "onParticipantUpdated",
            Self::OnConversationStateUpdated => "onConversationStateUpdated",
            Self::OnDeliveryUpdated => "onDeliveryUpdated",
            Self::OnUserAdded => "onUserAdded",
            Self::OnUserUpdated => "onUserUpdated",
        }
    }
}

/// Parameters for attaching a webhook to a conversation.
///
/// Target-specific rules are enforced by
/// [`crate::validation::validate_webhook_params`]: a `studio` target needs
/// `flow_sid`, a `webhook` target needs `url`.
#[derive(Debug, Clone)]
pub struct WebhookParams {
    pub target: WebhookTarget,
    /// Defaults to POST when unset.
    pub method: Option<WebhookMethod>,
    /// Post-event subscriptions; non-empty when present.
    pub filters: Option<Vec<EventFilter>>,
    /// Trigger words; non-empty when present.
    pub triggers: Option<Vec<String>>,
    /// Callback URL for `webhook` targets.
    pub url: Option<String>,
    /// Flow for `studio` targets.
    pub flow_sid: Option<FlowSid>,
}

/// Configuration block of an attached webhook, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfiguration {
    pub method: Option<String>,
    pub filters: Option<Vec<String>>,
    pub triggers: Option<Vec<String>>,
    pub url: Option<String>,
    pub flow_sid: Option<String>,
}

/// A webhook attached to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationWebhook {
    /// Webhook SID (`WH` prefix).
    pub sid: String,
    pub conversation_sid: Option<String>,
    pub target: String,
    pub configuration: Option<WebhookConfiguration>,
    pub date_created: Option<DateTime<Utc>>,
}
