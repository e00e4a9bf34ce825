//! Conversation resources and request parameters

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sids::ContentSid;

/// Lifecycle state of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationState {
    /// Timers may move the conversation here after inactivity.
    Inactive,
    /// Open and accepting messages.
    Active,
    /// Terminal state.
    Closed,
}

impl ConversationState {
    /// Wire representation used in form-encoded requests.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

/// A conversation resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation SID (`CH` prefix).
    pub sid: String,
    /// Owning account SID.
    pub account_sid: Option<String>,
    /// Chat service backing this conversation.
    pub chat_service_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub unique_name: Option<String>,
    /// JSON-encoded attribute blob, opaque to this library.
    pub attributes: Option<String>,
    pub state: Option<ConversationState>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// Optional fields accepted when updating a conversation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateConversationParams {
    pub friendly_name: Option<String>,
    pub unique_name: Option<String>,
    /// JSON-encoded attribute blob.
    pub attributes: Option<String>,
    pub messaging_service_sid: Option<String>,
    pub state: Option<ConversationState>,
    /// ISO-8601 duration before the conversation goes inactive.
    pub timers_inactive: Option<String>,
    /// ISO-8601 duration before the conversation closes.
    pub timers_closed: Option<String>,
    /// Whether scoped webhooks fire for this change.
    pub webhook_enabled: Option<bool>,
}

/// Filters for listing the conversations a participant belongs to.
#[derive(Debug, Clone, Default)]
pub struct ListByParticipantParams {
    /// Chat identity filter.
    pub identity: Option<String>,
    /// Messaging-binding address filter.
    pub address: Option<String>,
    /// Items per page, 1..=1000.
    pub page_size: Option<u32>,
    /// Upper bound on accumulated items, 1..=1000.
    pub limit: Option<u32>,
}

/// Messaging binding of a participant (non-chat channels).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingBinding {
    pub address: Option<String>,
    pub proxy_address: Option<String>,
    #[serde(rename = "type")]
    pub binding_type: Option<String>,
}

/// A participant within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Participant SID (`MB` prefix).
    pub sid: String,
    /// Chat identity, set for agent participants.
    pub identity: Option<String>,
    pub messaging_binding: Option<MessagingBinding>,
    /// JSON-encoded attribute blob.
    pub attributes: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}

/// One row of the participant-conversations listing: a conversation seen
/// from one participant's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConversation {
    pub account_sid: Option<String>,
    pub conversation_sid: String,
    pub participant_sid: Option<String>,
    pub participant_identity: Option<String>,
    pub participant_messaging_binding: Option<MessagingBinding>,
    pub conversation_state: Option<ConversationState>,
    pub conversation_friendly_name: Option<String>,
    pub conversation_unique_name: Option<String>,
}

/// Addressing for adding or removing a participant: either a
/// messaging-binding address pair or a chat identity.
#[derive(Debug, Clone, Default)]
pub struct ParticipantParams {
    /// Participant's own address (e.g. `whatsapp:+15551234567`).
    pub address: Option<String>,
    /// The Twilio-side address proxying the participant.
    pub proxy_address: Option<String>,
    /// Chat identity for agents.
    pub identity: Option<String>,
    /// JSON-encoded attribute blob, only used on create.
    pub attributes: Option<String>,
}

/// A message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message SID (`IM` prefix).
    pub sid: String,
    pub conversation_sid: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    /// JSON-encoded attribute blob.
    pub attributes: Option<String>,
    pub content_sid: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for a plain-body message.
#[derive(Debug, Clone)]
pub struct MessageParams {
    /// Display author, defaults to `system` on the vendor side.
    pub author: Option<String>,
    /// Message body, required.
    pub body: String,
}

/// Parameters for a message rendered from a content template.
#[derive(Debug, Clone)]
pub struct ContentMessageParams {
    /// Display author.
    pub author: Option<String>,
    /// Content template to render.
    pub content_sid: ContentSid,
    /// Numeric placeholder substitutions, serialized to JSON on the wire.
    pub variables: BTreeMap<u32, String>,
}
