//! Conversations API area
//!
//! Conversation CRUD plus the participant-conversations listing. Message,
//! participant, and webhook operations live in the sibling modules and
//! hang off the same accessor.

mod message;
mod participant;
mod webhook;

use tracing::info;

use relaykit_domain::validation::validate_list_params;
use relaykit_domain::{
    validate_sid, Conversation, ListByParticipantParams, ParticipantConversation, Result, SidKind,
    UpdateConversationParams,
};

use crate::client::TwilioClient;

/// Operations on conversations and their nested resources.
#[derive(Debug)]
pub struct ConversationsApi<'a> {
    client: &'a TwilioClient,
}

impl TwilioClient {
    /// The Conversations API area.
    pub fn conversations(&self) -> ConversationsApi<'_> {
        ConversationsApi { client: self }
    }
}

impl ConversationsApi<'_> {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.client.urls().conversations)
    }

    /// Create a new conversation.
    pub async fn create_conversation(&self) -> Result<Conversation> {
        let conversation: Conversation =
            self.client.post_form("create_conversation", self.url("/Conversations"), &[]).await?;
        info!(sid = %conversation.sid, "created conversation");
        Ok(conversation)
    }

    /// Fetch a conversation by its SID.
    pub async fn fetch_conversation(&self, conversation_sid: &str) -> Result<Conversation> {
        validate_sid(SidKind::Conversation, conversation_sid, "fetch_conversation")?;
        self.client
            .get_json(
                "fetch_conversation",
                self.url(&format!("/Conversations/{conversation_sid}")),
                &[],
            )
            .await
    }

    /// Update a conversation with the provided fields.
    pub async fn update_conversation(
        &self,
        conversation_sid: &str,
        params: &UpdateConversationParams,
    ) -> Result<Conversation> {
        validate_sid(SidKind::Conversation, conversation_sid, "update_conversation")?;

        let mut form: Vec<(&str, String)> = Vec::new();
        if let Some(name) = &params.friendly_name {
            form.push(("FriendlyName", name.clone()));
        }
        if let Some(name) = &params.unique_name {
            form.push(("UniqueName", name.clone()));
        }
        if let Some(attributes) = &params.attributes {
            form.push(("Attributes", attributes.clone()));
        }
        if let Some(sid) = &params.messaging_service_sid {
            form.push(("MessagingServiceSid", sid.clone()));
        }
        if let Some(state) = params.state {
            form.push(("State", state.as_str().to_string()));
        }
        if let Some(timer) = &params.timers_inactive {
            form.push(("Timers.Inactive", timer.clone()));
        }
        if let Some(timer) = &params.timers_closed {
            form.push(("Timers.Closed", timer.clone()));
        }

        let headers: Vec<(&str, String)> = params
            .webhook_enabled
            .map(|enabled| vec![("X-Twilio-Webhook-Enabled", enabled.to_string())])
            .unwrap_or_default();

        let conversation: Conversation = self
            .client
            .post_form_with_headers(
                "update_conversation",
                self.url(&format!("/Conversations/{conversation_sid}")),
                &form,
                &headers,
            )
            .await?;
        info!(sid = %conversation.sid, "updated conversation");
        Ok(conversation)
    }

    /// Delete a conversation by its SID.
    pub async fn delete_conversation(&self, conversation_sid: &str) -> Result<()> {
        validate_sid(SidKind::Conversation, conversation_sid, "delete_conversation")?;
        self.client
            .delete(
                "delete_conversation",
                self.url(&format!("/Conversations/{conversation_sid}")),
            )
            .await?;
        info!(sid = conversation_sid, "deleted conversation");
        Ok(())
    }

    /// List the conversations a participant belongs to, filtered by
    /// identity or address.
    pub async fn list_by_participant(
        &self,
        params: &ListByParticipantParams,
    ) -> Result<Vec<ParticipantConversation>> {
        validate_list_params("list_by_participant", params)?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(identity) = &params.identity {
            query.push(("Identity", identity.clone()));
        }
        if let Some(address) = &params.address {
            query.push(("Address", address.clone()));
        }
        if let Some(page_size) = params.page_size {
            query.push(("PageSize", page_size.to_string()));
        }

        let mut conversations: Vec<ParticipantConversation> = self
            .client
            .list_all("list_by_participant", self.url("/ParticipantConversations"), &query)
            .await?;
        if let Some(limit) = params.limit {
            conversations.truncate(limit as usize);
        }
        Ok(conversations)
    }
}
