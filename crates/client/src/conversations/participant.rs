//! Participants of a conversation

use tracing::info;

use relaykit_domain::validation::validate_address;
use relaykit_domain::{
    validate_sid, ConversationState, Participant, ParticipantConversation, ParticipantParams,
    Result, SidKind,
};

use super::ConversationsApi;

impl ConversationsApi<'_> {
    /// Add a participant to a conversation, addressed either by a
    /// messaging-binding pair or by a chat identity.
    pub async fn add_participant(
        &self,
        conversation_sid: &str,
        params: &ParticipantParams,
    ) -> Result<Participant> {
        validate_sid(SidKind::Conversation, conversation_sid, "add_participant")?;

        let mut form: Vec<(&str, String)> = Vec::new();
        if let Some(address) = &params.address {
            form.push(("MessagingBinding.Address", address.clone()));
        }
        if let Some(proxy) = &params.proxy_address {
            form.push(("MessagingBinding.ProxyAddress", proxy.clone()));
        }
        if let Some(identity) = &params.identity {
            form.push(("Identity", identity.clone()));
        }
        if let Some(attributes) = &params.attributes {
            form.push(("Attributes", attributes.clone()));
        }

        let participant: Participant = self
            .client
            .post_form(
                "add_participant",
                self.url(&format!("/Conversations/{conversation_sid}/Participants")),
                &form,
            )
            .await?;
        info!(sid = %participant.sid, conversation_sid, "added participant");
        Ok(participant)
    }

    /// Remove the participant matching the given addressing.
    ///
    /// Returns `Ok(false)` when no participant matches; the conversation
    /// is left untouched in that case.
    pub async fn remove_participant(
        &self,
        conversation_sid: &str,
        params: &ParticipantParams,
    ) -> Result<bool> {
        validate_sid(SidKind::Conversation, conversation_sid, "remove_participant")?;

        let participants = self.list_participants(conversation_sid, "remove_participant").await?;
        let target = participants.iter().find(|participant| {
            let binding_match = params.address.is_some()
                && participant.messaging_binding.as_ref().is_some_and(|binding| {
                    binding.address == params.address
                        && binding.proxy_address == params.proxy_address
                });
            let identity_match =
                params.identity.is_some() && participant.identity == params.identity;
            binding_match || identity_match
        });

        let Some(target) = target else {
            return Ok(false);
        };

        self.client
            .delete(
                "remove_participant",
                self.url(&format!(
                    "/Conversations/{conversation_sid}/Participants/{}",
                    target.sid
                )),
            )
            .await?;
        info!(sid = %target.sid, conversation_sid, "removed participant");
        Ok(true)
    }

    /// Whether any participant of the conversation has a chat identity,
    /// i.e. an agent is assigned.
    pub async fn has_agent(&self, conversation_sid: &str) -> Result<bool> {
        validate_sid(SidKind::Conversation, conversation_sid, "has_agent")?;
        let participants = self.list_participants(conversation_sid, "has_agent").await?;
        Ok(participants.iter().any(|participant| participant.identity.is_some()))
    }

    /// All conversations a given address participates in, across every
    /// page of the listing.
    pub async fn conversations_for_address(
        &self,
        address: &str,
    ) -> Result<Vec<ParticipantConversation>> {
        validate_address("conversations_for_address", "address", address)?;
        self.client
            .list_all(
                "conversations_for_address",
                self.url("/ParticipantConversations"),
                &[("Address", address.to_string())],
            )
            .await
    }

    /// The active conversation binding `address` through `proxy_address`,
    /// when one exists.
    pub async fn find_active_conversation(
        &self,
        address: &str,
        proxy_address: &str,
    ) -> Result<Option<ParticipantConversation>> {
        validate_address("find_active_conversation", "address", address)?;
        validate_address("find_active_conversation", "proxy_address", proxy_address)?;

        let conversations = self.conversations_for_address(address).await?;
        Ok(conversations.into_iter().find(|conversation| {
            conversation.conversation_state == Some(ConversationState::Active)
                && conversation
                    .participant_messaging_binding
                    .as_ref()
                    .is_some_and(|binding| binding.proxy_address.as_deref() == Some(proxy_address))
        }))
    }

    async fn list_participants(
        &self,
        conversation_sid: &str,
        operation: &str,
    ) -> Result<Vec<Participant>> {
        self.client
            .list_all(
                operation,
                self.url(&format!("/Conversations/{conversation_sid}/Participants")),
                &[],
            )
            .await
    }
}
