//! Messages within a conversation

use tracing::info;

use relaykit_domain::validation::validate_non_empty;
use relaykit_domain::{
    validate_sid, ContentMessageParams, Message, MessageParams, RelayError, Result, SidKind,
};

use super::ConversationsApi;

impl ConversationsApi<'_> {
    /// Create a plain-body message in a conversation.
    pub async fn create_message(
        &self,
        conversation_sid: &str,
        params: &MessageParams,
    ) -> Result<Message> {
        validate_sid(SidKind::Conversation, conversation_sid, "create_message")?;
        validate_non_empty("create_message", "body", &params.body)?;

        let mut form: Vec<(&str, String)> = Vec::new();
        if let Some(author) = &params.author {
            form.push(("Author", author.clone()));
        }
        form.push(("Body", params.body.clone()));

        let message: Message = self
            .client
            .post_form(
                "create_message",
                self.url(&format!("/Conversations/{conversation_sid}/Messages")),
                &form,
            )
            .await?;
        info!(sid = %message.sid, conversation_sid, "created message");
        Ok(message)
    }

    /// Create a message rendered from a content template.
    ///
    /// The numeric placeholder substitutions are serialized to JSON the
    /// way the Content API expects them.
    pub async fn create_content_message(
        &self,
        conversation_sid: &str,
        params: &ContentMessageParams,
    ) -> Result<Message> {
        validate_sid(SidKind::Conversation, conversation_sid, "create_content_message")?;

        let variables = serde_json::to_string(&params.variables).map_err(|e| {
            RelayError::validation(
                "create_content_message",
                format!("variables must serialize to JSON: {e}"),
            )
        })?;

        let mut form: Vec<(&str, String)> = Vec::new();
        if let Some(author) = &params.author {
            form.push(("Author", author.clone()));
        }
        form.push(("ContentSid", params.content_sid.to_string()));
        form.push(("ContentVariables", variables));

        let message: Message = self
            .client
            .post_form(
                "create_content_message",
                self.url(&format!("/Conversations/{conversation_sid}/Messages")),
                &form,
            )
            .await?;
        info!(sid = %message.sid, conversation_sid, "created content message");
        Ok(message)
    }
}
