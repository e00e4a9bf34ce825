//! Webhooks scoped to a conversation

use tracing::info;

use relaykit_domain::validation::validate_webhook_params;
use relaykit_domain::{
    validate_sid, ConversationWebhook, Result, SidKind, WebhookMethod, WebhookParams,
    WebhookTarget,
};

use super::ConversationsApi;

impl ConversationsApi<'_> {
    /// Attach a webhook to a conversation.
    ///
    /// Target-specific rules are checked first: a `studio` target needs a
    /// flow SID, a `webhook` target needs a URL.
    pub async fn add_webhook(
        &self,
        conversation_sid: &str,
        params: &WebhookParams,
    ) -> Result<ConversationWebhook> {
        validate_sid(SidKind::Conversation, conversation_sid, "add_webhook")?;
        validate_webhook_params("add_webhook", params)?;

        let method = params.method.unwrap_or(WebhookMethod::Post);
        let mut form: Vec<(&str, String)> = vec![
            ("Target", params.target.as_str().to_string()),
            ("Configuration.Method", method.as_str().to_string()),
        ];
        for filter in params.filters.iter().flatten() {
            form.push(("Configuration.Filters", filter.as_str().to_string()));
        }
        for trigger in params.triggers.iter().flatten() {
            form.push(("Configuration.Triggers", trigger.clone()));
        }
        if let Some(url) = &params.url {
            form.push(("Configuration.Url", url.clone()));
        }
        if let Some(flow_sid) = &params.flow_sid {
            form.push(("Configuration.FlowSid", flow_sid.to_string()));
        }

        let webhook: ConversationWebhook = self
            .client
            .post_form(
                "add_webhook",
                self.url(&format!("/Conversations/{conversation_sid}/Webhooks")),
                &form,
            )
            .await?;
        info!(sid = %webhook.sid, conversation_sid, target = params.target.as_str(), "added webhook");
        Ok(webhook)
    }

    /// The webhooks of a conversation pointing at the given target kind.
    pub async fn find_webhooks_by_target(
        &self,
        conversation_sid: &str,
        target: WebhookTarget,
    ) -> Result<Vec<ConversationWebhook>> {
        validate_sid(SidKind::Conversation, conversation_sid, "find_webhooks_by_target")?;

        let webhooks: Vec<ConversationWebhook> = self
            .client
            .list_all(
                "find_webhooks_by_target",
                self.url(&format!("/Conversations/{conversation_sid}/Webhooks")),
                &[],
            )
            .await?;
        Ok(webhooks.into_iter().filter(|webhook| webhook.target == target.as_str()).collect())
    }
}
