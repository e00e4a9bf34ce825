//! Content template API area

use relaykit_domain::validation::validate_non_empty;
use relaykit_domain::{validate_sid, Content, RelayError, Result, SidKind};

use crate::client::TwilioClient;

const CONTENT_DOCS_URL: &str = "https://www.twilio.com/docs/content-editor/overview";
const CONTENT_CONSOLE_URL: &str =
    "https://console.twilio.com/us1/develop/sms/content-editor";

/// Operations on content templates.
#[derive(Debug)]
pub struct ContentApi<'a> {
    client: &'a TwilioClient,
}

impl TwilioClient {
    /// The Content API area.
    pub fn content(&self) -> ContentApi<'_> {
        ContentApi { client: self }
    }
}

impl ContentApi<'_> {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.client.urls().content)
    }

    /// All content templates of the account.
    ///
    /// An account without templates is treated as misconfigured: the
    /// listing raises a 404 with a stable code instead of returning an
    /// empty vector.
    pub async fn list_contents(&self) -> Result<Vec<Content>> {
        let contents: Vec<Content> =
            self.client.list_all("list_contents", self.url("/Content"), &[]).await?;

        if contents.is_empty() {
            return Err(RelayError::api(
                "list_contents",
                "contents not found",
                404,
                "CONTENTS_NOT_FOUND",
                CONTENT_DOCS_URL,
                format!(
                    "No content templates exist in this account; create one in the console: {CONTENT_CONSOLE_URL}"
                ),
            ));
        }
        Ok(contents)
    }

    /// Fetch a content template by its SID.
    pub async fn fetch_content(&self, content_sid: &str) -> Result<Content> {
        validate_sid(SidKind::Content, content_sid, "fetch_content")?;
        self.client
            .get_json("fetch_content", self.url(&format!("/Content/{content_sid}")), &[])
            .await
    }

    /// The content template with the given friendly name, when one exists.
    pub async fn find_content_by_name(&self, name: &str) -> Result<Option<Content>> {
        validate_non_empty("find_content_by_name", "name", name)?;
        let contents = self.list_contents().await?;
        Ok(contents.into_iter().find(|content| content.friendly_name.as_deref() == Some(name)))
    }
}
