/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{AuthMode, Form};
use crate::v3::client::{Client, require};
use crate::v3::errors::ImgurError;
use crate::v3::properties::MixedValue;
use serde::{Deserialize, Serialize};

/// One direct message inside a conversation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i64,

    pub from: String,

    pub account_id: i64,

    pub recipient_account_id: i64,

    #[serde(default)]
    pub subject: Option<MixedValue>,

    pub body: String,

    pub timestamp: String,

    #[serde(default)]
    pub parent_id: i64,
}

/// A message thread between the logged-in user and another account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: i64,

    pub account_id: i64,

    #[serde(default)]
    pub viewed: bool,

    pub content: Message,
}

impl Client {
    /// Lists the logged-in user's conversations
    pub async fn conversations(&self) -> Result<Vec<Conversation>, ImgurError> {
        self.api_client.get("3/conversations/", AuthMode::User).await
    }

    /// Returns one conversation with its message thread
    pub async fn conversation(&self, conversation_id: &str) -> Result<Conversation, ImgurError> {
        require("conversation_id", conversation_id)?;
        self.api_client
            .get(&format!("3/conversations/{conversation_id}"), AuthMode::User)
            .await
    }

    /// Sends a direct message to another user
    pub async fn send_message(
        &self,
        recipient_username: &str,
        message: &str,
    ) -> Result<bool, ImgurError> {
        require("recipient_username", recipient_username)?;
        require("message", message)?;

        let form = Form::new().set("body", message);
        self.api_client
            .post(&format!("3/conversations/{recipient_username}"), &form, AuthMode::User)
            .await
    }

    /// Deletes a conversation and its messages
    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<bool, ImgurError> {
        require("conversation_id", conversation_id)?;
        self.api_client
            .delete(&format!("3/conversations/{conversation_id}"), AuthMode::User)
            .await
    }

    /// Reports a message sender for abuse
    pub async fn report_sender(&self, username: &str) -> Result<bool, ImgurError> {
        require("username", username)?;
        self.api_client
            .post(&format!("3/conversations/report/{username}"), &Form::new(), AuthMode::User)
            .await
    }

    /// Blocks a message sender
    pub async fn block_sender(&self, username: &str) -> Result<bool, ImgurError> {
        require("username", username)?;
        self.api_client
            .post(&format!("3/conversations/block/{username}"), &Form::new(), AuthMode::User)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_decodes_with_latest_message() {
        let raw = serde_json::json!({
            "id": 188129,
            "account_id": 384077,
            "viewed": false,
            "content": {
                "id": 615488,
                "from": "jasdev",
                "account_id": 3698510,
                "recipient_account_id": 384077,
                "subject": null,
                "body": "hi there",
                "timestamp": "2014-03-16 02:01:48",
                "parent_id": 0
            }
        });
        let conversation: Conversation = serde_json::from_value(raw).unwrap();
        assert_eq!(conversation.content.from, "jasdev");
        assert_eq!(conversation.content.subject, None);

        let encoded = serde_json::to_value(&conversation).unwrap();
        let decoded: Conversation = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, conversation);
    }

    #[tokio::test]
    async fn send_message_validates_both_arguments_first() {
        let client = Client::new("id", "secret").unwrap();
        assert!(matches!(
            client.send_message("", "hi").await,
            Err(ImgurError::InvalidArgument("recipient_username"))
        ));
        assert!(matches!(
            client.send_message("jasdev", "").await,
            Err(ImgurError::InvalidArgument("message"))
        ));
    }
}
