/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{AuthMode, Form};
use crate::v3::client::{Client, require};
use crate::v3::conversation::Message;
use crate::v3::errors::ImgurError;
use serde::{Deserialize, Serialize};

/// The comment a reply notification points at
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReplyContent {
    pub id: i64,

    pub hash: String,

    pub caption: String,

    pub author: String,

    pub author_id: i64,

    pub ups: i64,

    pub downs: i64,

    pub points: i64,

    pub datetime: String,

    #[serde(default)]
    pub parent_id: i64,

    #[serde(default)]
    pub deleted: bool,
}

/// A reply notification
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: i64,

    pub account_id: i64,

    #[serde(default)]
    pub viewed: bool,

    pub content: ReplyContent,
}

/// The logged-in user's notification feed
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Notification {
    #[serde(default)]
    pub replies: Vec<Reply>,

    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Client {
    /// Returns the logged-in user's notification feed; `only_unread` limits
    /// it to notifications not yet viewed
    pub async fn notifications(&self, only_unread: bool) -> Result<Notification, ImgurError> {
        self.api_client
            .get(&format!("3/notification?new={only_unread}"), AuthMode::User)
            .await
    }

    /// Returns one notification
    pub async fn notification(&self, notification_id: &str) -> Result<Notification, ImgurError> {
        require("notification_id", notification_id)?;
        self.api_client
            .get(&format!("3/notification/{notification_id}"), AuthMode::User)
            .await
    }

    /// Marks a notification as viewed
    pub async fn mark_notification_read(
        &self,
        notification_id: &str,
    ) -> Result<bool, ImgurError> {
        require("notification_id", notification_id)?;
        self.api_client
            .post(&format!("3/notification/{notification_id}"), &Form::new(), AuthMode::User)
            .await
    }
}
