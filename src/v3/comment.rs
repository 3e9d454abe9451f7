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
use crate::v3::properties::{MixedValue, Vote};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One comment in a thread.
///
/// `children` is the ordered reply subtree, recursively of this same shape.
/// `parent_id` arrives as a number for replies and null (or occasionally a
/// string) for top-level comments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,

    pub image_id: String,

    pub caption: String,

    pub author: String,

    pub author_id: i64,

    #[serde(default)]
    pub on_album: bool,

    #[serde(default)]
    pub album_cover: Option<MixedValue>,

    pub ups: i64,

    pub downs: i64,

    pub points: i64,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,

    #[serde(default)]
    pub parent_id: Option<MixedValue>,

    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub children: Vec<Comment>,
}

// Create responses only carry the new comment's id
#[derive(Deserialize, Debug)]
struct CreatedComment {
    id: i64,
}

impl Client {
    /// Returns the specified comment with its reply subtree
    pub async fn comment(&self, comment_id: &str) -> Result<Comment, ImgurError> {
        require("comment_id", comment_id)?;
        self.api_client
            .get(&format!("3/comment/{comment_id}"), AuthMode::User)
            .await
    }

    /// Posts a comment on an image, optionally as a reply to `parent_id`,
    /// and returns the canonical record of the new comment
    pub async fn create_comment(
        &self,
        image_id: &str,
        comment: &str,
        parent_id: Option<&str>,
    ) -> Result<Comment, ImgurError> {
        require("image_id", image_id)?;
        require("comment", comment)?;

        let form = Form::new()
            .set("image_id", image_id)
            .set("comment", comment)
            .set_opt("parent_id", parent_id);
        let created: CreatedComment =
            self.api_client.post("3/comment", &form, AuthMode::User).await?;
        self.comment(&created.id.to_string()).await
    }

    /// Deletes a comment made by the logged-in user
    pub async fn delete_comment(&self, comment_id: &str) -> Result<bool, ImgurError> {
        require("comment_id", comment_id)?;
        self.api_client
            .delete(&format!("3/comment/{comment_id}"), AuthMode::User)
            .await
    }

    /// Lists the direct replies to a comment
    pub async fn comment_replies(&self, comment_id: &str) -> Result<Vec<Comment>, ImgurError> {
        require("comment_id", comment_id)?;
        self.api_client
            .get(&format!("3/comment/{comment_id}/replies"), AuthMode::User)
            .await
    }

    /// Casts the logged-in user's vote on a comment
    pub async fn vote_comment(&self, comment_id: &str, vote: Vote) -> Result<bool, ImgurError> {
        require("comment_id", comment_id)?;
        self.api_client
            .post(
                &format!("3/comment/{comment_id}/vote/{}", <&str>::from(vote)),
                &Form::new(),
                AuthMode::User,
            )
            .await
    }

    /// Reports a comment for rule violations
    pub async fn report_comment(&self, comment_id: &str) -> Result<bool, ImgurError> {
        require("comment_id", comment_id)?;
        self.api_client
            .post(&format!("3/comment/{comment_id}/report"), &Form::new(), AuthMode::User)
            .await
    }

    /// Replies to a comment without re-fetching the canonical record
    pub async fn reply_to_comment(
        &self,
        comment_id: &str,
        image_id: &str,
        comment: &str,
    ) -> Result<bool, ImgurError> {
        require("comment_id", comment_id)?;
        require("image_id", image_id)?;
        require("comment", comment)?;

        let form = Form::new().set("image_id", image_id).set("comment", comment);
        self.api_client
            .post(&format!("3/comment/{comment_id}"), &form, AuthMode::User)
            .await
    }
}
