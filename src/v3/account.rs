/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::album::Album;
use crate::v3::api::{AuthMode, Form};
use crate::v3::client::{Client, require};
use crate::v3::comment::Comment;
use crate::v3::errors::ImgurError;
use crate::v3::image::Image;
use crate::v3::notification::Notification;
use crate::v3::properties::{AlbumPrivacy, MixedValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Account API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#models) for more details
/// on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,

    pub url: String,

    #[serde(default)]
    pub bio: Option<MixedValue>,

    pub reputation: i64,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub pro_expiration: bool,
}

/// A user the account has blocked
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlockedUser {
    pub blocked_id: i64,
    pub blocked_url: String,
}

/// Settings of the logged-in account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountSettings {
    pub email: String,

    #[serde(default)]
    pub high_quality: bool,

    #[serde(default)]
    pub public_images: bool,

    #[serde(default)]
    pub album_privacy: Option<String>,

    #[serde(default)]
    pub pro_expiration: bool,

    #[serde(default)]
    pub accepted_gallery_terms: bool,

    #[serde(default)]
    pub messaging_enabled: bool,

    #[serde(default)]
    pub blocked_users: Vec<BlockedUser>,
}

/// An achievement awarded to an account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trophy {
    pub id: i64,

    pub name: String,

    pub name_clean: String,

    pub description: String,

    #[serde(default)]
    pub data: Option<MixedValue>,

    #[serde(default)]
    pub data_link: Option<MixedValue>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,
}

/// Totals of an account's gallery activity, with its trophies
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GalleryProfile {
    pub total_gallery_comments: i64,

    pub total_gallery_favorites: i64,

    pub total_gallery_submissions: i64,

    #[serde(default)]
    pub trophies: Vec<Trophy>,
}

/// Settings changes to apply; omitted fields are left untouched.
///
/// `public_images` goes over the wire as `public`/`private`, the boolean
/// fields as literal `true`/`false`.
#[derive(Default, Debug, Clone)]
pub struct AccountSettingsUpdate {
    pub bio: Option<String>,
    pub public_images: Option<bool>,
    pub messaging_enabled: Option<bool>,
    pub album_privacy: Option<AlbumPrivacy>,
    pub accepted_gallery_terms: Option<bool>,
}

impl AccountSettingsUpdate {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .set_opt("bio", self.bio.as_deref())
            .set_opt(
                "public_images",
                self.public_images
                    .map(|public| if public { "public" } else { "private" }),
            )
            .set_opt(
                "messaging_enabled",
                self.messaging_enabled.map(bool_word),
            )
            .set_opt("album_privacy", self.album_privacy.map(<&str>::from))
            .set_opt(
                "accepted_gallery_terms",
                self.accepted_gallery_terms.map(bool_word),
            )
    }
}

fn bool_word(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn account_path(username: &str, tail: &str) -> String {
    if tail.is_empty() {
        format!("3/account/{username}")
    } else {
        format!("3/account/{username}/{tail}")
    }
}

impl Client {
    /// Returns the public profile of a user
    pub async fn account(&self, username: &str) -> Result<Account, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, ""), AuthMode::User)
            .await
    }

    /// Deletes the logged-in user's account
    pub async fn delete_account(&self, username: &str) -> Result<bool, ImgurError> {
        require("username", username)?;
        self.api_client
            .delete(&account_path(username, ""), AuthMode::User)
            .await
    }

    /// Lists the gallery images a user has favorited
    pub async fn account_gallery_favorites(
        &self,
        username: &str,
    ) -> Result<Vec<Image>, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "gallery_favorites"), AuthMode::User)
            .await
    }

    /// Returns the logged-in user's settings
    pub async fn account_settings(&self, username: &str) -> Result<AccountSettings, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "settings"), AuthMode::User)
            .await
    }

    /// Applies the provided settings changes
    pub async fn change_account_settings(
        &self,
        username: &str,
        update: &AccountSettingsUpdate,
    ) -> Result<bool, ImgurError> {
        require("username", username)?;
        self.api_client
            .post(&account_path(username, "settings"), &update.to_form(), AuthMode::User)
            .await
    }

    /// Returns a user's gallery totals and trophies
    pub async fn gallery_profile(&self, username: &str) -> Result<GalleryProfile, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "gallery_profile"), AuthMode::User)
            .await
    }

    /// Checks whether the user's email address has been verified
    pub async fn has_verified_email(&self, username: &str) -> Result<bool, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "verifyemail"), AuthMode::User)
            .await
    }

    /// Sends the user another verification email
    pub async fn send_verification_email(&self, username: &str) -> Result<bool, ImgurError> {
        require("username", username)?;
        self.api_client
            .post(&account_path(username, "verifyemail"), &Form::new(), AuthMode::User)
            .await
    }

    /// Lists a user's albums, one page at a time
    pub async fn account_albums(
        &self,
        username: &str,
        page: Option<u32>,
    ) -> Result<Vec<Album>, ImgurError> {
        require("username", username)?;
        let tail = match page {
            Some(page) => format!("albums/{page}"),
            None => "albums".to_string(),
        };
        self.api_client
            .get(&account_path(username, &tail), AuthMode::User)
            .await
    }

    /// Lists the ids of every album a user owns
    pub async fn account_album_ids(&self, username: &str) -> Result<Vec<String>, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "albums/ids"), AuthMode::User)
            .await
    }

    /// Counts a user's albums
    pub async fn account_album_count(&self, username: &str) -> Result<u64, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "albums/count"), AuthMode::User)
            .await
    }

    /// Lists the comments a user has made
    pub async fn account_comments(&self, username: &str) -> Result<Vec<Comment>, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "comments"), AuthMode::User)
            .await
    }

    /// Lists the ids of every comment a user has made
    pub async fn account_comment_ids(&self, username: &str) -> Result<Vec<i64>, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "comments/ids"), AuthMode::User)
            .await
    }

    /// Counts a user's comments
    pub async fn account_comment_count(&self, username: &str) -> Result<u64, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "comments/count"), AuthMode::User)
            .await
    }

    /// Lists the images a user has uploaded
    pub async fn account_images(&self, username: &str) -> Result<Vec<Image>, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "images"), AuthMode::User)
            .await
    }

    /// Lists the ids of every image a user has uploaded
    pub async fn account_image_ids(&self, username: &str) -> Result<Vec<String>, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "images/ids"), AuthMode::User)
            .await
    }

    /// Counts a user's images
    pub async fn account_image_count(&self, username: &str) -> Result<u64, ImgurError> {
        require("username", username)?;
        self.api_client
            .get(&account_path(username, "images/count"), AuthMode::User)
            .await
    }

    /// Returns the reply notifications for a user; `only_unread` is the
    /// server default, so only the `false` case needs a query string
    pub async fn account_replies(
        &self,
        username: &str,
        only_unread: bool,
    ) -> Result<Notification, ImgurError> {
        require("username", username)?;
        let tail = if only_unread {
            "notifications/replies"
        } else {
            "notifications/replies?new=false"
        };
        self.api_client
            .get(&account_path(username, tail), AuthMode::User)
            .await
    }
}
