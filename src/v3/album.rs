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
use crate::v3::image::Image;
use crate::v3::parsers::from_empty_str_to_none;
use crate::v3::properties::{AlbumLayout, AlbumPrivacy, MixedValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Album API.
///
/// Gallery-only fields (`ups`, `downs`, `score`, `vote`) default when the
/// album is fetched outside a gallery context.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Album {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,

    #[serde(default)]
    pub cover: Option<String>,

    #[serde(default)]
    pub account_url: Option<String>,

    #[serde(default)]
    pub privacy: Option<String>,

    #[serde(default)]
    pub layout: Option<String>,

    pub views: i64,

    pub link: String,

    #[serde(default)]
    pub ups: i64,

    #[serde(default)]
    pub downs: i64,

    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub is_album: bool,

    #[serde(default)]
    pub vote: Option<MixedValue>,

    pub images_count: i64,

    #[serde(
        default,
        rename = "deletehash",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub delete_hash: Option<String>,

    #[serde(default)]
    pub images: Vec<Image>,
}

/// Properties that can be used in the creation or update of an Album
#[derive(Default, Debug, Clone)]
pub struct AlbumOptions {
    pub image_ids: Option<Vec<String>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<AlbumPrivacy>,
    pub layout: Option<AlbumLayout>,
    pub cover: Option<String>,
}

impl AlbumOptions {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .set_opt("ids", self.image_ids.as_deref().map(comma_list))
            .set_opt("title", self.title.as_deref())
            .set_opt("description", self.description.as_deref())
            .set_opt("privacy", self.privacy.map(<&str>::from))
            .set_opt("layout", self.layout.map(<&str>::from))
            .set_opt("cover", self.cover.as_deref())
    }
}

// Create responses only carry the new id and delete hash
#[derive(Deserialize, Debug)]
struct CreatedAlbum {
    id: String,
}

fn comma_list(ids: &[String]) -> String {
    ids.join(",")
}

impl Client {
    /// Returns information for the specified album id
    pub async fn album(&self, album_id: &str) -> Result<Album, ImgurError> {
        require("album_id", album_id)?;
        self.api_client
            .get(&format!("3/album/{album_id}"), AuthMode::User)
            .await
    }

    /// Lists the images contained in an album, in display order
    pub async fn album_images(&self, album_id: &str) -> Result<Vec<Image>, ImgurError> {
        require("album_id", album_id)?;
        self.api_client
            .get(&format!("3/album/{album_id}/images"), AuthMode::User)
            .await
    }

    /// Returns one image from an album
    pub async fn album_image(
        &self,
        album_id: &str,
        image_id: &str,
    ) -> Result<Image, ImgurError> {
        require("album_id", album_id)?;
        require("image_id", image_id)?;
        self.api_client
            .get(&format!("3/album/{album_id}/image/{image_id}"), AuthMode::User)
            .await
    }

    /// Creates an album owned by the logged-in user and returns its
    /// canonical record (the create response itself only carries the id)
    pub async fn create_album(&self, options: &AlbumOptions) -> Result<Album, ImgurError> {
        let created: CreatedAlbum = self
            .api_client
            .post("3/album", &options.to_form(), AuthMode::User)
            .await?;
        self.album(&created.id).await
    }

    /// Creates an anonymous album in the app context; mutation of the
    /// result is only possible through its delete hash
    pub async fn create_anonymous_album(
        &self,
        options: &AlbumOptions,
    ) -> Result<Album, ImgurError> {
        let created: CreatedAlbum = self
            .api_client
            .post("3/album", &options.to_form(), AuthMode::App)
            .await?;
        self.album(&created.id).await
    }

    /// Updates an album and returns its canonical record
    pub async fn update_album(
        &self,
        album_id: &str,
        options: &AlbumOptions,
    ) -> Result<Album, ImgurError> {
        require("album_id", album_id)?;
        let _: bool = self
            .api_client
            .post(&format!("3/album/{album_id}"), &options.to_form(), AuthMode::User)
            .await?;
        self.album(album_id).await
    }

    /// Updates an anonymous album via its delete hash
    pub async fn update_anonymous_album(
        &self,
        delete_hash: &str,
        options: &AlbumOptions,
    ) -> Result<Album, ImgurError> {
        require("delete_hash", delete_hash)?;
        let _: bool = self
            .api_client
            .post(&format!("3/album/{delete_hash}"), &options.to_form(), AuthMode::App)
            .await?;
        self.album(delete_hash).await
    }

    /// Deletes an album owned by the logged-in user
    pub async fn delete_album(&self, album_id: &str) -> Result<bool, ImgurError> {
        require("album_id", album_id)?;
        self.api_client
            .delete(&format!("3/album/{album_id}"), AuthMode::User)
            .await
    }

    /// Deletes an anonymous album via its delete hash
    pub async fn delete_anonymous_album(&self, delete_hash: &str) -> Result<bool, ImgurError> {
        require("delete_hash", delete_hash)?;
        self.api_client
            .delete(&format!("3/album/{delete_hash}"), AuthMode::App)
            .await
    }

    /// Toggles the favorite flag; returns the resulting state
    pub async fn favorite_album(&self, album_id: &str) -> Result<bool, ImgurError> {
        require("album_id", album_id)?;
        let state: String = self
            .api_client
            .post(&format!("3/album/{album_id}/favorite"), &Form::new(), AuthMode::User)
            .await?;
        Ok(state == "favorited")
    }

    /// Replaces the album's image set with exactly these images
    pub async fn set_album_images(
        &self,
        album_id: &str,
        image_ids: &[String],
    ) -> Result<bool, ImgurError> {
        require("album_id", album_id)?;
        let form = Form::new().set("ids", comma_list(image_ids));
        self.api_client
            .post(&format!("3/album/{album_id}"), &form, AuthMode::User)
            .await
    }

    /// Adds images to an album, keeping its existing images
    pub async fn add_album_images(
        &self,
        album_id: &str,
        image_ids: &[String],
    ) -> Result<bool, ImgurError> {
        require("album_id", album_id)?;
        let form = Form::new().set("ids", comma_list(image_ids));
        self.api_client
            .post(&format!("3/album/{album_id}/add"), &form, AuthMode::User)
            .await
    }

    /// Removes images from an album owned by the logged-in user
    pub async fn remove_album_images(
        &self,
        album_id: &str,
        image_ids: &[String],
    ) -> Result<bool, ImgurError> {
        require("album_id", album_id)?;
        self.api_client
            .delete(
                &format!("3/album/{album_id}/remove_images?ids={}", comma_list(image_ids)),
                AuthMode::User,
            )
            .await
    }

    /// Removes images from an anonymous album via its delete hash
    pub async fn remove_anonymous_album_images(
        &self,
        delete_hash: &str,
        image_ids: &[String],
    ) -> Result<bool, ImgurError> {
        require("delete_hash", delete_hash)?;
        self.api_client
            .delete(
                &format!("3/album/{delete_hash}/remove_images?ids={}", comma_list(image_ids)),
                AuthMode::App,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn album_round_trips_through_envelope_payload() {
        let album = Album {
            id: "lDRB2".into(),
            title: Some("Imgur Office".into()),
            description: None,
            datetime: Utc.timestamp_opt(1_357_856_292, 0).unwrap(),
            cover: Some("24nLu".into()),
            account_url: Some("Alan".into()),
            privacy: Some("public".into()),
            layout: Some("blog".into()),
            views: 13_780,
            link: "https://imgur.com/a/lDRB2".into(),
            ups: 1_332,
            downs: 9,
            score: 1_323,
            is_album: true,
            vote: None,
            images_count: 11,
            delete_hash: None,
            images: Vec::new(),
        };
        let encoded = serde_json::to_value(&album).unwrap();
        let decoded: Album = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, album);
    }

    #[test]
    fn options_form_contains_only_provided_fields() {
        let options = AlbumOptions {
            image_ids: Some(vec!["a1".into(), "b2".into()]),
            title: Some("Office".into()),
            privacy: Some(AlbumPrivacy::Hidden),
            ..Default::default()
        };
        let form = options.to_form();
        assert_eq!(form.encoded(), "ids=a1%2Cb2&title=Office&privacy=hidden");

        // All omitted: an empty body, not empty-string fields.
        let form = AlbumOptions::default().to_form();
        assert!(form.is_empty());
        assert!(!form.contains("description"));
        assert!(!form.contains("layout"));
        assert!(!form.contains("cover"));
    }

    #[tokio::test]
    async fn empty_identifiers_fail_without_network() {
        let client = Client::new("id", "secret").unwrap();
        assert!(matches!(
            client.album("").await,
            Err(ImgurError::InvalidArgument("album_id"))
        ));
        assert!(matches!(
            client.album_image("a", "").await,
            Err(ImgurError::InvalidArgument("image_id"))
        ));
        assert!(matches!(
            client.update_anonymous_album("", &AlbumOptions::default()).await,
            Err(ImgurError::InvalidArgument("delete_hash"))
        ));
    }
}
