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
use crate::v3::parsers::from_empty_str_to_none;
use crate::v3::properties::{ImageUploadType, MixedValue, ThumbnailSize};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Image API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#models) for more details
/// on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Image {
    pub id: String,

    #[serde(default)]
    pub title: Option<MixedValue>,

    #[serde(default)]
    pub description: Option<MixedValue>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub datetime: DateTime<Utc>,

    #[serde(rename = "type")]
    pub mime_type: String,

    #[serde(default)]
    pub animated: bool,

    pub width: i64,

    pub height: i64,

    pub size: i64,

    pub views: i64,

    #[serde(default)]
    pub bandwidth: i64,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default)]
    pub nsfw: Option<MixedValue>,

    #[serde(default)]
    pub section: Option<MixedValue>,

    #[serde(
        default,
        rename = "deletehash",
        deserialize_with = "from_empty_str_to_none"
    )]
    pub delete_hash: Option<String>,

    pub link: String,
}

/// Optional metadata attached to an upload
#[derive(Default, Debug, Clone)]
pub struct UploadOptions {
    pub album: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UploadOptions {
    fn apply(&self, form: Form) -> Form {
        form.set_opt("album", self.album.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("title", self.title.as_deref())
            .set_opt("description", self.description.as_deref())
    }
}

// Upload responses only carry the new id and delete hash; the canonical
// record is fetched afterwards.
#[derive(Deserialize, Debug)]
struct UploadedImage {
    id: String,
}

impl Client {
    /// Returns information for the specified image id
    pub async fn image(&self, image_id: &str) -> Result<Image, ImgurError> {
        require("image_id", image_id)?;
        self.api_client
            .get(&format!("3/image/{image_id}"), AuthMode::User)
            .await
    }

    /// Uploads raw image data, base64-encoded into the form body, and
    /// returns the canonical record of the new image
    pub async fn upload_image_bytes(
        &self,
        data: Bytes,
        options: &UploadOptions,
    ) -> Result<Image, ImgurError> {
        if data.is_empty() {
            return Err(ImgurError::InvalidArgument("image"));
        }

        let form = options
            .apply(Form::new().set("type", <&str>::from(ImageUploadType::Base64)))
            .set("image", BASE64.encode(&data));
        let uploaded: UploadedImage = self.api_client.post("3/image", &form, AuthMode::User).await?;
        self.image(&uploaded.id).await
    }

    /// Asks the API to fetch and host the image behind a remote URL
    pub async fn upload_image_url(
        &self,
        image_url: &str,
        options: &UploadOptions,
    ) -> Result<Image, ImgurError> {
        require("image_url", image_url)?;

        let form = options
            .apply(Form::new().set("type", <&str>::from(ImageUploadType::Url)))
            .set("image", image_url);
        let uploaded: UploadedImage = self.api_client.post("3/image", &form, AuthMode::User).await?;
        self.image(&uploaded.id).await
    }

    /// Deletes an image owned by the logged-in user
    pub async fn delete_image(&self, image_id: &str) -> Result<bool, ImgurError> {
        require("image_id", image_id)?;
        self.api_client
            .delete(&format!("3/image/{image_id}"), AuthMode::User)
            .await
    }

    /// Deletes an anonymously uploaded image via its delete hash
    pub async fn delete_anonymous_image(&self, delete_hash: &str) -> Result<bool, ImgurError> {
        require("delete_hash", delete_hash)?;
        self.api_client
            .delete(&format!("3/image/{delete_hash}"), AuthMode::App)
            .await
    }

    /// Updates title/description and returns the canonical record
    pub async fn update_image(
        &self,
        image_id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Image, ImgurError> {
        require("image_id", image_id)?;

        let form = Form::new()
            .set_opt("title", title)
            .set_opt("description", description);
        let _: bool = self
            .api_client
            .post(&format!("3/image/{image_id}"), &form, AuthMode::User)
            .await?;
        self.image(image_id).await
    }

    /// Updates an anonymously uploaded image via its delete hash
    pub async fn update_anonymous_image(
        &self,
        delete_hash: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, ImgurError> {
        require("delete_hash", delete_hash)?;

        let form = Form::new()
            .set_opt("title", title)
            .set_opt("description", description);
        self.api_client
            .post(&format!("3/image/{delete_hash}"), &form, AuthMode::App)
            .await
    }

    /// Toggles the favorite flag; returns the resulting state
    pub async fn favorite_image(&self, image_id: &str) -> Result<bool, ImgurError> {
        require("image_id", image_id)?;
        let state: String = self
            .api_client
            .post(&format!("3/image/{image_id}/favorite"), &Form::new(), AuthMode::User)
            .await?;
        Ok(state == "favorited")
    }
}

/// Direct url of the full-size image
pub fn image_url(image_id: &str) -> String {
    format!("https://i.imgur.com/{image_id}.jpg")
}

/// Direct url of a thumbnail rendition
pub fn thumbnail_url(image_id: &str, size: ThumbnailSize) -> String {
    format!("https://i.imgur.com/{image_id}{}.jpg", <&str>::from(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_image() -> Image {
        Image {
            id: "SbBGk".into(),
            title: Some("a cat".into()),
            description: None,
            datetime: Utc.timestamp_opt(1_341_533_193, 0).unwrap(),
            mime_type: "image/jpeg".into(),
            animated: false,
            width: 2_559,
            height: 1_439,
            size: 521_509,
            views: 1,
            bandwidth: 520_509,
            favorite: false,
            nsfw: None,
            section: None,
            delete_hash: Some("eYZd3NNJHsbreD1".into()),
            link: "https://i.imgur.com/SbBGk.jpg".into(),
        }
    }

    #[test]
    fn image_round_trips_through_envelope_payload() {
        let image = sample_image();
        let encoded = serde_json::to_value(&image).unwrap();
        assert_eq!(encoded["type"], "image/jpeg");
        assert_eq!(encoded["datetime"], 1_341_533_193);

        let decoded: Image = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn mixed_fields_accept_numbers_and_nulls() {
        let raw = serde_json::json!({
            "id": "SbBGk",
            "title": 12,
            "description": null,
            "datetime": 1341533193,
            "type": "image/jpeg",
            "animated": false,
            "width": 10,
            "height": 10,
            "size": 99,
            "views": 3,
            "bandwidth": 297,
            "favorite": false,
            "nsfw": null,
            "section": "pics",
            "deletehash": "",
            "link": "https://i.imgur.com/SbBGk.jpg"
        });
        let image: Image = serde_json::from_value(raw).unwrap();
        assert_eq!(image.title.unwrap().as_i64(), Some(12));
        assert_eq!(image.section.unwrap().as_str(), Some("pics"));
        // Empty delete hash is normalized away.
        assert_eq!(image.delete_hash, None);
    }

    #[test]
    fn direct_urls_embed_size_suffix() {
        assert_eq!(image_url("SbBGk"), "https://i.imgur.com/SbBGk.jpg");
        assert_eq!(
            thumbnail_url("SbBGk", ThumbnailSize::MediumThumbnail),
            "https://i.imgur.com/SbBGkm.jpg"
        );
    }

    #[tokio::test]
    async fn empty_identifiers_fail_without_network() {
        let client = Client::new("id", "secret").unwrap();
        assert!(matches!(
            client.image("").await,
            Err(ImgurError::InvalidArgument("image_id"))
        ));
        assert!(matches!(
            client.delete_anonymous_image("").await,
            Err(ImgurError::InvalidArgument("delete_hash"))
        ));
        assert!(matches!(
            client
                .upload_image_bytes(Bytes::new(), &UploadOptions::default())
                .await,
            Err(ImgurError::InvalidArgument("image"))
        ));
    }
}
