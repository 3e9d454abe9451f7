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
use crate::v3::properties::{DateRange, GallerySort, Sort, Vote};
use serde::{Deserialize, Serialize};

/// Addresses one gallery item.
///
/// The API exposes parallel endpoint families for bare gallery posts,
/// gallery albums and gallery images; the same operations apply to each, so
/// one reference type selects the family.
#[derive(Debug, Clone, Copy)]
pub enum GalleryRef<'a> {
    Post(&'a str),
    Album(&'a str),
    Image(&'a str),
}

impl GalleryRef<'_> {
    fn validate(&self) -> Result<(), ImgurError> {
        match self {
            GalleryRef::Post(id) => require("gallery_id", id),
            GalleryRef::Album(id) => require("album_id", id),
            GalleryRef::Image(id) => require("image_id", id),
        }
    }

    fn path(&self) -> String {
        match self {
            GalleryRef::Post(id) => format!("3/gallery/{id}"),
            GalleryRef::Album(id) => format!("3/gallery/album/{id}"),
            GalleryRef::Image(id) => format!("3/gallery/image/{id}"),
        }
    }
}

/// Up/down tallies for a gallery item
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VoteCounts {
    pub ups: i64,
    pub downs: i64,
}

impl Client {
    /// Returns a gallery album with its images
    pub async fn gallery_album(&self, album_id: &str) -> Result<Album, ImgurError> {
        require("album_id", album_id)?;
        self.api_client
            .get(&format!("3/gallery/album/{album_id}"), AuthMode::User)
            .await
    }

    /// Returns a gallery image
    pub async fn gallery_image(&self, image_id: &str) -> Result<Image, ImgurError> {
        require("image_id", image_id)?;
        self.api_client
            .get(&format!("3/gallery/image/{image_id}"), AuthMode::User)
            .await
    }

    /// Returns an image mirrored from a subreddit section
    pub async fn subreddit_image(
        &self,
        subreddit: &str,
        image_id: &str,
    ) -> Result<Image, ImgurError> {
        require("subreddit", subreddit)?;
        require("image_id", image_id)?;
        self.api_client
            .get(&format!("3/gallery/r/{subreddit}/{image_id}"), AuthMode::User)
            .await
    }

    /// Lists the memes subgallery; `window` narrows `Sort::Top` listings
    pub async fn memes_subgallery(
        &self,
        sort: Sort,
        window: Option<DateRange>,
        page: Option<u32>,
    ) -> Result<Vec<Image>, ImgurError> {
        let mut path = format!("3/gallery/g/memes/{}", <&str>::from(sort));
        if sort == Sort::Top
            && let Some(window) = window
        {
            path = format!("{path}/{}", <&str>::from(window));
        }
        if let Some(page) = page {
            path = format!("{path}/{page}");
        }
        self.api_client.get(&path, AuthMode::User).await
    }

    /// Returns one image from the memes subgallery
    pub async fn meme_image(&self, image_id: &str) -> Result<Image, ImgurError> {
        require("image_id", image_id)?;
        self.api_client
            .get(&format!("3/gallery/g/memes/{image_id}"), AuthMode::User)
            .await
    }

    /// Takes the logged-in user's item out of the gallery
    pub async fn remove_from_gallery(&self, gallery_id: &str) -> Result<bool, ImgurError> {
        require("gallery_id", gallery_id)?;
        self.api_client
            .delete(&format!("3/gallery/{gallery_id}"), AuthMode::User)
            .await
    }

    /// Returns the vote tallies for a gallery item
    pub async fn gallery_votes(&self, item: GalleryRef<'_>) -> Result<VoteCounts, ImgurError> {
        item.validate()?;
        self.api_client
            .get(&format!("{}/votes", item.path()), AuthMode::User)
            .await
    }

    /// Casts the logged-in user's vote on a gallery item
    pub async fn gallery_vote(
        &self,
        item: GalleryRef<'_>,
        vote: Vote,
    ) -> Result<bool, ImgurError> {
        item.validate()?;
        self.api_client
            .post(
                &format!("{}/vote/{}", item.path(), <&str>::from(vote)),
                &Form::new(),
                AuthMode::User,
            )
            .await
    }

    /// Reports a gallery item for rule violations
    pub async fn report_gallery(&self, item: GalleryRef<'_>) -> Result<bool, ImgurError> {
        item.validate()?;
        self.api_client
            .post(&format!("{}/report", item.path()), &Form::new(), AuthMode::User)
            .await
    }

    /// Lists a gallery item's comment threads
    pub async fn gallery_comments(
        &self,
        item: GalleryRef<'_>,
        sort: GallerySort,
    ) -> Result<Vec<Comment>, ImgurError> {
        item.validate()?;
        self.api_client
            .get(
                &format!("{}/comments/{}", item.path(), <&str>::from(sort)),
                AuthMode::User,
            )
            .await
    }

    /// Returns one comment on a gallery item
    pub async fn gallery_comment(
        &self,
        item: GalleryRef<'_>,
        comment_id: i64,
    ) -> Result<Comment, ImgurError> {
        item.validate()?;
        self.api_client
            .get(&format!("{}/comment/{comment_id}", item.path()), AuthMode::User)
            .await
    }

    /// Posts a top-level comment on a gallery item and returns the
    /// canonical record of the new comment
    pub async fn add_gallery_comment(
        &self,
        item: GalleryRef<'_>,
        comment: &str,
    ) -> Result<Comment, ImgurError> {
        item.validate()?;
        require("comment", comment)?;

        let form = Form::new().set("comment", comment);
        let created: CreatedGalleryComment = self
            .api_client
            .post(&format!("{}/comment", item.path()), &form, AuthMode::User)
            .await?;
        self.gallery_comment(item, created.id).await
    }

    /// Replies to a comment on a gallery item and returns the canonical
    /// record of the new reply
    pub async fn add_gallery_reply(
        &self,
        item: GalleryRef<'_>,
        comment_id: i64,
        reply: &str,
    ) -> Result<Comment, ImgurError> {
        item.validate()?;
        require("reply", reply)?;

        let form = Form::new().set("comment", reply);
        let created: CreatedGalleryComment = self
            .api_client
            .post(&format!("{}/comment/{comment_id}", item.path()), &form, AuthMode::User)
            .await?;
        self.gallery_comment(item, created.id).await
    }

    /// Lists the ids of every comment on a gallery item
    pub async fn gallery_comment_ids(&self, item: GalleryRef<'_>) -> Result<Vec<i64>, ImgurError> {
        item.validate()?;
        self.api_client
            .get(&format!("{}/comments/ids", item.path()), AuthMode::User)
            .await
    }

    /// Counts the comments on a gallery item
    pub async fn gallery_comment_count(&self, item: GalleryRef<'_>) -> Result<u64, ImgurError> {
        item.validate()?;
        self.api_client
            .get(&format!("{}/comments/count", item.path()), AuthMode::User)
            .await
    }
}

#[derive(Deserialize, Debug)]
struct CreatedGalleryComment {
    id: i64,
}
