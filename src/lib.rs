/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur
//!
//! This library was created for working with the Imgur APIv3 interface.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com)
//!
//! ## Features
//!
//! - Account information, settings and listings
//! - Album create/update/delete, image membership management
//! - Image upload (raw bytes or remote URL), update, delete
//! - Gallery browsing, voting, reporting and comments
//! - Comment trees, replies and votes
//! - Conversations and notifications
//! - OAuth2 PIN/code/refresh flows and redirect-URI parsing
//! - Lower level interface for handling the raw communication
//!
//! *Every response travels in the uniform `{data, success, status}` envelope;
//! the [`v3::ApiClient`] unwraps it and maps `success: false` payloads to
//! typed errors. Anonymous calls are authorized with `Client-ID <id>`, user
//! calls with `Bearer <token>` once a token has been attached.*
//!
//! *The library performs no retries, caching or rate-limit handling; wrap
//! calls yourself if you need resilience. Dropping a call's future aborts
//! that request and only that request.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! imgur = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Imgur to obtain a client
//! id/secret prior to using the API**
//!
//! ```rust,no_run
//! use imgur::v3::{AlbumOptions, AlbumPrivacy, Client};
//!
//! async fn show_album(client_id: &str, client_secret: &str, album_id: &str) -> anyhow::Result<()> {
//!     // Anonymous/app context: authorized with the client id only
//!     let client = Client::new(client_id, client_secret)?;
//!
//!     let album = client.album(album_id).await?;
//!     println!("{:?}: {} images", album.title, album.images_count);
//!
//!     for image in client.album_images(album_id).await? {
//!         println!("  {}", image.link);
//!     }
//!     Ok(())
//! }
//!
//! async fn login_and_post(client: &Client, pin: &str) -> anyhow::Result<()> {
//!     // User context: exchange the PIN, then attach the bearer token
//!     let token = client.access_token_from_pin(pin).await?;
//!     client.set_access_token(&token.access_token);
//!
//!     let album = client
//!         .create_album(&AlbumOptions {
//!             title: Some("Holiday snaps".into()),
//!             privacy: Some(AlbumPrivacy::Hidden),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("created {}", album.id);
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
