/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
mod parsers;
pub mod errors;
pub mod properties;
pub mod auth;
pub mod account;
pub mod album;
pub mod image;
pub mod comment;
pub mod gallery;
pub mod conversation;
pub mod notification;

pub use account::*;
pub use album::*;
pub use api::*;
pub use auth::*;
pub use client::*;
pub use comment::*;
pub use conversation::*;
pub use errors::*;
pub use gallery::*;
pub use image::*;
pub use notification::*;
pub use properties::*;
