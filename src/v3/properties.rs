/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, Serialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlbumPrivacy {
    Public,
    Hidden,
    Secret,
}

#[derive(Debug, Clone, Copy, Serialize, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlbumLayout {
    Blog,
    Grid,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

/// Sort order for gallery comment listings
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GallerySort {
    Best,
    Top,
    New,
}

/// Sort order for gallery section listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Sort {
    Viral,
    Top,
    Time,
}

/// Time window for `Sort::Top` listings
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DateRange {
    Day,
    Week,
    Month,
    Year,
    All,
}

#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AuthResponseType {
    Code,
    Token,
    Pin,
}

// Wire value of the upload `type` form field
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ImageUploadType {
    Base64,
    Url,
}

/// Thumbnail variants addressable by url suffix
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
pub enum ThumbnailSize {
    #[strum(to_string = "s")]
    SmallSquare,
    #[strum(to_string = "b")]
    BigSquare,
    #[strum(to_string = "t")]
    SmallThumbnail,
    #[strum(to_string = "m")]
    MediumThumbnail,
    #[strum(to_string = "l")]
    LargeThumbnail,
    #[strum(to_string = "h")]
    HugeThumbnail,
}

/// A field the API serves inconsistently across responses: sometimes a
/// string, sometimes a number or boolean, sometimes null (`bio`, `nsfw`,
/// `section`, `parent_id`, image titles...). Nullability is expressed by
/// wrapping in `Option`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MixedValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl MixedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MixedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MixedValue::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for MixedValue {
    fn from(value: &str) -> Self {
        MixedValue::Str(value.into())
    }
}
