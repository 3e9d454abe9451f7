/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::api::{ErrorDetail, StatusCode};
use num_enum::TryFromPrimitiveError;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Required parameter `{0}` is null or empty")]
    InvalidArgument(&'static str),

    #[error("HTTP {status} outside the API envelope: {body}")]
    Transport { status: u16, body: String },

    #[error("API error {status:?}: {}", .detail.message)]
    Api {
        status: StatusCode,
        detail: ErrorDetail,
    },

    #[error("Redirect URI is missing `{0}`")]
    RedirectMissing(&'static str),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Expected response payload missing")]
    ResponseMissing(),

    #[error("API status code is outside the documented set")]
    StatusCode(#[from] TryFromPrimitiveError<StatusCode>),
}
