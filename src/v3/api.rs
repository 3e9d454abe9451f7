/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use log::{debug, warn};
use num_enum::TryFromPrimitive;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com";

/// Longest string the platform URI encoder accepts in one call. Values
/// beyond this are percent-encoded in chunks and concatenated.
const MAX_ENCODE_CHUNK: usize = 32_766;

/// Which credential context a request is sent under.
///
/// `App` requests carry `Client-ID <id>`. `User` requests carry
/// `Bearer <token>` once a token has been attached and fall back to the
/// client id before login, matching the API's anonymous semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    App,
    User,
}

/// Directly communicates with the API.
///
/// One instance holds the application credentials, the optional user bearer
/// token (last write wins) and a single shared HTTPS connection pool. Each
/// call is an independent request; dropping a call's future aborts only that
/// request.
pub struct ApiClient {
    client_id: String,
    client_secret: String,
    access_token: RwLock<Option<String>>,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new Imgur client instance from registered app credentials
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            access_token: RwLock::new(None),
            https_client: reqwest::Client::new(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Attaches a user bearer token. Subsequent [`AuthMode::User`] requests
    /// are authorized as that user.
    pub fn set_access_token(&self, token: &str) {
        *self.access_token.write().expect("token lock poisoned") = Some(token.into());
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.read().expect("token lock poisoned").clone()
    }

    fn authorization(&self, auth: AuthMode) -> String {
        match auth {
            AuthMode::User => match self.access_token() {
                Some(token) => format!("Bearer {token}"),
                None => format!("Client-ID {}", self.client_id),
            },
            AuthMode::App => format!("Client-ID {}", self.client_id),
        }
    }

    /// Performs a GET request and unwraps the response envelope
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: AuthMode,
    ) -> Result<T, ImgurError> {
        let req_url = url::Url::parse(API_ORIGIN)?.join(path)?;
        debug!("GET {req_url}");
        let resp = self
            .https_client
            .get(req_url)
            .header("Authorization", self.authorization(auth))
            .header("Accept", "application/json")
            .send()
            .await?;
        self.unwrap_envelope(resp).await
    }

    /// Performs a form-encoded POST request and unwraps the response envelope
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &Form,
        auth: AuthMode,
    ) -> Result<T, ImgurError> {
        let req_url = url::Url::parse(API_ORIGIN)?.join(path)?;
        debug!("POST {req_url}");
        let resp = self
            .https_client
            .post(req_url)
            .header("Authorization", self.authorization(auth))
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.encoded())
            .send()
            .await?;
        self.unwrap_envelope(resp).await
    }

    /// Performs a DELETE request and unwraps the response envelope
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: AuthMode,
    ) -> Result<T, ImgurError> {
        let req_url = url::Url::parse(API_ORIGIN)?.join(path)?;
        debug!("DELETE {req_url}");
        let resp = self
            .https_client
            .delete(req_url)
            .header("Authorization", self.authorization(auth))
            .header("Accept", "application/json")
            .send()
            .await?;
        self.unwrap_envelope(resp).await
    }

    /// Posts a form and decodes the body as a bare JSON object.
    ///
    /// The OAuth2 token endpoint is the one surface that answers outside the
    /// `{data, success, status}` envelope.
    pub(crate) async fn post_unenveloped<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &Form,
    ) -> Result<T, ImgurError> {
        let req_url = url::Url::parse(API_ORIGIN)?.join(path)?;
        debug!("POST {req_url}");
        let resp = self
            .https_client
            .post(req_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form.encoded())
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ImgurError::Transport {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ImgurError> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        decode_envelope(status, &body)
    }
}

/// Decodes the uniform envelope, returning the unwrapped payload or the
/// typed error the server embedded in it.
///
/// Error envelopes are honored on any transport status; only a body that
/// is not an envelope at all becomes a [`ImgurError::Transport`].
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ImgurError> {
    let envelope: Envelope<serde_json::Value> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            if !(200..300).contains(&status) {
                return Err(ImgurError::Transport {
                    status,
                    body: body.to_string(),
                });
            }
            warn!("API response is not an envelope: {err}");
            return Err(ImgurError::Deserialization(err));
        }
    };

    if !envelope.success {
        let detail = envelope
            .data
            .map(serde_json::from_value::<ErrorDetail>)
            .transpose()?
            .unwrap_or_default();
        return Err(ImgurError::Api {
            status: StatusCode::try_from(envelope.status)?,
            detail,
        });
    }

    let data = envelope.data.ok_or(ImgurError::ResponseMissing())?;
    Ok(serde_json::from_value(data)?)
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client_id", &"xxx")
            .field("client_secret", &"xxx")
            .field("access_token", &"xxx")
            .finish()
    }
}

/// Status codes the API embeds in its envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u16)]
pub enum StatusCode {
    Success = 200,
    MissingParameter = 400,
    AuthenticationRequired = 401,
    Forbidden = 403,
    MissingResource = 404,
    RateLimited = 429,
    ServerIssue = 500,
}

/// Error payload served in place of `data` when `success` is false
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub request: String,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub format: String,

    #[serde(default)]
    pub parameters: String,
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
struct Envelope<T> {
    data: Option<T>,
    success: bool,
    status: u16,
}

/// An `application/x-www-form-urlencoded` request body.
///
/// Optional parameters are added with [`Form::set_opt`]; an absent value
/// contributes no field at all, never an empty string.
#[derive(Default, Debug, Clone)]
pub struct Form {
    fields: Vec<(&'static str, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn set_opt(mut self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.fields.push((name, value.into()));
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| *n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encodes the fields as a URL-encoded body string
    pub fn encoded(&self) -> String {
        let pairs: Vec<String> = self
            .fields
            .iter()
            .map(|(name, value)| format!("{}={}", name, encode_component(value)))
            .collect();
        pairs.join("&")
    }
}

// Percent-encodes one form value. Values longer than the platform encode
// ceiling are split at char boundaries and encoded piecewise; percent
// escaping is per-byte so the concatenation decodes to the original string.
fn encode_component(value: &str) -> String {
    if value.len() <= MAX_ENCODE_CHUNK {
        return urlencoding::encode(value).into_owned();
    }

    let mut encoded = String::new();
    let mut start = 0;
    while start < value.len() {
        let mut end = usize::min(start + MAX_ENCODE_CHUNK, value.len());
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        encoded.push_str(&urlencoding::encode(&value[start..end]));
        start = end;
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_skips_omitted_optionals() {
        let form = Form::new()
            .set("type", "base64")
            .set_opt("title", Some("cat"))
            .set_opt("description", None::<String>)
            .set_opt("album", None::<String>);

        assert!(form.contains("title"));
        assert!(!form.contains("description"));
        assert!(!form.contains("album"));
        assert_eq!(form.encoded(), "type=base64&title=cat");
    }

    #[test]
    fn form_percent_encodes_values() {
        let form = Form::new().set("comment", "nice cat & dog / 100%");
        assert_eq!(form.encoded(), "comment=nice%20cat%20%26%20dog%20%2F%20100%25");
    }

    #[test]
    fn long_value_round_trips_through_chunked_encoding() {
        // Past the 32,766 ceiling, mixing multi-byte chars near the seams.
        let long: String = "déscription & more ".repeat(2_200);
        assert!(long.len() > 40_000);

        let form = Form::new().set("description", &long);
        let encoded = form.encoded();
        let value = encoded.strip_prefix("description=").unwrap();

        let decoded = urlencoding::decode(value).unwrap();
        assert_eq!(decoded, long);
    }

    #[test]
    fn chunked_encoding_matches_single_pass() {
        let long = "a%b c".repeat(10_000);
        let whole = urlencoding::encode(&long).into_owned();
        assert_eq!(encode_component(&long), whole);
    }

    #[test]
    fn envelope_success_unwraps_payload() {
        let body = serde_json::json!({
            "data": {"ups": 10, "downs": 2},
            "success": true,
            "status": 200
        })
        .to_string();
        let payload: serde_json::Value = decode_envelope(200, &body).unwrap();
        assert_eq!(payload["ups"], 10);
        assert_eq!(payload["downs"], 2);
    }

    #[test]
    fn error_envelope_becomes_typed_api_error() {
        let body = serde_json::json!({
            "data": {
                "message": "m",
                "request": "r",
                "method": "GET",
                "format": "json",
                "parameters": "p"
            },
            "success": false,
            "status": 404
        })
        .to_string();
        let err = decode_envelope::<serde_json::Value>(200, &body).unwrap_err();
        let ImgurError::Api { status, detail } = err else {
            panic!("expected api error, got {err:?}");
        };
        assert_eq!(status, StatusCode::MissingResource);
        assert_eq!(detail.message, "m");
        assert_eq!(detail.request, "r");
    }

    #[test]
    fn error_envelope_is_honored_on_any_transport_status() {
        // Some failures arrive enveloped on a non-2xx status; the embedded
        // error wins over the transport status.
        let body = serde_json::json!({
            "data": {"message": "Authentication required"},
            "success": false,
            "status": 401
        })
        .to_string();
        let err = decode_envelope::<serde_json::Value>(401, &body).unwrap_err();
        assert!(matches!(
            err,
            ImgurError::Api {
                status: StatusCode::AuthenticationRequired,
                ..
            }
        ));
    }

    #[test]
    fn envelope_less_failure_becomes_transport_error() {
        let err = decode_envelope::<serde_json::Value>(502, "Bad Gateway").unwrap_err();
        let ImgurError::Transport { status, body } = err else {
            panic!("expected transport error, got {err:?}");
        };
        assert_eq!(status, 502);
        assert_eq!(body, "Bad Gateway");
    }

    #[test]
    fn successful_envelope_without_data_is_missing_response() {
        let body = serde_json::json!({
            "data": null,
            "success": true,
            "status": 200
        })
        .to_string();
        let err = decode_envelope::<serde_json::Value>(200, &body).unwrap_err();
        assert!(matches!(err, ImgurError::ResponseMissing()));
    }

    #[test]
    fn status_codes_map_to_the_closed_set() {
        assert_eq!(StatusCode::try_from(200).unwrap(), StatusCode::Success);
        assert_eq!(StatusCode::try_from(400).unwrap(), StatusCode::MissingParameter);
        assert_eq!(
            StatusCode::try_from(401).unwrap(),
            StatusCode::AuthenticationRequired
        );
        assert_eq!(StatusCode::try_from(403).unwrap(), StatusCode::Forbidden);
        assert_eq!(StatusCode::try_from(429).unwrap(), StatusCode::RateLimited);
        assert_eq!(StatusCode::try_from(500).unwrap(), StatusCode::ServerIssue);
        assert!(StatusCode::try_from(418).is_err());
    }
}
