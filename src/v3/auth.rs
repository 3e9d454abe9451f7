/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{API_ORIGIN, Form};
use crate::v3::client::{Client, require};
use crate::v3::errors::ImgurError;
use crate::v3::parsers::epoch;
use crate::v3::properties::AuthResponseType;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const TOKEN_ENDPOINT: &str = "oauth2/token";

/// A user's OAuth2 credentials as returned by the token endpoint.
///
/// The server only reports a relative `expires_in`; `expires_at` is stamped
/// client-side as the instant of receipt plus that many seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub access_token: String,

    #[serde(default)]
    pub refresh_token: String,

    pub expires_in: i64,

    #[serde(default)]
    pub token_type: String,

    #[serde(default)]
    pub account_username: Option<String>,

    #[serde(default = "epoch", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn stamp_expiry(mut self) -> Self {
        self.expires_at = Utc::now() + Duration::seconds(self.expires_in);
        self
    }
}

/// Outcome of a consent-page redirect
#[derive(Debug, Clone, PartialEq)]
pub enum AuthRedirect {
    /// Implicit/token flow: the fragment carried a full token
    Token(AccessToken),
    /// Code flow: exchange via [`Client::access_token_from_code`]
    Code(String),
    /// The user declined authorization
    Denied,
}

impl Client {
    /// URL of the consent page to open in the user's browser
    pub fn authorization_url(
        &self,
        response_type: AuthResponseType,
        state: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{API_ORIGIN}/oauth2/authorize?response_type={}&client_id={}",
            <&str>::from(response_type),
            self.client_id()
        );
        if let Some(state) = state {
            url.push_str("&state=");
            url.push_str(&urlencoding::encode(state));
        }
        url
    }

    /// Exchanges a consent-page PIN for an access token
    pub async fn access_token_from_pin(&self, pin: &str) -> Result<AccessToken, ImgurError> {
        require("pin", pin)?;
        self.token_request(Form::new().set("grant_type", "pin").set("pin", pin))
            .await
    }

    /// Exchanges an authorization code for an access token
    pub async fn access_token_from_code(&self, code: &str) -> Result<AccessToken, ImgurError> {
        require("code", code)?;
        self.token_request(Form::new().set("grant_type", "code").set("code", code))
            .await
    }

    /// Trades a refresh token for a fresh access token
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<AccessToken, ImgurError> {
        require("refresh_token", refresh_token)?;
        self.token_request(
            Form::new()
                .set("grant_type", "refresh_token")
                .set("refresh_token", refresh_token),
        )
        .await
    }

    async fn token_request(&self, form: Form) -> Result<AccessToken, ImgurError> {
        let form = form
            .set("client_id", self.client_id())
            .set("client_secret", self.api_client.client_secret());
        let token: AccessToken = self.api_client.post_unenveloped(TOKEN_ENDPOINT, &form).await?;
        Ok(token.stamp_expiry())
    }
}

/// Parses the redirect URI the consent page lands on.
///
/// Token-flow responses arrive in the fragment (`#access_token=...`),
/// code-flow responses in the query (`?code=...`); a declined consent is
/// reported as `error=access_denied` in either position.
pub fn parse_redirect(uri: &str) -> Result<AuthRedirect, ImgurError> {
    let url = url::Url::parse(uri)?;
    let fragment = url.fragment().unwrap_or("");

    if pair(fragment, "error").or_else(|| query(&url, "error")).as_deref()
        == Some("access_denied")
    {
        return Ok(AuthRedirect::Denied);
    }

    if fragment.contains("access_token=") {
        let token = AccessToken {
            access_token: pair(fragment, "access_token")
                .ok_or(ImgurError::RedirectMissing("access_token"))?,
            refresh_token: pair(fragment, "refresh_token").unwrap_or_default(),
            expires_in: pair(fragment, "expires_in")
                .and_then(|v| v.parse().ok())
                .ok_or(ImgurError::RedirectMissing("expires_in"))?,
            token_type: pair(fragment, "token_type").unwrap_or_default(),
            account_username: pair(fragment, "account_username"),
            expires_at: epoch(),
        };
        return Ok(AuthRedirect::Token(token.stamp_expiry()));
    }

    match query(&url, "code") {
        Some(code) => Ok(AuthRedirect::Code(code)),
        None => Err(ImgurError::RedirectMissing("code")),
    }
}

// One value out of an x-www-form-urlencoded fragment
fn pair(encoded: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(encoded.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

fn query(url: &url::Url, name: &str) -> Option<String> {
    url.query_pairs().find(|(k, _)| k == name).map(|(_, v)| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("id", "secret").unwrap()
    }

    #[test]
    fn authorization_url_carries_response_type_and_state() {
        let url = client().authorization_url(AuthResponseType::Pin, None);
        assert_eq!(
            url,
            "https://api.imgur.com/oauth2/authorize?response_type=pin&client_id=id"
        );

        let url = client().authorization_url(AuthResponseType::Code, Some("xyz"));
        assert!(url.ends_with("response_type=code&client_id=id&state=xyz"));
    }

    #[test]
    fn state_is_percent_encoded_into_the_consent_url() {
        // `&` or `#` in a raw state value would split the query.
        let url = client().authorization_url(AuthResponseType::Code, Some("a&b #c"));
        assert!(url.ends_with("&state=a%26b%20%23c"));
    }

    #[tokio::test]
    async fn empty_flow_credentials_are_rejected_before_any_request() {
        assert!(matches!(
            client().access_token_from_pin("").await,
            Err(ImgurError::InvalidArgument("pin"))
        ));
        assert!(matches!(
            client().access_token_from_code("").await,
            Err(ImgurError::InvalidArgument("code"))
        ));
        assert!(matches!(
            client().refresh_access_token("").await,
            Err(ImgurError::InvalidArgument("refresh_token"))
        ));
    }

    #[test]
    fn redirect_with_token_fragment_parses_and_stamps_expiry() {
        let uri = "imgurportable:///callback#access_token=d13f9247&expires_in=3600&token_type=bearer&refresh_token=08c8e8b3&account_username=scottisafool";
        let before = Utc::now();
        let redirect = parse_redirect(uri).unwrap();
        let AuthRedirect::Token(token) = redirect else {
            panic!("expected token redirect, got {redirect:?}");
        };

        assert_eq!(token.access_token, "d13f9247");
        assert_eq!(token.refresh_token, "08c8e8b3");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.account_username.as_deref(), Some("scottisafool"));

        // Receipt instant + 3600s, with slack for the clock reads around it.
        let expected = before + Duration::seconds(3600);
        let skew = (token.expires_at - expected).num_seconds().abs();
        assert!(skew <= 5, "expiry off by {skew}s");
    }

    #[test]
    fn redirect_with_code_query_parses() {
        let redirect = parse_redirect("https://example.com/cb?state=s&code=abc123").unwrap();
        assert_eq!(redirect, AuthRedirect::Code("abc123".into()));
    }

    #[test]
    fn denied_redirect_is_detected_in_query_or_fragment() {
        let denied = parse_redirect("https://example.com/cb?error=access_denied").unwrap();
        assert_eq!(denied, AuthRedirect::Denied);

        let denied = parse_redirect("myapp:///cb#error=access_denied").unwrap();
        assert_eq!(denied, AuthRedirect::Denied);
    }

    #[test]
    fn redirect_without_credentials_is_an_error() {
        assert!(matches!(
            parse_redirect("https://example.com/cb?state=only"),
            Err(ImgurError::RedirectMissing("code"))
        ));
    }

    #[test]
    fn token_shape_round_trips_through_the_envelope_payload() {
        let token = AccessToken {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            expires_in: 3600,
            token_type: "bearer".into(),
            account_username: Some("bob".into()),
            expires_at: epoch() + Duration::seconds(1_415_990_210),
        };
        let encoded = serde_json::to_value(&token).unwrap();
        let decoded: AccessToken = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, token);
    }
}
