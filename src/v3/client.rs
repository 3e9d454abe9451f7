/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v3::api::ApiClient;
use crate::v3::errors::ImgurError;
use std::sync::Arc;

/// Handle to the Imgur API.
///
/// Cheap to clone; all clones share one [`ApiClient`] and therefore one
/// connection pool and one attached access token. Endpoint methods are
/// added by the per-resource modules (`account`, `album`, `image`,
/// `comment`, `gallery`, `conversation`, `notification`, `auth`).
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) api_client: Arc<ApiClient>,
}

impl Client {
    /// Creates a client in the anonymous/app context from registered
    /// application credentials.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self, ImgurError> {
        require("client_id", client_id)?;
        require("client_secret", client_secret)?;
        Ok(Self {
            api_client: Arc::new(ApiClient::new(client_id, client_secret)),
        })
    }

    /// Attaches a user's OAuth2 access token; user-context calls are sent
    /// as `Bearer <token>` from here on. Last write wins.
    pub fn set_access_token(&self, token: &str) {
        self.api_client.set_access_token(token);
    }

    /// The currently attached access token, if a user has logged in
    pub fn access_token(&self) -> Option<String> {
        self.api_client.access_token()
    }

    /// The registered application client id
    pub fn client_id(&self) -> &str {
        self.api_client.client_id()
    }

    /// Escape hatch for endpoints this crate does not wrap
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }
}

// Guards required identifiers before any request is built.
pub(crate) fn require(name: &'static str, value: &str) -> Result<(), ImgurError> {
    if value.is_empty() {
        return Err(ImgurError::InvalidArgument(name));
    }
    Ok(())
}
