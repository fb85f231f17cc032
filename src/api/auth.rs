//! Session and account-connection endpoints.

use reqwest::Method;

use super::decode;
use crate::client::{ApiClient, RequestOptions};
use crate::error::ClientError;
use crate::paths;
use crate::query::QueryString;
use crate::types::{CurrentUser, OauthRedirect};

/// Authentication endpoints. Obtained from [`ApiClient::auth`].
pub struct AuthApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AuthApi<'_> {
    /// Exchange the session's refresh token for fresh cookies.
    ///
    /// A 401 here is terminal: the refresh endpoint is exempt from the
    /// refresh-and-retry path.
    pub async fn refresh_session(&self) -> Result<(), ClientError> {
        self.client
            .request_json(
                paths::AUTH_REFRESH,
                RequestOptions::new()
                    .method(Method::POST)
                    .retry_on_401(false),
            )
            .await
            .map(drop)
    }

    /// Resolve the current session's user.
    pub async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        decode("current user", self.client.get(paths::AUTH_ME).await?)
    }

    /// Start the Google OAuth login flow, optionally returning to
    /// `redirect_url` once it completes.
    pub async fn login_with_google(
        &self,
        redirect_url: Option<&str>,
    ) -> Result<OauthRedirect, ClientError> {
        let mut query = QueryString::new();
        query.push_opt("redirect", redirect_url);
        let path = query.append_to(paths::AUTH_LOGIN_GOOGLE);
        decode("oauth redirect", self.client.post_empty(&path).await?)
    }

    /// Connect a Gmail account to the current user.
    pub async fn connect_gmail(&self) -> Result<OauthRedirect, ClientError> {
        decode(
            "oauth redirect",
            self.client.post_empty(paths::EXTERNAL_GMAIL).await?,
        )
    }
}
