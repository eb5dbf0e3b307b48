// Token authentication
//
// `POST /dna/system/api/v1/auth/token` with HTTP Basic credentials
// returns `{"Token": "..."}`. The token is then sent as `X-Auth-Token`.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::DnacClient;
use crate::error::Error;
use crate::models::TokenResponse;

const TOKEN_PATH: &str = "/dna/system/api/v1/auth/token";

impl DnacClient {
    /// Exchange username/password for a bearer token.
    ///
    /// On success the token is stored in the client and attached to every
    /// subsequent request. A non-success status is an
    /// [`Error::Authentication`]; an unreachable controller is an
    /// [`Error::Transport`].
    pub async fn login(&mut self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url(TOKEN_PATH)?;

        debug!("requesting token at {}", url);

        let resp = self
            .http()
            .post(url)
            .basic_auth(username, Some(password.expose_secret()))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("token request failed (HTTP {status}): {body}"),
            });
        }

        let body = resp.text().await?;
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Authentication {
                message: format!("token response missing 'Token' field: {e}"),
            })?;

        self.set_token(SecretString::from(parsed.token));
        debug!("authentication successful");
        Ok(())
    }
}
