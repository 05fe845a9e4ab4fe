//! Hosted auth backend (Supabase GoTrue REST API)
//!
//! - POST {url}/auth/v1/token?grant_type=password - password sign-in
//! - POST {url}/auth/v1/signup?redirect_to=...    - account creation
//! - POST {url}/auth/v1/token?grant_type=pkce     - confirmation code exchange

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::service::{AuthBackend, AuthError, Session};
use crate::core::config::Config;
use crate::core::validation::Credentials;

/// Client for the hosted auth project
#[derive(Clone)]
pub struct SupabaseAuth {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Serialize)]
struct SignupBody<'a> {
    email: &'a str,
    password: &'a str,
    code_challenge: &'a str,
    code_challenge_method: &'a str,
}

#[derive(Serialize)]
struct PkceBody<'a> {
    auth_code: &'a str,
    code_verifier: &'a str,
}

#[derive(Deserialize)]
struct SignupResponse {
    /// Present when the address already belongs to a confirmed account
    /// and the project hides that fact behind an empty identity list
    #[serde(default)]
    identities: Option<Vec<Value>>,
}

impl SupabaseAuth {
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    /// Build the backend from config; `Ok(None)` when auth is not configured
    pub fn from_config(config: &Config) -> Result<Option<Self>, AuthError> {
        match (&config.supabase_url, &config.supabase_anon_key) {
            (Some(url), Some(key)) => Self::new(url, key, config.auth_timeout).map(Some),
            _ => Ok(None),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<reqwest::Response, AuthError> {
        let response = self
            .client
            .post(url)
            .query(query)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Auth service error {}: {}", status, body);

        Err(AuthError::Rejected {
            status: status.as_u16(),
            message: error_message(&body, status.as_u16()),
        })
    }
}

impl AuthBackend for SupabaseAuth {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let response = self
            .post(
                &self.endpoint("token"),
                &[("grant_type", "password")],
                credentials,
            )
            .await?;

        Ok(response.json::<Session>().await?)
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        redirect_to: &str,
        code_challenge: &str,
    ) -> Result<(), AuthError> {
        let body = SignupBody {
            email: &credentials.email,
            password: &credentials.password,
            code_challenge,
            code_challenge_method: "plain",
        };

        let response = self
            .post(
                &self.endpoint("signup"),
                &[("redirect_to", redirect_to)],
                &body,
            )
            .await?;

        let created: SignupResponse = response.json().await?;
        if created.identities.is_some_and(|ids| ids.is_empty()) {
            return Err(AuthError::Rejected {
                status: 422,
                message: "User already registered".to_string(),
            });
        }

        Ok(())
    }

    async fn exchange_code(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> Result<Session, AuthError> {
        let body = PkceBody {
            auth_code,
            code_verifier,
        };

        let response = self
            .post(&self.endpoint("token"), &[("grant_type", "pkce")], &body)
            .await?;

        Ok(response.json::<Session>().await?)
    }
}

/// Pull a human readable message out of an auth service error body
fn error_message(body: &str, status: u16) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|json| {
            ["msg", "error_description", "message", "error"]
                .iter()
                .find_map(|key| json.get(*key).and_then(Value::as_str))
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Authentication failed (HTTP {})", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_msg() {
        let body = r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
        assert_eq!(error_message(body, 400), "Invalid login credentials");
    }

    #[test]
    fn test_error_message_reads_oauth_style_body() {
        let body = r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#;
        assert_eq!(error_message(body, 400), "Email not confirmed");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(
            error_message("<html>bad gateway</html>", 502),
            "Authentication failed (HTTP 502)"
        );
        assert_eq!(
            error_message(r#"{"msg":""}"#, 500),
            "Authentication failed (HTTP 500)"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let auth = SupabaseAuth::new("https://abcd.supabase.co/", "key", Duration::from_secs(1))
            .unwrap();
        assert_eq!(
            auth.endpoint("signup"),
            "https://abcd.supabase.co/auth/v1/signup"
        );
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let config = Config::from_lookup(|_| None);
        assert!(SupabaseAuth::from_config(&config).unwrap().is_none());

        let config = Config::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("https://abcd.supabase.co".to_string()),
            "SUPABASE_ANON_KEY" => Some("anon".to_string()),
            _ => None,
        });
        assert!(SupabaseAuth::from_config(&config).unwrap().is_some());
    }

    #[test]
    fn test_session_deserializes_without_expiry() {
        let session: Session =
            serde_json::from_str(r#"{"access_token":"a","refresh_token":"r"}"#).unwrap();
        assert_eq!(session.expires_in, 0);
    }
}
