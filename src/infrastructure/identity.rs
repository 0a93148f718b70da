//! Identity provider client for bearer token verification.
//!
//! Tokens are sent to the Google Identity Toolkit `accounts:lookup` endpoint;
//! the provider verifies the token and returns the account it belongs to.
//! Verification failures are typed so the middleware can treat them as
//! "anonymous" without inspecting provider internals.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const LOOKUP_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1/accounts:lookup";

/// Failure modes of identity verification.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("identity provider rejected the token: {0}")]
    Rejected(String),

    #[error("token does not resolve to an email address")]
    MissingEmail,
}

/// An identity the provider vouched for.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub email: String,
}

/// Verifies bearer tokens against an external identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verifies an ID token and resolves it to the account email.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when the provider is unreachable, rejects
    /// the token, or the account carries no email.
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityError>;
}

// ── Response types ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
struct LookupUser {
    #[serde(default)]
    email: Option<String>,
}

// ── Real implementation ─────────────────────────────────────────────────────

/// Firebase Authentication verifier using the Identity Toolkit REST API.
pub struct FirebaseVerifier {
    http: reqwest::Client,
    api_key: String,
}

impl FirebaseVerifier {
    /// Creates a new verifier authenticated by the project's web API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("carhouse")
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { http, api_key })
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityError> {
        let response = self
            .http
            .post(LOOKUP_ENDPOINT)
            .query(&[("key", self.api_key.as_str())])
            .json(&serde_json::json!({ "idToken": id_token }))
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(IdentityError::Rejected(detail));
        }

        let lookup: LookupResponse = response.json().await?;

        let email = lookup
            .users
            .into_iter()
            .next()
            .and_then(|user| user.email)
            .ok_or(IdentityError::MissingEmail)?;

        Ok(VerifiedIdentity { email })
    }
}
