//! Credential Strategies
//!
//! Outbound requests to the index pass through a [`CredentialProvider`] right
//! before they are sent. The built-in strategies cover unauthenticated
//! clusters, HTTP basic auth and bearer tokens; request signing schemes
//! (e.g. cloud provider signatures) plug in by implementing the same trait.

use anyhow::Result;
use reqwest::RequestBuilder;

pub trait CredentialProvider: Send + Sync {
    /// Attaches credentials to an outgoing request.
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder>;
}

/// Sends requests as-is.
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request)
    }
}

pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl CredentialProvider for BasicCredentials {
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.basic_auth(&self.username, Some(&self.password)))
    }
}

pub struct BearerToken {
    pub token: String,
}

impl CredentialProvider for BearerToken {
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.bearer_auth(&self.token))
    }
}
