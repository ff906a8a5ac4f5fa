//! Per-call credentials
//!
//! An [`Authorizer`] produces the `authorization` metadata attached to every
//! request. [`AuthInterceptor`] plugs one into the tonic client stack.

use cloudagent_common::{Error, Result};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};
use tracing::warn;

/// Metadata key carrying credentials
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Source of credentials for agent calls
pub trait Authorizer: Send + Sync + fmt::Debug {
    /// Value for the `authorization` header, or `None` to send no credentials.
    fn authorization(&self) -> Result<Option<MetadataValue<Ascii>>>;
}

/// Sends no credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthorizer;

impl Authorizer for AnonymousAuthorizer {
    fn authorization(&self) -> Result<Option<MetadataValue<Ascii>>> {
        Ok(None)
    }
}

/// Sends a fixed bearer token
#[derive(Clone)]
pub struct BearerTokenAuthorizer {
    header: MetadataValue<Ascii>,
}

impl BearerTokenAuthorizer {
    pub fn new(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::Auth("empty bearer token".to_string()));
        }
        let header = format!("Bearer {}", token)
            .parse::<MetadataValue<Ascii>>()
            .map_err(|e| Error::Auth(format!("token is not a valid header value: {}", e)))?;
        Ok(Self { header })
    }

    /// Read the token from a file, ignoring surrounding whitespace.
    pub fn from_file(path: &Path) -> Result<Self> {
        let token = std::fs::read_to_string(path).map_err(|e| {
            Error::Auth(format!("failed to read token file {}: {}", path.display(), e))
        })?;
        Self::new(&token)
    }
}

impl fmt::Debug for BearerTokenAuthorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthorizer")
            .field("header", &"Bearer <redacted>")
            .finish()
    }
}

impl Authorizer for BearerTokenAuthorizer {
    fn authorization(&self) -> Result<Option<MetadataValue<Ascii>>> {
        Ok(Some(self.header.clone()))
    }
}

/// Attaches an authorizer's credentials to outgoing requests
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    authorizer: Arc<dyn Authorizer>,
}

impl AuthInterceptor {
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self { authorizer }
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> std::result::Result<Request<()>, Status> {
        match self.authorizer.authorization() {
            Ok(Some(value)) => {
                request.metadata_mut().insert(AUTHORIZATION_HEADER, value);
                Ok(request)
            }
            Ok(None) => Ok(request),
            Err(e) => {
                warn!("Authorizer failed: {}", e);
                Err(Status::unauthenticated(e.to_string()))
            }
        }
    }
}
