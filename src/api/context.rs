//! Per-request context
//!
//! Everything the dispatcher needs to know about the caller, computed
//! upstream and passed in explicitly.

use super::types::TodoRequest;

/// Caller identity, authorization verdict and parsed body of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Authenticated login, if any
    pub user: Option<String>,
    /// Whether the caller may see protected fields of the addressed todo
    pub authorized: bool,
    /// Parsed request body (empty for bodiless requests)
    pub payload: TodoRequest,
}

impl RequestContext {
    /// Context of an unauthenticated caller with no body
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the authenticated login
    #[must_use]
    pub fn with_user(mut self, login: impl Into<String>) -> Self {
        self.user = Some(login.into());
        self
    }

    /// Set the authorization verdict
    #[must_use]
    pub fn with_authorized(mut self, authorized: bool) -> Self {
        self.authorized = authorized;
        self
    }

    /// Set the parsed body
    #[must_use]
    pub fn with_payload(mut self, payload: TodoRequest) -> Self {
        self.payload = payload;
        self
    }
}
