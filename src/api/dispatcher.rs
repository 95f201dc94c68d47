//! Todo resource dispatcher
//!
//! Turns `(method, path, context)` into an [`ApiReply`]: route lookup,
//! the matching service call, redaction, token refresh, and the single
//! mapping from failures to status codes. Knows HTTP status codes and
//! header names but no HTTP server.

use log::{debug, info};
use serde::Serialize;

use crate::core::models::TodoId;
use crate::core::ports::{TodoStore, TokenIssuer};
use crate::core::services::{TodoService, refresh_token};

use super::context::RequestContext;
use super::error::ApiError;
use super::redaction::redact;
use super::route::{Handler, Property, TODOS_PREFIX, Verb, match_route, split_segments};
use super::types::{ApiResponse, TodoCreatedData, TodoListData, TodoView};

/// Header naming the handler that produced a response
pub const HANDLER_HEADER: &str = "X-Handler";

/// Default base path of the users resource
pub const DEFAULT_USERS_BASE: &str = "/users";

/// A fully shaped response, ready for any HTTP server to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code
    pub status: u16,
    /// Response headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<String>,
}

impl ApiReply {
    fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json<T: Serialize>(status: u16, data: T) -> Self {
        Self::new(status).with_body(&ApiResponse::success(data))
    }

    fn error(err: &ApiError) -> Self {
        Self::new(err.status_code()).with_body(&ApiResponse::<()>::error(err))
    }

    fn with_body<T: Serialize>(mut self, body: &T) -> Self {
        let json = serde_json::to_string(body).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
        self.headers.push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(json);
        self
    }

    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive name)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body as JSON
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

fn location(id: TodoId) -> String {
    format!("todos/{id}")
}

/// Dispatches requests on the todo resource to the todo service
#[derive(Debug)]
pub struct TodoDispatcher<S, I> {
    service: TodoService<S>,
    issuer: I,
    users_base: String,
}

impl<S: TodoStore, I: TokenIssuer> TodoDispatcher<S, I> {
    /// Create a dispatcher over a service and a token issuer
    pub fn new(service: TodoService<S>, issuer: I) -> Self {
        Self {
            service,
            issuer,
            users_base: DEFAULT_USERS_BASE.to_string(),
        }
    }

    /// Change where assignee sub-paths redirect to
    #[must_use]
    pub fn with_users_base(mut self, users_base: impl Into<String>) -> Self {
        self.users_base = users_base.into().trim_end_matches('/').to_string();
        self
    }

    /// The underlying todo service
    pub const fn service(&self) -> &TodoService<S> {
        &self.service
    }

    /// The token issuer used for refreshes
    pub const fn issuer(&self) -> &I {
        &self.issuer
    }

    /// Handle one request
    ///
    /// Every reply carries [`HANDLER_HEADER`] set to `do_<method>`.
    pub fn dispatch(&self, method: &str, path: &str, ctx: &RequestContext) -> ApiReply {
        let reply = match self.route(method, path, ctx) {
            Ok(reply) => reply,
            Err(err) => {
                debug!("{method} {path} failed: {err}");
                ApiReply::error(&err)
            },
        };
        info!("{method} {path} -> {}", reply.status);
        reply.with_header(HANDLER_HEADER, format!("do_{}", method.to_ascii_lowercase()))
    }

    /// Reply with an error raised before dispatch (unreadable body, ...)
    pub fn reject(&self, method: &str, path: &str, err: &ApiError) -> ApiReply {
        info!("{method} {path} rejected: {err}");
        ApiReply::error(err).with_header(HANDLER_HEADER, format!("do_{}", method.to_ascii_lowercase()))
    }

    fn route(&self, method: &str, path: &str, ctx: &RequestContext) -> Result<ApiReply, ApiError> {
        let segments = split_segments(path)
            .ok_or_else(|| ApiError::not_found(format!("no resource at {path}")))?;
        let verb: Verb = method.parse().map_err(ApiError::method_not_allowed)?;

        match match_route(verb, &segments) {
            Handler::Create => self.create(ctx),
            Handler::List => Ok(self.list()),
            Handler::Read => self.read(segments[0], ctx),
            Handler::ReadProperty => self.read_property(segments[0], segments[1]),
            Handler::RedirectToAssignee => Ok(self.redirect_to_assignee(&segments[2..])),
            Handler::TooManyParams => Err(ApiError::bad_request("too many path parameters")),
            Handler::Update => self.update(segments[0], ctx),
            Handler::Delete => self.delete(segments[0]),
            Handler::WrongArity => Err(ApiError::bad_request(format!(
                "{verb} {TODOS_PREFIX} does not accept {} path parameter(s)",
                segments.len()
            ))),
        }
    }

    fn create(&self, ctx: &RequestContext) -> Result<ApiReply, ApiError> {
        let payload = &ctx.payload;
        let id = self.service.create(payload.title.as_deref(), payload.creator.as_deref())?;
        Ok(ApiReply::json(201, TodoCreatedData { hash: id }).with_header("Location", location(id)))
    }

    fn list(&self) -> ApiReply {
        ApiReply::json(
            200,
            TodoListData {
                todos: self.service.read_all(),
            },
        )
    }

    fn read(&self, raw_id: &str, ctx: &RequestContext) -> Result<ApiReply, ApiError> {
        let id = TodoService::<S>::resolve_id(raw_id)?;
        let todo = self.service.read_one(id)?;
        let view = redact(TodoView::full(&todo), ctx.authorized);
        Ok(ApiReply::json(200, view).with_header("Location", location(id)))
    }

    fn read_property(&self, raw_id: &str, raw_property: &str) -> Result<ApiReply, ApiError> {
        let id = TodoService::<S>::resolve_id(raw_id)?;
        let todo = self.service.read_one(id)?;
        let property: Property = raw_property.parse().map_err(ApiError::bad_request)?;

        let mut view = TodoView::bare(id);
        match property {
            Property::Title => view.title = Some(todo.title),
            Property::Assignee => view.assignee = todo.assignee,
            Property::Status => view.completed = Some(todo.completed),
        }
        Ok(ApiReply::json(200, view))
    }

    fn redirect_to_assignee(&self, rest: &[&str]) -> ApiReply {
        let target = format!("{}/{}", self.users_base, rest.join("/"));
        debug!("redirecting to {target}");
        ApiReply::new(302).with_header("Location", target)
    }

    fn update(&self, raw_id: &str, ctx: &RequestContext) -> Result<ApiReply, ApiError> {
        let id = TodoService::<S>::resolve_id(raw_id)
            .map_err(|e| ApiError::unauthorized(e.to_string()))?;
        let login = ctx
            .user
            .as_deref()
            .ok_or_else(|| ApiError::unauthorized("updating a todo requires an authenticated user"))?;

        let payload = &ctx.payload;
        self.service.update(id, payload.title.as_deref(), payload.assignee.as_deref())?;
        if let Some(completed) = payload.completed {
            self.service.set_completed(id, completed)?;
        }

        let token = refresh_token(&self.service, &self.issuer, login)
            .map_err(|e| ApiError::internal(format!("could not refresh token: {e}")))?;

        Ok(ApiReply::new(204)
            .with_header("Location", location(id))
            .with_header("Authorization", format!("Bearer {token}")))
    }

    fn delete(&self, raw_id: &str) -> Result<ApiReply, ApiError> {
        let id = TodoService::<S>::resolve_id(raw_id)?;
        self.service.delete(id)?;
        Ok(ApiReply::new(204))
    }
}
