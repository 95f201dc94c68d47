//! tiny_http server adapter
//!
//! Builds the per-request context, hands the request to the dispatcher and
//! converts its reply into a tiny_http response.

use std::io::{Cursor, Read as _};
use std::sync::Arc;
use std::thread;

use log::{info, warn};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{ApiError, ApiReply, RequestContext, TodoDispatcher, TodoRequest, route};
use crate::core::models::TodoId;
use crate::core::ports::{TodoStore, TokenIssuer};

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind a listener on `addr`
pub fn bind(addr: &str) -> anyhow::Result<Server> {
    Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))
}

/// Serve requests with `workers` threads until the listener shuts down
pub fn serve<S, I>(
    dispatcher: Arc<TodoDispatcher<S, I>>,
    server: Arc<Server>,
    workers: usize,
) -> anyhow::Result<()>
where
    S: TodoStore + 'static,
    I: TokenIssuer + 'static,
{
    let handles: Vec<_> = (0..workers.max(1))
        .map(|n| {
            let dispatcher = Arc::clone(&dispatcher);
            let server = Arc::clone(&server);
            thread::Builder::new()
                .name(format!("todos-worker-{n}"))
                .spawn(move || worker_loop(&dispatcher, &server))
        })
        .collect::<Result<_, _>>()?;

    info!("serving with {} worker(s)", handles.len());
    for handle in handles {
        if handle.join().is_err() {
            warn!("a worker thread panicked");
        }
    }
    Ok(())
}

fn worker_loop<S: TodoStore, I: TokenIssuer>(dispatcher: &TodoDispatcher<S, I>, server: &Server) {
    loop {
        match server.recv() {
            Ok(mut request) => {
                let response = handle_request(dispatcher, &mut request);
                if let Err(e) = request.respond(response) {
                    warn!("failed to send response: {e}");
                }
            },
            Err(e) => {
                warn!("listener stopped: {e}");
                break;
            },
        }
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one request and return the response to send
pub fn handle_request<S: TodoStore, I: TokenIssuer>(
    dispatcher: &TodoDispatcher<S, I>,
    request: &mut Request,
) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().as_str().to_string();

    let reply = match build_context(dispatcher.issuer(), request, &path) {
        Ok(ctx) => dispatcher.dispatch(&method, &path, &ctx),
        Err(e) => dispatcher.reject(&method, &path, &e),
    };
    into_response(reply)
}

/// Derive identity, authorization and payload for the dispatcher
///
/// A missing or unverifiable token yields an anonymous caller. The caller
/// is authorized when its token claims the todo addressed by the path.
/// Only POST and PUT bodies are read; any other body is ignored.
fn build_context<I: TokenIssuer>(
    issuer: &I,
    request: &mut Request,
    path: &str,
) -> Result<RequestContext, ApiError> {
    let mut ctx = RequestContext::anonymous();

    if let Some(token) = bearer_token(request) {
        match issuer.verify(&token) {
            Ok(claims) => {
                ctx.authorized = addressed_todo(path).is_some_and(|id| claims.covers(id));
                ctx.user = Some(claims.sub);
            },
            Err(e) => warn!("ignoring bearer token: {e}"),
        }
    }

    if matches!(request.method(), Method::Post | Method::Put) {
        ctx.payload = read_json_body(request)?;
    }
    Ok(ctx)
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Authorization"))
        .and_then(|h| h.value.as_str().strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
}

fn addressed_todo(path: &str) -> Option<TodoId> {
    route::split_segments(path)?.first()?.parse().ok()
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request; an empty body is an empty payload
fn read_json_body(request: &mut Request) -> Result<TodoRequest, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    if body.trim().is_empty() {
        return Ok(TodoRequest::default());
    }
    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a dispatcher reply into a tiny_http response
fn into_response(reply: ApiReply) -> Response<Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body.unwrap_or_default().into_bytes())
        .with_status_code(StatusCode(reply.status));

    for (name, value) in &reply.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => response.add_header(header),
            Err(()) => warn!("dropping invalid header {name}"),
        }
    }
    response
}
