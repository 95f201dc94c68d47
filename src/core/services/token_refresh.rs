//! Token refresh after a mutation
//!
//! Authorization downstream is decided from the todo set embedded in the
//! caller's token, so any mutation that can change that set must hand back
//! a fresh token in the same response.

use log::debug;

use crate::core::ports::{TodoStore, TokenError, TokenIssuer};

use super::TodoService;

/// Issue a replacement token for `login`
///
/// The embedded todo set is read after the mutation has been applied.
pub fn refresh_token<S, I>(
    service: &TodoService<S>,
    issuer: &I,
    login: &str,
) -> Result<String, TokenError>
where
    S: TodoStore,
    I: TokenIssuer + ?Sized,
{
    let todos = service.todos_of(login);
    debug!("refreshing token for {login} with {} todo(s)", todos.len());
    issuer.issue(login, &todos)
}
