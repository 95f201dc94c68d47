//! Shared fixtures for unit tests

use todos::adapters::{InMemoryTodoStore, SignedTokenIssuer};
use todos::api::{RequestContext, TodoDispatcher, TodoRequest};
use todos::core::models::TodoId;
use todos::core::services::TodoService;

pub const SECRET: &str = "unit-test-secret";

pub type Dispatcher = TodoDispatcher<InMemoryTodoStore, SignedTokenIssuer>;

pub fn service() -> TodoService<InMemoryTodoStore> {
    TodoService::new(InMemoryTodoStore::new())
}

pub fn issuer() -> SignedTokenIssuer {
    SignedTokenIssuer::new(SECRET, 3600)
}

pub fn dispatcher() -> Dispatcher {
    TodoDispatcher::new(service(), issuer())
}

/// Context carrying a create body
pub fn create_body(title: Option<&str>, creator: Option<&str>) -> RequestContext {
    RequestContext::anonymous().with_payload(TodoRequest {
        title: title.map(str::to_string),
        creator: creator.map(str::to_string),
        ..TodoRequest::default()
    })
}

/// Context of an authenticated caller carrying an update body
pub fn update_body(user: &str, title: Option<&str>, assignee: Option<&str>) -> RequestContext {
    RequestContext::anonymous().with_user(user).with_payload(TodoRequest {
        title: title.map(str::to_string),
        assignee: assignee.map(str::to_string),
        ..TodoRequest::default()
    })
}

/// Create a todo through the dispatcher and return its id
pub fn create_todo(d: &Dispatcher, title: &str, creator: &str) -> TodoId {
    let reply = d.dispatch("POST", "/todos", &create_body(Some(title), Some(creator)));
    assert_eq!(reply.status, 201, "create failed: {:?}", reply.body);
    let hash = reply.body_json().unwrap()["data"]["hash"].as_u64().unwrap();
    TodoId::new(hash)
}
