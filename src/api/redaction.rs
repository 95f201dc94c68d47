//! Field redaction for callers without access to a todo

use super::types::TodoView;

/// Shape a full representation for the caller
///
/// Unauthorized callers get an empty `assignee`; every other field is kept.
#[must_use]
pub fn redact(mut view: TodoView, authorized: bool) -> TodoView {
    if !authorized {
        view.assignee = Some(String::new());
    }
    view
}
