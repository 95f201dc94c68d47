//! Path routing for the todo resource
//!
//! A request path is `/todos` followed by zero or more segments. Routing is
//! an ordered table of matchers; the first matcher whose verb, arity and
//! guard accept the request wins. Arity decides first; property names are
//! checked by the handler, so an unknown property is a 400 and never a 404.

/// Fixed prefix of the todo resource
pub const TODOS_PREFIX: &str = "/todos";

/// HTTP verbs the todo resource understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl std::str::FromStr for Verb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("method {s} is not supported on todos")),
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single-field view of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// `title`
    Title,
    /// `assignee`
    Assignee,
    /// `status` (the completion flag)
    Status,
}

impl std::str::FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "assignee" => Ok(Self::Assignee),
            "status" => Ok(Self::Status),
            _ => Err(format!("unknown todo property '{s}'")),
        }
    }
}

/// How many segments a matcher accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many
    Exactly(usize),
    /// This many or more
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` segments satisfy this arity
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

/// Behavior selected by the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// `POST /todos`
    Create,
    /// `GET /todos`
    List,
    /// `GET /todos/{id}`
    Read,
    /// `GET /todos/{id}/{property}`
    ReadProperty,
    /// `GET /todos/{id}/assignee/...`
    RedirectToAssignee,
    /// `GET /todos/{id}/{x}/...` with `x != assignee`
    TooManyParams,
    /// `PUT /todos/{id}`
    Update,
    /// `DELETE /todos/{id}`
    Delete,
    /// Known verb, unsupported segment count
    WrongArity,
}

/// One entry of the route table
#[derive(Debug, Clone, Copy)]
pub struct RouteMatcher {
    /// Verb this matcher applies to
    pub verb: Verb,
    /// Accepted segment count
    pub arity: Arity,
    /// Extra condition on the segments
    pub guard: Option<fn(&[&str]) -> bool>,
    /// Selected behavior
    pub handler: Handler,
}

impl RouteMatcher {
    /// Whether this matcher accepts the request
    #[must_use]
    pub fn matches(&self, verb: Verb, segments: &[&str]) -> bool {
        self.verb == verb
            && self.arity.accepts(segments.len())
            && self.guard.is_none_or(|guard| guard(segments))
    }
}

fn under_assignee(segments: &[&str]) -> bool {
    segments.get(1) == Some(&"assignee")
}

/// The route table, in evaluation order
pub const ROUTES: &[RouteMatcher] = &[
    RouteMatcher {
        verb: Verb::Post,
        arity: Arity::Exactly(0),
        guard: None,
        handler: Handler::Create,
    },
    RouteMatcher {
        verb: Verb::Get,
        arity: Arity::Exactly(0),
        guard: None,
        handler: Handler::List,
    },
    RouteMatcher {
        verb: Verb::Get,
        arity: Arity::Exactly(1),
        guard: None,
        handler: Handler::Read,
    },
    RouteMatcher {
        verb: Verb::Get,
        arity: Arity::Exactly(2),
        guard: None,
        handler: Handler::ReadProperty,
    },
    RouteMatcher {
        verb: Verb::Get,
        arity: Arity::AtLeast(3),
        guard: Some(under_assignee),
        handler: Handler::RedirectToAssignee,
    },
    RouteMatcher {
        verb: Verb::Get,
        arity: Arity::AtLeast(3),
        guard: None,
        handler: Handler::TooManyParams,
    },
    RouteMatcher {
        verb: Verb::Put,
        arity: Arity::Exactly(1),
        guard: None,
        handler: Handler::Update,
    },
    RouteMatcher {
        verb: Verb::Delete,
        arity: Arity::Exactly(1),
        guard: None,
        handler: Handler::Delete,
    },
];

/// Pick the handler for a request
#[must_use]
pub fn match_route(verb: Verb, segments: &[&str]) -> Handler {
    ROUTES
        .iter()
        .find(|m| m.matches(verb, segments))
        .map_or(Handler::WrongArity, |m| m.handler)
}

/// Split a request path into the segments after [`TODOS_PREFIX`]
///
/// The query string and a single trailing slash are ignored. Returns `None`
/// when the path is not under the prefix.
#[must_use]
pub fn split_segments(path: &str) -> Option<Vec<&str>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix(TODOS_PREFIX)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);

    if rest.is_empty() {
        return Some(Vec::new());
    }
    let rest = rest.strip_prefix('/')?;
    Some(rest.split('/').collect())
}
