//! Tests for API module
//!
//! Tests error types, request/response types, and error-to-status mapping.

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use todos::api::{ApiError, ErrorCode};
    use todos::core::models::TodoId;
    use todos::core::services::ServiceError;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ApiError::bad_request("x").status_code(), 400);
        assert_eq!(ApiError::unauthorized("x").status_code(), 401);
        assert_eq!(ApiError::not_found("x").status_code(), 404);
        assert_eq!(ApiError::method_not_allowed("x").status_code(), 405);
        assert_eq!(ApiError::conflict("x").status_code(), 409);
        assert_eq!(ApiError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::conflict("todo 'a' is no longer available");
        assert_eq!(err.to_string(), "CONFLICT: todo 'a' is no longer available");
    }

    #[test]
    fn test_service_error_mapping() {
        let validation: ApiError = ServiceError::Validation("title must not be null or empty".into()).into();
        assert_eq!(validation.code, ErrorCode::BadRequest);
        assert_eq!(validation.message, "title must not be null or empty");

        let missing: ApiError = ServiceError::NotFound(TodoId::new(3)).into();
        assert_eq!(missing.code, ErrorCode::NotFound);
        assert_eq!(missing.message, "todo 3 does not exist");

        let conflict: ApiError = ServiceError::Conflict("a".into()).into();
        assert_eq!(conflict.code, ErrorCode::Conflict);
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

mod response_tests {
    use todos::api::{ApiError, ApiResponse, TodoView};
    use todos::core::models::{Todo, TodoId};

    #[test]
    fn test_api_response_success() {
        let resp: ApiResponse<String> = ApiResponse::success("test".to_string());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":\"test\""));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_api_response_error() {
        let resp = ApiResponse::<()>::error(&ApiError::not_found("gone"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "gone");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_envelope_uses_code_string() {
        let resp = ApiResponse::<()>::error(&ApiError::internal("boom"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "boom");
    }

    #[test]
    fn test_bare_view_serializes_nulls() {
        let json = serde_json::to_value(TodoView::bare(TodoId::new(9))).unwrap();
        assert_eq!(json["hash"], 9);
        for field in ["title", "creator", "assignee", "completed", "image"] {
            assert!(json[field].is_null(), "{field}");
        }
    }

    #[test]
    fn test_full_view() {
        let todo = Todo::new(TodoId::new(2), "t", "alice");
        let view = TodoView::full(&todo);
        assert_eq!(view.title.as_deref(), Some("t"));
        assert_eq!(view.completed, Some(false));
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

mod request_tests {
    use todos::api::TodoRequest;

    #[test]
    fn test_create_request_deserialize() {
        let req: TodoRequest = serde_json::from_str(r#"{"title": "buy milk", "creator": "alice"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("buy milk"));
        assert_eq!(req.creator.as_deref(), Some("alice"));
        assert!(req.assignee.is_none());
        assert!(req.completed.is_none());
    }

    #[test]
    fn test_update_request_deserialize() {
        let req: TodoRequest = serde_json::from_str(r#"{"assignee": "bob", "completed": true}"#).unwrap();
        assert!(req.title.is_none());
        assert_eq!(req.assignee.as_deref(), Some("bob"));
        assert_eq!(req.completed, Some(true));
    }

    #[test]
    fn test_empty_object_is_empty_request() {
        let req: TodoRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, TodoRequest::default());
    }
}
