//! Tests for the todo service

use todos::core::models::TodoId;
use todos::core::services::ServiceError;

use crate::common::service;

mod create_tests {
    use super::*;

    #[test]
    fn test_create_validation() {
        let svc = service();
        for (title, creator) in [(Some(""), Some("alice")), (None, Some("alice")), (Some("x"), None)] {
            let err = svc.create(title, creator).unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "{title:?}/{creator:?}: {err}");
        }
    }

    #[test]
    fn test_create_then_read_one() {
        let svc = service();
        let id = svc.create(Some("buy milk"), Some("alice")).unwrap();

        let todo = svc.read_one(id).unwrap();
        assert_eq!(todo.id, id);
        assert_eq!(todo.title, "buy milk");
        assert_eq!(todo.creator, "alice");
        assert!(todo.assignee.is_none());
        assert!(!todo.completed);
    }

    #[test]
    fn test_create_conflict() {
        let svc = service();
        svc.create(Some("buy milk"), Some("alice")).unwrap();
        let err = svc.create(Some("buy milk"), Some("alice")).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(svc.read_all().len(), 1);
    }
}

mod read_tests {
    use super::*;

    #[test]
    fn test_read_one_not_found() {
        let svc = service();
        let err = svc.read_one(TodoId::new(5)).unwrap_err();
        assert_eq!(err, ServiceError::NotFound(TodoId::new(5)));
        assert_eq!(err.to_string(), "todo 5 does not exist");
    }

    #[test]
    fn test_read_all_order() {
        let svc = service();
        let ids: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|t| svc.create(Some(*t), Some("alice")).unwrap())
            .collect();
        assert_eq!(svc.read_all(), ids);
    }
}

mod update_tests {
    use super::*;

    #[test]
    fn test_update_unknown_id() {
        let svc = service();
        let err = svc.update(TodoId::new(1), Some("x"), None).unwrap_err();
        assert_eq!(err, ServiceError::NotFound(TodoId::new(1)));
    }

    #[test]
    fn test_update_cannot_clear_assignee() {
        let svc = service();
        let id = svc.create(Some("x"), Some("alice")).unwrap();
        svc.update(id, None, Some("bob")).unwrap();
        svc.update(id, None, Some("")).unwrap();
        assert_eq!(svc.read_one(id).unwrap().assignee.as_deref(), Some("bob"));
    }

    #[test]
    fn test_reassignment_moves_todo_between_users() {
        let svc = service();
        let id = svc.create(Some("x"), Some("alice")).unwrap();
        svc.update(id, None, Some("bob")).unwrap();
        assert_eq!(svc.todos_of("bob"), vec![id]);

        svc.update(id, None, Some("carol")).unwrap();
        assert!(svc.todos_of("bob").is_empty());
        assert_eq!(svc.todos_of("carol"), vec![id]);
    }

    #[test]
    fn test_set_completed() {
        let svc = service();
        let id = svc.create(Some("x"), Some("alice")).unwrap();
        assert!(svc.set_completed(id, true).unwrap().completed);
        assert!(!svc.set_completed(id, false).unwrap().completed);
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn test_delete_removes_only_target() {
        let svc = service();
        let a = svc.create(Some("a"), Some("alice")).unwrap();
        let b = svc.create(Some("b"), Some("alice")).unwrap();

        svc.delete(a).unwrap();
        assert_eq!(svc.read_one(a).unwrap_err(), ServiceError::NotFound(a));
        assert_eq!(svc.read_all(), vec![b]);
    }

    #[test]
    fn test_delete_frees_title() {
        let svc = service();
        let a = svc.create(Some("a"), Some("alice")).unwrap();
        svc.delete(a).unwrap();
        assert!(svc.create(Some("a"), Some("alice")).is_ok());
    }
}
