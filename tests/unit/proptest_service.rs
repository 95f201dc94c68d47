//! Property-based tests for the todo service

use std::collections::HashSet;

use proptest::prelude::*;

use crate::common::service;

proptest! {
    #[test]
    fn read_all_lists_every_created_todo(titles in prop::collection::hash_set("[a-z]{1,12}", 0..20)) {
        let svc = service();
        let created: HashSet<_> = titles
            .iter()
            .map(|t| svc.create(Some(t.as_str()), Some("alice")).unwrap())
            .collect();

        let listed: HashSet<_> = svc.read_all().into_iter().collect();
        prop_assert_eq!(created.len(), titles.len());
        prop_assert_eq!(listed, created);
    }

    #[test]
    fn created_todos_read_back_unassigned(title in "[a-zA-Z0-9 ]{1,24}", creator in "[a-z]{0,8}") {
        let svc = service();
        let id = svc.create(Some(title.as_str()), Some(creator.as_str())).unwrap();
        let todo = svc.read_one(id).unwrap();
        prop_assert_eq!(todo.title, title);
        prop_assert_eq!(todo.creator, creator);
        prop_assert!(todo.assignee.is_none());
        prop_assert!(!todo.completed);
    }

    #[test]
    fn deleted_ids_stay_gone(count in 1usize..10) {
        let svc = service();
        let ids: Vec<_> = (0..count)
            .map(|n| svc.create(Some(format!("todo {n}").as_str()), Some("alice")).unwrap())
            .collect();
        for id in &ids {
            svc.delete(*id).unwrap();
        }
        let fresh = svc.create(Some("todo 0"), Some("alice")).unwrap();
        prop_assert!(!ids.contains(&fresh));
        for id in ids {
            prop_assert!(svc.read_one(id).is_err());
        }
    }
}
