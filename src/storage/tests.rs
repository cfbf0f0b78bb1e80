//! Storage Module Tests
//!
//! Validates the generic record store against a minimal record type.
//!
//! ## Test Scopes
//! - **ResourceStore**: Insert/get/update/upsert/remove mechanics, including
//!   id conflicts and timestamp handling.
//! - **StoreError**: Status codes and client-facing messages.
//!
//! *Note: HTTP-level behavior is covered by the router tests in `crate::api`.*

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::{DateTime, Utc};
    use std::time::Duration;
    use uuid::Uuid;

    use crate::storage::error::StoreError;
    use crate::storage::memory::{Resource, ResourceStore};

    // Test data structure
    #[derive(Debug, Clone, PartialEq)]
    struct TestRecord {
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Resource for TestRecord {
        const KIND: &'static str = "Record";

        fn id(&self) -> Uuid {
            self.id
        }

        fn touch(&mut self, now: DateTime<Utc>) {
            self.updated_at = now;
        }
    }

    fn record(name: &str) -> TestRecord {
        let now = Utc::now();
        TestRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    // ============================================================
    // RESOURCE STORE TESTS
    // ============================================================

    #[test]
    fn test_insert_then_get_returns_equal_record() {
        let store = ResourceStore::new();
        let stored = store.insert(record("alpha")).unwrap();

        let fetched = store.get(&stored.id).unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_rejects_taken_id() {
        let store = ResourceStore::new();
        let first = store.insert(record("alpha")).unwrap();

        let mut clash = record("beta");
        clash.id = first.id;

        let err = store.insert(clash).unwrap_err();
        assert_eq!(err, StoreError::Conflict { kind: "Record" });
        // The original record must survive the rejected insert.
        assert_eq!(store.get(&first.id).unwrap().name, "alpha");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_id_is_not_found() {
        let store: ResourceStore<TestRecord> = ResourceStore::new();
        let err = store.get(&Uuid::new_v4()).unwrap_err();
        assert_eq!(err, StoreError::NotFound { kind: "Record" });
    }

    #[test]
    fn test_filter_keeps_matching_records() {
        let store = ResourceStore::new();
        store.insert(record("alpha")).unwrap();
        store.insert(record("alpha")).unwrap();
        store.insert(record("beta")).unwrap();

        let alphas = store.filter(|r| r.name == "alpha");
        assert_eq!(alphas.len(), 2);
        assert!(alphas.iter().all(|r| r.name == "alpha"));

        let everything = store.filter(|_| true);
        assert_eq!(everything.len(), 3);
    }

    #[test]
    fn test_update_merges_and_touches() {
        let store = ResourceStore::new();
        let stored = store.insert(record("alpha")).unwrap();

        std::thread::sleep(Duration::from_millis(5));
        let updated = store
            .update(&stored.id, |r| r.name = "gamma".to_string())
            .unwrap();

        assert_eq!(updated.name, "gamma");
        assert_eq!(updated.created_at, stored.created_at);
        assert!(updated.updated_at > stored.updated_at);
        // The stored copy reflects the merge too.
        assert_eq!(store.get(&stored.id).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store: ResourceStore<TestRecord> = ResourceStore::new();
        let err = store.update(&Uuid::new_v4(), |_| {}).unwrap_err();
        assert_eq!(err, StoreError::NotFound { kind: "Record" });
    }

    #[test]
    fn test_upsert_creates_when_id_is_free() {
        let store = ResourceStore::new();
        let fresh = record("alpha");
        let id = fresh.id;

        let (stored, created) = store.upsert(id, || fresh.clone(), |_| {});
        assert!(created);
        assert_eq!(stored, fresh);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_upsert_overwrites_existing_record() {
        let store = ResourceStore::new();
        let stored = store.insert(record("alpha")).unwrap();

        std::thread::sleep(Duration::from_millis(5));
        let (replaced, created) = store.upsert(
            stored.id,
            || unreachable!("id is taken"),
            |r| r.name = "beta".to_string(),
        );

        assert!(!created);
        assert_eq!(replaced.name, "beta");
        assert_eq!(replaced.created_at, stored.created_at);
        assert!(replaced.updated_at > stored.updated_at);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_then_get_is_not_found() {
        let store = ResourceStore::new();
        let stored = store.insert(record("alpha")).unwrap();

        store.remove(&stored.id).unwrap();
        assert!(store.is_empty());

        let err = store.get(&stored.id).unwrap_err();
        assert_eq!(err, StoreError::NotFound { kind: "Record" });
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let store: ResourceStore<TestRecord> = ResourceStore::new();
        let err = store.remove(&Uuid::new_v4()).unwrap_err();
        assert_eq!(err, StoreError::NotFound { kind: "Record" });
    }

    // ============================================================
    // STORE ERROR TESTS
    // ============================================================

    #[test]
    fn test_not_found_maps_to_404_with_kind_in_message() {
        let err = StoreError::NotFound { kind: "Desk" };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Desk not found");
    }

    #[test]
    fn test_conflict_maps_to_400_with_kind_in_message() {
        let err = StoreError::Conflict { kind: "Classroom" };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Classroom with this ID already exists");
    }
}
