//! In-memory implementation of [`ServiceRepository`].

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{Mutex, MutexGuard};

use cloudtrack_app::ports::ServiceRepository;
use cloudtrack_domain::error::{CloudTrackError, NotFoundError, StorageError};
use cloudtrack_domain::id::ServiceId;
use cloudtrack_domain::service::CloudService;

/// Map-backed service repository.
///
/// Ids are allocated in increasing order, so iterating the map by key
/// yields services in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryServiceRepository {
    store: Mutex<BTreeMap<ServiceId, CloudService>>,
}

impl InMemoryServiceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<ServiceId, CloudService>>, StorageError> {
        self.store.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl ServiceRepository for InMemoryServiceRepository {
    fn create(&self, service: CloudService) -> Result<CloudService, CloudTrackError> {
        let mut store = self.lock()?;
        match store.entry(service.id) {
            Entry::Occupied(_) => Err(StorageError::Duplicate(service.id).into()),
            Entry::Vacant(slot) => Ok(slot.insert(service).clone()),
        }
    }

    fn get_by_id(&self, id: ServiceId) -> Result<Option<CloudService>, CloudTrackError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    fn get_all(&self) -> Result<Vec<CloudService>, CloudTrackError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn modify<T, F>(&self, id: ServiceId, change: F) -> Result<(CloudService, T), CloudTrackError>
    where
        F: FnOnce(&mut CloudService) -> T,
    {
        let mut store = self.lock()?;
        let service = store.get_mut(&id).ok_or(NotFoundError { id })?;
        let output = change(service);
        Ok((service.clone(), output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: u64, name: &str) -> CloudService {
        CloudService::builder()
            .id(ServiceId::new(id))
            .name(name)
            .service_type("VM")
            .hourly_cost(0.25)
            .build()
            .unwrap()
    }

    #[test]
    fn should_create_and_fetch_by_id() {
        let repo = InMemoryServiceRepository::new();
        repo.create(service(1, "Compute Engine")).unwrap();

        let fetched = repo.get_by_id(ServiceId::new(1)).unwrap().unwrap();
        assert_eq!(fetched.name, "Compute Engine");
    }

    #[test]
    fn should_return_none_when_id_missing() {
        let repo = InMemoryServiceRepository::new();
        assert!(repo.get_by_id(ServiceId::new(5)).unwrap().is_none());
    }

    #[test]
    fn should_reject_duplicate_id() {
        let repo = InMemoryServiceRepository::new();
        repo.create(service(1, "Compute Engine")).unwrap();

        let result = repo.create(service(1, "Cloud Storage"));
        assert!(matches!(
            result,
            Err(CloudTrackError::Storage(StorageError::Duplicate(_)))
        ));
        let kept = repo.get_by_id(ServiceId::new(1)).unwrap().unwrap();
        assert_eq!(kept.name, "Compute Engine");
    }

    #[test]
    fn should_list_in_id_order() {
        let repo = InMemoryServiceRepository::new();
        repo.create(service(1, "Compute Engine")).unwrap();
        repo.create(service(2, "Cloud Storage")).unwrap();
        repo.create(service(3, "SQL Database")).unwrap();

        let names: Vec<String> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Compute Engine", "Cloud Storage", "SQL Database"]);
    }

    #[test]
    fn should_persist_changes_made_by_modify() {
        let repo = InMemoryServiceRepository::new();
        repo.create(service(1, "Compute Engine")).unwrap();

        let (updated, outcome) = repo
            .modify(ServiceId::new(1), |s| {
                let outcome = s.add_usage(12.0);
                s.deactivate();
                outcome
            })
            .unwrap();

        assert!(outcome.is_ok());
        assert_eq!(repo.get_by_id(ServiceId::new(1)).unwrap(), Some(updated));
    }

    #[test]
    fn should_return_not_found_when_modifying_missing_service() {
        let repo = InMemoryServiceRepository::new();
        let result = repo.modify(ServiceId::new(4), CloudService::deactivate);
        assert!(matches!(result, Err(CloudTrackError::NotFound(_))));
    }

    #[test]
    fn should_not_lose_changes_when_modified_from_many_threads() {
        let repo = InMemoryServiceRepository::new();
        repo.create(service(1, "Compute Engine")).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1000 {
                        repo.modify(ServiceId::new(1), |s| s.add_usage(1.0))
                            .unwrap()
                            .1
                            .unwrap();
                    }
                });
            }
        });

        let stored = repo.get_by_id(ServiceId::new(1)).unwrap().unwrap();
        assert!((stored.usage_hours() - 4000.0).abs() < f64::EPSILON);
    }
}
