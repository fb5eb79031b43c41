//! Storage port — repository trait for tracked services.

use cloudtrack_domain::error::CloudTrackError;
use cloudtrack_domain::id::ServiceId;
use cloudtrack_domain::service::CloudService;

/// Owns every [`CloudService`] known to the application.
///
/// Implementations must return services from [`get_all`](Self::get_all) in
/// insertion order.
pub trait ServiceRepository {
    /// Store a new service.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the service cannot be stored, including
    /// when its id is already taken.
    fn create(&self, service: CloudService) -> Result<CloudService, CloudTrackError>;

    /// Fetch a service by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read.
    fn get_by_id(&self, id: ServiceId) -> Result<Option<CloudService>, CloudTrackError>;

    /// Fetch every service, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read.
    fn get_all(&self) -> Result<Vec<CloudService>, CloudTrackError>;

    /// Apply `change` to the stored service in place and return the updated
    /// copy with whatever `change` produced.
    ///
    /// The read, the change and the write happen under a single exclusive
    /// access to the store, so concurrent calls never overwrite each other.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::NotFound`] if no service has `id`, or a
    /// storage error.
    fn modify<T, F>(&self, id: ServiceId, change: F) -> Result<(CloudService, T), CloudTrackError>
    where
        F: FnOnce(&mut CloudService) -> T;
}
