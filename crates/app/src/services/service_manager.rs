//! Service manager — use-cases for tracking cloud services.

use std::sync::Mutex;

use cloudtrack_domain::error::{CloudTrackError, NotFoundError, StorageError};
use cloudtrack_domain::id::ServiceId;
use cloudtrack_domain::service::{CloudService, UsageOutcome};

use crate::ports::ServiceRepository;
use crate::report::{ServiceRow, UsageReport};

/// Registry of tracked services: assigns ids, records usage, deactivates
/// services and produces reports.
///
/// Services are never deleted. Ids come from a counter owned by the manager,
/// so they stay unique even if the repository were to shrink.
pub struct ServiceManager<R> {
    repo: R,
    next_id: Mutex<ServiceId>,
}

impl<R: ServiceRepository> ServiceManager<R> {
    /// Create a new manager backed by the given repository. The first
    /// service added gets id `1`.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            next_id: Mutex::new(ServiceId::FIRST),
        }
    }

    /// Register a new active service with no usage.
    ///
    /// The id is only consumed once the repository accepted the service.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::Validation`] if the name is empty or the
    /// hourly cost is invalid, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub fn add_service(
        &self,
        name: &str,
        service_type: &str,
        hourly_cost: f64,
    ) -> Result<CloudService, CloudTrackError> {
        let mut service = CloudService::builder()
            .name(name)
            .service_type(service_type)
            .hourly_cost(hourly_cost)
            .build()?;
        let mut next_id = self.next_id.lock().map_err(|_| StorageError::Poisoned)?;
        service.id = *next_id;
        let created = self.repo.create(service)?;
        *next_id = next_id.next();
        drop(next_id);
        tracing::info!(
            id = %created.id,
            "Added new service: {} ({})",
            created.name,
            created.service_type
        );
        Ok(created)
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::NotFound`] when no service with `id`
    /// exists, or a storage error from the repository.
    pub fn get_service(&self, id: ServiceId) -> Result<CloudService, CloudTrackError> {
        self.repo
            .get_by_id(id)?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Deactivate a service. The service stays in the registry and keeps its
    /// accrued cost; deactivating twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::NotFound`] when no service with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub fn remove_service(&self, id: ServiceId) -> Result<CloudService, CloudTrackError> {
        let (updated, ()) = self.repo.modify(id, CloudService::deactivate)?;
        tracing::info!("Deactivated service ID: {id}");
        Ok(updated)
    }

    /// Record `hours` of usage against a service.
    ///
    /// Returns [`UsageOutcome::Ignored`] (and logs a warning) when the
    /// service is inactive.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::NotFound`] when no service with `id`
    /// exists, [`CloudTrackError::Validation`] for negative or non-finite
    /// hours, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub fn add_usage(&self, id: ServiceId, hours: f64) -> Result<UsageOutcome, CloudTrackError> {
        let (service, outcome) = self.repo.modify(id, |service| service.add_usage(hours))?;
        let outcome = outcome?;
        if outcome == UsageOutcome::Ignored {
            tracing::warn!("Cannot add usage. {} is inactive.", service.name);
        }
        tracing::info!("Added {hours} hours usage to service ID {id}");
        Ok(outcome)
    }

    /// Rows for every service, in the order they were added.
    ///
    /// The returned iterator is a snapshot; call again for fresh values.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn list_all(&self) -> Result<impl Iterator<Item = ServiceRow>, CloudTrackError> {
        let services = self.repo.get_all()?;
        Ok(services.into_iter().map(|service| ServiceRow::from(&service)))
    }

    /// Cost accrued by every service, active or not.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn total_cost(&self) -> Result<f64, CloudTrackError> {
        Ok(self
            .repo
            .get_all()?
            .iter()
            .map(CloudService::calculate_cost)
            .sum())
    }

    /// Per-service usage summary, in the order services were added.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub fn generate_report(&self) -> Result<UsageReport, CloudTrackError> {
        Ok(self.list_all()?.collect())
    }
}
