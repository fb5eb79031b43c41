//! Service — a tracked cloud resource (VM, storage bucket, database, …).
//!
//! A service accrues usage hours while it is active and bills them at a
//! fixed hourly rate. Deactivation stops future accrual but keeps the cost
//! already accrued.

mod status;

pub use status::ServiceStatus;

use serde::{Deserialize, Serialize};

use crate::error::{CloudTrackError, ValidationError};
use crate::id::ServiceId;
use crate::time::{Timestamp, now};

/// Result of recording usage against a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageOutcome {
    /// The hours were added to the service.
    Recorded,
    /// The service is inactive; nothing changed.
    Ignored,
}

/// A tracked cloud resource and its usage/cost state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudService {
    pub id: ServiceId,
    pub name: String,
    pub service_type: String,
    pub hourly_cost: f64,
    usage_hours: f64,
    status: ServiceStatus,
    created_at: Timestamp,
}

impl CloudService {
    /// Create a builder for constructing a [`CloudService`].
    #[must_use]
    pub fn builder() -> CloudServiceBuilder {
        CloudServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::Validation`] when `name` is empty or the
    /// hourly cost is negative or not finite.
    pub fn validate(&self) -> Result<(), CloudTrackError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !is_non_negative(self.hourly_cost) {
            return Err(ValidationError::InvalidHourlyCost(self.hourly_cost).into());
        }
        Ok(())
    }

    #[must_use]
    pub fn usage_hours(&self) -> f64 {
        self.usage_hours
    }

    #[must_use]
    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Add `hours` of usage when the service is active.
    ///
    /// Inactive services are left untouched and [`UsageOutcome::Ignored`] is
    /// returned so the caller can warn about it.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::Validation`] when `hours` is negative or
    /// not finite.
    pub fn add_usage(&mut self, hours: f64) -> Result<UsageOutcome, CloudTrackError> {
        if !is_non_negative(hours) {
            return Err(ValidationError::InvalidUsageHours(hours).into());
        }
        if !self.status.is_active() {
            return Ok(UsageOutcome::Ignored);
        }
        self.usage_hours += hours;
        Ok(UsageOutcome::Recorded)
    }

    /// Cost accrued so far: usage hours times the hourly cost.
    #[must_use]
    pub fn calculate_cost(&self) -> f64 {
        self.usage_hours * self.hourly_cost
    }

    /// Mark the service inactive. Calling it again has no further effect.
    pub fn deactivate(&mut self) {
        self.status = ServiceStatus::Inactive;
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Step-by-step builder for [`CloudService`].
#[derive(Debug, Default)]
pub struct CloudServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    service_type: Option<String>,
    hourly_cost: Option<f64>,
    created_at: Option<Timestamp>,
}

impl CloudServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    #[must_use]
    pub fn hourly_cost(mut self, hourly_cost: f64) -> Self {
        self.hourly_cost = Some(hourly_cost);
        self
    }

    /// Override the creation timestamp (defaults to [`now`]).
    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return an active [`CloudService`]
    /// with no usage.
    ///
    /// # Errors
    ///
    /// Returns [`CloudTrackError::Validation`] if `name` is missing or empty,
    /// or if the hourly cost is invalid.
    pub fn build(self) -> Result<CloudService, CloudTrackError> {
        let service = CloudService {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            service_type: self.service_type.unwrap_or_default(),
            hourly_cost: self.hourly_cost.unwrap_or_default(),
            usage_hours: 0.0,
            status: ServiceStatus::Active,
            created_at: self.created_at.unwrap_or_else(now),
        };
        service.validate()?;
        Ok(service)
    }
}
