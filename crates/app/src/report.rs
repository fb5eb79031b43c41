//! Read models handed to presentation adapters.

use std::fmt;

use cloudtrack_domain::id::ServiceId;
use cloudtrack_domain::service::{CloudService, ServiceStatus};
use cloudtrack_domain::time::Timestamp;

/// One row of the service listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRow {
    pub id: ServiceId,
    pub name: String,
    pub service_type: String,
    pub status: ServiceStatus,
    pub usage_hours: f64,
    pub cost: f64,
    pub created_at: Timestamp,
}

impl From<&CloudService> for ServiceRow {
    fn from(service: &CloudService) -> Self {
        Self {
            id: service.id,
            name: service.name.clone(),
            service_type: service.service_type.clone(),
            status: service.status(),
            usage_hours: service.usage_hours(),
            cost: service.calculate_cost(),
            created_at: service.created_at(),
        }
    }
}

/// Usage summary for a single service.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageLine {
    pub name: String,
    pub service_type: String,
    pub usage_hours: f64,
    pub cost: f64,
}

impl fmt::Display for UsageLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}) -> {} hrs, ${:.2}",
            self.name, self.service_type, self.usage_hours, self.cost
        )
    }
}

/// Per-service usage report, in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageReport {
    pub lines: Vec<UsageLine>,
}

impl FromIterator<ServiceRow> for UsageReport {
    fn from_iter<I: IntoIterator<Item = ServiceRow>>(iter: I) -> Self {
        let lines = iter
            .into_iter()
            .map(|row| UsageLine {
                name: row.name,
                service_type: row.service_type,
                usage_hours: row.usage_hours,
                cost: row.cost,
            })
            .collect();
        Self { lines }
    }
}
