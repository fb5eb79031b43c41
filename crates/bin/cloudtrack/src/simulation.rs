//! Demonstration run — seed services, simulate usage, print reports.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cloudtrack_adapter_console::{report, table};
use cloudtrack_app::ports::ServiceRepository;
use cloudtrack_app::services::service_manager::ServiceManager;
use cloudtrack_domain::error::CloudTrackError;
use cloudtrack_domain::id::ServiceId;

use crate::config::Config;

/// Source of the usage hours added to each service during a run.
pub trait UsageSource {
    /// Hours of usage to record against `id`.
    fn next_hours(&mut self, id: ServiceId) -> f64;
}

impl<F: FnMut(ServiceId) -> f64> UsageSource for F {
    fn next_hours(&mut self, id: ServiceId) -> f64 {
        self(id)
    }
}

/// Whole hours drawn uniformly from an inclusive range.
pub struct RandomUsage {
    rng: StdRng,
    hours: RangeInclusive<u32>,
}

impl RandomUsage {
    /// Create a generator over `min..=max` (bounds are swapped if inverted).
    /// A `seed` makes the sequence reproducible.
    #[must_use]
    pub fn new(min: u32, max: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            hours: min.min(max)..=min.max(max),
        }
    }
}

impl UsageSource for RandomUsage {
    fn next_hours(&mut self, _id: ServiceId) -> f64 {
        f64::from(self.rng.gen_range(self.hours.clone()))
    }
}

/// Totals observed during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Total cost after usage was recorded.
    pub total_cost: f64,
    /// Total cost after the configured service was deactivated, if it was.
    pub total_after_deactivation: Option<f64>,
}

/// Run failures. Unknown ids and inactive targets are logged, not returned.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("service registry error")]
    Registry(#[from] CloudTrackError),
    #[error("failed to write report")]
    Io(#[from] io::Error),
}

/// Register the configured services, add usage to each, print the listing,
/// total and usage report, then deactivate the configured service and print
/// the listing and total again.
///
/// # Errors
///
/// Returns [`SimulationError::Registry`] when a configured service is
/// rejected or storage fails, and [`SimulationError::Io`] when `out` cannot
/// be written.
pub fn run<R, U, W>(
    manager: &ServiceManager<R>,
    config: &Config,
    usage: &mut U,
    out: &mut W,
) -> Result<Summary, SimulationError>
where
    R: ServiceRepository,
    U: UsageSource + ?Sized,
    W: Write,
{
    writeln!(out, "=== Cloud Service Management Tracker ===")?;
    writeln!(out)?;

    let mut ids = Vec::with_capacity(config.services.0.len());
    for service in &config.services.0 {
        let created =
            manager.add_service(&service.name, &service.service_type, service.hourly_cost)?;
        ids.push(created.id);
    }

    for id in ids {
        let hours = usage.next_hours(id);
        log_not_found(manager.add_usage(id, hours).map(|_| ()))?;
    }

    let total_cost = print_listing(manager, out)?;
    writeln!(out)?;
    write!(out, "{}", report::usage_report(&manager.generate_report()?))?;

    let Some(target) = config.simulation.deactivate.map(ServiceId::new) else {
        return Ok(Summary {
            total_cost,
            total_after_deactivation: None,
        });
    };

    let total_after_deactivation = match manager.remove_service(target) {
        Ok(service) => {
            writeln!(out)?;
            writeln!(out, "After deactivating {}:", service.name)?;
            Some(print_listing(manager, out)?)
        }
        Err(err) => {
            log_not_found(Err(err))?;
            None
        }
    };

    Ok(Summary {
        total_cost,
        total_after_deactivation,
    })
}

fn print_listing<R, W>(manager: &ServiceManager<R>, out: &mut W) -> Result<f64, SimulationError>
where
    R: ServiceRepository,
    W: Write,
{
    writeln!(out, "{}", table::services_table(manager.list_all()?))?;
    let total = manager.total_cost()?;
    writeln!(out)?;
    writeln!(out, "{}", report::total_cost(total))?;
    Ok(total)
}

/// Log a not-found error and carry on; anything else is fatal.
fn log_not_found(result: Result<(), CloudTrackError>) -> Result<(), CloudTrackError> {
    match result {
        Err(CloudTrackError::NotFound(err)) => {
            tracing::error!("{err}");
            Ok(())
        }
        other => other,
    }
}
