//! End-to-end tests for the full cloudtrack stack.
//!
//! Each test wires the real in-memory repository, the real service manager
//! and the console renderers, then drives a simulation with a deterministic
//! usage source and inspects the captured output.

use cloudtrack::config::{Config, ServiceConfig, ServicesConfig};
use cloudtrack::simulation::{self, RandomUsage, Summary};
use cloudtrack_adapter_storage_memory::InMemoryServiceRepository;
use cloudtrack_app::services::service_manager::ServiceManager;
use cloudtrack_domain::id::ServiceId;
use cloudtrack_domain::service::{ServiceStatus, UsageOutcome};

fn manager() -> ServiceManager<InMemoryServiceRepository> {
    ServiceManager::new(InMemoryServiceRepository::new())
}

fn run(
    manager: &ServiceManager<InMemoryServiceRepository>,
    config: &Config,
) -> (Summary, String) {
    let mut usage = |_: ServiceId| 20.0;
    let mut out = Vec::new();
    let summary = simulation::run(manager, config, &mut usage, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

// ---------------------------------------------------------------------------
// Registry lifecycle
// ---------------------------------------------------------------------------

#[test]
fn should_follow_compute_engine_lifecycle() {
    let manager = manager();
    let created = manager.add_service("Compute Engine", "VM", 0.25).unwrap();
    assert_eq!(created.id, ServiceId::new(1));

    assert_eq!(
        manager.add_usage(created.id, 20.0).unwrap(),
        UsageOutcome::Recorded
    );
    let service = manager.get_service(created.id).unwrap();
    assert!((service.usage_hours() - 20.0).abs() < f64::EPSILON);
    assert!((service.calculate_cost() - 5.0).abs() < f64::EPSILON);

    let removed = manager.remove_service(created.id).unwrap();
    assert_eq!(removed.status(), ServiceStatus::Inactive);

    assert_eq!(
        manager.add_usage(created.id, 10.0).unwrap(),
        UsageOutcome::Ignored
    );
    let service = manager.get_service(created.id).unwrap();
    assert!((service.usage_hours() - 20.0).abs() < f64::EPSILON);
    assert!((manager.total_cost().unwrap() - 5.0).abs() < f64::EPSILON);
}

#[test]
fn should_report_not_found_on_empty_registry() {
    let manager = manager();
    let err = manager.remove_service(ServiceId::new(99)).unwrap_err();
    assert!(err.to_string().contains("Service ID not found"));
    assert_eq!(manager.list_all().unwrap().count(), 0);
}

#[test]
fn should_keep_every_hour_added_concurrently() {
    let manager = manager();
    let id = manager.add_service("Compute Engine", "VM", 0.25).unwrap().id;

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..5000 {
                    manager.add_usage(id, 1.0).unwrap();
                }
            });
        }
    });

    let service = manager.get_service(id).unwrap();
    assert!((service.usage_hours() - 20_000.0).abs() < f64::EPSILON);
    assert!((manager.total_cost().unwrap() - 5_000.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[test]
fn should_print_reports_for_default_services() {
    let manager = manager();
    let (summary, output) = run(&manager, &Config::default());

    // 20h each: 5.00 + 2.00 + 6.00
    assert!((summary.total_cost - 13.0).abs() < 1e-9);
    assert!(output.contains("Compute Engine"));
    assert!(output.contains("Cloud Storage"));
    assert!(output.contains("SQL Database"));
    assert!(output.contains("Cloud Service Usage Report"));
    assert!(output.contains("- Compute Engine (VM) -> 20 hrs, $5.00"));
    assert!(output.contains("- SQL Database (Database) -> 20 hrs, $6.00"));
}

#[test]
fn should_keep_total_after_deactivating_cloud_storage() {
    let manager = manager();
    let (summary, output) = run(&manager, &Config::default());

    assert_eq!(summary.total_after_deactivation, Some(summary.total_cost));
    assert!(output.contains("After deactivating Cloud Storage:"));
    assert_eq!(output.matches("Total Cloud Cost: $13.00").count(), 2);

    let storage = manager.get_service(ServiceId::new(2)).unwrap();
    assert_eq!(storage.status(), ServiceStatus::Inactive);
}

#[test]
fn should_continue_when_deactivation_target_is_missing() {
    let manager = manager();
    let mut config = Config::default();
    config.simulation.deactivate = Some(99);

    let (summary, output) = run(&manager, &config);

    assert_eq!(summary.total_after_deactivation, None);
    assert!(!output.contains("After deactivating"));
    assert!(
        manager
            .list_all()
            .unwrap()
            .all(|row| row.status == ServiceStatus::Active)
    );
}

#[test]
fn should_skip_deactivation_when_not_configured() {
    let manager = manager();
    let mut config = Config::default();
    config.simulation.deactivate = None;

    let (summary, _) = run(&manager, &config);
    assert_eq!(summary.total_after_deactivation, None);
}

#[test]
fn should_seed_configured_services_in_order() {
    let manager = manager();
    let mut config = Config::default();
    config.services = ServicesConfig(vec![
        ServiceConfig {
            name: "Object Store".to_string(),
            service_type: "Storage".to_string(),
            hourly_cost: 0.05,
        },
        ServiceConfig {
            name: "GPU Node".to_string(),
            service_type: "VM".to_string(),
            hourly_cost: 2.5,
        },
    ]);
    config.simulation.deactivate = Some(1);

    let (summary, output) = run(&manager, &config);

    let names: Vec<String> = manager.list_all().unwrap().map(|row| row.name).collect();
    assert_eq!(names, vec!["Object Store", "GPU Node"]);
    assert!((summary.total_cost - 51.0).abs() < 1e-9);
    assert!(output.contains("After deactivating Object Store:"));
}

#[test]
fn should_fail_when_configured_service_is_invalid() {
    let manager = manager();
    let mut config = Config::default();
    config.services = ServicesConfig(vec![ServiceConfig {
        name: "Broken".to_string(),
        service_type: "VM".to_string(),
        hourly_cost: -1.0,
    }]);

    let mut usage = |_: ServiceId| 1.0;
    let result = simulation::run(&manager, &config, &mut usage, &mut std::io::sink());
    assert!(matches!(
        result,
        Err(simulation::SimulationError::Registry(_))
    ));
}

#[test]
fn should_produce_identical_totals_for_same_seed() {
    let totals: Vec<f64> = (0..2)
        .map(|_| {
            let manager = manager();
            let mut usage = RandomUsage::new(10, 50, Some(2024));
            simulation::run(&manager, &Config::default(), &mut usage, &mut std::io::sink())
                .unwrap()
                .total_cost
        })
        .collect();
    assert!((totals[0] - totals[1]).abs() < f64::EPSILON);
    assert!((5.0..=32.5).contains(&totals[0]));
}
