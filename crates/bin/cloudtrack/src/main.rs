use cloudtrack::config::Config;
use cloudtrack::simulation::{self, RandomUsage};
use cloudtrack_adapter_storage_memory::InMemoryServiceRepository;
use cloudtrack_app::services::service_manager::ServiceManager;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    // Registry
    let manager = ServiceManager::new(InMemoryServiceRepository::new());

    // Usage
    let mut usage = RandomUsage::new(
        config.simulation.min_hours,
        config.simulation.max_hours,
        config.simulation.seed,
    );

    let summary = simulation::run(&manager, &config, &mut usage, &mut std::io::stdout().lock())?;
    tracing::debug!(?summary, "simulation finished");

    Ok(())
}
