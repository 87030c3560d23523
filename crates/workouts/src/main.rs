use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{config::Config, demo_packages, load_packages, render_all};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_env();

    let packages = match &config.packages_path {
        Some(path) => {
            tracing::info!("Reading sensor packages from {}", path.display());
            load_packages(path)?
        }
        None => {
            tracing::info!("No packages file configured, using demo packages");
            demo_packages()
        }
    };

    let report = render_all(&packages, config.output)?;
    for line in &report.lines {
        println!("{line}");
    }

    if report.rejected > 0 {
        anyhow::bail!("{} of {} packages rejected", report.rejected, packages.len());
    }

    Ok(())
}
