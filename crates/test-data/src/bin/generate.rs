//! Writes generated sensor packages to stdout as JSON
//!
//! Run with:
//! ```
//! GENERATE_COUNT=50 GENERATE_SEED=12345 cargo run -p test-data --bin generate > packages.json
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GenerateConfig::from_env()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let packages =
        PackageGenerator::with_config(config.packages).generate_batch(config.count, &mut rng);

    println!("{}", serde_json::to_string_pretty(&packages)?);

    tracing::info!("Generated {} packages", packages.len());

    Ok(())
}
