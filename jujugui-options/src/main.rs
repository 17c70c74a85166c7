use std::collections::BTreeMap;
use std::io::{self, Read};

use tracing::info;

use jujugui_options::{Normalizer, OptionsError, Settings, load_normalizer_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_logging();

    // Normalizer settings come from an optional jujugui-options.* file
    let config = load_normalizer_config()?;
    let normalizer = Normalizer::from_config(&config);
    info!(
        prefix = ?normalizer.prefix(),
        policy = %normalizer.policy(),
        "Normalizer configured"
    );

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut settings: Settings =
        serde_json::from_str(&input).map_err(|e| OptionsError::InvalidInput {
            message: format!("Expected a JSON object of settings: {}", e),
        })?;
    let received = settings.len();

    normalizer.try_normalize(&mut settings)?;
    info!(
        received,
        total = settings.len(),
        "Settings normalized"
    );

    // Sorted for stable output
    let sorted: BTreeMap<_, _> = settings.into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format().with_target(true).compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jujugui_options=info"));

    // Logs go to stderr so stdout carries only the normalized settings
    tracing_subscriber::registry()
        .with(fmt::layer().event_format(format).with_writer(io::stderr))
        .with(filter)
        .init();
}
