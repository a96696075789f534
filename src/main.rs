use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openmrs_import::client::OpenMrsClient;
use openmrs_import::config::Config;
use openmrs_import::{loader, pipeline};

#[derive(Parser, Debug)]
#[command(name = "openmrs-import")]
#[command(about = "Import patients and viral-load observations into OpenMRS", long_about = None)]
struct Args {
    /// CSV file with patient demographics
    #[arg(short, long, default_value = "data/patients.csv")]
    patients: PathBuf,

    /// CSV file with viral-load observations
    #[arg(short, long, default_value = "data/vl_obs.csv")]
    observations: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openmrs_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    tracing::info!("Importing into {}", config.base_url);

    let patients = loader::load_patients(&args.patients)?;
    let observations = loader::load_observations(&args.observations)?;
    tracing::info!(
        patients = patients.len(),
        observations = observations.len(),
        "Input files loaded"
    );

    let client = OpenMrsClient::new(&config);
    pipeline::run(&client, &patients, &observations).await?;

    Ok(())
}
