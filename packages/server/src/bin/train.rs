//! Offline training driver
//!
//! Reads the scraped listings CSV, learns the preparation statistics, fits
//! the price pipeline and writes the model artifact used by the server.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use car_data_prep::{CarDataPrep, OdometerPolicy, PrepConfig, RawRecord};
use clap::{Parser, ValueEnum};
use price_model::{train, TrainOptions, DEFAULT_ARTIFACT_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train the used-car price model")]
struct Cli {
    /// Listings CSV with the scraped column headers
    #[arg(long, default_value = "dataset.csv")]
    data: PathBuf,

    /// Where to write the model artifact
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    out: PathBuf,

    /// How recorded odometer readings are treated
    #[arg(long, value_enum, default_value_t = KmPolicy::KeepObserved)]
    km_policy: KmPolicy,

    /// Cross-validation folds (0 or 1 disables cross-validation)
    #[arg(long, default_value_t = 10)]
    folds: usize,

    /// Year used to compute vehicle age; defaults to the current year
    #[arg(long)]
    reference_year: Option<i32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KmPolicy {
    /// Keep every valid reading, impute only missing ones
    KeepObserved,
    /// Replace every reading with the batch km-per-year rate
    BatchRate,
}

impl From<KmPolicy> for OdometerPolicy {
    fn from(policy: KmPolicy) -> Self {
        match policy {
            KmPolicy::KeepObserved => OdometerPolicy::KeepObserved,
            KmPolicy::BatchRate => OdometerPolicy::BatchRate,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,price_model=debug,car_data_prep=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = PrepConfig::default().with_odometer_policy(cli.km_policy.into());
    if let Some(year) = cli.reference_year {
        config = config.with_reference_year(year);
    }

    let file = File::open(&cli.data)
        .with_context(|| format!("Failed to open {}", cli.data.display()))?;
    let raw = RawRecord::read_csv(file).context("Failed to read listings")?;
    let unpriced = raw.iter().filter(|r| r.price.is_none()).count();
    let raw: Vec<RawRecord> = raw.into_iter().filter(|r| r.price.is_some()).collect();
    tracing::info!(rows = raw.len(), unpriced, "Loaded listings");

    let (records, stats) = CarDataPrep::new(config)
        .fit_transform(raw)
        .context("Failed to prepare listings")?;

    let options = TrainOptions {
        folds: cli.folds,
        ..Default::default()
    };
    let artifact = train(&records, stats, &options).context("Training failed")?;

    println!("RMSE: {:.2}", artifact.metrics.holdout.rmse);
    println!("MAE:  {:.2}", artifact.metrics.holdout.mae);
    println!("R²:   {:.4}", artifact.metrics.holdout.r2);
    if let Some(cv) = artifact.metrics.cv_r2_mean() {
        println!("Cross-validated R² ({} folds): {:.4}", artifact.metrics.cv_r2.len(), cv);
    }

    artifact
        .save(&cli.out)
        .with_context(|| format!("Failed to write {}", cli.out.display()))?;

    Ok(())
}
