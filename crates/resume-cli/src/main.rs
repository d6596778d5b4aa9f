//! Batch trigger executable
//!
//! Loads configuration, builds the pipeline and runs one generation batch.

use clap::{Arg, Command};
use resume_core::{PipelineCoordinator, ResumeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("resume-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a batch of synthetic resumes as compiled PDFs")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config/resume.json"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .value_name("N")
                .help("Number of resumes to generate")
                .required(true),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();
    let count: usize = matches
        .get_one::<String>("count")
        .unwrap()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid --count value: {}", e))?;

    let config = ResumeConfig::from_file(config_path)?;
    log::info!("Loaded configuration from {}", config_path);

    let coordinator = PipelineCoordinator::from_config(&config)?;

    let summary = coordinator.generate_batch(count).await?;

    println!(
        "Generated {} of {} requested resumes ({} empty, {} failed) in {}s",
        summary.completed,
        summary.requested,
        summary.empty,
        summary.failed,
        (summary.finished_at - summary.started_at).num_seconds()
    );

    Ok(())
}
