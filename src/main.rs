use anyhow::Result;
use clap::Parser;
use edumatch::domain::model::{AlStream, Selection};
use edumatch::utils::{logger, validation::Validate};
use edumatch::{CliConfig, FileDatasetSource, HttpDatasetSource, MatchEngine, UniversityMatch};

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting edumatch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let stream: AlStream = match config.stream.parse() {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let selection = match Selection::new(stream, config.subjects.clone()) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let result = if let Some(dir) = &config.data_dir {
        let engine = MatchEngine::new(FileDatasetSource::new(dir));
        engine.run(&selection).await
    } else {
        let endpoints = config.endpoints()?;
        let engine = MatchEngine::new(HttpDatasetSource::from_config(&endpoints));
        engine.run(&selection).await
    };

    match result {
        Ok(matches) => {
            tracing::info!("Match complete: {} universities", matches.len());
            print_matches(&matches)?;
        }
        Err(e) => {
            // A failed load is terminal for the attempt; no retry.
            tracing::error!("Match attempt failed: {}", e);
            eprintln!("Unable to load suggestions right now.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_matches(matches: &[UniversityMatch]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(matches)?);
    Ok(())
}
