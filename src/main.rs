use campus_urls::config::ExtractorConfig;
use campus_urls::output;
use campus_urls::{Extraction, InputSource};
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

mod args;
use args::Args;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Extraction failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let base = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path);
            ExtractorConfig::from_file(path)?
        }
        None => ExtractorConfig::default(),
    };
    let config = args.apply_to(base);

    let report = Extraction::new(InputSource::from_arg(&config.input))
        .with_config(&config)
        .run()?;

    let stdout = std::io::stdout();
    output::write_report(&report, config.format, &mut stdout.lock())?;

    Ok(())
}
