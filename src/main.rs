//! tapline - TAP lifecycle event converter
//!
//! CLI driver for the tapline reporter library: replays a recorded NDJSON
//! event log (one lifecycle event per line) into a TAP stream.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a recorded run to TAP on stdout
//! tapline convert --input run.ndjson
//!
//! # Read events from stdin, write TAP to a file
//! some-test-runner --record | tapline convert --output results.tap
//!
//! # Filter stack frames for a different host framework
//! tapline convert --input run.ndjson --framework-token mocha
//!
//! # Manage configuration
//! tapline config init
//! tapline config validate
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::info;

use tapline::cli::{self, Args};
use tapline::driver;
use tapline::output::{ConsoleSink, LineSink, WriterSink};
use tapline::{ConfigFile, ReporterRegistry, TapReporter};

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tapline::utils::LogLevel::Debug
    } else {
        tapline::utils::LogLevel::Info
    };
    tapline::utils::init_logger(level);

    match args.command {
        cli::Command::Convert(convert_args) => convert(convert_args)?,
        cli::Command::Config(config_args) => manage_config(config_args)?,
    }

    Ok(())
}

fn convert(args: cli::ConvertArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    if let Some(token) = args.framework_token {
        config.reporter.framework_token = token;
    }

    let sink: Box<dyn LineSink> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path}"))?;
            Box::new(WriterSink::new(file))
        }
        None => Box::new(ConsoleSink),
    };

    let reporter = TapReporter::new(&config.reporter, sink)?;

    let mut registry = ReporterRegistry::new();
    registry
        .add(Box::new(reporter))
        .context("Failed to register TAP reporter")?;
    registry.seal();

    let summary = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file: {path}"))?;
            driver::replay(BufReader::new(file), &mut registry)?
        }
        None => driver::replay(io::stdin().lock(), &mut registry)?,
    };

    info!(
        "Converted {} events ({} spec results)",
        summary.events, summary.specs
    );

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("Configuration file created: {output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./tapline.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Show => {
            let config = ConfigFile::load_default()?;
            println!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}
