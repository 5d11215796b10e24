//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_analyzer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_analyzer::initialization::init_logger_with;
use site_analyzer::report::{render_text, write_json_report};
use site_analyzer::{print_processing_statistics, Analyzer, Config, Opt, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting PAGESPEED_API_KEY in .env without exporting it manually
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let analyzer = Analyzer::new(&config).context("Failed to initialize analyzer")?;

    let mut results = Vec::with_capacity(opt.urls.len());
    let mut invalid = 0usize;
    for outcome in analyzer.analyze_many(&opt.urls).await {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("{e}");
                invalid += 1;
            }
        }
    }

    let output = match (opt.output.as_deref(), opt.format) {
        (Some(path), _) => write_json_report(&results, Some(path)).map(|written| {
            println!(
                "Wrote {} result{} to {}",
                written,
                if written == 1 { "" } else { "s" },
                path.display()
            );
        }),
        (None, OutputFormat::Json) => write_json_report(&results, None).map(|_| ()),
        (None, OutputFormat::Text) => {
            for result in &results {
                println!("{}", render_text(result));
            }
            Ok(())
        }
    };

    print_processing_statistics(&analyzer.stats());

    if let Err(e) = output {
        eprintln!("site_analyzer error: {:#}", e);
        process::exit(1);
    }
    if invalid > 0 {
        process::exit(1);
    }
    Ok(())
}
