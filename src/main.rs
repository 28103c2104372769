//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `istanbul_churches` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output, the local server and the browser
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use istanbul_churches::app::{open_browser, print_serving_banner, summary_lines};
use istanbul_churches::config::{POINTS_MAP_FILE, PORT_BIND_ATTEMPTS};
use istanbul_churches::initialization::init_logger_with;
use istanbul_churches::server::ctrl_c_signal;
use istanbul_churches::{run_generation, Config, Opt, StaticServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Allows setting OVERPASS_URL in .env
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.effective_log_level(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&config).await {
        eprintln!("istanbul_churches error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    if !config.quiet {
        println!("🗺️ Istanbul Churches Map Generator");
        println!("{}", "=".repeat(40));
    }

    let report = run_generation(config).await?;

    if !config.quiet {
        for line in summary_lines(&report) {
            println!("{}", line);
        }
    }
    if let Some(coverage) = &report.coverage {
        println!();
        print!("{}", coverage);
    }

    if config.no_serve {
        return Ok(());
    }

    let server = StaticServer::bind(config.output_dir.clone(), config.port, PORT_BIND_ATTEMPTS)
        .await
        .context("Failed to start local server")?;
    let url = server.url(POINTS_MAP_FILE);
    if config.quiet {
        println!("{}", url);
    } else {
        print_serving_banner(server.port(), config.port);
    }

    if !config.no_browser {
        open_browser(&url);
    }

    server
        .serve_until(ctrl_c_signal())
        .await
        .context("Local server failed")?;
    if !config.quiet {
        println!("\n👋 Server stopped");
    }
    Ok(())
}
