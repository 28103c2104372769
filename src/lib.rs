//! istanbul_churches library: church maps of Istanbul from OpenStreetMap
//!
//! This library queries the Overpass API for places of Christian worship in
//! Istanbul, classifies them by denomination and writes static Leaflet maps
//! plus an index page. A built-in dataset is used when the API is unreachable.
//!
//! # Example
//!
//! ```no_run
//! use istanbul_churches::{run_generation, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output_dir: std::path::PathBuf::from("./maps"),
//!     with_buildings: true,
//!     ..Default::default()
//! };
//!
//! let report = run_generation(&config).await?;
//! println!("Mapped {} churches from {}", report.church_count, report.source);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod classify;
pub mod config;
pub mod coverage;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod overpass;
pub mod render;
pub mod server;

// Re-export public API
pub use classify::{classify, Denomination};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use coverage::CoverageReport;
pub use models::{Building, Church, Coordinates, DataSource};
pub use run::{run_generation, BuildingsOutput, GenerationReport};
pub use server::StaticServer;

// Internal run module (contains the generation pipeline)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use chrono::Local;
    use log::{info, warn};

    use crate::config::{Config, BUILDINGS_MAP_FILE, INDEX_FILE, POINTS_MAP_FILE};
    use crate::coverage::CoverageReport;
    use crate::initialization::init_client;
    use crate::models::DataSource;
    use crate::overpass::OverpassClient;
    use crate::render::{
        log_legend, render_buildings_map, render_index, render_points_map, write_page,
        IndexStatus,
    };

    /// The buildings map written by a run.
    #[derive(Debug, Clone)]
    pub struct BuildingsOutput {
        /// Path of the HTML file
        pub path: PathBuf,
        /// Number of building outlines drawn
        pub count: usize,
    }

    /// Results of a generation run.
    #[derive(Debug, Clone)]
    pub struct GenerationReport {
        /// Number of churches on the points map
        pub church_count: usize,
        /// Live data or the fallback dataset
        pub source: DataSource,
        /// Path of the points map
        pub points_map: PathBuf,
        /// Buildings map, when requested
        pub buildings: Option<BuildingsOutput>,
        /// Path of the index page
        pub index_page: PathBuf,
        /// Coverage analysis, when requested
        pub coverage: Option<CoverageReport>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Generates the maps described by `config` into `config.output_dir`.
    ///
    /// The church query never fails the run: an unreachable or misbehaving
    /// Overpass endpoint yields the fallback dataset instead. A failed
    /// buildings query yields an empty buildings map.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The output directory cannot be created
    /// - The HTTP client cannot be initialized
    /// - A page cannot be written
    pub async fn run_generation(config: &Config) -> Result<GenerationReport> {
        let start_time = std::time::Instant::now();

        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let overpass = OverpassClient::new(client, config.overpass_url.clone());
        info!("Using Overpass endpoint {}", overpass.endpoint());

        let outcome = overpass.fetch_churches().await;
        info!(
            "Mapping {} churches from {}",
            outcome.churches.len(),
            outcome.source
        );
        let points_map = write_page(
            &config.output_dir,
            POINTS_MAP_FILE,
            &render_points_map(&outcome.churches),
        )
        .context("Failed to save points map")?;
        log_legend();

        let buildings = if config.with_buildings {
            info!("Fetching church building outlines...");
            let buildings = match overpass.fetch_buildings().await {
                Ok(buildings) => buildings,
                Err(e) => {
                    warn!("Error fetching church buildings ({}): {}", e.kind(), e);
                    Vec::new()
                }
            };
            info!("Found {} church buildings", buildings.len());
            let path = write_page(
                &config.output_dir,
                BUILDINGS_MAP_FILE,
                &render_buildings_map(&buildings),
            )
            .context("Failed to save buildings map")?;
            Some(BuildingsOutput {
                path,
                count: buildings.len(),
            })
        } else {
            None
        };

        let coverage = config
            .with_analysis
            .then(|| CoverageReport::from_churches(&outcome.churches));

        let status = IndexStatus {
            points_map: true,
            buildings_map: buildings.is_some()
                || config.output_dir.join(BUILDINGS_MAP_FILE).exists(),
        };
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let index_page = write_page(
            &config.output_dir,
            INDEX_FILE,
            &render_index(status, &generated_at),
        )
        .context("Failed to save index page")?;

        Ok(GenerationReport {
            church_count: outcome.churches.len(),
            source: outcome.source,
            points_map,
            buildings,
            index_page,
            coverage,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
