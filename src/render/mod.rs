//! Static HTML output.
//!
//! Pages are self-contained HTML documents that load Leaflet from a CDN and
//! add one marker (or polygon) per record in an inline script.

mod buildings;
mod html;
mod index;
mod legend;
mod page;
mod points;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use buildings::render_buildings_map;
pub use html::{escape, js_string};
pub use index::{render_index, IndexStatus};
pub use legend::log_legend;
pub use points::{popup_html, render_points_map, tooltip_text};

/// Writes `html` to `dir/file_name` and returns the path.
pub fn write_page(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Saved {}", path.display());
    Ok(path)
}
