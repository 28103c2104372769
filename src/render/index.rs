//! Index page linking the generated maps.

use crate::config::{BUILDINGS_MAP_FILE, POINTS_MAP_FILE};
use crate::render::html::escape;
use crate::render::legend::index_legend;

/// Which maps exist in the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStatus {
    pub points_map: bool,
    pub buildings_map: bool,
}

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1200px; margin: 0 auto; padding: 20px; background: #f5f5f5; }
        .header { background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); margin-bottom: 30px; text-align: center; }
        .header h1 { color: #333; margin: 0 0 10px 0; font-size: 2.5em; }
        .maps-container { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 30px; margin-bottom: 30px; }
        .map-card { background: white; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); overflow: hidden; transition: transform 0.2s ease; }
        .map-card:hover { transform: translateY(-5px); }
        .map-info { padding: 25px; }
        .map-info h2 { margin: 0 0 15px 0; color: #333; }
        .btn { display: inline-block; padding: 12px 25px; background: #667eea; color: white; text-decoration: none; border-radius: 5px; font-weight: 500; }
        .btn:hover { background: #5a67d8; }
        .btn.disabled { pointer-events: none; opacity: 0.6; }
        .status { padding: 15px; margin: 15px 0; border-radius: 5px; }
        .status.success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
        .status.error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
        .legend { background: white; padding: 25px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); text-align: center; }
"#;

fn map_card(title: &str, description: &str, file: &str, label: &str, available: bool) -> String {
    let (status, link_attrs) = if available {
        (
            r#"<div class="status success">✅ Map available</div>"#,
            r#"class="btn" target="_blank""#,
        )
    } else {
        (
            r#"<div class="status error">❌ Map not available</div>"#,
            r#"class="btn disabled""#,
        )
    };
    format!(
        r#"        <div class="map-card">
            <div class="map-info">
                <h2>{title}</h2>
                <p>{description}</p>
                {status}
                <a href="{file}" {link_attrs}>{label} →</a>
            </div>
        </div>
"#
    )
}

/// Renders the index page; `generated_at` is shown verbatim.
pub fn render_index(status: IndexStatus, generated_at: &str) -> String {
    let points = map_card(
        "📍 Points Map",
        "Church locations as colored markers on detailed street maps.",
        POINTS_MAP_FILE,
        "View Points Map",
        status.points_map,
    );
    let buildings = map_card(
        "🏛️ Buildings Map",
        "Church building footprints with colored outlines and satellite view.",
        BUILDINGS_MAP_FILE,
        "View Buildings Map",
        status.buildings_map,
    );
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Istanbul Churches Maps</title>
    <style>{style}</style>
</head>
<body>
    <div class="header">
        <h1>🗺️ Istanbul Churches Maps</h1>
        <p>Interactive maps showing Christian churches across Istanbul</p>
        <p><strong>Generated:</strong> {generated_at}</p>
    </div>

    <div class="maps-container">
{points}{buildings}    </div>

    <div class="legend">
        <h3>📊 Legend</h3>
        <p>
            {legend}
        </p>
        <p><small>Data source: OpenStreetMap</small></p>
    </div>
</body>
</html>
"#,
        style = STYLE,
        generated_at = escape(generated_at),
        points = points,
        buildings = buildings,
        legend = index_legend(),
    )
}
