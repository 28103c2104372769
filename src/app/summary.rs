//! Run summary printed to stdout.

use crate::config::POINTS_MAP_FILE;
use crate::models::DataSource;
use crate::GenerationReport;

/// Lines of the end-of-run summary.
pub fn summary_lines(report: &GenerationReport) -> Vec<String> {
    let mut lines = vec![format!(
        "✅ Generated map of {} church{} from {} in {:.1}s",
        report.church_count,
        if report.church_count == 1 { "" } else { "es" },
        report.source,
        report.elapsed_seconds
    )];
    if report.source == DataSource::Fallback {
        lines.push(
            "⚠️ Overpass API unavailable, the map shows the built-in fallback list".to_string(),
        );
    }
    lines.push(format!("📍 Points map: {}", report.points_map.display()));
    if let Some(buildings) = &report.buildings {
        lines.push(format!(
            "🏛️ Buildings map: {} ({} buildings)",
            buildings.path.display(),
            buildings.count
        ));
    }
    lines.push(format!("📑 Index page: {}", report.index_page.display()));
    lines
}

/// Prints where the maps are served and how to stop the server.
pub fn print_serving_banner(port: u16, requested_port: u16) {
    if port != requested_port {
        println!("Port {} is in use, using port {} instead", requested_port, port);
    }
    println!("🌐 Server running at http://localhost:{}/", port);
    println!(
        "📍 Direct map link: http://localhost:{}/{}",
        port, POINTS_MAP_FILE
    );
    println!("Press Ctrl+C to stop the server");
}
