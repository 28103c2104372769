//! Church locations as coloured circle markers.

use std::fmt::Write;

use crate::config::{ISTANBUL_CENTER, POINTS_MAP_ZOOM};
use crate::models::Church;
use crate::render::html::{escape, js_string};
use crate::render::legend::{legend_overlay, popup_legend};
use crate::render::page::{leaflet_document, osm_tile_layer};

/// Popup body of one church.
pub fn popup_html(church: &Church) -> String {
    let color = church.denomination.color();
    let mut html = String::from(r#"<div style="width: 280px;">"#);
    let _ = write!(
        html,
        r#"<h4 style="margin-bottom: 10px; color: #333;">⛪ {}</h4>"#,
        escape(&church.name)
    );
    if let Some(name_en) = &church.name_en {
        let _ = write!(html, "<p><strong>English Name:</strong> {}</p>", escape(name_en));
    }
    let _ = write!(
        html,
        r#"<p><strong>Denomination:</strong> <span style="color: {}; font-weight: bold;">●</span> {}</p>"#,
        color,
        escape(&church.denomination_tag)
    );
    if let Some(type_label) = church.type_label() {
        let _ = write!(html, "<p><strong>Type:</strong> {}</p>", escape(&type_label));
    }
    if let Some(description) = &church.description {
        let _ = write!(
            html,
            "<p><strong>Description:</strong> {}</p>",
            escape(description)
        );
    }
    if let Some(area) = &church.area {
        let _ = write!(html, "<p><strong>Area:</strong> {}</p>", escape(area));
    }
    let _ = write!(
        html,
        "<p><strong>Coordinates:</strong> {:.4}, {:.4}</p>",
        church.coordinates.lat, church.coordinates.lon
    );
    if let Some(osm) = &church.osm {
        let _ = write!(html, "<p><strong>OSM ID:</strong> {}</p>", osm);
    }
    html.push_str(&popup_legend());
    html.push_str("</div>");
    html
}

/// Tooltip text of one church.
pub fn tooltip_text(church: &Church) -> String {
    format!("⛪ {} ({})", church.name, church.denomination_tag)
}

/// Script statement adding one church marker to `map`.
pub fn marker_script(church: &Church) -> String {
    let color = church.denomination.color();
    format!(
        "L.circleMarker([{}, {}], {{radius: 6, color: {c}, weight: 2, fill: true, fillColor: {c}, fillOpacity: 0.8}}).bindPopup({}, {{maxWidth: 320}}).bindTooltip({}).addTo(map);",
        church.coordinates.lat,
        church.coordinates.lon,
        js_string(&popup_html(church)),
        js_string(&escape(&tooltip_text(church))),
        c = js_string(color),
    )
}

/// Renders the points map page with one marker per church.
pub fn render_points_map(churches: &[Church]) -> String {
    let mut script = osm_tile_layer("osm");
    script.push('\n');
    for church in churches {
        script.push_str(&marker_script(church));
        script.push('\n');
    }
    leaflet_document(
        "Istanbul Churches Map",
        ISTANBUL_CENTER,
        POINTS_MAP_ZOOM,
        &legend_overlay(),
        &script,
    )
}
