//! Leaflet page skeleton.

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Full-window Leaflet map page.
///
/// `overlay` is placed after the map container; `script` runs after Leaflet
/// has loaded and may refer to the `map` variable.
pub fn leaflet_document(
    title: &str,
    center: (f64, f64),
    zoom: u8,
    overlay: &str,
    script: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<script src="{js}"></script>
<style>html, body {{ height: 100%; margin: 0; }} #map {{ width: 100%; height: 100%; }}</style>
</head>
<body>
<div id="map"></div>
{overlay}
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
{script}
</script>
</body>
</html>
"#,
        title = super::html::escape(title),
        css = LEAFLET_CSS,
        js = LEAFLET_JS,
        overlay = overlay,
        lat = center.0,
        lon = center.1,
        zoom = zoom,
        script = script,
    )
}

/// Script line adding the OpenStreetMap tile layer, bound to `var_name`.
pub fn osm_tile_layer(var_name: &str) -> String {
    format!(
        "var {} = L.tileLayer({}, {{maxZoom: 19, attribution: {}}}).addTo(map);",
        var_name,
        super::html::js_string(OSM_TILES),
        super::html::js_string(OSM_ATTRIBUTION)
    )
}
