//! Church building footprints as coloured polygons.

use crate::config::{BUILDINGS_MAP_ZOOM, ISTANBUL_CENTER};
use crate::models::Building;
use crate::render::html::{escape, js_string};
use crate::render::legend::legend_overlay;
use crate::render::page::{leaflet_document, osm_tile_layer};

const SATELLITE_TILES: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
const SATELLITE_ATTRIBUTION: &str = "Tiles &copy; Esri";

/// Script statement adding one building outline to `map`.
pub fn polygon_script(building: &Building) -> String {
    let outline = building
        .outline
        .iter()
        .map(|p| format!("[{}, {}]", p.lat, p.lon))
        .collect::<Vec<_>>()
        .join(", ");
    let popup = format!(
        "<b>{}</b><br>Denomination: {}",
        escape(&building.name),
        escape(&building.denomination_tag)
    );
    format!(
        "L.polygon([{}], {{color: {c}, weight: 3, opacity: 0.8, fill: true, fillColor: {c}, fillOpacity: 0.3}}).bindPopup({}).bindTooltip({}).addTo(map);",
        outline,
        js_string(&popup),
        js_string(&escape(&building.name)),
        c = js_string(building.denomination.color()),
    )
}

/// Renders the buildings map: OSM and satellite base layers plus one
/// polygon per building.
pub fn render_buildings_map(buildings: &[Building]) -> String {
    let mut script = osm_tile_layer("osm");
    script.push('\n');
    script.push_str(&format!(
        "var satellite = L.tileLayer({}, {{maxZoom: 19, attribution: {}}});\n",
        js_string(SATELLITE_TILES),
        js_string(SATELLITE_ATTRIBUTION)
    ));
    script.push_str(
        "L.control.layers({\"OpenStreetMap\": osm, \"Satellite View\": satellite}).addTo(map);\n",
    );
    for building in buildings {
        script.push_str(&polygon_script(building));
        script.push('\n');
    }
    leaflet_document(
        "Istanbul Church Buildings",
        ISTANBUL_CENTER,
        BUILDINGS_MAP_ZOOM,
        &legend_overlay(),
        &script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Denomination;
    use crate::models::{Coordinates, OsmRef};
    use crate::overpass::ElementKind;

    fn building(id: i64) -> Building {
        Building {
            name: format!("Church Building {}", id),
            denomination: Denomination::Catholic,
            denomination_tag: "roman_catholic".into(),
            outline: vec![
                Coordinates::new(41.0, 28.9),
                Coordinates::new(41.001, 28.9),
                Coordinates::new(41.001, 28.901),
            ],
            osm: OsmRef {
                kind: ElementKind::Way,
                id,
            },
        }
    }

    #[test]
    fn test_polygon_script() {
        let script = polygon_script(&building(1));
        assert!(script.starts_with("L.polygon([[41, 28.9], [41.001, 28.9], [41.001, 28.901]]"));
        assert!(script.contains("color: \"blue\""));
        assert!(script.contains("Denomination: roman_catholic"));
    }

    #[test]
    fn test_one_polygon_per_building_and_layer_control() {
        let html = render_buildings_map(&[building(1), building(2)]);
        assert_eq!(html.matches("L.polygon(").count(), 2);
        assert!(html.contains("Satellite View"));
        assert!(html.contains("L.control.layers("));
        assert!(html.contains("setView([41.0082, 28.9784], 13)"));
    }
}
