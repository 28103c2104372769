//! Overpass JSON response types.

use std::collections::HashMap;

use serde::Deserialize;

use crate::classify::classify;
use crate::models::{Building, Church, Coordinates, OsmRef};

/// OpenStreetMap element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
        }
    }
}

/// A point as Overpass serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<LatLon> for Coordinates {
    fn from(p: LatLon) -> Self {
        Coordinates::new(p.lat, p.lon)
    }
}

/// Top-level Overpass JSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// One element of an Overpass answer.
///
/// Nodes carry `lat`/`lon`; ways and relations carry `center` with
/// `out center` and `geometry` with `out geom`.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<LatLon>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
    #[serde(default)]
    pub geometry: Vec<LatLon>,
}

impl Element {
    /// Representative point: own position for nodes, centre otherwise.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.kind, self.lat, self.lon) {
            (ElementKind::Node, Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => self.center.map(Coordinates::from),
        }
    }

    fn tag(&self, key: &str) -> Option<String> {
        self.tags.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn osm_ref(&self) -> OsmRef {
        OsmRef {
            kind: self.kind,
            id: self.id,
        }
    }

    /// Converts the element into a church record.
    ///
    /// Unnamed elements are called `<unnamed_prefix> <id>`. Returns `None`
    /// when the element has no usable position.
    pub fn to_church(&self, unnamed_prefix: &str) -> Option<Church> {
        let coordinates = self.coordinates()?;
        let name = self
            .tag("name")
            .unwrap_or_else(|| format!("{} {}", unnamed_prefix, self.id));
        let denomination_tag = self
            .tag("denomination")
            .unwrap_or_else(|| "Christian".to_string());

        let mut church = Church::new(name, denomination_tag, coordinates);
        church.name_en = self.tag("name:en");
        church.religion = self
            .tag("religion")
            .unwrap_or_else(|| "christian".to_string());
        church.amenity = self.tag("amenity");
        church.historic = self.tag("historic");
        church.building = self.tag("building");
        church.osm = Some(self.osm_ref());
        Some(church)
    }

    /// Converts a way with outline geometry into a building footprint.
    ///
    /// Returns `None` for non-ways and outlines of fewer than three points.
    pub fn to_building(&self) -> Option<Building> {
        if self.kind != ElementKind::Way || self.geometry.len() < 3 {
            return None;
        }
        let name = self
            .tag("name")
            .unwrap_or_else(|| format!("Church Building {}", self.id));
        let denomination_tag = self
            .tag("denomination")
            .unwrap_or_else(|| "Christian".to_string());
        Some(Building {
            name,
            denomination: classify(&denomination_tag),
            denomination_tag,
            outline: self.geometry.iter().copied().map(Coordinates::from).collect(),
            osm: self.osm_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Denomination;

    fn parse(json: &str) -> OverpassResponse {
        serde_json::from_str(json).expect("valid overpass json")
    }

    #[test]
    fn test_parse_node_and_way_with_center() {
        let response = parse(
            r#"{"version":0.6,"elements":[
                {"type":"node","id":1,"lat":41.03,"lon":28.97,
                 "tags":{"name":"St. Anthony of Padua","denomination":"roman_catholic","amenity":"place_of_worship"}},
                {"type":"way","id":2,"center":{"lat":41.01,"lon":28.96},
                 "tags":{"building":"church"}}
            ]}"#,
        );
        assert_eq!(response.elements.len(), 2);

        let node = response.elements[0].to_church("Church").expect("node church");
        assert_eq!(node.name, "St. Anthony of Padua");
        assert_eq!(node.denomination, Denomination::Catholic);
        assert_eq!(node.coordinates, Coordinates::new(41.03, 28.97));
        assert_eq!(node.osm.map(|o| o.to_string()).as_deref(), Some("node1"));

        let way = response.elements[1].to_church("Church").expect("way church");
        assert_eq!(way.name, "Church 2");
        assert_eq!(way.denomination_tag, "Christian");
        assert_eq!(way.denomination, Denomination::General);
        assert_eq!(way.building.as_deref(), Some("church"));
        assert_eq!(way.coordinates, Coordinates::new(41.01, 28.96));
    }

    #[test]
    fn test_element_without_position_is_skipped() {
        let response = parse(r#"{"elements":[{"type":"relation","id":9,"tags":{}}]}"#);
        assert!(response.elements[0].to_church("Church").is_none());
    }

    #[test]
    fn test_missing_elements_defaults_to_empty() {
        let response = parse(r#"{"version":0.6}"#);
        assert!(response.elements.is_empty());
    }

    #[test]
    fn test_empty_name_tag_uses_prefix() {
        let response = parse(
            r#"{"elements":[{"type":"node","id":5,"lat":40.87,"lon":29.12,"tags":{"name":""}}]}"#,
        );
        let church = response.elements[0]
            .to_church("Island Church")
            .expect("church");
        assert_eq!(church.name, "Island Church 5");
    }

    #[test]
    fn test_to_building_requires_three_points() {
        let response = parse(
            r#"{"elements":[
                {"type":"way","id":3,"geometry":[{"lat":41.0,"lon":28.9},{"lat":41.1,"lon":28.9}]},
                {"type":"way","id":4,"tags":{"name":"Aya Triada","denomination":"greek_orthodox"},
                 "geometry":[{"lat":41.0,"lon":28.9},{"lat":41.1,"lon":28.9},{"lat":41.1,"lon":29.0}]}
            ]}"#,
        );
        assert!(response.elements[0].to_building().is_none());
        let building = response.elements[1].to_building().expect("building");
        assert_eq!(building.name, "Aya Triada");
        assert_eq!(building.denomination, Denomination::Orthodox);
        assert_eq!(building.outline.len(), 3);
    }
}
