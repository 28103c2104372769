//! Overpass QL query construction.

use std::fmt;

use crate::config::{ISLANDS_QUERY_TIMEOUT_SECS, OVERPASS_QUERY_TIMEOUT_SECS};
use crate::models::Coordinates;
use crate::overpass::ElementKind;

/// Geographic bounding box in Overpass order (south, west, north, east).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Istanbul metropolitan area.
pub const ISTANBUL_BBOX: BoundingBox = BoundingBox::new(40.8, 28.5, 41.3, 29.5);
/// Büyükada, Heybeliada, Burgazada and Kınalıada.
pub const PRINCES_ISLANDS_BBOX: BoundingBox = BoundingBox::new(40.84, 29.06, 40.91, 29.15);
/// Central districts covered by the buildings map.
pub const BUILDINGS_BBOX: BoundingBox = BoundingBox::new(40.9, 28.7, 41.2, 29.3);

impl BoundingBox {
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lon)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

/// A `["key"="value"]` tag filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    pub key: &'static str,
    pub value: &'static str,
}

const PLACE_OF_WORSHIP: TagFilter = TagFilter {
    key: "amenity",
    value: "place_of_worship",
};
const RELIGION_CHRISTIAN: TagFilter = TagFilter {
    key: "religion",
    value: "christian",
};
const HISTORIC_CHURCH: TagFilter = TagFilter {
    key: "historic",
    value: "church",
};
const BUILDING_CHURCH: TagFilter = TagFilter {
    key: "building",
    value: "church",
};

/// One statement of the union: element kind plus the filters it must match.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub kind: ElementKind,
    pub filters: Vec<TagFilter>,
}

impl Selector {
    fn new(kind: ElementKind, filters: &[TagFilter]) -> Self {
        Self {
            kind,
            filters: filters.to_vec(),
        }
    }
}

/// What geometry Overpass returns for ways and relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A single centre point per element
    Center,
    /// The full node geometry of ways
    Geometry,
}

impl OutputMode {
    fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Center => "center",
            OutputMode::Geometry => "geom",
        }
    }
}

/// An Overpass QL union query restricted to one bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    pub timeout_secs: u32,
    pub bbox: BoundingBox,
    pub selectors: Vec<Selector>,
    pub output: OutputMode,
}

impl OverpassQuery {
    /// Christian places of worship plus elements tagged as church by
    /// `historic` or `building`, with centre points.
    pub fn churches(bbox: BoundingBox) -> Self {
        use ElementKind::*;
        Self {
            timeout_secs: OVERPASS_QUERY_TIMEOUT_SECS,
            bbox,
            selectors: vec![
                Selector::new(Node, &[PLACE_OF_WORSHIP, RELIGION_CHRISTIAN]),
                Selector::new(Way, &[PLACE_OF_WORSHIP, RELIGION_CHRISTIAN]),
                Selector::new(Relation, &[PLACE_OF_WORSHIP, RELIGION_CHRISTIAN]),
                Selector::new(Node, &[HISTORIC_CHURCH]),
                Selector::new(Way, &[HISTORIC_CHURCH]),
                Selector::new(Node, &[BUILDING_CHURCH]),
                Selector::new(Way, &[BUILDING_CHURCH]),
            ],
            output: OutputMode::Center,
        }
    }

    /// Smaller query over the Princes' Islands.
    pub fn princes_islands() -> Self {
        use ElementKind::*;
        Self {
            timeout_secs: ISLANDS_QUERY_TIMEOUT_SECS,
            bbox: PRINCES_ISLANDS_BBOX,
            selectors: vec![
                Selector::new(Node, &[PLACE_OF_WORSHIP, RELIGION_CHRISTIAN]),
                Selector::new(Way, &[PLACE_OF_WORSHIP, RELIGION_CHRISTIAN]),
                Selector::new(Node, &[HISTORIC_CHURCH]),
                Selector::new(Way, &[HISTORIC_CHURCH]),
            ],
            output: OutputMode::Center,
        }
    }

    /// Church ways with their full outline.
    pub fn buildings(bbox: BoundingBox) -> Self {
        use ElementKind::*;
        Self {
            timeout_secs: OVERPASS_QUERY_TIMEOUT_SECS,
            bbox,
            selectors: vec![
                Selector::new(Way, &[PLACE_OF_WORSHIP, RELIGION_CHRISTIAN]),
                Selector::new(Way, &[HISTORIC_CHURCH]),
                Selector::new(Way, &[BUILDING_CHURCH]),
            ],
            output: OutputMode::Geometry,
        }
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[out:json][timeout:{}];", self.timeout_secs)?;
        writeln!(f, "(")?;
        for selector in &self.selectors {
            write!(f, "  {}", selector.kind.as_str())?;
            for filter in &selector.filters {
                write!(f, "[\"{}\"=\"{}\"]", filter.key, filter.value)?;
            }
            writeln!(f, "({});", self.bbox)?;
        }
        writeln!(f, ");")?;
        write!(f, "out {};", self.output.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_display_order() {
        assert_eq!(ISTANBUL_BBOX.to_string(), "40.8,28.5,41.3,29.5");
    }

    #[test]
    fn test_bbox_contains_is_inclusive() {
        let bbox = BoundingBox::new(40.0, 28.0, 41.0, 29.0);
        assert!(bbox.contains(Coordinates::new(40.0, 28.0)));
        assert!(bbox.contains(Coordinates::new(41.0, 29.0)));
        assert!(bbox.contains(Coordinates::new(40.5, 28.5)));
        assert!(!bbox.contains(Coordinates::new(41.01, 28.5)));
        assert!(!bbox.contains(Coordinates::new(40.5, 27.99)));
    }

    #[test]
    fn test_churches_query_text() {
        let query = OverpassQuery::churches(ISTANBUL_BBOX).to_string();
        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.contains(
            "node[\"amenity\"=\"place_of_worship\"][\"religion\"=\"christian\"](40.8,28.5,41.3,29.5);"
        ));
        assert!(query.contains(
            "relation[\"amenity\"=\"place_of_worship\"][\"religion\"=\"christian\"](40.8,28.5,41.3,29.5);"
        ));
        assert!(query.contains("way[\"historic\"=\"church\"](40.8,28.5,41.3,29.5);"));
        assert!(query.contains("node[\"building\"=\"church\"](40.8,28.5,41.3,29.5);"));
        assert!(query.ends_with("out center;"));
        assert_eq!(query.matches("(40.8,28.5,41.3,29.5);").count(), 7);
    }

    #[test]
    fn test_islands_query_text() {
        let query = OverpassQuery::princes_islands().to_string();
        assert!(query.starts_with("[out:json][timeout:10];"));
        assert_eq!(query.matches("(40.84,29.06,40.91,29.15);").count(), 4);
        assert!(!query.contains("relation"));
        assert!(!query.contains("building"));
    }

    #[test]
    fn test_buildings_query_uses_geometry_output() {
        let query = OverpassQuery::buildings(BUILDINGS_BBOX).to_string();
        assert!(query.ends_with("out geom;"));
        assert!(!query.contains("node["));
        assert_eq!(query.matches("way[").count(), 3);
    }
}
