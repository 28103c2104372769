//! Records produced by a run.

use std::fmt;

use strum_macros::EnumIter;

use crate::classify::{classify, Denomination};
use crate::overpass::ElementKind;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Key used to deduplicate records sharing a location.
    pub fn dedup_key(&self, precision: usize) -> String {
        format!("{:.*},{:.*}", precision, self.lat, precision, self.lon)
    }
}

/// Reference to the OpenStreetMap element a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsmRef {
    pub kind: ElementKind,
    pub id: i64,
}

impl fmt::Display for OsmRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.as_str(), self.id)
    }
}

/// Which tag made an element a church.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SourceType {
    Historic,
    Building,
    Amenity,
    Unspecified,
}

impl SourceType {
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Historic => "historic=*",
            SourceType::Building => "building=*",
            SourceType::Amenity => "amenity=*",
            SourceType::Unspecified => "untagged",
        }
    }
}

/// Where the records of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Answer of the Overpass API
    Live,
    /// Built-in dataset used after a failed query
    Fallback,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Live => f.write_str("live OpenStreetMap data"),
            DataSource::Fallback => f.write_str("fallback data"),
        }
    }
}

/// A place of worship.
#[derive(Debug, Clone, PartialEq)]
pub struct Church {
    pub name: String,
    pub name_en: Option<String>,
    pub denomination: Denomination,
    /// Raw denomination tag, `Christian` when the element carries none
    pub denomination_tag: String,
    pub religion: String,
    pub coordinates: Coordinates,
    pub amenity: Option<String>,
    pub historic: Option<String>,
    pub building: Option<String>,
    pub osm: Option<OsmRef>,
    pub description: Option<String>,
    pub area: Option<String>,
}

impl Church {
    /// Creates a church with the given name, denomination tag and location.
    ///
    /// The denomination label is derived from the tag.
    pub fn new(
        name: impl Into<String>,
        denomination_tag: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        let denomination_tag = denomination_tag.into();
        Self {
            name: name.into(),
            name_en: None,
            denomination: classify(&denomination_tag),
            denomination_tag,
            religion: "christian".to_string(),
            coordinates,
            amenity: None,
            historic: None,
            building: None,
            osm: None,
            description: None,
            area: None,
        }
    }

    pub fn source_type(&self) -> SourceType {
        if self.historic.is_some() {
            SourceType::Historic
        } else if self.building.is_some() {
            SourceType::Building
        } else if self.amenity.is_some() {
            SourceType::Amenity
        } else {
            SourceType::Unspecified
        }
    }

    /// Title-cased `historic` tag, else `building` tag, for the popup.
    pub fn type_label(&self) -> Option<String> {
        self.historic
            .as_deref()
            .or(self.building.as_deref())
            .filter(|v| !v.is_empty())
            .map(title_case)
    }
}

/// A church building footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub name: String,
    pub denomination: Denomination,
    pub denomination_tag: String,
    pub outline: Vec<Coordinates>,
    pub osm: OsmRef,
}

/// Capitalizes the first letter of every word, `_` counts as a separator.
fn title_case(value: &str) -> String {
    value
        .split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
