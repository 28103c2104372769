//! OpenStreetMap data access through the Overpass API.
//!
//! This module provides:
//! - Overpass QL query construction for fixed bounding boxes
//! - Response decoding into church and building records
//! - The fallback dataset used when the live query fails

mod fallback;
mod fetch;
mod query;
mod types;

// Re-export public API
pub use fallback::{fallback_churches, FALLBACK_CHURCH_COUNT};
pub use fetch::{FetchOutcome, OverpassClient, PRINCES_ISLANDS_AREA};
pub use query::{
    BoundingBox, OutputMode, OverpassQuery, BUILDINGS_BBOX, ISTANBUL_BBOX, PRINCES_ISLANDS_BBOX,
};
pub use types::{Element, ElementKind, LatLon, OverpassResponse};
