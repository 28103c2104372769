//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! Overpass endpoint, map geometry, timeouts and output file names.

use std::time::Duration;

/// Default Overpass API interpreter endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "http://overpass-api.de/api/interpreter";

/// Default User-Agent sent with Overpass requests.
///
/// The Overpass usage policy asks clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = concat!("istanbul_churches/", env!("CARGO_PKG_VERSION"));

// Request timeouts
/// Client timeout for the main churches query in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Request timeout for the Princes' Islands supplement query
pub const ISLANDS_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Server-side timeout embedded in the main and buildings queries (`[timeout:N]`)
pub const OVERPASS_QUERY_TIMEOUT_SECS: u32 = 25;
/// Server-side timeout embedded in the islands query
pub const ISLANDS_QUERY_TIMEOUT_SECS: u32 = 10;

/// Below this many churches the islands supplement query is issued.
pub const ISLANDS_SUPPLEMENT_THRESHOLD: usize = 200;

/// Decimal places used when deduplicating records by coordinates.
pub const COORDINATE_DEDUP_PRECISION: usize = 6;

// Map geometry
/// Istanbul city centre (latitude, longitude)
pub const ISTANBUL_CENTER: (f64, f64) = (41.0082, 28.9784);
/// Initial zoom of the points map
pub const POINTS_MAP_ZOOM: u8 = 12;
/// Initial zoom of the buildings map
pub const BUILDINGS_MAP_ZOOM: u8 = 13;

// Output files
pub const POINTS_MAP_FILE: &str = "istanbul_churches_map.html";
pub const BUILDINGS_MAP_FILE: &str = "istanbul_churches_buildings_map.html";
pub const INDEX_FILE: &str = "index.html";

// Local web server
/// Default port of the local web server
pub const DEFAULT_PORT: u16 = 8080;
/// Number of consecutive ports tried when the requested one is taken
pub const PORT_BIND_ATTEMPTS: u16 = 10;
