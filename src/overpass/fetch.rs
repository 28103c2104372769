//! Overpass API requests.

use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{
    COORDINATE_DEDUP_PRECISION, ISLANDS_REQUEST_TIMEOUT, ISLANDS_SUPPLEMENT_THRESHOLD,
};
use crate::error_handling::FetchError;
use crate::models::{Building, Church, DataSource};
use crate::overpass::fallback::fallback_churches;
use crate::overpass::query::{OverpassQuery, BUILDINGS_BBOX, ISTANBUL_BBOX};
use crate::overpass::types::{Element, OverpassResponse};

/// Area recorded on churches found by the islands supplement.
pub const PRINCES_ISLANDS_AREA: &str = "Princes Islands";

/// Churches of a run and where they came from.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub churches: Vec<Church>,
    pub source: DataSource,
}

/// Thin client for one Overpass interpreter endpoint.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OverpassClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs a query and decodes the answer.
    ///
    /// `timeout` overrides the client timeout for this request.
    ///
    /// # Errors
    ///
    /// - `FetchError::Request` if the request fails or times out
    /// - `FetchError::Status` for a non-2xx answer
    /// - `FetchError::Decode` if the body is not an Overpass JSON document
    pub async fn query(
        &self,
        query: &OverpassQuery,
        timeout: Option<Duration>,
    ) -> Result<OverpassResponse, FetchError> {
        let query_text = query.to_string();
        debug!("Overpass query:\n{}", query_text);

        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("data", query_text.as_str())]);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches all churches in Istanbul.
    ///
    /// Never fails: if the main query fails for any reason the fallback
    /// dataset is returned with [`DataSource::Fallback`]. When the main query
    /// returns fewer than 200 churches the Princes' Islands are queried
    /// separately; a failure there only logs a warning.
    pub async fn fetch_churches(&self) -> FetchOutcome {
        info!(
            "Querying Overpass for churches in bounding box {}",
            ISTANBUL_BBOX
        );

        let response = match self
            .query(&OverpassQuery::churches(ISTANBUL_BBOX), None)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Error fetching data from Overpass API ({}): {}", e.kind(), e);
                warn!("Using fallback church data");
                return FetchOutcome {
                    churches: fallback_churches(),
                    source: DataSource::Fallback,
                };
            }
        };

        let mut seen = HashSet::new();
        let mut churches = collect_churches(&response.elements, "Church", &mut seen);
        info!("Found {} churches in Istanbul area", churches.len());

        if churches.len() < ISLANDS_SUPPLEMENT_THRESHOLD {
            info!("Trying additional query for Princes' Islands...");
            match self.fetch_islands().await {
                Ok(island_churches) => {
                    let before = churches.len();
                    for church in island_churches {
                        if seen.insert(church.coordinates.dedup_key(COORDINATE_DEDUP_PRECISION)) {
                            churches.push(church);
                        }
                    }
                    info!(
                        "Added {} island churches, {} in total",
                        churches.len() - before,
                        churches.len()
                    );
                }
                Err(e) => warn!("Error fetching Princes' Islands churches: {}", e),
            }
        }

        FetchOutcome {
            churches,
            source: DataSource::Live,
        }
    }

    /// Fetches churches on the Princes' Islands, tagged with their area.
    pub async fn fetch_islands(&self) -> Result<Vec<Church>, FetchError> {
        let response = self
            .query(
                &OverpassQuery::princes_islands(),
                Some(ISLANDS_REQUEST_TIMEOUT),
            )
            .await?;
        let churches: Vec<Church> = response
            .elements
            .iter()
            .filter_map(|element| element.to_church("Island Church"))
            .map(|mut church| {
                church.area = Some(PRINCES_ISLANDS_AREA.to_string());
                church
            })
            .collect();
        info!("Found {} churches in Princes' Islands", churches.len());
        Ok(churches)
    }

    /// Fetches church building footprints.
    pub async fn fetch_buildings(&self) -> Result<Vec<Building>, FetchError> {
        let response = self
            .query(&OverpassQuery::buildings(BUILDINGS_BBOX), None)
            .await?;
        Ok(response
            .elements
            .iter()
            .filter_map(Element::to_building)
            .collect())
    }
}

/// Converts elements to churches, skipping elements without a position and
/// locations already in `seen`.
fn collect_churches(
    elements: &[Element],
    unnamed_prefix: &str,
    seen: &mut HashSet<String>,
) -> Vec<Church> {
    let mut churches = Vec::with_capacity(elements.len());
    for element in elements {
        let Some(church) = element.to_church(unnamed_prefix) else {
            debug!("Skipping {} {} without coordinates", element.kind.as_str(), element.id);
            continue;
        };
        if !seen.insert(church.coordinates.dedup_key(COORDINATE_DEDUP_PRECISION)) {
            debug!("Skipping duplicate location for {}", church.name);
            continue;
        }
        churches.push(church);
    }
    churches
}
