//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::requests::RouteItemResult;
use crate::router::Itinerary;

/// Query for a route between two stops.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Buses serving a stop.
#[derive(Debug, Serialize)]
pub struct StopResponse {
    pub name: String,
    pub buses: Vec<String>,
}

/// Fastest route between two stops.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Total minutes, waits included
    pub total_time: f64,

    /// Legs in travel order
    pub items: Vec<RouteItemResult>,
}

impl RouteResponse {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            total_time: itinerary.total_time,
            items: itinerary
                .items
                .iter()
                .map(RouteItemResult::from_item)
                .collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
