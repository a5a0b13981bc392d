//! Request and response shapes of the JSON document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::BusStats;
use crate::router::{Itinerary, ItineraryItem};

/// Message used for every entry that has no answer.
pub const NOT_FOUND: &str = "not found";

/// Message for map requests, which this crate does not render.
pub const MAP_UNSUPPORTED: &str = "map rendering is not supported";

/// A request that fills the catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distances in metres from this stop to the named stops.
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A query against the filled catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    /// The caller-chosen id echoed back as `request_id`.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Answer to one [`StatRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItemResult>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn from_bus_stats(request_id: i64, stats: &BusStats) -> Self {
        StatResponse::Bus {
            request_id,
            curvature: stats.curvature,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }

    pub fn from_itinerary(request_id: i64, itinerary: &Itinerary) -> Self {
        StatResponse::Route {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary
                .items
                .iter()
                .map(RouteItemResult::from_item)
                .collect(),
        }
    }

    pub fn not_found(request_id: i64) -> Self {
        Self::error(request_id, NOT_FOUND)
    }

    pub fn error(request_id: i64, message: &str) -> Self {
        StatResponse::Error {
            request_id,
            error_message: message.to_string(),
        }
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus { request_id, .. }
            | StatResponse::Stop { request_id, .. }
            | StatResponse::Route { request_id, .. }
            | StatResponse::Error { request_id, .. } => *request_id,
        }
    }
}

/// One itinerary leg as it appears in a route response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemResult {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItemResult {
    pub fn from_item(item: &ItineraryItem) -> Self {
        match item {
            ItineraryItem::Wait { stop, time } => RouteItemResult::Wait {
                stop_name: stop.clone(),
                time: *time,
            },
            ItineraryItem::Ride {
                bus,
                span_count,
                time,
            } => RouteItemResult::Bus {
                bus: bus.clone(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}
