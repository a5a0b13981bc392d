//! JSON request documents.
//!
//! A document carries `base_requests` that describe the network,
//! optional `routing_settings`, and `stat_requests` to answer against the
//! result. Rendering settings are accepted but not used.

mod dto;
mod error;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::Coordinates;
use crate::router::{RoutingSettings, TransportRouter};

pub use dto::{BaseRequest, MAP_UNSUPPORTED, NOT_FOUND, RouteItemResult, StatRequest, StatResponse};
pub use error::RequestError;

/// A complete request document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestDocument {
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub routing_settings: RoutingSettings,

    /// Map styling. Kept for compatibility, never interpreted.
    #[serde(default)]
    pub render_settings: Option<serde_json::Value>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl RequestDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RequestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Apply the base requests to a fresh catalogue.
    ///
    /// Stops go in first, then road distances, then buses, so a distance or
    /// a bus may name a stop declared later in the document.
    pub fn build_catalogue(&self) -> Result<TransportCatalogue, CatalogueError> {
        let mut catalogue = TransportCatalogue::new();

        for request in &self.base_requests {
            if let BaseRequest::Stop {
                name,
                latitude,
                longitude,
                ..
            } = request
            {
                catalogue.add_stop(name, Coordinates::new(*latitude, *longitude));
            }
        }

        for request in &self.base_requests {
            if let BaseRequest::Stop {
                name,
                road_distances,
                ..
            } = request
            {
                for (to, metres) in road_distances {
                    catalogue.set_distance(name, to, *metres)?;
                }
            }
        }

        for request in &self.base_requests {
            if let BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } = request
            {
                catalogue.add_bus(name, stops.as_slice(), *is_roundtrip)?;
            }
        }

        info!(
            stops = catalogue.stops().len(),
            buses = catalogue.buses().len(),
            "catalogue loaded"
        );
        Ok(catalogue)
    }
}

/// Answers stat requests against a catalogue and its router.
pub struct StatHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: &'a TransportRouter,
}

impl<'a> StatHandler<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, router: &'a TransportRouter) -> Self {
        Self { catalogue, router }
    }

    /// Answer a single request. Missing buses, stops and routes become
    /// error entries rather than failures.
    pub fn answer(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        match request {
            StatRequest::Bus { name, .. } => self
                .catalogue
                .bus_stats(name)
                .map(|stats| StatResponse::from_bus_stats(id, &stats))
                .unwrap_or_else(|| StatResponse::not_found(id)),
            StatRequest::Stop { name, .. } => self
                .catalogue
                .buses_at_stop(name)
                .map(|buses| StatResponse::Stop {
                    request_id: id,
                    buses: buses.into_iter().map(str::to_string).collect(),
                })
                .unwrap_or_else(|| StatResponse::not_found(id)),
            StatRequest::Route { from, to, .. } => self
                .router
                .find_route(from, to)
                .map(|itinerary| StatResponse::from_itinerary(id, &itinerary))
                .unwrap_or_else(|| StatResponse::not_found(id)),
            StatRequest::Map { .. } => StatResponse::error(id, MAP_UNSUPPORTED),
        }
    }

    /// Answer requests in order.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        debug!(count = requests.len(), "answering stat requests");
        requests.iter().map(|r| self.answer(r)).collect()
    }
}

/// Build the catalogue and router a document describes.
pub fn load_document(
    document: &RequestDocument,
) -> Result<(TransportCatalogue, TransportRouter), RequestError> {
    let catalogue = document.build_catalogue()?;
    let router = TransportRouter::new(&catalogue, &document.routing_settings)?;
    Ok((catalogue, router))
}

/// Load a document and answer all of its stat requests.
pub fn process_document(document: &RequestDocument) -> Result<Vec<StatResponse>, RequestError> {
    let (catalogue, router) = load_document(document)?;
    Ok(StatHandler::new(&catalogue, &router).answer_all(&document.stat_requests))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io::Write;

    /// A small network in the shape of the classic course example.
    fn document() -> Value {
        json!({
            "base_requests": [
                {"type": "Bus", "name": "297", "stops": ["Biryulyovo Zapadnoye", "Biryulyovo Tovarnaya", "Universam", "Biryulyovo Zapadnoye"], "is_roundtrip": true},
                {"type": "Bus", "name": "635", "stops": ["Biryulyovo Tovarnaya", "Universam", "Prazhskaya"], "is_roundtrip": false},
                {"type": "Stop", "name": "Biryulyovo Zapadnoye", "latitude": 55.574371, "longitude": 37.6517,
                 "road_distances": {"Biryulyovo Tovarnaya": 2600}},
                {"type": "Stop", "name": "Biryulyovo Tovarnaya", "latitude": 55.592028, "longitude": 37.653656,
                 "road_distances": {"Universam": 890}},
                {"type": "Stop", "name": "Universam", "latitude": 55.587655, "longitude": 37.645687,
                 "road_distances": {"Biryulyovo Zapadnoye": 2500, "Biryulyovo Tovarnaya": 1380, "Prazhskaya": 4650}},
                {"type": "Stop", "name": "Prazhskaya", "latitude": 55.611717, "longitude": 37.603938,
                 "road_distances": {"Universam": 4650}},
                {"type": "Stop", "name": "Lonely", "latitude": 55.6, "longitude": 37.6}
            ],
            "render_settings": {"width": 200},
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
            "stat_requests": [
                {"id": 1, "type": "Bus", "name": "297"},
                {"id": 2, "type": "Bus", "name": "635"},
                {"id": 3, "type": "Stop", "name": "Universam"},
                {"id": 4, "type": "Route", "from": "Biryulyovo Zapadnoye", "to": "Universam"},
                {"id": 5, "type": "Route", "from": "Biryulyovo Zapadnoye", "to": "Prazhskaya"},
                {"id": 6, "type": "Route", "from": "Universam", "to": "Lonely"},
                {"id": 7, "type": "Stop", "name": "Nowhere"},
                {"id": 8, "type": "Bus", "name": "999"},
                {"id": 9, "type": "Map"},
                {"id": 10, "type": "Stop", "name": "Lonely"}
            ]
        })
    }

    fn responses() -> Vec<Value> {
        let doc: RequestDocument = serde_json::from_value(document()).unwrap();
        let responses = process_document(&doc).unwrap();
        responses
            .into_iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect()
    }

    fn close(value: &Value, expected: f64) -> bool {
        (value.as_f64().unwrap() - expected).abs() < 1e-6
    }

    #[test]
    fn routing_settings_default_when_absent() {
        let doc: RequestDocument = serde_json::from_value(json!({"base_requests": []})).unwrap();
        assert_eq!(doc.routing_settings, RoutingSettings::default());
        assert!(doc.stat_requests.is_empty());
        assert!(doc.render_settings.is_none());
    }

    #[test]
    fn stops_are_declared_before_distances_and_buses() {
        let doc: RequestDocument = serde_json::from_value(document()).unwrap();
        let catalogue = doc.build_catalogue().unwrap();
        assert_eq!(catalogue.stops().len(), 5);
        assert_eq!(catalogue.buses().len(), 2);
        assert_eq!(
            catalogue.distance("Prazhskaya", "Universam"),
            Some(4650)
        );
    }

    #[test]
    fn roundtrip_bus_stats() {
        let r = &responses()[0];
        assert_eq!(r["request_id"], 1);
        assert_eq!(r["stop_count"], 4);
        assert_eq!(r["unique_stop_count"], 3);
        assert_eq!(r["route_length"], 2600 + 890 + 2500);
        assert!(r["curvature"].as_f64().unwrap() > 1.0);
    }

    #[test]
    fn linear_bus_stats() {
        let r = &responses()[1];
        assert_eq!(r["request_id"], 2);
        assert_eq!(r["stop_count"], 5);
        assert_eq!(r["unique_stop_count"], 3);
        assert_eq!(r["route_length"], 890 + 4650 + 4650 + 1380);
    }

    #[test]
    fn stop_lists_buses() {
        let r = &responses()[2];
        assert_eq!(r, &json!({"request_id": 3, "buses": ["297", "635"]}));
    }

    #[test]
    fn route_on_single_bus() {
        let r = &responses()[3];
        // Wait 2 minutes, then 2600 + 890 metres at 30 km/h.
        assert!(close(&r["total_time"], 2.0 + 3.49 / 30.0 * 60.0));
        let items = r["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], "Wait");
        assert_eq!(items[0]["stop_name"], "Biryulyovo Zapadnoye");
        assert_eq!(items[1]["type"], "Bus");
        assert_eq!(items[1]["bus"], "297");
        assert_eq!(items[1]["span_count"], 2);
    }

    #[test]
    fn route_with_transfer() {
        let r = &responses()[4];
        let items = r["items"].as_array().unwrap();
        // Changing at Universam or at Biryulyovo Tovarnaya costs the same,
        // so only the buses used are fixed.
        assert_eq!(items.len(), 4);
        assert_eq!(items[1]["bus"], "297");
        assert_eq!(items[2]["type"], "Wait");
        assert_eq!(items[3]["bus"], "635");
        assert!(close(&r["total_time"], 2.0 + 2.0 + 8.14 / 30.0 * 60.0));

        let sum: f64 = items.iter().map(|i| i["time"].as_f64().unwrap()).sum();
        assert!(close(&r["total_time"], sum));
    }

    #[test]
    fn missing_answers_are_not_found() {
        let all = responses();
        for (idx, id) in [(5, 6), (6, 7), (7, 8)] {
            assert_eq!(
                all[idx],
                json!({"request_id": id, "error_message": "not found"})
            );
        }
    }

    #[test]
    fn map_requests_are_unsupported() {
        assert_eq!(
            responses()[8],
            json!({"request_id": 9, "error_message": MAP_UNSUPPORTED})
        );
    }

    #[test]
    fn stop_without_buses_is_empty_list() {
        assert_eq!(responses()[9], json!({"request_id": 10, "buses": []}));
    }

    #[test]
    fn bad_settings_fail_processing() {
        let mut value = document();
        value["routing_settings"] = json!({"bus_wait_time": 2, "bus_velocity": 0});
        let doc: RequestDocument = serde_json::from_value(value).unwrap();
        assert!(matches!(
            process_document(&doc),
            Err(RequestError::Config(_))
        ));
    }

    #[test]
    fn bus_over_unknown_stop_fails() {
        let doc: RequestDocument = serde_json::from_value(json!({
            "base_requests": [
                {"type": "Bus", "name": "1", "stops": ["Ghost"], "is_roundtrip": true}
            ]
        }))
        .unwrap();
        assert!(matches!(
            process_document(&doc),
            Err(RequestError::Catalogue(CatalogueError::UnknownStop(_)))
        ));
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", document()).unwrap();

        let doc = RequestDocument::from_path(file.path()).unwrap();
        assert_eq!(doc.stat_requests.len(), 10);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RequestDocument::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(RequestError::Io(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = RequestDocument::from_reader("{\"base_requests\": [".as_bytes());
        assert!(matches!(result, Err(RequestError::Json(_))));
    }
}
