//! Per-bus route statistics.

use std::collections::HashSet;

use serde::Serialize;

use super::TransportCatalogue;
use crate::domain::Bus;

/// Summary of a bus route over its effective stop sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStats {
    /// Stops visited, counting repeats.
    pub stop_count: usize,

    /// Distinct stops visited.
    pub unique_stop_count: usize,

    /// Road length in metres. Gaps without a recorded distance add nothing.
    pub route_length: u64,

    /// Road length divided by the great-circle length of the same
    /// sequence. Zero when the stops have no geographic extent.
    pub curvature: f64,
}

impl BusStats {
    pub(super) fn compute(catalogue: &TransportCatalogue, bus: &Bus) -> Self {
        let stops: Vec<_> = bus.effective_stops().collect();
        let unique: HashSet<_> = stops.iter().collect();

        let mut route_length = 0u64;
        let mut geographic_length = 0.0;
        for pair in stops.windows(2) {
            let (from, to) = (catalogue.stop_by_id(pair[0]), catalogue.stop_by_id(pair[1]));
            if let Some(d) = catalogue.distance(&from.name, &to.name) {
                route_length += u64::from(d);
            }
            geographic_length += from.coordinates.distance_to(&to.coordinates);
        }

        let curvature = if geographic_length > 0.0 {
            route_length as f64 / geographic_length
        } else {
            0.0
        };

        Self {
            stop_count: stops.len(),
            unique_stop_count: unique.len(),
            route_length,
            curvature,
        }
    }
}
