//! Turning a raw graph path back into wait and ride steps.

use super::builder::{EdgeKind, TransitGraph};
use super::dijkstra::PathInfo;

/// One leg of a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryItem {
    /// Wait at `stop` for the next bus.
    Wait { stop: String, time: f64 },

    /// Ride `bus` for `span_count` stops.
    Ride {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryItem {
    /// Minutes spent on this leg.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Ride { time, .. } => *time,
        }
    }
}

/// A journey between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Total minutes, waits included.
    pub total_time: f64,

    /// Legs in travel order.
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    /// Map each edge of `path` to one item, in path order.
    ///
    /// Ride edges become [`ItineraryItem::Ride`]; wait edges become
    /// [`ItineraryItem::Wait`] at the stop the edge leaves from.
    pub fn from_path(graph: &TransitGraph, path: &PathInfo) -> Self {
        let items = path
            .edges
            .iter()
            .map(|&id| {
                let edge = graph.graph().edge(id);
                match graph.edge_kind(id) {
                    EdgeKind::Ride(ride) => ItineraryItem::Ride {
                        bus: ride.bus.clone(),
                        span_count: ride.span_count,
                        time: edge.weight,
                    },
                    EdgeKind::Wait => ItineraryItem::Wait {
                        stop: graph.stop_name(edge.from).to_string(),
                        time: edge.weight,
                    },
                }
            })
            .collect();

        Self {
            total_time: path.weight,
            items,
        }
    }

    /// Number of buses boarded.
    pub fn rides(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ItineraryItem::Ride { .. }))
            .count()
    }
}
