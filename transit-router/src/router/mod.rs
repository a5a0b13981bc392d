//! Fastest-route search over the transit network.
//!
//! The network is turned into a [`TransitGraph`] once, where waiting at a
//! stop and riding a bus are separate weighted edges. Each query then runs
//! Dijkstra between the wait vertices of the two stops and maps the edges
//! of the result back to wait and ride steps.

mod builder;
mod dijkstra;
mod graph;
mod itinerary;
mod network;
mod settings;

use tracing::debug;

pub use builder::{EdgeKind, RideEdge, TransitGraph};
pub use dijkstra::{PathInfo, find_shortest_path};
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use itinerary::{Itinerary, ItineraryItem};
pub use network::{BusRoute, TransitNetwork};
pub use settings::{ConfigError, RoutingSettings};

/// Reason a route query produced no itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The stop is not part of the network
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Both stops exist but no sequence of buses connects them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}

/// Answers fastest-route queries for one snapshot of a network.
///
/// Holds no per-query state, so a single router can serve concurrent
/// queries from several threads.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    graph: TransitGraph,
}

impl TransportRouter {
    /// Build a router for `network`.
    pub fn new<N: TransitNetwork>(
        network: &N,
        settings: &RoutingSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            graph: TransitGraph::build(network, settings)?,
        })
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Fastest itinerary from `from` to `to`, or `None` if there is none.
    ///
    /// Unknown stops and unreachable destinations both give `None`; use
    /// [`try_find_route`](Self::try_find_route) to tell them apart. A route
    /// from a stop to itself takes no time and has no items.
    pub fn find_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        match self.try_find_route(from, to) {
            Ok(itinerary) => Some(itinerary),
            Err(e) => {
                debug!(from, to, error = %e, "no route");
                None
            }
        }
    }

    /// Like [`find_route`](Self::find_route), but says why no route exists.
    pub fn try_find_route(&self, from: &str, to: &str) -> Result<Itinerary, RouteError> {
        let source = self
            .graph
            .wait_vertex(from)
            .ok_or_else(|| RouteError::UnknownStop(from.to_string()))?;
        let target = self
            .graph
            .wait_vertex(to)
            .ok_or_else(|| RouteError::UnknownStop(to.to_string()))?;

        let path = find_shortest_path(self.graph.graph(), source, target).ok_or_else(|| {
            RouteError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            }
        })?;

        Ok(Itinerary::from_path(&self.graph, &path))
    }
}
