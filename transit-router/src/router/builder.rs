//! Transit graph construction.
//!
//! Every stop becomes two vertices: a *wait* vertex where passengers arrive
//! and a *board* vertex where they are already on a bus. A wait edge joins
//! the two with the configured wait time. Ride edges run from the board
//! vertex of one stop to the wait vertex of any later stop on the same bus,
//! so riding several stops without getting off costs a single wait.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
use super::network::{BusRoute, TransitNetwork};
use super::settings::{ConfigError, RoutingSettings};

/// A ride on one bus between two stops without getting off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideEdge {
    pub bus: String,
    /// Number of stop-to-stop segments covered.
    pub span_count: usize,
    pub from_stop: String,
    pub to_stop: String,
}

/// What an edge of the transit graph stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    Wait,
    Ride(RideEdge),
}

/// A transit network laid out as a weighted graph, with the tables needed
/// to map vertices and edges back to stops and buses.
///
/// Immutable once built. Stop `k` in enumeration order owns wait vertex
/// `2k` and board vertex `2k + 1`.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    graph: DirectedWeightedGraph,
    wait_vertices: HashMap<String, VertexId>,
    stop_names: Vec<String>,
    edge_kinds: Vec<EdgeKind>,
}

impl TransitGraph {
    /// Build the graph for `network` under `settings`.
    ///
    /// Fails only on invalid settings; missing road distances just leave
    /// out the affected ride edges.
    pub fn build<N: TransitNetwork>(
        network: &N,
        settings: &RoutingSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;

        let stop_names: Vec<String> = network.stop_names().map(str::to_string).collect();
        let mut transit = Self {
            graph: DirectedWeightedGraph::with_vertex_count(stop_names.len() * 2),
            wait_vertices: HashMap::with_capacity(stop_names.len()),
            stop_names: Vec::new(),
            edge_kinds: Vec::new(),
        };

        let wait_time = f64::from(settings.bus_wait_time);
        for (k, name) in stop_names.iter().enumerate() {
            let wait = VertexId(2 * k);
            transit.wait_vertices.insert(name.clone(), wait);
            transit.push_edge(
                Edge {
                    from: wait,
                    to: VertexId(2 * k + 1),
                    weight: wait_time,
                },
                EdgeKind::Wait,
            );
        }
        transit.stop_names = stop_names;

        let mut routes = 0;
        for route in network.routes() {
            transit.add_route(network, settings, &route);
            routes += 1;
        }

        debug!(
            stops = transit.stop_names.len(),
            routes,
            edges = transit.graph.edge_count(),
            "built transit graph"
        );
        Ok(transit)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Wait vertex of the named stop.
    pub fn wait_vertex(&self, stop: &str) -> Option<VertexId> {
        self.wait_vertices.get(stop).copied()
    }

    /// Board vertex of the named stop.
    pub fn board_vertex(&self, stop: &str) -> Option<VertexId> {
        self.wait_vertex(stop).map(|v| VertexId(v.0 + 1))
    }

    /// Name of the stop owning `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not part of this graph.
    pub fn stop_name(&self, vertex: VertexId) -> &str {
        &self.stop_names[vertex.0 / 2]
    }

    /// What the edge stands for.
    pub fn edge_kind(&self, edge: EdgeId) -> &EdgeKind {
        &self.edge_kinds[edge.0]
    }

    /// Ride metadata of the edge, or `None` for a wait edge.
    pub fn ride(&self, edge: EdgeId) -> Option<&RideEdge> {
        match self.edge_kind(edge) {
            EdgeKind::Ride(ride) => Some(ride),
            EdgeKind::Wait => None,
        }
    }

    fn push_edge(&mut self, edge: Edge, kind: EdgeKind) -> EdgeId {
        let id = self.graph.add_edge(edge);
        debug_assert_eq!(id.0, self.edge_kinds.len());
        self.edge_kinds.push(kind);
        id
    }

    fn add_route<N: TransitNetwork>(
        &mut self,
        network: &N,
        settings: &RoutingSettings,
        route: &BusRoute<'_>,
    ) {
        self.add_pass(network, settings, route.name, &route.stops);

        if !route.is_roundtrip {
            let inbound: Vec<&str> = route.stops.iter().rev().copied().collect();
            self.add_pass(network, settings, route.name, &inbound);
        }
    }

    /// Add a ride edge for every pair `i < j` of `stops`, stopping each
    /// inner scan at the first gap without a known distance.
    fn add_pass<N: TransitNetwork>(
        &mut self,
        network: &N,
        settings: &RoutingSettings,
        bus: &str,
        stops: &[&str],
    ) {
        for i in 0..stops.len() {
            let mut metres: u64 = 0;
            for j in (i + 1)..stops.len() {
                let Some(gap) = network.distance(stops[j - 1], stops[j]) else {
                    break;
                };
                metres += u64::from(gap);
                self.add_ride(bus, stops[i], stops[j], j - i, settings.ride_minutes(metres as f64));
            }
        }
    }

    fn add_ride(&mut self, bus: &str, from: &str, to: &str, span_count: usize, minutes: f64) {
        let (Some(board), Some(wait)) = (self.board_vertex(from), self.wait_vertex(to)) else {
            warn!(bus, from, to, "route references a stop missing from the network");
            return;
        };
        self.push_edge(
            Edge {
                from: board,
                to: wait,
                weight: minutes,
            },
            EdgeKind::Ride(RideEdge {
                bus: bus.to_string(),
                span_count,
                from_stop: from.to_string(),
                to_stop: to.to_string(),
            }),
        );
    }
}
