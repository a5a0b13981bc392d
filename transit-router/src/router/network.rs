//! The read-only view of a transit network that the graph builder consumes.

use crate::catalogue::TransportCatalogue;

/// A bus route as seen by the graph builder: stop names in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusRoute<'a> {
    pub name: &'a str,
    pub stops: Vec<&'a str>,
    pub is_roundtrip: bool,
}

/// Source of stops, routes and road distances for building a transit graph.
pub trait TransitNetwork {
    /// Stop names in a fixed enumeration order. Names are unique.
    fn stop_names(&self) -> impl Iterator<Item = &str>;

    /// Every bus route in the network.
    fn routes(&self) -> impl Iterator<Item = BusRoute<'_>>;

    /// Road distance in metres from `from` to `to`, if known.
    ///
    /// Implementations fall back to the `to → from` distance when only that
    /// direction is recorded.
    fn distance(&self, from: &str, to: &str) -> Option<u32>;
}

impl TransitNetwork for TransportCatalogue {
    fn stop_names(&self) -> impl Iterator<Item = &str> {
        self.stops().iter().map(|s| s.name.as_str())
    }

    fn routes(&self) -> impl Iterator<Item = BusRoute<'_>> {
        self.buses().iter().map(|bus| BusRoute {
            name: &bus.name,
            stops: bus
                .stops
                .iter()
                .map(|&id| self.stop_by_id(id).name.as_str())
                .collect(),
            is_roundtrip: bus.is_roundtrip,
        })
    }

    fn distance(&self, from: &str, to: &str) -> Option<u32> {
        TransportCatalogue::distance(self, from, to)
    }
}
