//! Transport catalogue: the stops, buses and road distances of a network.
//!
//! The catalogue owns every [`Stop`] and [`Bus`]. Stops are enumerated in
//! the order they were first added, and that order is what the router uses
//! to lay out its graph vertices.

mod error;
mod stats;

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use crate::domain::{Bus, Coordinates, Stop, StopId};

pub use error::CatalogueError;
pub use stats::BusStats;

/// Storage and lookup for stops, buses and inter-stop distances.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,

    buses: Vec<Bus>,
    bus_index: HashMap<String, usize>,

    /// Buses serving each stop, sorted by name.
    buses_at: HashMap<StopId, BTreeSet<String>>,

    /// Directed road distances in metres.
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, or move an existing stop to new coordinates.
    ///
    /// Updating a stop keeps its original enumeration position.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            self.stops[id.0].coordinates = coordinates;
            return id;
        }
        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name, coordinates));
        self.stop_index.insert(name.to_string(), id);
        trace!(stop = name, %id, "added stop");
        id
    }

    /// Record the road distance from `from` to `to`, in metres.
    ///
    /// Only this direction is stored. The reverse direction falls back to
    /// this value in [`distance`](Self::distance) unless it is recorded too.
    pub fn set_distance(&mut self, from: &str, to: &str, metres: u32) -> Result<(), CatalogueError> {
        let from = self.require_stop(from)?;
        let to = self.require_stop(to)?;
        self.distances.insert((from, to), metres);
        Ok(())
    }

    /// Register a bus over existing stops, listed as declared.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<(), CatalogueError> {
        if self.bus_index.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }
        if stops.is_empty() {
            return Err(CatalogueError::EmptyRoute(name.to_string()));
        }

        let ids = stops
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for id in &ids {
            self.buses_at.entry(*id).or_default().insert(name.to_string());
        }

        self.bus_index.insert(name.to_string(), self.buses.len());
        self.buses.push(Bus::new(name, ids, is_roundtrip));
        trace!(bus = name, stops = stops.len(), is_roundtrip, "added bus");
        Ok(())
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop_by_id(id))
    }

    /// Look up the enumeration index of a stop.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// The stop at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this catalogue.
    pub fn stop_by_id(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Look up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|&i| &self.buses[i])
    }

    /// All stops, in enumeration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses, in registration order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Road distance between two stops.
    ///
    /// Tries `from → to` first and falls back to `to → from`. Returns `None`
    /// if neither direction is recorded or either stop is unknown.
    pub fn distance(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.distance_by_id(from, to)
    }

    /// Road distance between two stops by index, with the same fallback as
    /// [`distance`](Self::distance).
    pub fn distance_by_id(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Statistics for the named bus, or `None` if it doesn't exist.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        self.bus(name).map(|bus| BusStats::compute(self, bus))
    }

    /// Names of the buses serving a stop, sorted.
    ///
    /// Returns `None` for an unknown stop and an empty list for a stop no
    /// bus visits.
    pub fn buses_at_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.stop_id(name)?;
        Some(
            self.buses_at
                .get(&id)
                .map(|buses| buses.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        )
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
