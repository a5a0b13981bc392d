//! Bus routes.

use super::StopId;

/// A named bus route over catalogue stops.
///
/// `stops` holds the route as declared. A non-round-trip route runs
/// forward to its last stop and then back again; [`Bus::effective_stops`]
/// expands that return leg explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// The stop sequence the bus actually visits.
    ///
    /// Round trips are returned as declared. Other routes are the declared
    /// sequence followed by the reverse of all but its last stop, so
    /// `[A, B, C]` becomes `[A, B, C, B, A]`.
    ///
    /// ```
    /// use transit_router::domain::{Bus, StopId};
    ///
    /// let bus = Bus::new("14", vec![StopId(0), StopId(1), StopId(2)], false);
    /// let visited: Vec<_> = bus.effective_stops().map(|s| s.0).collect();
    /// assert_eq!(visited, vec![0, 1, 2, 1, 0]);
    /// ```
    pub fn effective_stops(&self) -> impl Iterator<Item = StopId> + '_ {
        let back: &[StopId] = match self.stops.split_last() {
            Some((_, rest)) if !self.is_roundtrip => rest,
            _ => &[],
        };
        self.stops.iter().chain(back.iter().rev()).copied()
    }

    /// Number of stops on the effective sequence.
    pub fn effective_len(&self) -> usize {
        if self.is_roundtrip || self.stops.is_empty() {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }
}
