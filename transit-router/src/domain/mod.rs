//! Domain types for the transit network.
//!
//! Stops and buses are plain values owned by the catalogue. Buses refer to
//! their stops through [`StopId`], a dense index into the catalogue's stop
//! list, rather than holding stops directly.

mod bus;
mod stop;

pub use bus::Bus;
pub use stop::{Coordinates, Stop, StopId};
