//! Transit network catalogue and fastest-route planner.
//!
//! Loads stops, bus routes and road distances, then answers two kinds of
//! question: statistics about a bus route, and the fastest way between two
//! stops when every boarding costs a fixed wait.

pub mod catalogue;
pub mod domain;
pub mod requests;
pub mod router;
pub mod web;
