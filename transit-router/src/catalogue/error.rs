//! Catalogue error types.

/// Errors raised while filling the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A distance or bus referenced a stop that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Two buses were registered under the same name
    #[error("bus {0} is already registered")]
    DuplicateBus(String),

    /// A bus was registered without any stops
    #[error("bus {0} has no stops")]
    EmptyRoute(String),
}
