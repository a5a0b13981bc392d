//! Routing configuration.

use serde::Deserialize;

/// Error for routing settings the router cannot work with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Bus velocity must be strictly positive
    #[error("bus velocity must be positive, got {0}")]
    NonPositiveVelocity(f64),

    /// Wait time must not be negative
    #[error("bus wait time must not be negative, got {0}")]
    NegativeWaitTime(i32),
}

/// Parameters of the wait+ride time model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before every boarding.
    pub bus_wait_time: i32,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time and velocity.
    pub fn new(bus_wait_time: i32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that the settings describe a usable time model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written so NaN is rejected too.
        if !(self.bus_velocity > 0.0) {
            return Err(ConfigError::NonPositiveVelocity(self.bus_velocity));
        }
        if self.bus_wait_time < 0 {
            return Err(ConfigError::NegativeWaitTime(self.bus_wait_time));
        }
        Ok(())
    }

    /// Minutes needed to cover `metres` at the configured velocity.
    pub fn ride_minutes(&self, metres: f64) -> f64 {
        (metres / 1000.0) / self.bus_velocity * 60.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
