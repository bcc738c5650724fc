//! Planner configuration.

/// Error returned when a configuration value is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Daily distance must be a positive, finite number of kilometres
    #[error("maximum daily distance must be a positive number of km, got {0}")]
    InvalidDailyDistance(f64),
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum great-circle distance between consecutive stops (km).
    pub max_daily_km: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given daily distance.
    pub fn new(max_daily_km: f64) -> Self {
        Self { max_daily_km }
    }

    /// Check the configuration is usable for a nontrivial route.
    ///
    /// The planner itself accepts any value; a non-positive radius simply
    /// finds no neighbors. This is for rejecting bad user input early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_daily_km.is_finite() || self.max_daily_km <= 0.0 {
            return Err(ConfigError::InvalidDailyDistance(self.max_daily_km));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_daily_km: 200.0,
        }
    }
}
