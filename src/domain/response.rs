//! Braking decision derived from the collision times of the tracked objects.

use thiserror::Error;
use tracing::{debug, warn};

use super::ObjectTracker;

/// Collision time thresholds in seconds. Objects colliding within the critical threshold trigger
/// emergency braking, objects within the warning threshold pre-charge the brakes.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct BrakingConfig {
    critical_time_threshold: f64,
    warning_time_threshold: f64,
}

impl BrakingConfig {
    pub fn new(
        critical_time_threshold: f64,
        warning_time_threshold: f64,
    ) -> Result<Self, ConfigError> {
        for threshold in [critical_time_threshold, warning_time_threshold] {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::InvalidThreshold(threshold));
            }
        }
        if critical_time_threshold > warning_time_threshold {
            return Err(ConfigError::CriticalAfterWarning {
                critical: critical_time_threshold,
                warning: warning_time_threshold,
            });
        }
        Ok(Self {
            critical_time_threshold,
            warning_time_threshold,
        })
    }

    pub fn critical_time_threshold(&self) -> f64 {
        self.critical_time_threshold
    }

    pub fn warning_time_threshold(&self) -> f64 {
        self.warning_time_threshold
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid time threshold {0}, expected a finite number of seconds >= 0")]
    InvalidThreshold(f64),
    #[error("critical threshold {critical}s exceeds warning threshold {warning}s")]
    CriticalAfterWarning { critical: f64, warning: f64 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BrakingResponse {
    Clear,
    PrechargeBrakes,
    EmergencyBrake,
}

impl ObjectTracker {
    pub fn assess(&self, config: &BrakingConfig) -> BrakingResponse {
        let response = if self.has_critical_objects(config.critical_time_threshold) {
            BrakingResponse::EmergencyBrake
        } else if self.has_critical_objects(config.warning_time_threshold) {
            BrakingResponse::PrechargeBrakes
        } else {
            BrakingResponse::Clear
        };

        if response == BrakingResponse::EmergencyBrake {
            warn!(
                threshold = config.critical_time_threshold,
                objects = self.len(),
                "collision imminent"
            );
        } else {
            debug!(?response, objects = self.len(), "assessed braking response");
        }
        response
    }
}
