//! Collision-risk ranking for objects detected by an autonomous emergency braking system.
//!
//! Objects are added to an [`ObjectTracker`], ranked by one of the [`Ranking`] strategies and read
//! back in order of urgency.


mod domain;

pub use domain::{
    by_collision_time, by_multi_criteria, by_threat_level, introsort, partial_sort,
    BrakingConfig, BrakingResponse, CollisionTime, ConfigError, DetectedObject, ObjectId,
    ObjectTracker, Ranking, ThreatLevel, Velocity,
};
