//! The domain module encapsulates the core business logic. It defines the `DetectedObject` and
//! `ObjectTracker` entities, along with the rules that rank objects by collision risk.
//!
//! The module has no dependency on how objects are detected or how rankings are displayed.

mod basis;
mod object;
mod ranking;
mod response;
mod sort;
mod tracker;

pub use basis::{CollisionTime, ThreatLevel, Velocity};
pub use object::{DetectedObject, ObjectId};
pub use ranking::{by_collision_time, by_multi_criteria, by_threat_level, Ranking};
pub use response::{BrakingConfig, BrakingResponse, ConfigError};
pub use sort::{introsort, partial_sort};
pub use tracker::ObjectTracker;
