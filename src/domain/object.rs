//! Obstacle reported by the perception stack.

use super::{CollisionTime, ThreatLevel, Velocity};

pub type ObjectId = i32;

/// Snapshot of one tracked obstacle.
///
/// Collision time and threat level are derived once at construction and never change.
/// Equality compares the id only, so two snapshots of the same obstacle are equal even if their
/// kinematics differ.
#[derive(Clone, Copy, Debug)]
pub struct DetectedObject {
    id: ObjectId,
    distance: f64,
    relative_velocity: Velocity,
    collision_time: CollisionTime,
    threat_level: ThreatLevel,
}

impl DetectedObject {
    pub fn new(id: ObjectId, distance: f64, relative_velocity: f64) -> Self {
        let relative_velocity = Velocity::new(relative_velocity);
        let collision_time = CollisionTime::from_kinematics(distance, relative_velocity);
        Self {
            id,
            distance,
            relative_velocity,
            collision_time,
            threat_level: ThreatLevel::assess(distance, collision_time),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Distance in meters.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn relative_velocity(&self) -> Velocity {
        self.relative_velocity
    }

    pub fn collision_time(&self) -> CollisionTime {
        self.collision_time
    }

    pub fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    /// Raw comparison of collision times. Unlike the ranking comparators, two objects that never
    /// collide are not ordered against each other.
    pub fn is_sooner_than(&self, other: &DetectedObject) -> bool {
        self.collision_time.seconds() < other.collision_time.seconds()
    }
}

impl Default for DetectedObject {
    fn default() -> Self {
        Self::new(0, 0.0, 0.0)
    }
}

impl PartialEq for DetectedObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DetectedObject {}
