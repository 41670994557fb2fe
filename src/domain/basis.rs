//! Basic building blocks.

use std::cmp::Ordering;

/// Closing speeds below this magnitude are treated as sensor noise.
const APPROACH_THRESHOLD: f64 = -0.1;

const NO_THREAT_TIME: f64 = 10.0;
const FULL_THREAT_TIME: f64 = 1.0;
const DISTANCE_SCALE: f64 = 100.0;

/// Relative velocity of an object in m/s. Negative values mean the object is approaching.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Velocity(f64);

impl Velocity {
    pub fn new(velocity: f64) -> Self {
        Self(velocity)
    }

    pub fn is_approaching(&self) -> bool {
        self.0 < APPROACH_THRESHOLD
    }

    pub fn closing_speed(&self) -> f64 {
        -self.0
    }
}

impl From<Velocity> for f64 {
    fn from(value: Velocity) -> Self {
        value.0
    }
}

/// Time-to-collision in seconds. Infinite if the object never reaches us.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct CollisionTime(f64);

impl CollisionTime {
    pub const NEVER: CollisionTime = CollisionTime(f64::INFINITY);

    /// Assumes constant velocity. A NaN result is stored as [`CollisionTime::NEVER`].
    pub fn from_kinematics(distance: f64, velocity: Velocity) -> Self {
        if !velocity.is_approaching() {
            return Self::NEVER;
        }
        let seconds = distance / velocity.closing_speed();
        if seconds.is_nan() {
            Self::NEVER
        } else {
            Self(seconds)
        }
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        !self.0.is_infinite()
    }

    pub fn is_within(&self, threshold_seconds: f64) -> bool {
        self.is_finite() && self.0 <= threshold_seconds
    }
}

impl Default for CollisionTime {
    fn default() -> Self {
        Self::NEVER
    }
}

impl From<CollisionTime> for f64 {
    fn from(value: CollisionTime) -> Self {
        value.0
    }
}

/// Normalized urgency in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ThreatLevel(f64);

impl ThreatLevel {
    pub const NONE: ThreatLevel = ThreatLevel(0.0);
    pub const FULL: ThreatLevel = ThreatLevel(1.0);

    pub fn assess(distance: f64, collision_time: CollisionTime) -> Self {
        let seconds = collision_time.seconds();
        if seconds > NO_THREAT_TIME {
            return Self::NONE;
        }
        if seconds < FULL_THREAT_TIME {
            return Self::FULL;
        }

        let distance_factor = f64::max(0.0, 1.0 - distance / DISTANCE_SCALE);
        let time_factor = f64::max(0.0, 1.0 - seconds / NO_THREAT_TIME);
        Self((distance_factor + time_factor) / 2.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn difference(&self, other: ThreatLevel) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl From<ThreatLevel> for f64 {
    fn from(value: ThreatLevel) -> Self {
        value.0
    }
}

/// Orders distances for tie-breaking, ranking NaN as farther than any number.
pub(crate) fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
