//! Criticality orderings for detected objects.
//!
//! Every comparator answers "is `a` more critical than `b`", so the most critical object sorts
//! first.

use std::cmp::Ordering;

use super::{basis::compare_distance, DetectedObject};

/// Threat levels closer than this are tied in [`by_threat_level`].
const THREAT_LEVEL_EPSILON: f64 = 0.001;
/// Threat levels closer than this defer to the next criterion in [`by_multi_criteria`].
const MULTI_CRITERIA_THREAT_EPSILON: f64 = 0.01;
/// Collision times closer than this defer to distance in [`by_multi_criteria`].
const MULTI_CRITERIA_TIME_EPSILON: f64 = 0.1;

/// Selectable ranking strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Ranking {
    CollisionTime,
    ThreatLevel,
    MultiCriteria,
}

impl Ranking {
    pub fn is_more_critical(self, a: &DetectedObject, b: &DetectedObject) -> bool {
        match self {
            Ranking::CollisionTime => by_collision_time(a, b),
            Ranking::ThreatLevel => by_threat_level(a, b),
            Ranking::MultiCriteria => by_multi_criteria(a, b),
        }
    }

    /// `Less` if `a` is more critical than `b`, `Greater` if less critical, `Equal` if neither.
    pub fn compare(self, a: &DetectedObject, b: &DetectedObject) -> Ordering {
        if self.is_more_critical(a, b) {
            Ordering::Less
        } else if self.is_more_critical(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

fn is_closer(a: &DetectedObject, b: &DetectedObject) -> bool {
    compare_distance(a.distance(), b.distance()) == Ordering::Less
}

/// Sooner collision first. Objects that never collide come last, closest first. Equal collision
/// times are also broken by distance.
pub fn by_collision_time(a: &DetectedObject, b: &DetectedObject) -> bool {
    let (time_a, time_b) = (a.collision_time(), b.collision_time());
    match (time_a.is_finite(), time_b.is_finite()) {
        (false, false) => is_closer(a, b),
        (false, true) => false,
        (true, false) => true,
        (true, true) => {
            if time_a.seconds() == time_b.seconds() {
                is_closer(a, b)
            } else {
                time_a.seconds() < time_b.seconds()
            }
        }
    }
}

/// Higher threat first. Nearly equal threats are broken by distance.
pub fn by_threat_level(a: &DetectedObject, b: &DetectedObject) -> bool {
    let (threat_a, threat_b) = (a.threat_level(), b.threat_level());
    if threat_a.difference(threat_b) < THREAT_LEVEL_EPSILON {
        return is_closer(a, b);
    }
    threat_a.value() > threat_b.value()
}

/// Threat level, then collision time, then distance.
///
/// The collision time is only consulted if both objects will collide. If either never does, the
/// comparison goes straight to distance.
pub fn by_multi_criteria(a: &DetectedObject, b: &DetectedObject) -> bool {
    let (threat_a, threat_b) = (a.threat_level(), b.threat_level());
    if threat_a.difference(threat_b) > MULTI_CRITERIA_THREAT_EPSILON {
        return threat_a.value() > threat_b.value();
    }

    let (time_a, time_b) = (a.collision_time(), b.collision_time());
    if time_a.is_finite()
        && time_b.is_finite()
        && (time_a.seconds() - time_b.seconds()).abs() > MULTI_CRITERIA_TIME_EPSILON
    {
        return time_a.seconds() < time_b.seconds();
    }

    is_closer(a, b)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn object(id: i32, distance: f64, velocity: f64) -> DetectedObject {
        DetectedObject::new(id, distance, velocity)
    }

    #[rstest]
    #[case::finite(object(1, 10.0, -5.0), object(2, 15.0, -3.0))]
    #[case::finite_before_never(object(2, 5.0, -3.5), object(1, 9.0, 0.0))]
    #[case::never_closer_first(object(1, 9.0, 0.0), object(3, 12.0, 0.0))]
    #[case::equal_time_closer_first(object(1, 20.0, -10.0), object(2, 40.0, -20.0))]
    #[case::never_nan_distance_last(object(1, 1e9, 1.0), object(2, f64::NAN, 1.0))]
    fn test_by_collision_time(#[case] critical: DetectedObject, #[case] other: DetectedObject) {
        assert!(by_collision_time(&critical, &other));
        assert!(!by_collision_time(&other, &critical));
    }

    #[rstest]
    #[case::never(object(1, 9.0, 0.0))]
    #[case::finite(object(2, 20.0, -20.0))]
    fn test_by_collision_time_irreflexive(#[case] object: DetectedObject) {
        assert!(!by_collision_time(&object, &object));
    }

    #[rstest]
    #[case::higher_threat(object(7, 10.0, -8.0), object(4, 15.0, -3.0))]
    #[case::tied_threat_closer_first(object(13, 5.0, 0.0001), object(12, 10.0, 0.0001))]
    #[case::higher_threat_despite_distance(object(1, 15.0, -25.0), object(2, 10.0, -2.0))]
    fn test_by_threat_level(#[case] critical: DetectedObject, #[case] other: DetectedObject) {
        assert!(by_threat_level(&critical, &other));
        assert!(!by_threat_level(&other, &critical));
    }

    #[rstest]
    #[case::same_kinematics(object(10, 50.0, -5.0), object(11, 50.0, -5.0))]
    #[case::zero_distance(object(20, 0.0, -10.0), object(21, 0.0, -1.0))]
    fn test_by_threat_level_tied(#[case] a: DetectedObject, #[case] b: DetectedObject) {
        assert!(!by_threat_level(&a, &b));
        assert!(!by_threat_level(&b, &a));
    }

    #[test]
    fn test_by_threat_level_differs_from_collision_time() {
        // Sooner collision, but so far away that the threat is lower.
        let far = object(1, 100.0, -100.0);
        let near = object(2, 3.0, -2.0);
        assert!(by_collision_time(&far, &near));
        assert!(by_threat_level(&near, &far));
    }

    #[test]
    fn test_by_multi_criteria_threat_first() {
        let high = object(4, 10.0, -20.0);
        let low = object(2, 80.0, -2.0);
        assert!(by_multi_criteria(&high, &low));
        assert!(!by_multi_criteria(&low, &high));
    }

    #[test]
    fn test_by_multi_criteria_collision_time_second() {
        // Threat differs by 0.005 in favor of `closer`, collision time by 0.2s in favor of
        // `sooner`.
        let sooner = object(1, 20.0, -10.0);
        let closer = object(2, 17.0, -17.0 / 2.2);
        assert!(closer.threat_level().value() > sooner.threat_level().value());
        assert!(sooner.threat_level().difference(closer.threat_level()) < 0.01);

        assert!(by_multi_criteria(&sooner, &closer));
        assert!(!by_multi_criteria(&closer, &sooner));
        assert!(by_threat_level(&closer, &sooner));
    }

    #[test]
    fn test_by_multi_criteria_never_skips_collision_time() {
        let never = object(1, 5.0, 0.0);
        let late = object(2, 50.0, -4.0);
        assert_eq!(never.threat_level(), late.threat_level());

        assert!(by_multi_criteria(&never, &late));
        assert!(!by_multi_criteria(&late, &never));
        assert!(by_collision_time(&late, &never));
    }

    #[test]
    fn test_by_multi_criteria_close_times_use_distance() {
        let a = object(1, 30.0, -10.0);
        let b = object(2, 30.5, -10.0);
        assert!(by_multi_criteria(&a, &b));
        assert!(!by_multi_criteria(&b, &a));
    }

    #[rstest]
    #[case(Ranking::CollisionTime)]
    #[case(Ranking::ThreatLevel)]
    #[case(Ranking::MultiCriteria)]
    fn test_ranking_compare(#[case] ranking: Ranking) {
        let critical = object(1, 10.0, -20.0);
        let harmless = object(2, 80.0, 3.0);
        assert_eq!(ranking.compare(&critical, &harmless), Ordering::Less);
        assert_eq!(ranking.compare(&harmless, &critical), Ordering::Greater);
        assert_eq!(ranking.compare(&critical, &critical), Ordering::Equal);
    }
}
