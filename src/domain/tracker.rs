//! Collection of detected objects with criticality rankings.

use tracing::{debug, trace};

use super::{sort, DetectedObject, ObjectId, Ranking};

/// Owns the objects detected in one sensor cycle.
///
/// The sort operations reorder the objects in place. Queries read the objects in their current
/// order and never sort by themselves.
#[derive(Clone, Debug, Default)]
pub struct ObjectTracker {
    objects: Vec<DetectedObject>,
}

impl ObjectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: DetectedObject) {
        self.objects.push(object);
    }

    pub fn reserve(&mut self, capacity: usize) {
        self.objects.reserve(capacity);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[DetectedObject] {
        &self.objects
    }

    pub fn sort_by_collision_time(&mut self) {
        self.sort_by(Ranking::CollisionTime);
    }

    pub fn sort_by_threat_level(&mut self) {
        self.sort_by(Ranking::ThreatLevel);
    }

    pub fn sort_multi_criteria(&mut self) {
        self.sort_by(Ranking::MultiCriteria);
    }

    /// Full introsort, most critical object first.
    pub fn sort_by(&mut self, ranking: Ranking) {
        debug!(?ranking, objects = self.objects.len(), "sorting tracked objects");
        sort::introsort(&mut self.objects, |a, b| ranking.is_more_critical(a, b));
    }

    /// Moves the `max_objects` objects that collide soonest to the front, in order. The remaining
    /// objects keep no particular order.
    pub fn partial_sort_critical(&mut self, max_objects: usize) {
        if self.objects.is_empty() {
            return;
        }
        debug!(
            max_objects,
            objects = self.objects.len(),
            "partially sorting critical objects"
        );
        sort::partial_sort(&mut self.objects, max_objects, |a, b| {
            Ranking::CollisionTime.is_more_critical(a, b)
        });
    }

    /// Copies the first `max_objects` objects in their current order.
    pub fn critical_objects(&self, max_objects: usize) -> Vec<DetectedObject> {
        let count = max_objects.min(self.objects.len());
        self.objects[..count].to_vec()
    }

    /// All objects colliding within `threshold_seconds`, in their current relative order.
    pub fn objects_within_time_threshold(&self, threshold_seconds: f64) -> Vec<DetectedObject> {
        let objects = self
            .objects
            .iter()
            .filter(|o| o.collision_time().is_within(threshold_seconds))
            .copied()
            .collect::<Vec<_>>();
        trace!(
            threshold_seconds,
            matches = objects.len(),
            "filtered objects by collision time"
        );
        objects
    }

    pub fn has_critical_objects(&self, threshold_seconds: f64) -> bool {
        self.objects
            .iter()
            .any(|o| o.collision_time().is_within(threshold_seconds))
    }

    pub fn find_by_id(&self, id: ObjectId) -> Option<&DetectedObject> {
        self.objects.iter().find(|o| o.id() == id)
    }
}

impl FromIterator<DetectedObject> for ObjectTracker {
    fn from_iter<I: IntoIterator<Item = DetectedObject>>(iter: I) -> Self {
        Self {
            objects: Vec::from_iter(iter),
        }
    }
}

impl Extend<DetectedObject> for ObjectTracker {
    fn extend<I: IntoIterator<Item = DetectedObject>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}
