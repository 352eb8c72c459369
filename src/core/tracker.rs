//! Pointer proximity tracking
//!
//! Brute-force scan of the point field for a point within the activation
//! radius. Fields are tens of points and the scan runs once per frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::field::{Point, PointField, PointId};

/// Which point wins when several are within the radius
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// First in scan order. Not necessarily the closest.
    #[default]
    FirstMatch,
    /// Last in scan order: later matches overwrite earlier ones
    LastMatch,
    /// Closest point; ties go to scan order
    Nearest,
}

/// Result of one proximity update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    /// Index into the point field
    pub index: usize,
    pub id: PointId,
    /// Set when the previous activation was a different point
    pub previous: Option<(PointId, Vec3)>,
}

/// Tracks the last point the pointer came within `radius` of
#[derive(Clone, Debug)]
pub struct ProximityTracker {
    radius: f32,
    selection: Selection,
    last_active: Option<usize>,
}

impl ProximityTracker {
    pub fn new(radius: f32, selection: Selection) -> Self {
        Self {
            radius,
            selection,
            last_active: None,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Index of the last activated point, if any
    pub fn last_active(&self) -> Option<usize> {
        self.last_active
    }

    /// Find the point the pointer activates, without changing state
    pub fn find(&self, field: &PointField, pointer: Vec3) -> Option<usize> {
        let mut in_radius = field
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| (i, pointer.distance(p.position)))
            .filter(|&(_, d)| d < self.radius);

        match self.selection {
            Selection::FirstMatch => in_radius.next().map(|(i, _)| i),
            Selection::LastMatch => in_radius.last().map(|(i, _)| i),
            Selection::Nearest => in_radius
                .fold(None, |best: Option<(usize, f32)>, (i, d)| match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((i, d)),
                })
                .map(|(i, _)| i),
        }
    }

    /// Scan for an activated point and update the last-active slot.
    /// With nothing in range the slot is left untouched.
    pub fn update(&mut self, field: &PointField, pointer: Vec3) -> Option<Activation> {
        let index = self.find(field, pointer)?;
        let current: &Point = field.get(index)?;

        let previous = self
            .last_active
            .and_then(|last| field.get(last))
            .filter(|last| last.id != current.id)
            .map(|last| (last.id, last.position));

        self.last_active = Some(index);
        Some(Activation {
            index,
            id: current.id,
            previous,
        })
    }

    /// Forget the last activation
    pub fn reset(&mut self) {
        self.last_active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Three points on the x axis: 0.0, 1.0, 5.0
    fn field() -> PointField {
        let mut rng = StdRng::seed_from_u64(11);
        PointField::from_positions(
            [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)],
            &mut rng,
        )
    }

    #[test]
    fn test_first_match_is_scan_order() {
        let tracker = ProximityTracker::new(1.5, Selection::FirstMatch);
        // 0.9 is closer to point 1 but point 0 is first in range
        assert_eq!(tracker.find(&field(), Vec3::new(0.9, 0.0, 0.0)), Some(0));
    }

    #[test]
    fn test_last_match() {
        let tracker = ProximityTracker::new(1.5, Selection::LastMatch);
        assert_eq!(tracker.find(&field(), Vec3::new(0.1, 0.0, 0.0)), Some(1));
    }

    #[test]
    fn test_nearest() {
        let tracker = ProximityTracker::new(1.5, Selection::Nearest);
        assert_eq!(tracker.find(&field(), Vec3::new(0.9, 0.0, 0.0)), Some(1));
        assert_eq!(tracker.find(&field(), Vec3::new(0.1, 0.0, 0.0)), Some(0));
        // Equidistant: scan order wins
        assert_eq!(tracker.find(&field(), Vec3::new(0.5, 0.0, 0.0)), Some(0));
    }

    #[test]
    fn test_radius_is_strict() {
        let tracker = ProximityTracker::new(1.5, Selection::FirstMatch);
        assert_eq!(tracker.find(&field(), Vec3::new(3.5, 0.0, 0.0)), None);
        assert_eq!(tracker.find(&field(), Vec3::new(3.6, 0.0, 0.0)), Some(2));
    }

    #[test]
    fn test_out_of_range_keeps_last_active() {
        let field = field();
        let mut tracker = ProximityTracker::new(1.5, Selection::FirstMatch);
        tracker.update(&field, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(tracker.last_active(), Some(2));
        assert!(tracker.update(&field, Vec3::new(50.0, 50.0, 0.0)).is_none());
        assert_eq!(tracker.last_active(), Some(2));
    }

    #[test]
    fn test_previous_only_on_change() {
        let field = field();
        let mut tracker = ProximityTracker::new(1.5, Selection::FirstMatch);

        let first = tracker.update(&field, Vec3::new(5.0, 0.0, 0.0)).unwrap();
        assert!(first.previous.is_none());

        let same = tracker.update(&field, Vec3::new(5.2, 0.0, 0.0)).unwrap();
        assert!(same.previous.is_none());

        let moved = tracker.update(&field, Vec3::new(-0.5, 0.0, 0.0)).unwrap();
        assert_eq!(moved.index, 0);
        let (prev_id, prev_pos) = moved.previous.unwrap();
        assert_eq!(prev_id, field.points()[2].id);
        assert_eq!(prev_pos, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_selection_serde_names() {
        let s: Selection = serde_json::from_str(r#""last_match""#).unwrap();
        assert_eq!(s, Selection::LastMatch);
        assert_eq!(serde_json::to_string(&Selection::FirstMatch).unwrap(), r#""first_match""#);
    }
}
