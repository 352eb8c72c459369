//! Fading line segments between consecutively activated points
//!
//! - Segment: a line with copied endpoints and a decaying opacity
//! - SegmentBuffer: bounded FIFO of live segments

use std::collections::VecDeque;

use glam::Vec3;
use serde::Serialize;
use tracing::trace;

use super::field::PointId;

/// Monotonic segment identifier, unique within one buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SegmentId(pub u64);

/// A transient line between two points.
/// Endpoints are copies; the segment outlives nothing it points at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub id: SegmentId,
    pub from: PointId,
    pub to: PointId,
    pub start: Vec3,
    pub end: Vec3,
    /// In (0, 1] while alive
    pub opacity: f32,
}

impl Segment {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Bounded buffer of live segments. Pushing past capacity evicts the oldest;
/// `fade` decays every segment and drops the dead ones.
#[derive(Debug)]
pub struct SegmentBuffer {
    segments: VecDeque<Segment>,
    capacity: usize,
    fade_step: f32,
    next_id: u64,
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new(16, 0.02)
    }
}

impl SegmentBuffer {
    /// Capacity is clamped to at least one segment
    pub fn new(capacity: usize, fade_step: f32) -> Self {
        let capacity = capacity.max(1);
        Self {
            segments: VecDeque::with_capacity(capacity),
            capacity,
            fade_step,
            next_id: 0,
        }
    }

    /// Append a full-opacity segment, evicting oldest entries if at capacity
    pub fn push(&mut self, from: (PointId, Vec3), to: (PointId, Vec3)) -> SegmentId {
        while self.segments.len() >= self.capacity {
            if let Some(evicted) = self.segments.pop_front() {
                trace!(id = evicted.id.0, opacity = evicted.opacity, "Segment evicted");
            }
        }
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.segments.push_back(Segment {
            id,
            from: from.0,
            to: to.0,
            start: from.1,
            end: to.1,
            opacity: 1.0,
        });
        trace!(id = id.0, from = %from.0, to = %to.0, "Segment created");
        id
    }

    /// Decay every segment by one step and purge those at or below zero.
    /// Returns how many were removed.
    pub fn fade(&mut self) -> usize {
        if self.segments.is_empty() {
            return 0;
        }
        let before = self.segments.len();
        let step = self.fade_step;
        self.segments.retain_mut(|s| {
            s.opacity = (s.opacity - step).max(0.0);
            s.is_alive()
        });
        before - self.segments.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames a fresh segment survives before it is purged
    pub fn lifetime_frames(&self) -> usize {
        (1.0 / self.fade_step).ceil() as usize
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}
