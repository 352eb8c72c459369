//! The constellation effect: point field + proximity tracker + fading lines
//!
//! One `tick` per rendered frame. All state is owned here and mutated only
//! through `&mut self`.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use super::camera::Viewport;
use super::config::ConstellationConfig;
use super::field::{PointField, PointId};
use super::frame::{
    LineInstance, PointCloud, RenderFrame, LINE_COLOR, LINE_WIDTH, POINT_COLOR, POINT_OPACITY,
    POINT_SIZE,
};
use super::segments::{Segment, SegmentBuffer, SegmentId};
use super::tracker::ProximityTracker;

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutcome {
    /// Point the pointer activated this frame
    pub activated: Option<PointId>,
    /// Segment appended this frame
    pub created: Option<SegmentId>,
    /// Segments purged after fading out
    pub faded: usize,
}

#[derive(Debug)]
pub struct Constellation {
    field: PointField,
    tracker: ProximityTracker,
    segments: SegmentBuffer,
    viewport: Viewport,
    /// Cached vertex buffer; the field never changes
    flat_positions: Vec<f32>,
}

impl Constellation {
    /// Build from an already generated field
    pub fn new(field: PointField, config: &ConstellationConfig, viewport: Viewport) -> Self {
        let flat_positions = field.flat_positions();
        Self {
            field,
            tracker: ProximityTracker::new(config.activation_radius, config.selection),
            segments: SegmentBuffer::new(config.max_segments, config.fade_step),
            viewport,
            flat_positions,
        }
    }

    /// Generate the field from `config` using `rng`, then build
    pub fn generate<R: Rng + ?Sized>(
        config: &ConstellationConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let field = PointField::generate(config.point_count, config.spread, rng);
        debug!(
            radius = config.activation_radius,
            cap = config.max_segments,
            selection = ?config.selection,
            "Constellation ready"
        );
        Self::new(field, config, viewport)
    }

    /// Host surface resized
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Advance one frame with the pointer at `pointer_ndc`
    pub fn tick(&mut self, pointer_ndc: Vec2) -> TickOutcome {
        let pointer = self.viewport.pointer_to_world(pointer_ndc);
        let mut outcome = TickOutcome::default();

        if let Some(activation) = self.tracker.update(&self.field, pointer) {
            outcome.activated = Some(activation.id);
            if let Some(previous) = activation.previous {
                let current = self.field.points()[activation.index].position;
                outcome.created = Some(self.segments.push(previous, (activation.id, current)));
            }
        }

        outcome.faded = self.segments.fade();
        outcome
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn max_segments(&self) -> usize {
        self.segments.capacity()
    }

    /// The last activated point, if any
    pub fn last_active(&self) -> Option<PointId> {
        self.tracker
            .last_active()
            .and_then(|i| self.field.get(i))
            .map(|p| p.id)
    }

    /// Primitives for the current frame
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            points: PointCloud {
                positions: self.flat_positions.clone(),
                size: POINT_SIZE,
                color: POINT_COLOR,
                opacity: POINT_OPACITY,
            },
            lines: self
                .segments
                .iter()
                .map(|s| LineInstance {
                    start: s.start.to_array(),
                    end: s.end.to_array(),
                    opacity: s.opacity,
                    color: LINE_COLOR,
                    width: LINE_WIDTH,
                })
                .collect(),
        }
    }
}
