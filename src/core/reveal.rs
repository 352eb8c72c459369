//! Scroll-reveal and rotation timing
//!
//! Sections animate in the first time they become visible and never hide
//! again. The hero subtitle cycles on a fixed interval.

/// Stagger between project cards
pub const CARD_STAGGER: f64 = 0.1;
pub const CARD_DURATION: f64 = 0.6;
/// Stagger between timeline entries
pub const TIMELINE_STAGGER: f64 = 0.2;
pub const TIMELINE_DURATION: f64 = 0.5;
/// Stagger between skill tags
pub const TAG_STAGGER: f64 = 0.05;
pub const TAG_DURATION: f64 = 0.4;
pub const SECTION_DURATION: f64 = 0.8;

/// Once-only reveal latch
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reveal {
    revealed_at: Option<f64>,
}

impl Reveal {
    /// Record visibility; only the first visible observation counts
    pub fn observe(&mut self, visible: bool, now: f64) {
        if visible && self.revealed_at.is_none() {
            self.revealed_at = Some(now);
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Progress of the `pill`-th tech pill on the `card`-th project card:
    /// pills follow their card, each a tag stagger after the previous.
    pub fn card_pill_progress(&self, now: f64, card: usize, pill: usize) -> f32 {
        let delay = card as f64 * CARD_STAGGER + pill as f64 * TAG_STAGGER;
        self.progress(now, delay, TAG_DURATION)
    }

    /// Eased progress in [0, 1] for an animation starting `delay` seconds
    /// after the reveal and lasting `duration`.
    pub fn progress(&self, now: f64, delay: f64, duration: f64) -> f32 {
        let Some(start) = self.revealed_at else {
            return 0.0;
        };
        let elapsed = now - start - delay;
        if elapsed <= 0.0 {
            return 0.0;
        }
        if duration <= 0.0 || elapsed >= duration {
            return 1.0;
        }
        ease_out_cubic((elapsed / duration) as f32)
    }
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Cycles through `len` items every `interval` seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotator {
    pub interval: f64,
}

impl Default for Rotator {
    fn default() -> Self {
        Self { interval: 3.0 }
    }
}

impl Rotator {
    pub fn index_at(&self, elapsed: f64, len: usize) -> usize {
        if len == 0 || self.interval <= 0.0 || elapsed < 0.0 {
            return 0;
        }
        ((elapsed / self.interval) as usize) % len
    }
}
