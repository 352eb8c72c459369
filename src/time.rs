//! Platform-agnostic time utilities
//!
//! Elapsed seconds since app start, plus a frame clock that turns successive
//! timestamps into frame deltas and a once-per-second rate.

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Longest frame delta fed to animations; a backgrounded tab resumes
/// without the camera jumping.
const MAX_DT: f64 = 0.1;

/// Frame delta and FPS tracking
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
    frames: u64,
    window_start: f64,
    window_frames: u32,
    fps: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame at `now`; returns the clamped delta in seconds
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(last) => (now - last).clamp(0.0, MAX_DT),
            None => {
                self.window_start = now;
                0.0
            }
        };
        self.last = Some(now);
        self.frames += 1;
        self.window_frames += 1;

        let window = now - self.window_start;
        if window >= 1.0 {
            self.fps = self.window_frames as f64 / window;
            self.window_frames = 0;
            self.window_start = now;
        }
        dt
    }

    /// Frames per second over the last full window
    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
