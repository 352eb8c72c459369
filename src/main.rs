//! Headless driver for the constellation effect
//!
//! Sweeps a synthetic pointer over the point field at 60 fps, logs link
//! statistics and prints the final render frame as JSON.
//!
//! Run with: cargo run --features cli --bin starfolio-cli

#[cfg(not(target_arch = "wasm32"))]
mod sim {
    use std::future::Future;
    use std::time::Duration;

    use glam::Vec2;
    use starfolio::core::Constellation;
    use starfolio::time::{now_seconds, FrameClock};
    use tokio::time::MissedTickBehavior;
    use tracing::{info, warn};

    const FPS: f64 = 60.0;
    const STATS_EVERY: Duration = Duration::from_secs(5);

    /// Totals for one simulation run
    #[derive(Debug, Default)]
    pub struct Stats {
        pub frames: u64,
        pub activations: u64,
        pub links: u64,
        pub peak: usize,
    }

    /// Lissajous sweep across most of the viewport
    pub fn pointer_at(frame: u64) -> Vec2 {
        let t = frame as f32 / FPS as f32;
        Vec2::new(0.8 * (1.3 * t).sin(), 0.7 * (1.7 * t + 0.5).sin())
    }

    /// Tick `constellation` at 60 fps until `max_frames` (0 = unbounded) or
    /// until `shutdown` resolves. `shutdown` is pinned once and polled on
    /// every pass, so a signal between frames is not lost.
    pub async fn simulate(
        constellation: &mut Constellation,
        max_frames: u64,
        shutdown: impl Future<Output = ()>,
    ) -> Stats {
        tokio::pin!(shutdown);

        let mut clock = FrameClock::new();
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / FPS));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut stats_interval = tokio::time::interval(STATS_EVERY);
        stats_interval.tick().await;

        let mut stats = Stats::default();
        let mut links_last_interval = 0u64;

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    warn!(frame = stats.frames, "Interrupted");
                    break;
                }
                _ = frame_interval.tick() => {
                    clock.tick(now_seconds());

                    let outcome = constellation.tick(pointer_at(stats.frames));
                    stats.activations += outcome.activated.is_some() as u64;
                    if outcome.created.is_some() {
                        stats.links += 1;
                        links_last_interval += 1;
                    }
                    stats.peak = stats.peak.max(constellation.segment_count());

                    stats.frames += 1;
                    if max_frames > 0 && stats.frames >= max_frames {
                        break;
                    }
                }
                _ = stats_interval.tick() => {
                    info!(
                        frame = stats.frames,
                        fps = format!("{:.1}", clock.fps()),
                        live = constellation.segment_count(),
                        links = stats.links,
                        per_sec = format!("{:.1}", links_last_interval as f64 / STATS_EVERY.as_secs_f64()),
                        "stats"
                    );
                    links_last_interval = 0;
                }
            }
        }
        stats
    }

}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use starfolio::core::{Constellation, ConstellationConfig, OrbitCamera};
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    const ASPECT: f32 = 16.0 / 9.0;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,starfolio=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let mut config = match std::env::var("STARFOLIO_CONFIG") {
        Ok(path) => ConstellationConfig::load(&path)?,
        Err(_) => ConstellationConfig::default(),
    };
    if let Ok(seed) = std::env::var("STARFOLIO_SEED") {
        config.seed = Some(seed.parse()?);
    }
    let max_frames: u64 = match std::env::var("STARFOLIO_FRAMES") {
        Ok(n) => n.parse()?,
        Err(_) => 600,
    };

    let camera = OrbitCamera::new(&config.camera);
    let mut rng = config.rng();
    let mut constellation = Constellation::generate(&config, camera.viewport(ASPECT), &mut rng);
    info!(
        points = constellation.field().len(),
        radius = config.activation_radius,
        cap = constellation.max_segments(),
        frames = max_frames,
        seed = ?config.seed,
        "Simulating"
    );

    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let stats = sim::simulate(&mut constellation, max_frames, ctrl_c).await;

    info!(
        frame = stats.frames,
        activations = stats.activations,
        links = stats.links,
        peak = stats.peak,
        live = constellation.segment_count(),
        "Done"
    );
    println!("{}", serde_json::to_string_pretty(&constellation.render_frame())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
