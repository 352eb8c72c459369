//! Portfolio app - starfield background with the constellation effect,
//! scrolling content on top.

mod nav;
mod scene;
mod sections;

use std::collections::HashMap;

use eframe::egui;
use glam::Vec2;
use tracing::{debug, info, warn};

use crate::core::reveal::{Reveal, Rotator};
use crate::core::{
    Constellation, ConstellationConfig, OrbitCamera, Portfolio, Section, StarShell,
};
use crate::theme::space_visuals;
use crate::time::{now_seconds, FrameClock};

/// Radians of orbit per pixel of secondary-button drag
const DRAG_SENSITIVITY: f32 = 0.005;

pub struct StarfolioApp {
    pub(crate) constellation: Constellation,
    pub(crate) camera: OrbitCamera,
    pub(crate) shell: StarShell,
    pub(crate) portfolio: Portfolio,
    pub(crate) clock: FrameClock,
    /// App start, for the subtitle rotation
    pub(crate) start_time: f64,
    /// Last known pointer in NDC; kept when the pointer leaves the window
    pub(crate) pointer_ndc: Vec2,
    pub(crate) rotator: Rotator,
    pub(crate) reveals: HashMap<Section, Reveal>,
    /// Section requested from the nav bar, consumed when it is laid out
    pub(crate) scroll_target: Option<Section>,
}

/// Config injected by the hosting page as `window.__starfolio_config` (JSON)
#[cfg(target_arch = "wasm32")]
fn page_config() -> ConstellationConfig {
    let Some(json) = js_sys::eval("window.__starfolio_config")
        .ok()
        .and_then(|v| v.as_string())
    else {
        return ConstellationConfig::default();
    };
    ConstellationConfig::from_json_str(&json).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring page config");
        ConstellationConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn page_config() -> ConstellationConfig {
    ConstellationConfig::default()
}

impl StarfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(space_visuals());
        Self::with_config(page_config())
    }

    pub fn with_config(config: ConstellationConfig) -> Self {
        let mut rng = config.rng();
        let camera = OrbitCamera::new(&config.camera);
        let constellation = Constellation::generate(&config, camera.viewport(16.0 / 9.0), &mut rng);
        let stars = &config.stars;
        let shell = StarShell::generate(
            stars.count,
            stars.radius,
            stars.depth,
            stars.factor,
            stars.twinkle_speed,
            &mut rng,
        );

        let portfolio = Portfolio::embedded().unwrap_or_else(|e| {
            warn!(error = %e, "Embedded portfolio content failed to parse");
            Portfolio::default()
        });

        info!(
            points = constellation.field().len(),
            stars = shell.len(),
            projects = portfolio.projects.len(),
            "Starfolio started"
        );

        Self {
            constellation,
            camera,
            shell,
            portfolio,
            clock: FrameClock::new(),
            start_time: now_seconds(),
            pointer_ndc: Vec2::ZERO,
            rotator: Rotator::default(),
            reveals: Section::ALL.iter().map(|&s| (s, Reveal::default())).collect(),
            scroll_target: None,
        }
    }

    /// Per-frame simulation: pointer, camera, constellation
    fn step(&mut self, ctx: &egui::Context, dt: f32) {
        let screen = ctx.screen_rect();
        let aspect = screen.width() / screen.height().max(1.0);

        let (hover, drag) = ctx.input(|i| {
            let drag = i
                .pointer
                .button_down(egui::PointerButton::Secondary)
                .then(|| i.pointer.delta());
            (i.pointer.hover_pos(), drag)
        });
        if let Some(pos) = hover {
            self.pointer_ndc = screen_to_ndc(pos, screen);
        }
        if let Some(delta) = drag {
            self.camera
                .drag(-delta.x * DRAG_SENSITIVITY, -delta.y * DRAG_SENSITIVITY);
        }

        self.camera.advance(dt);
        self.constellation.set_viewport(self.camera.viewport(aspect));
        let outcome = self.constellation.tick(self.pointer_ndc);
        if outcome.created.is_some() {
            debug!(
                segments = self.constellation.segment_count(),
                "Constellation link"
            );
        }
    }

    pub(crate) fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }
}

/// Window position to NDC: [-1, 1] on both axes, +Y up
pub(crate) fn screen_to_ndc(pos: egui::Pos2, screen: egui::Rect) -> Vec2 {
    let x = (pos.x - screen.left()) / screen.width().max(1.0) * 2.0 - 1.0;
    let y = -((pos.y - screen.top()) / screen.height().max(1.0) * 2.0 - 1.0);
    Vec2::new(x, y)
}

/// NDC to window position
pub(crate) fn ndc_to_screen(ndc: Vec2, screen: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        screen.left() + (ndc.x + 1.0) * 0.5 * screen.width(),
        screen.top() + (1.0 - ndc.y) * 0.5 * screen.height(),
    )
}

impl eframe::App for StarfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The starfield animates continuously
        ctx.request_repaint();

        let now = now_seconds();
        let dt = self.clock.tick(now) as f32;
        self.step(ctx, dt);

        self.draw_scene(ctx, now);

        egui::TopBottomPanel::top("nav")
            .frame(egui::Frame::new().fill(crate::theme::colors::BG_NAV).inner_margin(6.0))
            .show(ctx, |ui| self.render_nav(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.render_sections(ui, now));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_ndc_round_trip() {
        let screen = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
        assert_eq!(screen_to_ndc(egui::pos2(400.0, 300.0), screen), Vec2::ZERO);
        assert_eq!(screen_to_ndc(egui::pos2(800.0, 0.0), screen), Vec2::new(1.0, 1.0));
        let back = ndc_to_screen(Vec2::new(-0.5, 0.25), screen);
        assert!((back.x - 200.0).abs() < 1e-4);
        assert!((back.y - 225.0).abs() < 1e-4);
    }

    #[test]
    fn app_builds_with_seeded_config() {
        let config = ConstellationConfig {
            seed: Some(4),
            ..Default::default()
        };
        let app = StarfolioApp::with_config(config);
        assert_eq!(app.constellation.field().len(), 50);
        assert_eq!(app.shell.len(), 2000);
        assert_eq!(app.reveals.len(), Section::ALL.len());
        assert!(!app.portfolio.projects.is_empty());
    }
}
