//! Background layer: star shell, constellation points and fading lines

use eframe::egui;
use glam::Vec3;

use super::{ndc_to_screen, StarfolioApp};
use crate::core::camera::project_with;
use crate::theme::{colors, rgb_alpha};

/// Star shell sizes are in shader units; scale down to screen pixels
const STAR_PIXEL_SCALE: f32 = 0.06;

impl StarfolioApp {
    pub(crate) fn draw_scene(&self, ctx: &egui::Context, now: f64) {
        let painter = ctx.layer_painter(egui::LayerId::background());
        let screen = ctx.screen_rect();
        painter.rect_filled(screen, 0.0, colors::BG_SPACE);

        let aspect = screen.width() / screen.height().max(1.0);
        let view_proj = self.camera.view_proj(aspect);
        let on_screen = |world: Vec3| {
            project_with(&view_proj, world)
                .filter(|ndc| ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0)
                .map(|ndc| ndc_to_screen(ndc, screen))
        };

        // Distant stars: white, twinkling
        let t = now as f32;
        for star in self.shell.stars() {
            let Some(pos) = on_screen(star.position) else {
                continue;
            };
            let ppu = self.camera.pixels_per_unit(star.position, screen.height());
            let radius = (star.size * STAR_PIXEL_SCALE * ppu * 10.0).clamp(0.4, 2.0);
            let alpha = (self.shell.twinkle(star, t) * 220.0) as u8;
            painter.circle_filled(pos, radius, egui::Color32::from_white_alpha(alpha));
        }

        let frame = self.constellation.render_frame();

        // Lines under points
        for line in &frame.lines {
            let start = project_with(&view_proj, Vec3::from_array(line.start));
            let end = project_with(&view_proj, Vec3::from_array(line.end));
            if let (Some(a), Some(b)) = (start, end) {
                painter.line_segment(
                    [ndc_to_screen(a, screen), ndc_to_screen(b, screen)],
                    egui::Stroke::new(line.width, rgb_alpha(line.color, line.opacity)),
                );
            }
        }

        let color = rgb_alpha(frame.points.color, frame.points.opacity);
        for xyz in frame.points.positions.chunks_exact(3) {
            let world = Vec3::new(xyz[0], xyz[1], xyz[2]);
            let Some(pos) = on_screen(world) else {
                continue;
            };
            let ppu = self.camera.pixels_per_unit(world, screen.height());
            let radius = (frame.points.size * 0.5 * ppu).max(1.0);
            painter.circle_filled(pos, radius, color);
        }
    }
}
