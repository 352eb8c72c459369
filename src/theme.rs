//! Deep-space neon theme: near-black background, cyan and violet accents

use egui::Color32;

use crate::core::palette::Rgb;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_SPACE: Color32 = Color32::from_rgb(5, 5, 5);             // #050505 - canvas
    pub const BG_GLASS: Color32 = Color32::from_rgba_premultiplied(10, 12, 20, 170); // card glass
    pub const BG_NAV: Color32 = Color32::from_rgba_premultiplied(5, 5, 10, 200);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_BODY: Color32 = Color32::from_rgb(176, 176, 176);      // #b0b0b0
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 120);

    // === Accents ===
    pub const CYAN: Color32 = Color32::from_rgb(0, 240, 255);             // #00f0ff - stars, glow
    pub const VIOLET: Color32 = Color32::from_rgb(112, 0, 255);           // #7000ff - lines
    pub const MAGENTA: Color32 = Color32::from_rgb(189, 0, 255);          // GitHub button glow

    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 56);
}

/// Convert a core colour with an opacity in [0, 1]
pub fn rgb_alpha(rgb: Rgb, opacity: f32) -> Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, a)
}

/// egui Visuals for the site
pub fn space_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    // Panels are transparent so the starfield shows through
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = BG_GLASS;
    visuals.extreme_bg_color = BG_SPACE;
    visuals.faint_bg_color = BG_GLASS;

    visuals.override_text_color = Some(TEXT_BODY);

    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_BODY);

    visuals.widgets.inactive.bg_fill = Color32::TRANSPARENT;
    visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, CYAN.gamma_multiply(0.4));

    visuals.widgets.hovered.weak_bg_fill = CYAN.gamma_multiply(0.12);
    visuals.widgets.hovered.bg_fill = CYAN.gamma_multiply(0.12);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, CYAN);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, CYAN);

    visuals.widgets.active.weak_bg_fill = VIOLET.gamma_multiply(0.3);
    visuals.widgets.active.bg_fill = VIOLET.gamma_multiply(0.3);
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.selection.bg_fill = VIOLET.gamma_multiply(0.5);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.hyperlink_color = CYAN;

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
