//! Fixed navigation bar

use eframe::egui;

use super::StarfolioApp;
use crate::theme::colors;

impl StarfolioApp {
    pub(crate) fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&self.portfolio.name)
                    .color(colors::CYAN)
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // right_to_left: iterate in reverse so the bar reads in page order
                for item in self.portfolio.nav.iter().rev() {
                    let button = egui::Button::new(
                        egui::RichText::new(&item.label).color(colors::TEXT_PRIMARY),
                    )
                    .frame(false);
                    if ui.add(button).clicked() {
                        self.scroll_target = Some(item.id);
                    }
                }
            });
        });
    }
}
