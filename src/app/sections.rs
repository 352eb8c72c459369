//! Page sections: hero, about, projects, research, experience, skills

use eframe::egui;

use super::StarfolioApp;
use crate::core::content::{Experience, Project, Research};
use crate::core::palette::{card_gradient, tech_color};
use crate::core::reveal::{
    Reveal, CARD_DURATION, CARD_STAGGER, SECTION_DURATION, TAG_DURATION, TAG_STAGGER,
    TIMELINE_DURATION, TIMELINE_STAGGER,
};
use crate::core::Section;
use crate::theme::{colors, rgb_alpha};

const CONTENT_WIDTH: f32 = 1100.0;
const CARD_WIDTH: f32 = 340.0;

fn mix(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        lerp(a.r(), b.r()),
        lerp(a.g(), b.g()),
        lerp(a.b(), b.b()),
        lerp(a.a(), b.a()),
    )
}

/// Hover state from the previous frame, animated
fn hover_anim(ui: &egui::Ui, id: egui::Id) -> f32 {
    let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    ui.ctx().animate_bool_with_time(id.with("anim"), was_hovered, 0.3)
}

fn store_hover(ui: &egui::Ui, id: egui::Id, rect: egui::Rect) {
    let hovered = ui.rect_contains_pointer(rect);
    ui.ctx().data_mut(|d| d.insert_temp(id, hovered));
}

fn pill(ui: &mut egui::Ui, text: &str, color: egui::Color32, emphasis: f32) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.4 + 0.6 * emphasis)))
        .fill(color.gamma_multiply(0.05 + 0.1 * emphasis))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(colors::TEXT_PRIMARY));
        });
}

impl StarfolioApp {
    pub(crate) fn render_sections(&mut self, ui: &mut egui::Ui, now: f64) {
        let side = ((ui.available_width() - CONTENT_WIDTH) * 0.5).max(16.0);
        ui.horizontal(|ui| {
            ui.add_space(side);
            ui.vertical(|ui| {
                ui.set_max_width(CONTENT_WIDTH.min(ui.available_width() - side));
                self.render_hero(ui, now);
                self.section(ui, Section::Intro, now, Self::render_about);
                self.section(ui, Section::Projects, now, Self::render_projects);
                self.section(ui, Section::Ongoing, now, Self::render_research);
                self.section(ui, Section::Internship, now, Self::render_experience);
                self.section(ui, Section::TechStack, now, Self::render_skills);
                ui.add_space(80.0);
                self.render_footer(ui);
            });
        });
    }

    fn render_hero(&self, ui: &mut egui::Ui, now: f64) {
        ui.add_space(ui.ctx().screen_rect().height() * 0.3);
        ui.label(
            egui::RichText::new(&self.portfolio.name)
                .size(56.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        let subtitles = &self.portfolio.subtitles;
        if !subtitles.is_empty() {
            let idx = self.rotator.index_at(self.elapsed(now), subtitles.len());
            ui.label(
                egui::RichText::new(&subtitles[idx])
                    .size(28.0)
                    .color(colors::CYAN),
            );
        }
        if !self.portfolio.tagline.is_empty() {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&self.portfolio.tagline).color(colors::TEXT_BODY));
        }
        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 18.0;
            for link in &self.portfolio.social {
                ui.hyperlink_to(
                    egui::RichText::new(&link.label).color(colors::CYAN),
                    &link.url,
                );
            }
        });
        ui.add_space(ui.ctx().screen_rect().height() * 0.3);
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        if self.portfolio.footer.is_empty() {
            return;
        }
        ui.separator();
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(self.portfolio.footer_line(current_year()))
                    .small()
                    .color(colors::TEXT_MUTED),
            );
        });
        ui.add_space(24.0);
    }

    /// Heading, scroll target and reveal bookkeeping shared by every section
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        section: Section,
        now: f64,
        add_contents: fn(&Self, &mut egui::Ui, Reveal, f64),
    ) {
        ui.add_space(48.0);
        let heading = ui.label(
            egui::RichText::new(section.heading())
                .size(34.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        if self.scroll_target == Some(section) {
            heading.scroll_to_me(Some(egui::Align::TOP));
            self.scroll_target = None;
        }

        let visible = ui.is_rect_visible(heading.rect);
        let reveal = self.reveals.entry(section).or_default();
        reveal.observe(visible, now);
        let reveal = *reveal;

        ui.add_space(16.0);
        ui.scope(|ui| {
            ui.multiply_opacity(reveal.progress(now, 0.0, SECTION_DURATION));
            add_contents(self, ui, reveal, now);
        });
    }

    fn render_about(&self, ui: &mut egui::Ui, _reveal: Reveal, _now: f64) {
        let last = self.portfolio.about.len().saturating_sub(1);
        for (i, paragraph) in self.portfolio.about.iter().enumerate() {
            let text = egui::RichText::new(paragraph).size(17.0);
            // Closing line is the signature
            let text = if i == last { text.italics().color(colors::CYAN) } else { text };
            ui.label(text);
            ui.add_space(8.0);
        }
    }

    fn render_projects(&self, ui: &mut egui::Ui, reveal: Reveal, now: f64) {
        let columns = ((ui.available_width() / CARD_WIDTH) as usize).max(1);
        let projects = &self.portfolio.projects;
        ui.columns(columns, |cols| {
            for (i, project) in projects.iter().enumerate() {
                let ui = &mut cols[i % columns];
                let progress = reveal.progress(now, i as f64 * CARD_STAGGER, CARD_DURATION);
                ui.scope(|ui| {
                    ui.multiply_opacity(progress);
                    ui.add_space((1.0 - progress) * 50.0);
                    project_card(ui, i, project, |j| reveal.card_pill_progress(now, i, j));
                });
                ui.add_space(16.0);
            }
        });
    }

    fn render_research(&self, ui: &mut egui::Ui, _reveal: Reveal, _now: f64) {
        for (i, research) in self.portfolio.research.iter().enumerate() {
            research_card(ui, i, research);
            ui.add_space(12.0);
        }
    }

    fn render_experience(&self, ui: &mut egui::Ui, reveal: Reveal, now: f64) {
        for (i, exp) in self.portfolio.experience.iter().enumerate() {
            let progress = reveal.progress(now, i as f64 * TIMELINE_STAGGER, TIMELINE_DURATION);
            ui.scope(|ui| {
                ui.multiply_opacity(progress);
                timeline_item(ui, exp, (1.0 - progress) * -20.0);
            });
        }
    }

    fn render_skills(&self, ui: &mut egui::Ui, reveal: Reveal, now: f64) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            for (i, skill) in self.portfolio.skills.iter().enumerate() {
                let progress = reveal.progress(now, i as f64 * TAG_STAGGER, TAG_DURATION);
                let id = ui.id().with(("skill", i));
                let hover = hover_anim(ui, id);
                let response = ui
                    .scope(|ui| {
                        ui.multiply_opacity(progress);
                        pill(ui, skill, mix(colors::TEXT_MUTED, colors::CYAN, hover), hover);
                    })
                    .response;
                store_hover(ui, id, response.rect);
            }
        });
    }
}

/// `pill_progress(j)` is the reveal progress of the card's j-th tech pill
fn project_card(
    ui: &mut egui::Ui,
    index: usize,
    project: &Project,
    pill_progress: impl Fn(usize) -> f32,
) {
    let id = ui.id().with(("project", index));
    let hover = hover_anim(ui, id);
    let gradient = card_gradient(project.tech_stack.as_slice()).map(|c| rgb_alpha(c, 1.0));
    let border = mix(colors::CYAN.gamma_multiply(0.3), gradient[0], hover);

    let response = egui::Frame::new()
        .fill(colors::BG_GLASS)
        .stroke(egui::Stroke::new(1.5, border))
        .corner_radius(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new(&project.title)
                    .size(22.0)
                    .strong()
                    .color(mix(colors::CYAN, colors::TEXT_PRIMARY, hover)),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(&project.description)
                    .color(mix(colors::TEXT_BODY, colors::TEXT_PRIMARY, hover)),
            );
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                for (j, tech) in project.visible_tech().iter().enumerate() {
                    ui.scope(|ui| {
                        ui.multiply_opacity(pill_progress(j));
                        pill(ui, tech, rgb_alpha(tech_color(tech), 1.0), hover);
                    });
                }
            });
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if let Some(link) = &project.live_link {
                    ui.hyperlink_to("Live Demo", link);
                }
                if let Some(link) = &project.github_link {
                    ui.hyperlink_to(
                        egui::RichText::new("GitHub").color(colors::MAGENTA),
                        link,
                    );
                }
            });
        })
        .response;

    // Outer glow in the second and third tech colours
    if hover > 0.0 {
        let painter = ui.painter();
        for (i, color) in gradient[1..].iter().enumerate() {
            painter.rect_stroke(
                response.rect.expand(2.0 + 2.0 * i as f32),
                12.0,
                egui::Stroke::new(1.0, color.gamma_multiply(0.4 * hover)),
                egui::StrokeKind::Outside,
            );
        }
    }
    store_hover(ui, id, response.rect);
}

/// Calendar year for the footer, from the browser clock
#[cfg(target_arch = "wasm32")]
fn current_year() -> Option<i32> {
    Some(js_sys::Date::new_0().get_full_year() as i32)
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> Option<i32> {
    None
}

fn research_card(ui: &mut egui::Ui, index: usize, research: &Research) {
    let id = ui.id().with(("research", index));
    let hover = hover_anim(ui, id);
    let response = egui::Frame::new()
        .fill(colors::BG_GLASS)
        .stroke(egui::Stroke::new(
            1.0,
            mix(colors::BORDER, colors::VIOLET, hover),
        ))
        .corner_radius(10.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new(&research.title)
                    .size(19.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(4.0);
            ui.label(&research.description);
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for tag in &research.tags {
                    pill(ui, tag, colors::VIOLET, hover);
                }
            });
        })
        .response;
    store_hover(ui, id, response.rect);
}

fn timeline_item(ui: &mut egui::Ui, exp: &Experience, x_offset: f32) {
    ui.horizontal(|ui| {
        ui.add_space(24.0 + x_offset.max(-20.0));
        let (dot_rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        ui.painter().circle_filled(dot_rect.center(), 6.0, colors::CYAN);
        ui.add_space(12.0);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(exp.heading())
                    .size(20.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            for point in &exp.points {
                ui.label(format!("• {point}"));
            }
        });
    });
}
