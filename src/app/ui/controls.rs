use eframe::egui::{self, Ui};

use crate::constellation::ConstellationConfig;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Constellation");
        ui.label(format!(
            "Animating {} of {} skills (limit {}).",
            self.constellation.skills().len(),
            self.portfolio.skills.all_skills().count(),
            self.max_skills
        ));
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.paused, "Pause");
            if ui
                .add_enabled(self.paused, egui::Button::new("Step"))
                .on_hover_text("Advance one frame")
                .clicked()
            {
                self.step_once = true;
            }
            if ui
                .button("Scatter")
                .on_hover_text("Lay the skills out again at random")
                .clicked()
            {
                self.scatter();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Find skill");
            ui.add(egui::TextEdit::singleline(&mut self.search).hint_text("e.g. rust"));
            if !self.search.is_empty() && ui.small_button("x").clicked() {
                self.search.clear();
            }
        });

        ui.add_space(6.0);
        let mut config = self.config;
        let mut changed = false;
        changed |= ui
            .add(egui::Slider::new(&mut config.repel_radius, 40.0..=300.0).text("pointer radius"))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut config.repulsion_strength, 0.0..=3.0)
                    .text("repulsion strength"),
            )
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut config.damping, 0.80..=0.995).text("damping"))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut config.connection_radius, 40.0..=260.0)
                    .text("connection radius"),
            )
            .changed();

        if ui.button("Reset physics").clicked() {
            config = ConstellationConfig::default();
            changed = true;
        }

        if changed {
            self.config = config.sanitized();
            self.constellation.set_config(self.config);
        }
    }
}
