use eframe::egui::{self, Align, Context, Layout, RichText};

use crate::util::{TYPING_CHAR_INTERVAL_SECS, TYPING_START_DELAY_SECS, typed_prefix, typing_finished};

use super::super::render_utils::ACCENT;
use super::super::{LaunchOptions, ViewModel};

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        options: &LaunchOptions,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        self.update_fps_counter(ctx);
        self.poll_chat(ctx);

        let now = ctx.input(|input| input.time);
        let opened_at = *self.opened_at.get_or_insert(now);
        let elapsed = now - opened_at;

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(self.portfolio.display_name());
                    ui.separator();

                    let role = typed_prefix(
                        &self.portfolio.role,
                        elapsed,
                        TYPING_CHAR_INTERVAL_SECS,
                        TYPING_START_DELAY_SECS,
                    );
                    ui.label(RichText::new(role).color(ACCENT).strong());
                    if !typing_finished(&self.portfolio.role, elapsed) {
                        ui.ctx().request_repaint();
                    }

                    ui.separator();
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload portfolio"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    let theme_label = if self.dark_mode { "Light mode" } else { "Dark mode" };
                    if ui.button(theme_label).clicked() {
                        self.dark_mode = !self.dark_mode;
                        ui.ctx().set_visuals(if self.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                    }
                    ui.toggle_value(&mut self.show_chat, "Chat");

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.scene_stats_text());
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                        }
                        ui.label(
                            RichText::new(options.portfolio_path.display().to_string()).weak(),
                        );
                    });
                });
            });

        egui::SidePanel::left("profile")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_controls(ui);
                    ui.separator();
                    self.draw_profile(ui);
                });
            });

        if self.show_chat {
            egui::SidePanel::right("chat")
                .resizable(true)
                .default_width(340.0)
                .show(ctx, |ui| self.draw_chat(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Expertise").color(ACCENT).strong());
                ui.heading("Technical Arsenal");
                ui.add_space(8.0);
                self.draw_constellation(ui);
            });
        });
    }
}
