use eframe::egui::{self, Context, Key, RichText, Ui};

use crate::chat::ChatRole;

use super::super::ViewModel;
use super::super::render_utils::ACCENT;

impl ViewModel {
    pub(in crate::app) fn poll_chat(&mut self, ctx: &Context) {
        self.chat.poll();
        if self.chat.is_waiting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    pub(in crate::app) fn draw_chat(&mut self, ui: &mut Ui) {
        ui.heading(format!("Ask {}", self.portfolio.display_name()));
        ui.separator();

        let input_height = 64.0;
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .max_height((ui.available_height() - input_height).max(80.0))
            .show(ui, |ui| {
                for message in self.chat.messages() {
                    let text = match (message.role, message.failed) {
                        (ChatRole::User, _) => RichText::new(&message.text),
                        (ChatRole::Assistant, false) => RichText::new(&message.text).color(ACCENT),
                        (ChatRole::Assistant, true) => {
                            RichText::new(&message.text).color(ui.visuals().error_fg_color)
                        }
                    };
                    let prefix = match message.role {
                        ChatRole::User => "You",
                        ChatRole::Assistant => "Assistant",
                    };
                    ui.label(RichText::new(prefix).small().weak());
                    ui.label(text);
                    ui.add_space(6.0);
                }
                if self.chat.is_waiting() {
                    ui.spinner();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text("Ask about skills, projects...")
                    .desired_width(ui.available_width() - 60.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));
            let clicked = ui
                .add_enabled(!self.chat.is_waiting(), egui::Button::new("Send"))
                .clicked();

            if (submitted || clicked) && self.chat.submit(&self.chat_input) {
                self.chat_input.clear();
                response.request_focus();
            }
        });
    }
}
