use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use crate::constellation::{Initialization, Viewport};

use super::super::ViewModel;
use super::super::render_utils::{
    ACCENT, blend_color, dim_color, draw_background, draw_glow, kind_color, kind_glow, to_screen,
    with_alpha,
};
use super::interaction::{hovered_badge, search_matches};

impl ViewModel {
    pub(in crate::app) fn draw_constellation(&mut self, ui: &mut Ui) {
        let available = ui.available_size();
        let side = available.x.min(available.y).max(0.0);
        let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::hover());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.dark_mode);

        let viewport = Viewport::new(rect.width(), rect.height());
        let layout = self.constellation.ensure_initialized(viewport, &mut self.rng);
        if layout == Initialization::Deferred {
            ui.ctx().request_repaint();
            return;
        }

        if self.constellation.skills().is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No skills listed in the portfolio.",
                FontId::proportional(14.0),
                Color32::from_gray(150),
            );
            return;
        }

        self.track_pointer(ui, rect);

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        if !self.paused {
            self.constellation.step(viewport, frame_delta_seconds);
            ui.ctx().request_repaint();
        } else if std::mem::take(&mut self.step_once) {
            self.constellation.tick(viewport);
        }

        let dark_mode = self.dark_mode;
        let scene = self.constellation.snapshot();
        let matches = search_matches(&scene.badges, &self.search);
        let hovered = if response.hovered() {
            hovered_badge(&scene.badges, self.constellation.pointer())
        } else {
            None
        };

        draw_glow(
            &painter,
            to_screen(rect, scene.glow.center),
            scene.glow.radius,
            ACCENT,
            0.3,
        );

        for link in &scene.links {
            painter.line_segment(
                [to_screen(rect, link.start), to_screen(rect, link.end)],
                Stroke::new(1.0, with_alpha(ACCENT, link.alpha)),
            );
        }

        let label_color = if dark_mode {
            Color32::from_rgb(216, 180, 254)
        } else {
            Color32::from_rgb(88, 28, 135)
        };

        for badge in &scene.badges {
            let center = to_screen(rect, badge.center);
            let radius = badge.drawn_radius();
            let is_match = matches.as_ref().is_some_and(|ids| ids.contains(&badge.id));
            let search_active = matches.as_ref().is_some_and(|ids| !ids.is_empty());

            if badge.nearby {
                draw_glow(&painter, center, radius * 1.35, kind_glow(badge.kind), 0.7);
            }

            let mut fill = kind_color(badge.kind);
            if is_match {
                fill = blend_color(fill, kind_glow(badge.kind), 0.55);
            } else if search_active {
                fill = dim_color(fill, 0.45);
            }

            // The disc fills 70% of the badge; the rest is room for the glow.
            let disc_radius = radius * 0.7;
            painter.circle_filled(center, disc_radius, fill);
            painter.circle_stroke(
                center,
                disc_radius,
                Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 255, 255, 26)),
            );
            if is_match {
                painter.circle_stroke(
                    center,
                    disc_radius + 4.0,
                    Stroke::new(1.6, kind_glow(badge.kind)),
                );
            }

            painter.text(
                center,
                Align2::CENTER_CENTER,
                initials(badge.label),
                FontId::proportional((disc_radius * 0.55).clamp(9.0, 22.0)),
                Color32::from_rgba_unmultiplied(255, 255, 255, 230),
            );

            if badge.label_visible || hovered == Some(badge.id) || is_match {
                painter.text(
                    center + vec2(0.0, radius + 6.0),
                    Align2::CENTER_TOP,
                    badge.label,
                    FontId::proportional(12.0),
                    label_color,
                );
            }
        }

        let link_count = scene.links.len();
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
        self.link_count = link_count;
    }
}

fn initials(label: &str) -> String {
    let words = label
        .split(|ch: char| ch.is_whitespace() || ch == '.' || ch == '-' || ch == '/')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();

    match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_two_characters() {
        assert_eq!(initials("Rust"), "Ru");
        assert_eq!(initials("Node.js"), "Nj");
        assert_eq!(initials("Machine Learning"), "ML");
        assert_eq!(initials("C"), "C");
        assert_eq!(initials(""), "");
    }
}
