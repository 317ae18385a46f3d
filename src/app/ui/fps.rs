use eframe::egui::Context;

use super::super::ViewModel;

const FPS_SAMPLE_WINDOW: usize = 180;

impl ViewModel {
    pub(in crate::app) fn update_fps_counter(&mut self, ctx: &Context) {
        let dt = ctx.input(|input| input.stable_dt);
        if dt <= f32::EPSILON {
            return;
        }

        self.fps_current = (1.0 / dt).clamp(0.0, 1000.0);
        self.fps_samples.push_back(self.fps_current);
        while self.fps_samples.len() > FPS_SAMPLE_WINDOW {
            self.fps_samples.pop_front();
        }
    }

    pub(in crate::app) fn fps_display_text(&self) -> Option<String> {
        if self.fps_samples.is_empty() {
            return None;
        }

        let average = self.fps_samples.iter().sum::<f32>() / self.fps_samples.len() as f32;
        let mut text = format!("FPS {:.0} | avg {:.1}", self.fps_current, average);
        if self.fps_current > f32::EPSILON {
            text.push_str(&format!(" | {:.1} ms", 1000.0 / self.fps_current));
        }
        Some(text)
    }

    pub(in crate::app) fn scene_stats_text(&self) -> String {
        if !self.constellation.is_ready() {
            return "laying out skills...".to_owned();
        }
        let nodes = self.constellation.nodes();
        let mean_speed = if nodes.is_empty() {
            0.0
        } else {
            nodes.iter().map(|node| node.velocity().length()).sum::<f32>() / nodes.len() as f32
        };
        format!(
            "{} skills / {} links / speed {:.2}",
            nodes.len(),
            self.link_count,
            mean_speed
        )
    }
}
