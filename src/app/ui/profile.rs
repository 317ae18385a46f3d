use eframe::egui::{RichText, Ui};

use crate::constellation::SkillKind;

use super::super::ViewModel;
use super::super::render_utils::{ACCENT, kind_glow};

impl ViewModel {
    pub(in crate::app) fn draw_profile(&self, ui: &mut Ui) {
        let portfolio = &self.portfolio;

        if !portfolio.bio.is_empty() {
            ui.heading("About");
            ui.label(&portfolio.bio);
            ui.add_space(8.0);
        }

        let contact = &portfolio.contact;
        ui.heading("Contact");
        if !contact.email.is_empty() {
            ui.hyperlink_to(&contact.email, format!("mailto:{}", contact.email));
        }
        if !contact.linkedin.is_empty() {
            ui.hyperlink_to("LinkedIn", &contact.linkedin);
        }
        if !contact.github.is_empty() {
            ui.hyperlink_to("GitHub", &contact.github);
        }
        if !contact.phone.is_empty() {
            ui.label(&contact.phone);
        }
        if !contact.location.is_empty() {
            ui.label(RichText::new(&contact.location).weak());
        }
        ui.add_space(8.0);

        if !portfolio.skills.is_empty() {
            ui.heading("Skills");
        }
        for category in portfolio.skills.iter() {
            ui.label(RichText::new(&category.name).strong().color(ACCENT));
            ui.horizontal_wrapped(|ui| {
                for skill in &category.skills {
                    let kind = SkillKind::classify(skill);
                    ui.label(RichText::new(skill).color(kind_glow(kind)))
                        .on_hover_text(kind.name());
                }
            });
            ui.add_space(4.0);
        }

        if !portfolio.experience.is_empty() {
            ui.add_space(4.0);
            ui.heading("Experience");
            for entry in &portfolio.experience {
                ui.label(RichText::new(format!("{} · {}", entry.role, entry.company)).strong());
                ui.label(RichText::new(&entry.duration).weak());
                if !entry.description.is_empty() {
                    ui.label(&entry.description);
                }
                ui.add_space(6.0);
            }
        }

        if !portfolio.projects.is_empty() {
            ui.heading("Projects");
            for project in &portfolio.projects {
                ui.label(RichText::new(&project.title).strong());
                if !project.description.is_empty() {
                    ui.label(&project.description);
                }
                if !project.contribution.is_empty() {
                    ui.label(RichText::new(&project.contribution).italics());
                }
                if !project.technologies.is_empty() {
                    ui.label(RichText::new(project.technologies.join(" · ")).weak());
                }
                ui.horizontal(|ui| {
                    if let Some(url) = &project.live_url {
                        ui.hyperlink_to("Live", url);
                    }
                    if let Some(url) = &project.repo_url {
                        ui.hyperlink_to("Code", url);
                    }
                });
                ui.add_space(6.0);
            }
        }

        if !portfolio.education.is_empty() {
            ui.heading("Education");
            for entry in &portfolio.education {
                ui.label(RichText::new(&entry.degree).strong());
                ui.label(format!("{} ({})", entry.institution, entry.duration));
                ui.add_space(4.0);
            }
        }
    }
}
