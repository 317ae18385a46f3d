use std::collections::HashSet;

use eframe::egui::{Pos2, Rect, Ui, Vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::constellation::Badge;

use super::super::ViewModel;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

/// Ids of the badges whose label matches `query`; `None` while no search is active.
pub(super) fn search_matches(badges: &[Badge<'_>], query: &str) -> Option<HashSet<usize>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    Some(
        badges
            .iter()
            .filter(|badge| fuzzy_match_score(&matcher, badge.label, query).is_some())
            .map(|badge| badge.id)
            .collect(),
    )
}

/// Topmost badge under `pointer`, given in viewport-local coordinates.
pub(super) fn hovered_badge(badges: &[Badge<'_>], pointer: Vec2) -> Option<usize> {
    badges
        .iter()
        .rev()
        .find(|badge| (badge.center - pointer).length() <= badge.drawn_radius())
        .map(|badge| badge.id)
}

impl ViewModel {
    /// Feeds the latest pointer position into the constellation. While the
    /// pointer is outside the window the last position is kept.
    pub(in crate::app) fn track_pointer(&mut self, ui: &Ui, rect: Rect) {
        let pointer: Option<Pos2> = ui.input(|input| input.pointer.hover_pos());
        if let Some(pointer) = pointer {
            self.constellation.track_pointer(pointer, rect.min);
        }
    }
}
