use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::constellation::SkillKind;

pub(super) const ACCENT: Color32 = Color32::from_rgb(168, 85, 247);

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

pub(super) fn kind_color(kind: SkillKind) -> Color32 {
    match kind {
        SkillKind::Frontend => Color32::from_rgb(22, 78, 99),
        SkillKind::Backend => Color32::from_rgb(49, 46, 129),
        SkillKind::Data => Color32::from_rgb(20, 83, 45),
        SkillKind::Cloud => Color32::from_rgb(120, 53, 15),
        SkillKind::Systems => Color32::from_rgb(76, 29, 149),
        SkillKind::Other => Color32::from_rgb(51, 65, 85),
    }
}

pub(super) fn kind_glow(kind: SkillKind) -> Color32 {
    match kind {
        SkillKind::Frontend => Color32::from_rgb(6, 182, 212),
        SkillKind::Backend => Color32::from_rgb(99, 102, 241),
        SkillKind::Data => Color32::from_rgb(34, 197, 94),
        SkillKind::Cloud => Color32::from_rgb(245, 158, 11),
        SkillKind::Systems => Color32::from_rgb(139, 92, 246),
        SkillKind::Other => Color32::from_rgb(100, 116, 139),
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, dark_mode: bool) {
    let (fill, grid) = if dark_mode {
        (
            Color32::from_rgb(17, 24, 39),
            Color32::from_rgba_unmultiplied(168, 85, 247, 18),
        )
    } else {
        (
            Color32::from_rgb(255, 255, 255),
            Color32::from_rgba_unmultiplied(168, 85, 247, 26),
        )
    };
    painter.rect_filled(rect, 16.0, fill);

    let step = 48.0;
    let mut x = rect.left() + step;
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, grid),
        );
        x += step;
    }

    let mut y = rect.top() + step;
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, grid),
        );
        y += step;
    }
}

/// Approximates a radial gradient with stacked translucent discs.
pub(super) fn draw_glow(
    painter: &Painter,
    center: Pos2,
    radius: f32,
    color: Color32,
    peak_alpha: f32,
) {
    const RINGS: usize = 12;

    for ring in 0..RINGS {
        let t = ring as f32 / RINGS as f32;
        let ring_radius = radius * (1.0 - t);
        painter.circle_filled(
            center,
            ring_radius,
            with_alpha(color, peak_alpha / RINGS as f32),
        );
    }
}

pub(super) fn to_screen(rect: Rect, local: Vec2) -> Pos2 {
    rect.min + local
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    #[test]
    fn blend_is_linear_and_clamped() {
        let black = Color32::from_rgb(0, 0, 0);
        let white = Color32::from_rgb(255, 255, 255);
        assert_eq!(blend_color(black, white, 0.0), black);
        assert_eq!(blend_color(black, white, 2.0), white);
        assert_eq!(blend_color(black, white, 0.5).r(), 127);
    }

    #[test]
    fn with_alpha_maps_unit_range_to_bytes() {
        assert_eq!(with_alpha(ACCENT, 0.4).a(), 102);
        assert_eq!(with_alpha(ACCENT, -1.0).a(), 0);
        assert_eq!(with_alpha(ACCENT, 1.0).a(), 255);
    }

    #[test]
    fn local_coordinates_are_offset_by_the_rect_origin() {
        let rect = Rect::from_min_size(pos2(40.0, 60.0), vec2(600.0, 600.0));
        assert_eq!(to_screen(rect, vec2(10.0, 20.0)), pos2(50.0, 80.0));
    }
}
