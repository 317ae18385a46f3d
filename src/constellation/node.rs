use std::ops::Range;

use eframe::egui::{Vec2, vec2};
use rand::Rng;

use super::style::SkillKind;
use super::{NODE_DIAMETER, Viewport};

const SIZE_RANGE: Range<f32> = 0.7..1.3;
const INITIAL_SPEED: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
    id: usize,
    label: String,
    kind: SkillKind,
    size: f32,
    pub(super) position: Vec2,
    pub(super) velocity: Vec2,
}

impl SkillNode {
    pub fn new(
        id: usize,
        label: impl Into<String>,
        position: Vec2,
        velocity: Vec2,
        size: f32,
    ) -> Self {
        let label = label.into();
        Self {
            id,
            kind: SkillKind::classify(&label),
            label,
            size: size.clamp(SIZE_RANGE.start, SIZE_RANGE.end),
            position,
            velocity,
        }
    }

    pub(super) fn spawn<R: Rng + ?Sized>(
        id: usize,
        label: String,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let size = rng.gen_range(SIZE_RANGE);
        let radius = NODE_DIAMETER * size * 0.5;
        let (x_low, x_high) = Viewport::axis_bounds(viewport.width, radius);
        let (y_low, y_high) = Viewport::axis_bounds(viewport.height, radius);

        let position = vec2(rng.gen_range(x_low..=x_high), rng.gen_range(y_low..=y_high));
        let velocity = vec2(
            rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED),
            rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED),
        );

        Self::new(id, label, position, velocity, size)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> SkillKind {
        self.kind
    }

    /// Visual scale, and the inverse of how strongly the pointer pushes this node.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn radius(&self) -> f32 {
        NODE_DIAMETER * self.size * 0.5
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn spawned_nodes_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let viewport = Viewport::new(600.0, 400.0);

        for id in 0..200 {
            let node = SkillNode::spawn(id, format!("s{id}"), viewport, &mut rng);
            assert!(SIZE_RANGE.contains(&node.size()));
            assert!(node.velocity().x.abs() <= INITIAL_SPEED);
            assert!(node.velocity().y.abs() <= INITIAL_SPEED);

            let radius = node.radius();
            assert!(node.position().x >= radius && node.position().x <= 600.0 - radius);
            assert!(node.position().y >= radius && node.position().y <= 400.0 - radius);
        }
    }

    #[test]
    fn spawn_in_a_tiny_viewport_centres_the_node() {
        let mut rng = StdRng::seed_from_u64(8);
        let node = SkillNode::spawn(0, "Rust".to_owned(), Viewport::new(20.0, 30.0), &mut rng);
        assert_eq!(node.position(), vec2(10.0, 15.0));
    }

    #[test]
    fn radius_follows_size() {
        let node = SkillNode::new(0, "Rust", Vec2::ZERO, Vec2::ZERO, 1.0);
        assert_eq!(node.radius(), 32.0);
        assert_eq!(node.kind(), SkillKind::Backend);
    }
}
