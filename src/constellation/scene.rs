use eframe::egui::Vec2;

use super::{ConstellationConfig, SkillKind, SkillNode};

/// Everything needed to draw one frame, in viewport-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<'a> {
    pub glow: Glow,
    pub links: Vec<Link>,
    pub badges: Vec<Badge<'a>>,
}

/// Soft halo that follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub start: Vec2,
    pub end: Vec2,
    /// 0.0 at the connection radius, `link_alpha` when the nodes touch.
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Badge<'a> {
    pub id: usize,
    pub label: &'a str,
    pub kind: SkillKind,
    pub center: Vec2,
    pub radius: f32,
    pub scale: f32,
    pub nearby: bool,
    pub label_visible: bool,
}

impl Badge<'_> {
    pub fn drawn_radius(&self) -> f32 {
        self.radius * self.scale
    }
}

pub(super) fn project<'a>(
    nodes: &'a [SkillNode],
    pointer: Vec2,
    config: ConstellationConfig,
) -> Scene<'a> {
    let mut links = Vec::new();
    for (index, first) in nodes.iter().enumerate() {
        for second in &nodes[index + 1..] {
            let distance = (first.position() - second.position()).length();
            if distance < config.connection_radius {
                links.push(Link {
                    from: first.id(),
                    to: second.id(),
                    start: first.position(),
                    end: second.position(),
                    alpha: config.link_alpha * (1.0 - distance / config.connection_radius),
                });
            }
        }
    }

    let badges = nodes
        .iter()
        .map(|node| {
            let pointer_distance = (node.position() - pointer).length();
            let nearby = pointer_distance < config.repel_radius;
            let scale = if nearby { config.nearby_scale } else { 1.0 };
            let radius = node.radius();
            Badge {
                id: node.id(),
                label: node.label(),
                kind: node.kind(),
                center: node.position(),
                radius,
                scale,
                nearby,
                label_visible: pointer_distance <= radius * scale,
            }
        })
        .collect();

    Scene {
        glow: Glow {
            center: pointer,
            radius: config.repel_radius,
        },
        links,
        badges,
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn at(id: usize, x: f32, y: f32) -> SkillNode {
        SkillNode::new(id, format!("skill-{id}"), vec2(x, y), Vec2::ZERO, 1.0)
    }

    const FAR_AWAY: Vec2 = Vec2 {
        x: -1000.0,
        y: -1000.0,
    };

    #[test]
    fn two_nodes_fifty_apart_get_one_link() {
        let nodes = [at(0, 100.0, 100.0), at(1, 150.0, 100.0)];
        let scene = project(&nodes, FAR_AWAY, ConstellationConfig::default());

        assert_eq!(scene.links.len(), 1);
        let link = scene.links[0];
        assert_eq!((link.from, link.to), (0, 1));
        let expected = 0.4 * (1.0 - 50.0 / 120.0);
        assert!((link.alpha - expected).abs() < 1e-6);
    }

    #[test]
    fn link_alpha_spans_zero_to_maximum() {
        let config = ConstellationConfig::default();

        let at_radius = [at(0, 100.0, 100.0), at(1, 220.0, 100.0)];
        assert!(project(&at_radius, FAR_AWAY, config).links.is_empty());

        let stacked = [at(0, 100.0, 100.0), at(1, 100.0, 100.0)];
        let scene = project(&stacked, FAR_AWAY, config);
        assert_eq!(scene.links.len(), 1);
        assert_eq!(scene.links[0].alpha, config.link_alpha);
    }

    #[test]
    fn every_close_pair_is_linked_once() {
        let nodes = [
            at(0, 100.0, 100.0),
            at(1, 160.0, 100.0),
            at(2, 130.0, 150.0),
            at(3, 500.0, 500.0),
        ];
        let scene = project(&nodes, FAR_AWAY, ConstellationConfig::default());

        let pairs = scene
            .links
            .iter()
            .map(|link| (link.from, link.to))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn badges_near_the_pointer_grow_and_show_labels_on_hover() {
        let nodes = [at(0, 100.0, 100.0), at(1, 200.0, 100.0), at(2, 400.0, 400.0)];
        let scene = project(&nodes, vec2(110.0, 100.0), ConstellationConfig::default());

        let hovered = &scene.badges[0];
        assert!(hovered.nearby && hovered.label_visible);
        assert_eq!(hovered.scale, 1.25);
        assert_eq!(hovered.drawn_radius(), 40.0);

        let close = &scene.badges[1];
        assert!(close.nearby && !close.label_visible);

        let far = &scene.badges[2];
        assert!(!far.nearby);
        assert_eq!(far.scale, 1.0);
        assert_eq!(far.label, "skill-2");
    }

    #[test]
    fn glow_follows_pointer() {
        let pointer = vec2(42.0, 17.0);
        let scene = project(&[], pointer, ConstellationConfig::default());
        assert_eq!(
            scene.glow,
            Glow {
                center: pointer,
                radius: 150.0
            }
        );
        assert!(scene.badges.is_empty());
    }
}
