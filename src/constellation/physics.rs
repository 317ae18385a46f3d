use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use super::{ConstellationConfig, SkillNode, Viewport};

/// Added to every pointer distance so the repulsion never divides by zero.
const DISTANCE_EPSILON: f32 = 0.001;
/// Below this the pointer sits on the node and `d / dist` has no direction.
const COINCIDENT_DISTANCE: f32 = 0.0001;
const MIN_MOTION_SQ: f32 = 0.000_001;

/// Frame delta in units of a 60 Hz frame. Anything non-finite counts as one frame.
fn time_step_scale(delta_seconds: f32) -> f32 {
    if delta_seconds.is_finite() {
        (delta_seconds * 60.0).clamp(0.25, 3.0)
    } else {
        1.0
    }
}

pub(super) fn step_nodes(
    nodes: &mut [SkillNode],
    pointer: Vec2,
    viewport: Viewport,
    config: ConstellationConfig,
    delta_seconds: f32,
) -> bool {
    let time_step_scale = time_step_scale(delta_seconds);
    let damping_factor = config.damping.powf(time_step_scale);
    let mut any_motion = false;

    for node in nodes.iter_mut() {
        let delta = node.position - pointer;
        let length = delta.length();
        let distance = length + DISTANCE_EPSILON;

        if distance < config.repel_radius {
            let force = (1.0 - distance / config.repel_radius) * config.repulsion_strength;
            let direction = if length > COINCIDENT_DISTANCE {
                delta / distance
            } else {
                escape_direction(node)
            };
            node.velocity += direction * (force / node.size()) * time_step_scale;
        }

        node.velocity *= damping_factor;
        node.position += node.velocity * time_step_scale;

        let radius = node.radius();
        reflect_axis(
            &mut node.position.x,
            &mut node.velocity.x,
            Viewport::axis_bounds(viewport.width, radius),
        );
        reflect_axis(
            &mut node.position.y,
            &mut node.velocity.y,
            Viewport::axis_bounds(viewport.height, radius),
        );

        if node.velocity.length_sq() > MIN_MOTION_SQ {
            any_motion = true;
        }
    }

    any_motion
}

/// Keeps the node heading the way it already moves; a resting node gets a
/// fixed per-id angle.
fn escape_direction(node: &SkillNode) -> Vec2 {
    let speed = node.velocity.length();
    if speed > COINCIDENT_DISTANCE {
        node.velocity / speed
    } else {
        let angle = ((node.id() as f32) * 0.618_034 + 0.37) * TAU;
        vec2(angle.cos(), angle.sin())
    }
}

fn reflect_axis(position: &mut f32, velocity: &mut f32, (low, high): (f32, f32)) {
    if *position <= low {
        *position = low;
        *velocity = velocity.abs();
    } else if *position >= high {
        *position = high;
        *velocity = -velocity.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAR_AWAY: Vec2 = Vec2 {
        x: -1000.0,
        y: -1000.0,
    };

    fn viewport() -> Viewport {
        Viewport::new(600.0, 600.0)
    }

    fn one_tick(nodes: &mut [SkillNode], pointer: Vec2) -> bool {
        step_nodes(
            nodes,
            pointer,
            viewport(),
            ConstellationConfig::default(),
            1.0 / 60.0,
        )
    }

    #[test]
    fn resting_nodes_stay_put_without_a_pointer() {
        let mut nodes = vec![
            SkillNode::new(0, "a", vec2(300.0, 300.0), Vec2::ZERO, 1.0),
            SkillNode::new(1, "b", vec2(32.0, 568.0), Vec2::ZERO, 1.0),
        ];
        let before = nodes.clone();

        for _ in 0..100 {
            assert!(!one_tick(&mut nodes, FAR_AWAY));
        }

        assert_eq!(nodes, before);
    }

    #[test]
    fn pointer_on_a_resting_node_pushes_it() {
        let position = vec2(300.0, 300.0);
        let mut pushed = vec![SkillNode::new(3, "a", position, Vec2::ZERO, 1.0)];
        let mut baseline = pushed.clone();

        one_tick(&mut pushed, position);
        one_tick(&mut baseline, FAR_AWAY);

        assert!(pushed[0].velocity().length() > baseline[0].velocity().length());
    }

    #[test]
    fn pointer_on_a_moving_node_speeds_it_up() {
        let position = vec2(300.0, 300.0);
        let velocity = vec2(-0.4, 0.3);
        let mut pushed = vec![SkillNode::new(0, "a", position, velocity, 1.3)];
        let mut baseline = pushed.clone();

        one_tick(&mut pushed, position);
        one_tick(&mut baseline, FAR_AWAY);

        assert!(pushed[0].velocity().length() > baseline[0].velocity().length());
    }

    #[test]
    fn repulsion_points_away_from_pointer_and_favours_small_nodes() {
        let pointer = vec2(300.0, 300.0);
        let mut nodes = vec![
            SkillNode::new(0, "light", vec2(350.0, 300.0), Vec2::ZERO, 0.7),
            SkillNode::new(1, "heavy", vec2(250.0, 300.0), Vec2::ZERO, 1.3),
        ];

        one_tick(&mut nodes, pointer);

        assert!(nodes[0].velocity().x > 0.0);
        assert!(nodes[1].velocity().x < 0.0);
        assert_eq!(nodes[0].velocity().y, 0.0);
        assert!(nodes[0].velocity().x > nodes[1].velocity().x.abs());
    }

    #[test]
    fn repulsion_matches_the_reference_formula() {
        let pointer = vec2(300.0, 300.0);
        let mut nodes = vec![SkillNode::new(0, "a", vec2(375.0, 300.0), Vec2::ZERO, 1.0)];

        one_tick(&mut nodes, pointer);

        let distance = 75.0 + DISTANCE_EPSILON;
        let force = (1.0 - distance / 150.0) * 0.8;
        let expected = (75.0 / distance) * force * 0.98;
        assert!((nodes[0].velocity().x - expected).abs() < 1e-5);
        assert!((nodes[0].position().x - (375.0 + expected)).abs() < 1e-4);
    }

    #[test]
    fn nothing_happens_outside_the_repel_radius() {
        let mut nodes = vec![SkillNode::new(0, "a", vec2(460.0, 300.0), Vec2::ZERO, 1.0)];
        one_tick(&mut nodes, vec2(300.0, 300.0));
        assert_eq!(nodes[0].velocity(), Vec2::ZERO);
    }

    #[test]
    fn speed_never_grows_without_forcing() {
        let mut nodes = vec![
            SkillNode::new(0, "a", vec2(40.0, 300.0), vec2(-3.0, 1.5), 1.0),
            SkillNode::new(1, "b", vec2(560.0, 560.0), vec2(2.5, 2.5), 0.7),
            SkillNode::new(2, "c", vec2(300.0, 300.0), vec2(0.3, -0.2), 1.2),
        ];

        for _ in 0..300 {
            let before = nodes
                .iter()
                .map(|node| node.velocity().length())
                .collect::<Vec<_>>();
            one_tick(&mut nodes, FAR_AWAY);
            for (node, speed) in nodes.iter().zip(before) {
                assert!(node.velocity().length() <= speed);
            }
        }
    }

    #[test]
    fn wall_hit_reflects_and_clamps() {
        let mut nodes = vec![SkillNode::new(0, "a", vec2(33.0, 300.0), vec2(-5.0, 0.0), 1.0)];

        one_tick(&mut nodes, FAR_AWAY);

        assert_eq!(nodes[0].position().x, 32.0);
        assert!((nodes[0].velocity().x - 5.0 * 0.98).abs() < 1e-6);
    }

    #[test]
    fn larger_frame_delta_damps_harder() {
        let mut short = vec![SkillNode::new(0, "a", vec2(300.0, 300.0), vec2(1.0, 0.0), 1.0)];
        let mut long = short.clone();
        let config = ConstellationConfig::default();

        step_nodes(&mut short, FAR_AWAY, viewport(), config, 1.0 / 60.0);
        step_nodes(&mut long, FAR_AWAY, viewport(), config, 1.0 / 30.0);

        assert!(long[0].velocity().x < short[0].velocity().x);
        assert!(long[0].position().x > short[0].position().x);
    }

    #[test]
    fn non_finite_delta_steps_like_one_frame() {
        let start = SkillNode::new(0, "a", vec2(300.0, 300.0), vec2(1.5, -0.5), 1.0);
        let mut expected = vec![start.clone()];
        one_tick(&mut expected, FAR_AWAY);

        for delta in [f32::NAN, f32::INFINITY] {
            let mut nodes = vec![start.clone()];
            step_nodes(
                &mut nodes,
                FAR_AWAY,
                viewport(),
                ConstellationConfig::default(),
                delta,
            );
            assert!(nodes[0].position().is_finite());
            assert_eq!(nodes, expected);
        }
        assert_eq!(time_step_scale(f32::NAN), 1.0);
        assert_eq!(time_step_scale(1.0), 3.0);
    }

    #[test]
    fn reflect_axis_handles_collapsed_range() {
        let mut position = 80.0;
        let mut velocity = 2.0;
        reflect_axis(&mut position, &mut velocity, (25.0, 25.0));
        assert_eq!(position, 25.0);
        assert_eq!(velocity, -2.0);
    }
}
