//! Pointer-reactive skill constellation.
//!
//! One [`Constellation`] owns every node and the last pointer position. The
//! host drives it once per frame: feed the pointer with
//! [`Constellation::track_pointer`], advance with [`Constellation::step`], then
//! draw whatever [`Constellation::snapshot`] returns.

mod node;
mod physics;
mod pointer;
mod scene;
mod style;

use anyhow::{Result, bail};
use eframe::egui::{Pos2, Vec2};
use rand::Rng;

pub use node::SkillNode;
pub use scene::Badge;
pub use style::SkillKind;

use physics::step_nodes;
use pointer::PointerTracker;
use scene::{Scene, project};

/// Diameter of a node badge at `size == 1.0`.
pub const NODE_DIAMETER: f32 = 64.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstellationConfig {
    pub repel_radius: f32,
    pub repulsion_strength: f32,
    pub damping: f32,
    pub connection_radius: f32,
    pub link_alpha: f32,
    pub nearby_scale: f32,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            repel_radius: 150.0,
            repulsion_strength: 0.8,
            damping: 0.98,
            connection_radius: 120.0,
            link_alpha: 0.4,
            nearby_scale: 1.25,
        }
    }
}

impl ConstellationConfig {
    /// Clamps every knob into the range where the simulation stays stable.
    pub fn sanitized(self) -> Self {
        Self {
            repel_radius: self.repel_radius.clamp(20.0, 400.0),
            repulsion_strength: self.repulsion_strength.clamp(0.0, 3.0),
            damping: self.damping.clamp(0.80, 0.995),
            connection_radius: self.connection_radius.clamp(1.0, 400.0),
            link_alpha: self.link_alpha.clamp(0.0, 1.0),
            nearby_scale: self.nearby_scale.clamp(1.0, 2.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A viewport that has not been laid out yet reports zero or NaN sizes.
    pub fn is_available(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Allowed centre range on one axis for a node of `radius`. Collapses to
    /// the middle of the axis when the node is wider than the viewport.
    pub(crate) fn axis_bounds(extent: f32, radius: f32) -> (f32, f32) {
        let low = radius;
        let high = extent - radius;
        if high < low {
            let middle = extent * 0.5;
            (middle, middle)
        } else {
            (low, high)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Initialization {
    Ready(usize),
    Deferred,
}

enum State {
    Uninitialized,
    Ready { nodes: Vec<SkillNode> },
}

pub struct Constellation {
    skills: Vec<String>,
    state: State,
    pointer: PointerTracker,
    config: ConstellationConfig,
}

impl Constellation {
    pub fn new(skills: Vec<String>) -> Self {
        Self::with_config(skills, ConstellationConfig::default())
    }

    pub fn with_config(skills: Vec<String>, config: ConstellationConfig) -> Self {
        Self {
            skills,
            state: State::Uninitialized,
            pointer: PointerTracker::default(),
            config: config.sanitized(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn config(&self) -> ConstellationConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ConstellationConfig) {
        self.config = config.sanitized();
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    pub fn nodes(&self) -> &[SkillNode] {
        match &self.state {
            State::Ready { nodes } => nodes,
            State::Uninitialized => &[],
        }
    }

    /// Places one node per skill inside `viewport`.
    ///
    /// The skill list is fixed at construction, so a second call on a ready
    /// constellation is an error rather than a relayout.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Initialization> {
        if let State::Ready { nodes } = &self.state {
            bail!(
                "constellation already holds {} nodes; skills are fixed after the first layout",
                nodes.len()
            );
        }

        if !viewport.is_available() {
            log::debug!(
                "deferring constellation layout, viewport {}x{} is not measurable yet",
                viewport.width,
                viewport.height
            );
            return Ok(Initialization::Deferred);
        }

        let nodes = self
            .skills
            .iter()
            .enumerate()
            .map(|(id, label)| SkillNode::spawn(id, label.clone(), viewport, rng))
            .collect::<Vec<_>>();
        let count = nodes.len();
        self.state = State::Ready { nodes };
        log::info!(
            "laid out {count} skill nodes in a {:.0}x{:.0} viewport",
            viewport.width,
            viewport.height
        );

        Ok(Initialization::Ready(count))
    }

    /// Initializes on the first frame that has a usable viewport.
    pub fn ensure_initialized<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        rng: &mut R,
    ) -> Initialization {
        match &self.state {
            State::Ready { nodes } => Initialization::Ready(nodes.len()),
            State::Uninitialized => self
                .initialize(viewport, rng)
                .unwrap_or(Initialization::Deferred),
        }
    }

    /// Records the pointer relative to the viewport's top-left corner.
    pub fn track_pointer(&mut self, pointer: Pos2, viewport_origin: Pos2) {
        self.pointer.track(pointer, viewport_origin);
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    /// Advances every node by one frame of `delta_seconds`. Returns whether
    /// anything is still moving. An unmeasurable viewport (minimized window,
    /// collapsed panel) leaves the layout untouched.
    pub fn step(&mut self, viewport: Viewport, delta_seconds: f32) -> bool {
        if !viewport.is_available() {
            return false;
        }
        let State::Ready { nodes } = &mut self.state else {
            return false;
        };
        step_nodes(nodes, self.pointer.position(), viewport, self.config, delta_seconds)
    }

    /// Exactly one 60 Hz frame.
    pub fn tick(&mut self, viewport: Viewport) -> bool {
        self.step(viewport, 1.0 / 60.0)
    }

    pub fn snapshot(&self) -> Scene<'_> {
        project(self.nodes(), self.pointer.position(), self.config)
    }
}
