//! Tag graph simulation: nodes drift in straight lines and bounce off the
//! surface edges. Edges connect pills that share a tag label and carry only a
//! weight; they exert no force.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;

use crate::model::{Category, Pill};

/// Multiplier applied to the initial [-1, 1] velocity per axis.
pub const VELOCITY_SCALE: f64 = 0.5;
/// Weight given to every shared-tag edge.
pub const EDGE_STRENGTH: f64 = 0.5;
/// Pointer distance under which a node counts as hit.
pub const PICK_RADIUS: f64 = 10.0;

/// One pill on the galaxy surface.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Id of the pill this node stands for.
	pub pill_id: String,
	/// Pill title.
	pub title: String,
	/// Pill category, which picks the node color.
	pub category: Category,
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal displacement per step.
	pub vx: f64,
	/// Vertical displacement per step.
	pub vy: f64,
	/// The pill has been opened.
	pub read: bool,
}

/// Connection between two nodes sharing a tag label. `source < target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
	/// Index of the earlier node.
	pub source: usize,
	/// Index of the later node.
	pub target: usize,
	/// Weight, used for stroke alpha and width.
	pub strength: f64,
}

/// Nodes and edges derived from a pill collection, bound to a surface size.
#[derive(Clone, Debug, Default)]
pub struct TagGraph {
	/// One node per pill, in pill order.
	pub nodes: Vec<GraphNode>,
	/// Shared-label links between nodes.
	pub edges: Vec<GraphEdge>,
	width: f64,
	height: f64,
}

impl TagGraph {
	/// Builds one node per pill, in pill order, and one edge per pill pair per
	/// shared label. Pairs sharing several labels get several edges.
	///
	/// Non-positive dimensions collapse to zero.
	pub fn build<R: Rng + ?Sized>(pills: &[Pill], width: f64, height: f64, rng: &mut R) -> Self {
		let width = width.max(0.0);
		let height = height.max(0.0);

		let nodes = pills
			.iter()
			.map(|pill| GraphNode {
				pill_id: pill.id.clone(),
				title: pill.title.clone(),
				category: pill.category,
				x: rng.r#gen::<f64>() * width,
				y: rng.r#gen::<f64>() * height,
				vx: (rng.r#gen::<f64>() * 2.0 - 1.0) * VELOCITY_SCALE,
				vy: (rng.r#gen::<f64>() * 2.0 - 1.0) * VELOCITY_SCALE,
				read: false,
			})
			.collect();

		let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
		for (index, pill) in pills.iter().enumerate() {
			for tag in &pill.tags {
				let holders = by_label.entry(tag.label.as_str()).or_default();
				// A pill listing the same label twice still counts once.
				if holders.last() != Some(&index) {
					holders.push(index);
				}
			}
		}

		let mut edges = Vec::new();
		for holders in by_label.values() {
			for (i, &source) in holders.iter().enumerate() {
				for &target in &holders[i + 1..] {
					edges.push(GraphEdge {
						source,
						target,
						strength: EDGE_STRENGTH,
					});
				}
			}
		}

		Self {
			nodes,
			edges,
			width,
			height,
		}
	}

	/// Surface width the nodes bounce within.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the nodes bounce within.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Moves every node one step, reflecting velocity at the borders.
	pub fn advance(&mut self) {
		let (width, height) = (self.width, self.height);
		for node in &mut self.nodes {
			node.x += node.vx;
			node.y += node.vy;

			if node.x < 0.0 || node.x > width {
				node.vx = -node.vx;
			}
			if node.y < 0.0 || node.y > height {
				node.vy = -node.vy;
			}

			node.x = node.x.max(0.0).min(width);
			node.y = node.y.max(0.0).min(height);
		}
	}

	/// Index of the first node, in build order, closer than [`PICK_RADIUS`].
	pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
		self.nodes
			.iter()
			.position(|node| (node.x - x).hypot(node.y - y) < PICK_RADIUS)
	}

	/// Flags the node at `index` as read; out-of-range indices are ignored.
	pub fn mark_read(&mut self, index: usize) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.read = true;
		}
	}

	/// Flags every node whose pill id is in `read`.
	pub fn mark_read_pills(&mut self, read: &HashSet<String>) {
		for node in &mut self.nodes {
			if read.contains(&node.pill_id) {
				node.read = true;
			}
		}
	}
}
