use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::debug;

use crate::config::ViewerConfig;
use crate::topology::ProjectedGraph;

pub const NODE_RADIUS: f64 = 8.0;
pub const HIT_RADIUS: f64 = 14.0;
/// Pointer travel (screen px) below which a press counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct EdgeInfo {
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
}

/// Simulation plus view state for one projected topology.
pub struct TopologyCanvasState {
	pub graph: ForceGraph<NodeInfo, EdgeInfo>,
	pub config: ViewerConfig,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

/// Deterministic value in `[0, 1)` for the `index`-th node under `seed`.
// splitmix64 finalizer, so neighbouring indices land far apart.
fn seeded_unit(seed: u64, index: usize) -> f64 {
	let mut z = seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
	z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
	z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
	z ^= z >> 31;
	(z >> 11) as f64 / (1u64 << 53) as f64
}

impl TopologyCanvasState {
	pub fn new(data: &ProjectedGraph, config: &ViewerConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(config.physics.simulation_parameters());
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();
		let spread = config.physics.spread;

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = 2.0 * PI * seeded_unit(config.layout_seed, i);
			let radius = spread * (0.25 + 0.75 * seeded_unit(config.layout_seed, i + data.nodes.len()));
			let idx = graph.add_node(NodeData {
				x: (radius * angle.cos()) as f32,
				y: (radius * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for edge in &data.edges {
			match (id_to_idx.get(edge.from.as_str()), id_to_idx.get(edge.to.as_str())) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(
						src,
						tgt,
						EdgeData {
							user_data: EdgeInfo {
								label: edge.label.clone(),
							},
						},
					);
					edges.push((src, tgt));
				}
				_ => debug!("Skipping edge {} -> {}: target not in snapshot", edge.from, edge.to),
			}
		}

		Self {
			graph,
			edges,
			config: config.clone(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	pub fn drawn_edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		let Some(idx) = node else {
			return;
		};
		for &(src, tgt) in &self.edges {
			if src == idx {
				self.hover.neighbors.insert(tgt);
			} else if tgt == idx {
				self.hover.neighbors.insert(src);
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * 1.5 * dt as f64;
		if self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::{ProjectedEdge, ProjectedNode};

	fn graph() -> ProjectedGraph {
		let node = |id: &str| ProjectedNode {
			id: id.into(),
			label: id.into(),
		};
		let edge = |from: &str, to: &str| ProjectedEdge {
			from: from.into(),
			to: to.into(),
			label: "Metric: 10".into(),
		};
		ProjectedGraph {
			nodes: vec![node("65000:A"), node("65000:B")],
			edges: vec![
				edge("65000:A", "65000:B"),
				edge("65000:B", "65000:A"),
				edge("65000:B", "65001:Z"),
			],
		}
	}

	#[test]
	fn dangling_edges_are_left_out_of_the_simulation() {
		let state = TopologyCanvasState::new(&graph(), &ViewerConfig::default(), 800.0, 600.0);
		assert_eq!(state.drawn_edge_count(), 2);
	}

	#[test]
	fn seeded_placement_is_reproducible() {
		let positions = |state: &TopologyCanvasState| {
			let mut out = Vec::new();
			state.graph.visit_nodes(|node| out.push((node.x(), node.y())));
			out
		};
		let config = ViewerConfig::default();
		let a = TopologyCanvasState::new(&graph(), &config, 800.0, 600.0);
		let b = TopologyCanvasState::new(&graph(), &config, 800.0, 600.0);
		assert_eq!(positions(&a), positions(&b));
	}

	#[test]
	fn seeded_values_are_not_evenly_spaced() {
		let values: Vec<f64> = (0..16).map(|i| seeded_unit(3342, i)).collect();
		assert!(values.iter().all(|v| (0.0..1.0).contains(v)));

		let steps: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).rem_euclid(1.0)).collect();
		let distinct = steps
			.windows(2)
			.filter(|w| (w[1] - w[0]).abs() > 1e-9)
			.count();
		assert!(distinct > steps.len() / 2, "steps {steps:?}");
		assert_ne!(seeded_unit(3342, 0), seeded_unit(3343, 0));
	}

	#[test]
	fn hover_highlights_neighbors() {
		let mut state = TopologyCanvasState::new(&graph(), &ViewerConfig::default(), 800.0, 600.0);
		let mut by_id = HashMap::new();
		state.graph.visit_nodes(|node| {
			by_id.insert(node.data.user_data.id.clone(), node.index());
		});
		let (a, b) = (by_id["65000:A"], by_id["65000:B"]);

		state.set_hover(Some(a));
		assert!(state.is_hovered(a));
		assert!(!state.is_hovered(b));
		assert!(state.is_highlighted(b));
		assert_eq!(state.node_id(a).as_deref(), Some("65000:A"));
	}
}
