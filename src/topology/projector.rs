use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use super::error::TopologyError;
use super::record::TopologyRecord;

/// A graph node, one per snapshot node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectedNode {
	/// The node's `node_id`.
	pub id: String,
	/// Advertised name, or the id when none was advertised.
	pub label: String,
}

/// A directed edge. `to` may name a node that is not part of the graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectedEdge {
	/// Id of the node owning the link.
	pub from: String,
	/// Synthetic `<asn>:<router-id>` id of the remote node.
	pub to: String,
	/// `Metric: <igp_metric>`.
	pub label: String,
}

/// Flat node/edge view of a topology snapshot, ready to hand to a renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectedGraph {
	/// Nodes in snapshot order.
	pub nodes: Vec<ProjectedNode>,
	/// Edges in node order, then link order.
	pub edges: Vec<ProjectedEdge>,
}

impl ProjectedGraph {
	/// Whether a node with this id is part of the graph.
	pub fn contains_node(&self, id: &str) -> bool {
		self.nodes.iter().any(|node| node.id == id)
	}

	/// Edges whose target is only known through a link's remote descriptors.
	pub fn dangling_edges(&self) -> impl Iterator<Item = &ProjectedEdge> {
		let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
		self.edges
			.iter()
			.filter(move |edge| !ids.contains(edge.to.as_str()))
	}
}

/// Edge label for an IGP metric.
pub fn metric_label(metric: u32) -> String {
	format!("Metric: {metric}")
}

/// Project a snapshot into nodes (input order) and edges (node order, then
/// link order). Fails as a whole on the first malformed link or duplicate id.
pub fn project(topology: &TopologyRecord) -> Result<ProjectedGraph, TopologyError> {
	let mut seen = HashSet::with_capacity(topology.nodes.len());
	let mut graph = ProjectedGraph {
		nodes: Vec::with_capacity(topology.nodes.len()),
		edges: Vec::new(),
	};

	for node in &topology.nodes {
		let id = node.node_id.to_string();
		if !seen.insert(id.clone()) {
			return Err(TopologyError::MalformedInput(format!(
				"duplicate node_id {id}"
			)));
		}
		graph.nodes.push(ProjectedNode {
			id: id.clone(),
			label: node.display_name().to_owned(),
		});

		for (index, link) in node.links.iter().enumerate() {
			let to = link.remote_id().ok_or_else(|| {
				TopologyError::MalformedInput(format!(
					"link {index} of node {id} lacks remote node descriptors"
				))
			})?;
			let metric = link.metric().ok_or_else(|| {
				TopologyError::MalformedInput(format!("link {index} of node {id} has no igp_metric"))
			})?;
			debug!("{id} -> {to}");
			graph.edges.push(ProjectedEdge {
				from: id.clone(),
				to,
				label: metric_label(metric),
			});
		}
	}

	Ok(graph)
}

/// Decode a loosely typed snapshot and project it.
pub fn project_value(value: &serde_json::Value) -> Result<ProjectedGraph, TopologyError> {
	project(&TopologyRecord::from_value(value)?)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn link(asn: &str, router_id: &str, metric: u32) -> serde_json::Value {
		json!({
			"remote_node_descriptors": { "autonomous_system": asn, "router_id": router_id },
			"attributes": { "bgp_ls": { "igp_metric": metric } },
		})
	}

	#[test]
	fn empty_topology_projects_to_empty_graph() {
		let graph = project_value(&json!({ "nodes": [] })).unwrap();
		assert_eq!(graph, ProjectedGraph::default());
	}

	#[test]
	fn router_a_scenario() {
		let graph = project_value(&json!({
			"nodes": [{
				"node_id": "A",
				"attributes": { "bgp_ls": { "node_name": "RouterA" } },
				"links": [link("65000", "B", 10)],
			}]
		}))
		.unwrap();

		assert_eq!(
			graph,
			ProjectedGraph {
				nodes: vec![ProjectedNode {
					id: "A".into(),
					label: "RouterA".into(),
				}],
				edges: vec![ProjectedEdge {
					from: "A".into(),
					to: "65000:B".into(),
					label: "Metric: 10".into(),
				}],
			}
		);
	}

	#[test]
	fn edges_follow_node_then_link_order() {
		let graph = project_value(&json!({
			"nodes": [
				{ "node_id": "A", "links": [link("1", "x", 1), link("1", "y", 2)] },
				{ "node_id": "B" },
				{ "node_id": "C", "links": [link("2", "z", 3)] },
			]
		}))
		.unwrap();

		let order: Vec<(&str, &str)> = graph
			.edges
			.iter()
			.map(|edge| (edge.from.as_str(), edge.to.as_str()))
			.collect();
		assert_eq!(order, vec![("A", "1:x"), ("A", "1:y"), ("C", "2:z")]);
	}

	#[test]
	fn missing_nodes_is_malformed() {
		assert!(matches!(
			project_value(&json!({})),
			Err(TopologyError::MalformedInput(_))
		));
		assert!(matches!(
			project_value(&serde_json::Value::Null),
			Err(TopologyError::MalformedInput(_))
		));
	}

	#[test]
	fn links_must_be_a_sequence() {
		let result = project_value(&json!({
			"nodes": [{ "node_id": "A", "links": { "not": "a list" } }]
		}));
		assert!(matches!(result, Err(TopologyError::MalformedInput(_))));
	}

	#[test]
	fn link_without_remote_descriptors_fails_whole_projection() {
		let result = project_value(&json!({
			"nodes": [
				{ "node_id": "A", "links": [link("1", "B", 5)] },
				{ "node_id": "B", "links": [{ "attributes": { "bgp_ls": { "igp_metric": 1 } } }] },
			]
		}));
		let Err(TopologyError::MalformedInput(message)) = &result else {
			panic!("expected MalformedInput, got {result:?}");
		};
		assert!(message.contains("node B"), "got: {message}");
	}

	#[test]
	fn link_without_metric_is_malformed() {
		let result = project_value(&json!({
			"nodes": [{ "node_id": "A", "links": [{
				"remote_node_descriptors": { "autonomous_system": 1, "router_id": "B" },
			}] }]
		}));
		assert!(matches!(result, Err(TopologyError::MalformedInput(_))));
	}

	#[test]
	fn duplicate_node_ids_are_rejected() {
		let result = project_value(&json!({
			"nodes": [{ "node_id": "A" }, { "node_id": "A" }]
		}));
		assert!(matches!(result, Err(TopologyError::MalformedInput(_))));
	}

	#[test]
	fn dangling_targets_are_kept_but_reported() {
		let graph = project_value(&json!({
			"nodes": [
				{ "node_id": "65000:A", "links": [link("65000", "B", 10)] },
				{ "node_id": "65000:B", "links": [link("65000", "A", 10), link("65001", "Z", 7)] },
			]
		}))
		.unwrap();

		assert_eq!(graph.edges.len(), 3);
		assert!(!graph.contains_node("65001:Z"));
		let dangling: Vec<&str> = graph.dangling_edges().map(|edge| edge.to.as_str()).collect();
		assert_eq!(dangling, vec!["65001:Z"]);
	}
}
