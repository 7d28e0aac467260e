use bgpls_topology_canvas::topology::{TopologyError, TopologyRecord, project, project_value};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// =============================================================================
// Fixtures
// =============================================================================

fn link(asn: Value, router_id: &str, metric: u32) -> Value {
	json!({
		"ls_nlri_type": "bgpls-link",
		"remote_node_descriptors": { "autonomous_system": asn, "router_id": router_id },
		"interface_address": { "interface_address": "10.0.0.1" },
		"attributes": { "bgp_ls": { "igp_metric": metric } },
	})
}

fn node(node_id: &str, name: &str, links: Vec<Value>) -> Value {
	json!({
		"node_id": node_id,
		"node_descriptors": { "autonomous_system": 65000, "router_id": node_id },
		"attributes": { "bgp_ls": { "node_name": name } },
		"links": links,
	})
}

fn three_router_ring() -> Value {
	json!({
		"nodes": [
			node("65000:1", "p1", vec![link(json!(65000), "2", 10), link(json!(65000), "3", 30)]),
			node("65000:2", "p2", vec![link(json!(65000), "3", 20)]),
			node("65000:3", "p3", vec![]),
		]
	})
}

// =============================================================================
// Structural properties
// =============================================================================

#[test]
fn node_count_and_order_are_preserved() {
	let input = three_router_ring();
	let graph = project_value(&input).unwrap();

	let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, vec!["65000:1", "65000:2", "65000:3"]);
	let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
	assert_eq!(labels, vec!["p1", "p2", "p3"]);
}

#[test]
fn one_edge_per_link() {
	let topology = TopologyRecord::from_value(&three_router_ring()).unwrap();
	let graph = project(&topology).unwrap();

	let total_links: usize = topology.nodes.iter().map(|n| n.links.len()).sum();
	assert_eq!(graph.edges.len(), total_links);
	assert!(graph.edges.iter().all(|e| graph.contains_node(&e.from)));
}

#[test]
fn projection_is_idempotent() {
	let topology = TopologyRecord::from_value(&three_router_ring()).unwrap();
	assert_eq!(project(&topology).unwrap(), project(&topology).unwrap());
}

#[test]
fn synthetic_ids_and_metric_labels() {
	let graph = project_value(&json!({
		"nodes": [node("A", "RouterA", vec![link(json!("65000"), "10.0.0.1", 20)])]
	}))
	.unwrap();

	assert_eq!(graph.edges[0].to, "65000:10.0.0.1");
	assert_eq!(graph.edges[0].label, "Metric: 20");
}

#[test]
fn numeric_node_ids_are_stringified() {
	let graph = project_value(&json!({ "nodes": [{ "node_id": 42, "links": [] }] })).unwrap();
	assert_eq!(graph.nodes[0].id, "42");
	assert_eq!(graph.nodes[0].label, "42", "id stands in for a missing name");
}

// =============================================================================
// Dangling targets
// =============================================================================

#[test]
fn remote_only_routers_are_not_synthesized() {
	let graph = project_value(&json!({
		"nodes": [node("65000:1", "p1", vec![link(json!(65001), "9", 5)])]
	}))
	.unwrap();

	assert_eq!(graph.nodes.len(), 1);
	assert_eq!(graph.edges[0].to, "65001:9");
	assert_eq!(graph.dangling_edges().count(), 1);
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn malformed_snapshots_fail_without_partial_output() {
	let cases = [
		json!(null),
		json!([]),
		json!({ "nodes": null }),
		json!({ "nodes": [{ "links": [] }] }),
		json!({ "nodes": [{ "node_id": "A", "links": "eth0" }] }),
		json!({ "nodes": [{ "node_id": "A", "links": [{ "attributes": {} }] }] }),
		json!({ "nodes": [{ "node_id": "A", "links": null }] }),
		json!([[]]),
		json!({ "nodes": [["A"]] }),
	];
	for case in cases {
		let result = project_value(&case);
		assert!(
			matches!(result, Err(TopologyError::MalformedInput(_))),
			"expected MalformedInput for {case}, got {result:?}"
		);
	}
}

#[test]
fn json_text_errors_are_malformed_input() {
	let err = TopologyRecord::from_json("{ \"nodes\": [").unwrap_err();
	assert!(matches!(err, TopologyError::MalformedInput(_)));
	assert!(err.to_string().starts_with("malformed topology"), "got: {err}");
}
