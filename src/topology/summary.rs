use super::record::TopologyRecord;

/// Counters shown next to the topology graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopologySummary {
	/// Nodes in the snapshot.
	pub nodes: usize,
	/// Outbound links over all nodes.
	pub links: usize,
	/// Advertised IPv4 prefixes.
	pub prefixes_v4: usize,
	/// Advertised IPv6 prefixes.
	pub prefixes_v6: usize,
}

impl From<&TopologyRecord> for TopologySummary {
	fn from(topology: &TopologyRecord) -> Self {
		topology
			.nodes
			.iter()
			.fold(Self::default(), |summary, node| Self {
				nodes: summary.nodes + 1,
				links: summary.links + node.links.len(),
				prefixes_v4: summary.prefixes_v4 + node.prefixes_v4.len(),
				prefixes_v6: summary.prefixes_v6 + node.prefixes_v6.len(),
			})
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn counts_every_collection() {
		let topology = TopologyRecord::from_value(&json!({
			"nodes": [
				{ "node_id": "A", "links": [{}, {}], "prefixes_v4": [{}], "prefixes_v6": [] },
				{ "node_id": "B", "links": [{}], "prefixes_v6": [{}, {}] },
			]
		}))
		.unwrap();

		assert_eq!(
			TopologySummary::from(&topology),
			TopologySummary {
				nodes: 2,
				links: 3,
				prefixes_v4: 1,
				prefixes_v6: 2,
			}
		);
	}
}
