use super::projector::metric_label;
use super::record::{LinkRecord, NodeRecord, PrefixRecord};

const UNKNOWN: &str = "-";

/// One row of a node's link table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRow {
	/// Remote node id, or `-`.
	pub remote_id: String,
	/// Metric label, or `-`.
	pub metric: String,
	/// Local interface address.
	pub interface_address: Option<String>,
	/// Neighbor interface address.
	pub neighbor_address: Option<String>,
}

impl From<&LinkRecord> for LinkRow {
	fn from(link: &LinkRecord) -> Self {
		Self {
			remote_id: link.remote_id().unwrap_or_else(|| UNKNOWN.to_owned()),
			metric: link
				.metric()
				.map(metric_label)
				.unwrap_or_else(|| UNKNOWN.to_owned()),
			interface_address: link.interface_address().map(str::to_owned),
			neighbor_address: link.neighbor_address().map(str::to_owned),
		}
	}
}

/// One row of a node's prefix table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixRow {
	/// Prefix in CIDR notation, or `-`.
	pub prefix: String,
	/// Prefix metric.
	pub metric: Option<u32>,
}

impl From<&PrefixRecord> for PrefixRow {
	fn from(prefix: &PrefixRecord) -> Self {
		Self {
			prefix: prefix
				.ip_reach_prefix
				.clone()
				.unwrap_or_else(|| UNKNOWN.to_owned()),
			metric: prefix.metric(),
		}
	}
}

/// Everything the detail page shows for a single node. Unlike projection this
/// is lenient: absent fields render as placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDetail {
	/// The node's id.
	pub node_id: String,
	/// Display name.
	pub name: String,
	/// Outbound links.
	pub links: Vec<LinkRow>,
	/// IPv4 prefixes.
	pub prefixes_v4: Vec<PrefixRow>,
	/// IPv6 prefixes.
	pub prefixes_v6: Vec<PrefixRow>,
}

impl From<&NodeRecord> for NodeDetail {
	fn from(node: &NodeRecord) -> Self {
		Self {
			node_id: node.node_id.to_string(),
			name: node.display_name().to_owned(),
			links: node.links.iter().map(LinkRow::from).collect(),
			prefixes_v4: node.prefixes_v4.iter().map(PrefixRow::from).collect(),
			prefixes_v6: node.prefixes_v6.iter().map(PrefixRow::from).collect(),
		}
	}
}
