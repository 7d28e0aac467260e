use std::fmt;

use serde::Deserialize;

use super::error::TopologyError;

/// Joins a remote autonomous system and router id into a synthetic node id.
pub const REMOTE_ID_SEPARATOR: char = ':';

/// An opaque identifier that may arrive as either a JSON string or number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawIdentifier")]
pub struct Identifier(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
	Text(String),
	Number(serde_json::Number),
}

impl From<RawIdentifier> for Identifier {
	fn from(raw: RawIdentifier) -> Self {
		match raw {
			RawIdentifier::Text(text) => Self(text),
			RawIdentifier::Number(number) => Self(number.to_string()),
		}
	}
}

impl Identifier {
	/// Borrow the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A topology snapshot: every known node together with its outbound links
/// and advertised prefixes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TopologyRecord {
	/// Nodes in the order the collector reported them.
	pub nodes: Vec<NodeRecord>,
}

/// Derived struct visitors also accept sequences. The snapshot, its nodes and
/// their links must be JSON objects.
fn require_object(value: &serde_json::Value, what: &str) -> Result<(), TopologyError> {
	if value.is_object() {
		Ok(())
	} else {
		Err(TopologyError::MalformedInput(format!(
			"{what} must be an object"
		)))
	}
}

fn check_shape(value: &serde_json::Value) -> Result<(), TopologyError> {
	require_object(value, "topology")?;
	let Some(nodes) = value.get("nodes").and_then(serde_json::Value::as_array) else {
		// Absent or mistyped `nodes` is reported by the decoder.
		return Ok(());
	};
	for (index, node) in nodes.iter().enumerate() {
		require_object(node, &format!("node {index}"))?;
		let Some(links) = node.get("links").and_then(serde_json::Value::as_array) else {
			continue;
		};
		for (link_index, link) in links.iter().enumerate() {
			require_object(link, &format!("link {link_index} of node {index}"))?;
		}
	}
	Ok(())
}

impl TopologyRecord {
	/// Decode a snapshot from its JSON text.
	pub fn from_json(text: &str) -> Result<Self, TopologyError> {
		Self::from_value(&serde_json::from_str(text)?)
	}

	/// Decode a snapshot from an already parsed JSON value.
	pub fn from_value(value: &serde_json::Value) -> Result<Self, TopologyError> {
		check_shape(value)?;
		Ok(Self::deserialize(value)?)
	}

	/// Look up a node by its `node_id`.
	pub fn node(&self, node_id: &str) -> Option<&NodeRecord> {
		self.nodes.iter().find(|node| node.node_id.as_str() == node_id)
	}

	/// Find the node owning the link whose local interface carries `address`.
	pub fn node_by_interface_address(&self, address: &str) -> Option<&NodeRecord> {
		self.nodes.iter().find(|node| {
			node.links
				.iter()
				.any(|link| link.interface_address() == Some(address))
		})
	}
}

/// The `<ASN, router id>` pair identifying a node.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NodeDescriptors {
	/// Autonomous system the node belongs to.
	pub autonomous_system: Option<Identifier>,
	/// Router id, unique within the autonomous system.
	pub router_id: Option<Identifier>,
}

/// Path attributes carried with a node announcement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NodeAttributes {
	/// BGP-LS attribute block.
	pub bgp_ls: Option<NodeLinkState>,
}

/// BGP-LS node attributes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NodeLinkState {
	/// Advertised hostname.
	pub node_name: Option<String>,
}

/// One BGP-LS node and everything learned about it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NodeRecord {
	/// Unique within a snapshot.
	pub node_id: Identifier,
	/// Local node descriptors.
	#[serde(default)]
	pub node_descriptors: Option<NodeDescriptors>,
	/// Node attributes, including the advertised name.
	#[serde(default)]
	pub attributes: Option<NodeAttributes>,
	/// Outbound adjacencies in advertised order.
	#[serde(default)]
	pub links: Vec<LinkRecord>,
	/// IPv4 prefixes reachable through the node.
	#[serde(default)]
	pub prefixes_v4: Vec<PrefixRecord>,
	/// IPv6 prefixes reachable through the node.
	#[serde(default)]
	pub prefixes_v6: Vec<PrefixRecord>,
}

impl NodeRecord {
	/// The advertised node name (`attributes.bgp_ls.node_name`), if any.
	pub fn name(&self) -> Option<&str> {
		self.attributes
			.as_ref()?
			.bgp_ls
			.as_ref()?
			.node_name
			.as_deref()
	}

	/// The name to show for this node, falling back to its id.
	pub fn display_name(&self) -> &str {
		self.name().unwrap_or(self.node_id.as_str())
	}
}

/// Path attributes carried with a link announcement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LinkAttributes {
	/// BGP-LS attribute block.
	pub bgp_ls: Option<LinkLinkState>,
}

/// BGP-LS link attributes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LinkLinkState {
	/// IGP metric of the adjacency.
	pub igp_metric: Option<u32>,
}

/// Local end of a link.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InterfaceAddress {
	/// Address configured on the local interface.
	pub interface_address: Option<String>,
}

/// Remote end of a link.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NeighborAddress {
	/// Address of the neighbor's interface.
	pub neighbor_address: Option<String>,
}

/// An outbound adjacency of a node.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LinkRecord {
	/// Descriptors of the node at the far end.
	#[serde(default)]
	pub remote_node_descriptors: Option<NodeDescriptors>,
	/// Link attributes, including the IGP metric.
	#[serde(default)]
	pub attributes: Option<LinkAttributes>,
	/// Local interface address.
	#[serde(default)]
	pub interface_address: Option<InterfaceAddress>,
	/// Neighbor interface address.
	#[serde(default)]
	pub neighbor_address: Option<NeighborAddress>,
}

impl LinkRecord {
	/// `remote_node_descriptors.autonomous_system`.
	pub fn remote_autonomous_system(&self) -> Option<&Identifier> {
		self.remote_node_descriptors.as_ref()?.autonomous_system.as_ref()
	}

	/// `remote_node_descriptors.router_id`.
	pub fn remote_router_id(&self) -> Option<&Identifier> {
		self.remote_node_descriptors.as_ref()?.router_id.as_ref()
	}

	/// Synthetic id of the remote endpoint, `<asn>:<router-id>`.
	pub fn remote_id(&self) -> Option<String> {
		let asn = self.remote_autonomous_system()?;
		let router_id = self.remote_router_id()?;
		Some(format!("{asn}{REMOTE_ID_SEPARATOR}{router_id}"))
	}

	/// IGP metric (`attributes.bgp_ls.igp_metric`).
	pub fn metric(&self) -> Option<u32> {
		self.attributes.as_ref()?.bgp_ls.as_ref()?.igp_metric
	}

	/// Local interface address, if advertised.
	pub fn interface_address(&self) -> Option<&str> {
		self.interface_address
			.as_ref()?
			.interface_address
			.as_deref()
	}

	/// Neighbor interface address, if advertised.
	pub fn neighbor_address(&self) -> Option<&str> {
		self.neighbor_address.as_ref()?.neighbor_address.as_deref()
	}
}

/// Path attributes carried with a prefix announcement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PrefixAttributes {
	/// BGP-LS attribute block.
	pub bgp_ls: Option<PrefixLinkState>,
}

/// BGP-LS prefix attributes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PrefixLinkState {
	/// Metric to reach the prefix.
	pub prefix_metric: Option<u32>,
}

/// A reachable prefix advertised by a node.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PrefixRecord {
	/// The prefix in CIDR notation.
	#[serde(default)]
	pub ip_reach_prefix: Option<String>,
	/// Prefix attributes, including its metric.
	#[serde(default)]
	pub attributes: Option<PrefixAttributes>,
}

impl PrefixRecord {
	/// Prefix metric (`attributes.bgp_ls.prefix_metric`).
	pub fn metric(&self) -> Option<u32> {
		self.attributes.as_ref()?.bgp_ls.as_ref()?.prefix_metric
	}
}
