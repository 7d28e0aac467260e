//! BGP-LS topology snapshots and their projection into a flat node/edge graph.

mod detail;
mod error;
mod projector;
mod record;
mod summary;

pub use detail::{LinkRow, NodeDetail, PrefixRow};
pub use error::TopologyError;
pub use projector::{
	ProjectedEdge, ProjectedGraph, ProjectedNode, metric_label, project, project_value,
};
pub use record::{
	Identifier, InterfaceAddress, LinkAttributes, LinkLinkState, LinkRecord, NeighborAddress,
	NodeAttributes, NodeDescriptors, NodeLinkState, NodeRecord, PrefixAttributes,
	PrefixLinkState, PrefixRecord, REMOTE_ID_SEPARATOR, TopologyRecord,
};
pub use summary::TopologySummary;
