pub mod force_graph;
pub mod node_detail;
pub mod summary;
