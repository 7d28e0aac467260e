use thiserror::Error;

/// Everything that can go wrong between fetching a snapshot and projecting it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
	/// The snapshot does not have the expected shape.
	#[error("malformed topology: {0}")]
	MalformedInput(String),

	/// The snapshot could not be retrieved.
	#[error("failed to fetch topology: {0}")]
	Fetch(String),
}

impl From<serde_json::Error> for TopologyError {
	fn from(error: serde_json::Error) -> Self {
		Self::MalformedInput(error.to_string())
	}
}
