//! HTTP source for topology snapshots.

use log::info;

use crate::topology::{TopologyError, TopologyRecord};

/// Fetches topology snapshots from one origin.
#[derive(Clone)]
pub struct ApiClient {
	base_url: String,
}

impl ApiClient {
	/// Client rooted at `base_url`.
	pub fn new(base_url: &str) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	/// Client rooted at the page's own origin.
	pub fn from_window() -> Self {
		let origin = web_sys::window()
			.and_then(|window| window.location().origin().ok())
			.unwrap_or_default();
		Self::new(&origin)
	}

	/// Absolute URLs are used as is; anything else is resolved against the base.
	pub fn url(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			path.to_string()
		} else if path.starts_with('/') {
			format!("{}{}", self.base_url, path)
		} else {
			format!("{}/{}", self.base_url, path)
		}
	}

	/// Fetch and decode the snapshot at `path`.
	pub async fn topology(&self, path: &str) -> Result<TopologyRecord, TopologyError> {
		let url = self.url(path);

		let response = reqwest::get(&url)
			.await
			.map_err(|e| TopologyError::Fetch(e.to_string()))?;

		if !response.status().is_success() {
			return Err(TopologyError::Fetch(format!("HTTP {}", response.status())));
		}

		let body: serde_json::Value = response
			.json()
			.await
			.map_err(body_error)?;
		let topology = TopologyRecord::from_value(&body)?;
		info!("Fetched {} topology nodes from {url}", topology.nodes.len());
		Ok(topology)
	}
}

fn body_error(error: reqwest::Error) -> TopologyError {
	if error.is_decode() {
		TopologyError::MalformedInput(error.to_string())
	} else {
		TopologyError::Fetch(error.to_string())
	}
}

/// Fetch the snapshot at `path`, relative to the current page.
pub async fn fetch_topology(path: String) -> Result<TopologyRecord, TopologyError> {
	ApiClient::from_window().topology(&path).await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_paths_against_base() {
		let client = ApiClient::new("http://ted.example:8000/");
		assert_eq!(client.url("/api/topology"), "http://ted.example:8000/api/topology");
		assert_eq!(client.url("topology.json"), "http://ted.example:8000/topology.json");
		assert_eq!(
			client.url("https://other.example/topology"),
			"https://other.example/topology"
		);
	}
}
