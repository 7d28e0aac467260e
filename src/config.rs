//! Viewer configuration, read from an inline JSON block in the host page.

use force_graph::SimulationParameters;
use log::{info, warn};
use serde::Deserialize;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// Physics knobs handed to the force simulation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
	/// Repulsion between nodes.
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	/// Radius of the seeded initial placement.
	pub spread: f64,
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			force_charge: 500.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			spread: 400.0,
		}
	}
}

impl PhysicsConfig {
	pub fn simulation_parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Label font.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
	pub size: f64,
	pub color: String,
}

impl Default for FontConfig {
	fn default() -> Self {
		Self {
			size: 12.0,
			color: "#d3d3d3".into(),
		}
	}
}

/// Everything the integrator may tune about the topology view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	/// Where the topology snapshot is fetched from.
	pub topology_url: String,
	/// Seed for the initial node placement.
	pub layout_seed: u64,
	pub physics: PhysicsConfig,
	pub node_color: String,
	pub edge_color: String,
	pub node_font: FontConfig,
	pub edge_font: FontConfig,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			topology_url: "/api/topology".into(),
			layout_seed: 3342,
			physics: PhysicsConfig::default(),
			node_color: "#1f77b4".into(),
			edge_color: "#9E9E9E".into(),
			node_font: FontConfig {
				size: 12.5,
				color: "#d3d3d3".into(),
			},
			edge_font: FontConfig {
				size: 12.0,
				color: "#9E9E9E".into(),
			},
		}
	}
}

impl ViewerConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Read overrides from the host page, falling back to defaults when the
	/// element is missing or unreadable.
	pub fn load() -> Self {
		let Some(text) = web_sys::window()
			.and_then(|window| window.document())
			.and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
			.and_then(|element| element.text_content())
		else {
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!("Loaded viewer config from #{CONFIG_ELEMENT_ID}");
				config
			}
			Err(error) => {
				warn!("Ignoring invalid viewer config: {error}");
				Self::default()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
	}

	#[test]
	fn partial_overrides_keep_remaining_defaults() {
		let config = ViewerConfig::from_json(
			r#"{ "topology_url": "http://ted.example/api/topology", "physics": { "spread": 250.0 } }"#,
		)
		.unwrap();

		assert_eq!(config.topology_url, "http://ted.example/api/topology");
		assert_eq!(config.physics.spread, 250.0);
		assert_eq!(config.physics.damping_factor, 0.9);
		assert_eq!(config.layout_seed, 3342);
	}

	#[test]
	fn wrong_types_are_rejected() {
		assert!(ViewerConfig::from_json(r#"{ "layout_seed": "abc" }"#).is_err());
	}
}
