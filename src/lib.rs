//! BGP-LS topology viewer: projects link-state snapshots into a node/edge
//! graph and draws them on a force-directed canvas.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub(crate) mod api;
mod components;
pub(crate) mod config;
mod pages;
pub mod topology;

// Top-Level pages
use crate::config::ViewerConfig;
use crate::pages::home::Home;
use crate::pages::neighbor::NeighborPage;
use crate::pages::node::NodePage;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router for the topology graph and the per-node detail views.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(ViewerConfig::load());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="BGP-LS Topology" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/node/:id") view=NodePage />
				<Route path=path!("/neighbor/:address") view=NeighborPage />
			</Routes>
		</Router>
	}
}
