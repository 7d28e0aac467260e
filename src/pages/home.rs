use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use log::info;

use crate::api;
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::node_detail::{error_list, node_path};
use crate::components::summary::TopologySummaryPanel;
use crate::config::ViewerConfig;
use crate::topology::{TopologySummary, project};

/// Topology page: fetches the snapshot, projects it and hands it to the canvas.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let url = config.topology_url.clone();
	let topology = LocalResource::new(move || api::fetch_topology(url.clone()));

	let (selected, set_selected) = signal(None::<String>);
	let navigate = use_navigate();
	Effect::new(move |_| {
		if let Some(id) = selected.get() {
			navigate(&node_path(&id), Default::default());
		}
	});

	let graph_view = move || {
		topology.get().map(|result| {
			result.and_then(|topology| {
				let summary = TopologySummary::from(&topology);
				let graph = project(&topology)?;
				let dangling = graph.dangling_edges().count();
				if dangling > 0 {
					info!("{dangling} edges target routers outside the snapshot");
				}
				let graph = Signal::derive(move || graph.clone());

				Ok(view! {
					<ForceGraphCanvas
						graph=graph
						config=config.clone()
						fullscreen=true
						selected=set_selected
					/>
					<div class="graph-overlay">
						<h1>"BGP-LS Topology"</h1>
						<p class="subtitle">
							"Drag nodes to reposition. Scroll to zoom. Click a node for its links and prefixes."
						</p>
						<TopologySummaryPanel summary=summary />
					</div>
				})
			})
		})
	};

	view! {
		<div class="fullscreen-graph">
			<Transition fallback=|| view! { <p class="loading">"Loading topology..."</p> }>
				<ErrorBoundary fallback=error_list>{graph_view}</ErrorBoundary>
			</Transition>
		</div>
	}
}
