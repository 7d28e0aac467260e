use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::node_detail::{NodeDetailView, error_list};
use crate::config::ViewerConfig;
use crate::topology::NodeDetail;

/// Resolves a neighbor address to the node whose interface carries it.
#[component]
pub fn NeighborPage() -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let topology = LocalResource::new(move || api::fetch_topology(config.topology_url.clone()));
	let params = use_params_map();

	let detail_view = move || {
		let address = params.read().get("address").unwrap_or_default();
		topology.get().map(|result| {
			result.map(|topology| match topology.node_by_interface_address(&address) {
				Some(node) => view! { <NodeDetailView detail=NodeDetail::from(node) /> }.into_any(),
				None => view! { <p class="not-found">"No interface with address " {address}</p> }
					.into_any(),
			})
		})
	};

	view! {
		<Transition fallback=|| view! { <p class="loading">"Resolving neighbor..."</p> }>
			<ErrorBoundary fallback=error_list>{detail_view}</ErrorBoundary>
		</Transition>
	}
}
