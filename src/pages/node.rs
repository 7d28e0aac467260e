use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::node_detail::{NodeDetailView, error_list};
use crate::config::ViewerConfig;
use crate::topology::NodeDetail;

/// Links and prefixes of the node named in the `:id` route segment.
#[component]
pub fn NodePage() -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let topology = LocalResource::new(move || api::fetch_topology(config.topology_url.clone()));
	let params = use_params_map();

	let detail_view = move || {
		let node_id = params.read().get("id").unwrap_or_default();
		topology.get().map(|result| {
			result.map(|topology| match topology.node(&node_id) {
				Some(node) => view! { <NodeDetailView detail=NodeDetail::from(node) /> }.into_any(),
				None => view! { <p class="not-found">"No node " {node_id} " in this topology"</p> }
					.into_any(),
			})
		})
	};

	view! {
		<Transition fallback=|| view! { <p class="loading">"Loading node..."</p> }>
			<ErrorBoundary fallback=error_list>{detail_view}</ErrorBoundary>
		</Transition>
	}
}
