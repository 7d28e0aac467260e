use leptos::error::Errors;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::topology::{NodeDetail, PrefixRow};

pub fn node_path(node_id: &str) -> String {
	format!("/node/{node_id}")
}

pub fn neighbor_path(address: &str) -> String {
	format!("/neighbor/{address}")
}

/// Fallback for `ErrorBoundary`s wrapping topology fetches.
pub fn error_list(errors: ArcRwSignal<Errors>) -> impl IntoView {
	view! {
		<div class="topology-error">
			<h1>"Unable to display topology"</h1>
			<ul>
				{move || {
					errors
						.get()
						.into_iter()
						.map(|(_, e)| view! { <li>{e.to_string()}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}

#[component]
fn PrefixTable(title: &'static str, prefixes: Vec<PrefixRow>) -> impl IntoView {
	view! {
		<h2>{title}</h2>
		<table class="prefixes">
			<thead>
				<tr>
					<th>"Prefix"</th>
					<th>"Metric"</th>
				</tr>
			</thead>
			<tbody>
				{prefixes
					.into_iter()
					.map(|row| {
						let metric = row.metric.map(|m| m.to_string()).unwrap_or_else(|| "-".into());
						view! {
							<tr>
								<td>{row.prefix}</td>
								<td>{metric}</td>
							</tr>
						}
					})
					.collect_view()}
			</tbody>
		</table>
	}
}

/// Links and prefixes of a single node.
#[component]
pub fn NodeDetailView(detail: NodeDetail) -> impl IntoView {
	let NodeDetail {
		node_id,
		name,
		links,
		prefixes_v4,
		prefixes_v6,
	} = detail;

	view! {
		<section class="node-detail">
			<A href="/">"Back to topology"</A>
			<h1>{name}</h1>
			<p class="node-id">{node_id}</p>

			<h2>"Links"</h2>
			<table class="links">
				<thead>
					<tr>
						<th>"Remote node"</th>
						<th>"Metric"</th>
						<th>"Interface"</th>
						<th>"Neighbor"</th>
					</tr>
				</thead>
				<tbody>
					{links
						.into_iter()
						.map(|link| {
							let neighbor = link
								.neighbor_address
								.map(|address| {
									let href = neighbor_path(&address);
									view! { <A href=href>{address}</A> }
								});
							view! {
								<tr>
									<td>{link.remote_id}</td>
									<td>{link.metric}</td>
									<td>{link.interface_address.unwrap_or_default()}</td>
									<td>{neighbor}</td>
								</tr>
							}
						})
						.collect_view()}
				</tbody>
			</table>

			<PrefixTable title="IPv4 prefixes" prefixes=prefixes_v4 />
			<PrefixTable title="IPv6 prefixes" prefixes=prefixes_v6 />
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_embed_identifiers() {
		assert_eq!(node_path("65000:10.0.0.1"), "/node/65000:10.0.0.1");
		assert_eq!(neighbor_path("10.0.12.2"), "/neighbor/10.0.12.2");
	}
}
