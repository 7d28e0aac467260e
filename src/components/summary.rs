use leptos::prelude::*;

use crate::topology::TopologySummary;

/// Node/link/prefix counters for the current snapshot.
#[component]
pub fn TopologySummaryPanel(summary: TopologySummary) -> impl IntoView {
	view! {
		<dl class="topology-summary">
			<dt>"Nodes"</dt>
			<dd>{summary.nodes.to_string()}</dd>
			<dt>"Links"</dt>
			<dd>{summary.links.to_string()}</dd>
			<dt>"IPv4 prefixes"</dt>
			<dd>{summary.prefixes_v4.to_string()}</dd>
			<dt>"IPv6 prefixes"</dt>
			<dd>{summary.prefixes_v6.to_string()}</dd>
		</dl>
	}
}
