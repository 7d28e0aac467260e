//! Browser entry point for the BGP-LS topology viewer.

use bgpls_topology_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
