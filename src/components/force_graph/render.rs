use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, TopologyCanvasState};

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &TopologyCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &TopologyCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 10.0 / k);
	let t = ease_out_cubic(state.hover.highlight_t);
	let font = &state.config.edge_font;

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		// t=0: every edge at 0.8; t=1: the hovered star at 1.0, the rest at 0.15
		let alpha = if state.is_highlighted(n1.index()) && state.is_highlighted(n2.index()) {
			0.8 + 0.2 * t
		} else {
			0.8 - 0.65 * t
		};
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&state.config.edge_color);
		ctx.set_fill_style_str(&state.config.edge_color);
		ctx.set_line_width(line_width);

		let (ux, uy) = (dx / dist, dy / dist);
		let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		// Offset to the left of travel so A->B and B->A labels don't overlap.
		let (mx, my) = ((x1 + x2) / 2.0 - uy * 10.0 / k, (y1 + y2) / 2.0 + ux * 10.0 / k);
		ctx.set_fill_style_str(&font.color);
		ctx.set_font(&format!("{}px sans-serif", font.size / k.max(0.5)));
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&edge.user_data.label, mx, my);
	});
	ctx.set_global_alpha(1.0);
	ctx.set_text_align("start");
}

fn draw_nodes(state: &TopologyCanvasState, ctx: &CanvasRenderingContext2d) {
	let (t, k) = (ease_out_cubic(state.hover.highlight_t), state.transform.k);
	let font = &state.config.node_font;

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let highlighted = state.is_highlighted(idx);
		let alpha = if highlighted { 1.0 } else { 1.0 - 0.7 * t };
		let radius = if state.is_hovered(idx) {
			NODE_RADIUS * (1.0 + 0.35 * t)
		} else {
			NODE_RADIUS
		};

		if state.is_hovered(idx) && t > 0.01 {
			let glow_radius = NODE_RADIUS * (1.8 + 1.2 * t);
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.35 * t));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&state.config.node_color);
		ctx.fill();

		ctx.set_fill_style_str(&font.color);
		ctx.set_font(&format!("{}px sans-serif", font.size / k.max(0.5)));
		let _ = ctx.fill_text(&node.data.user_data.label, x + radius + 3.0, y + 4.0);
		ctx.set_global_alpha(1.0);
	});
}
