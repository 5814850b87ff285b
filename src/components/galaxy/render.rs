//! Canvas rendering for the galaxy.
//!
//! Drawing order: background, edges, then per node a halo followed by the
//! core, dimmed once the pill has been read. Rendering reads positions as they are at the start of the frame.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::engine::{GraphEdge, GraphNode, TagGraph};
use crate::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(graph: &TagGraph, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(graph, ctx, theme);

	for edge in &graph.edges {
		draw_edge(graph, ctx, theme, edge);
	}

	for node in &graph.nodes {
		draw_node(ctx, theme, node);
	}
}

fn draw_background(graph: &TagGraph, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, graph.width(), graph.height());
}

fn draw_edge(
	graph: &TagGraph,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	edge: &GraphEdge,
) {
	let (Some(a), Some(b)) = (graph.nodes.get(edge.source), graph.nodes.get(edge.target)) else {
		return;
	};

	let color = theme.edge.color.with_alpha(theme.edge.alpha(edge.strength));
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(theme.edge.width(edge.strength));

	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.stroke();
}

fn draw_node(ctx: &CanvasRenderingContext2d, theme: &Theme, node: &GraphNode) {
	let color = node.category.color();
	let radius = theme.node.radius;

	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, radius * theme.node.halo_scale, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&color.with_alpha(theme.node.halo_alpha).to_css());
	ctx.fill();

	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&color.with_alpha(theme.node.core_alpha(node.read)).to_css());
	ctx.fill();
}
