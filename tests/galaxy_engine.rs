#![allow(unused_crate_dependencies)]

use std::collections::{HashMap, HashSet};

use omnia_pills::components::galaxy::{EDGE_STRENGTH, PICK_RADIUS, TagGraph, VELOCITY_SCALE};
use omnia_pills::model::{Category, Pill, PillDraft, PillFactory, Source};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pills(entries: &[(&str, &[&str])]) -> Vec<Pill> {
	let mut factory = PillFactory::new(StdRng::seed_from_u64(11));
	entries
		.iter()
		.map(|(title, tags)| {
			factory.build(
				PillDraft::new(*title, "contenuto", tags),
				Category::Attualita,
				Source::Internal,
				0,
			)
		})
		.collect()
}

fn build(pills: &[Pill], width: f64, height: f64) -> TagGraph {
	TagGraph::build(pills, width, height, &mut StdRng::seed_from_u64(3))
}

#[test]
fn shared_label_scenario_links_only_the_sharing_pair() {
	let pills = pills(&[
		("A", &["clima", "scienza"]),
		("B", &["clima"]),
		("C", &[]),
	]);
	let graph = build(&pills, 400.0, 300.0);

	assert_eq!(graph.nodes.len(), 3);
	assert_eq!(graph.edges.len(), 1);
	let edge = graph.edges[0];
	assert_eq!((edge.source, edge.target), (0, 1));
	assert_eq!(edge.strength, EDGE_STRENGTH);
}

#[test]
fn nodes_follow_pill_order_and_start_inside_the_surface() {
	let pills = pills(&[("A", &[]), ("B", &[]), ("C", &[]), ("D", &[]), ("E", &[])]);
	let graph = build(&pills, 640.0, 480.0);

	assert_eq!(graph.nodes.len(), pills.len());
	for (node, pill) in graph.nodes.iter().zip(&pills) {
		assert_eq!(node.pill_id, pill.id);
		assert_eq!(node.title, pill.title);
		assert_eq!(node.category, pill.category);
		assert!(!node.read);
		assert!((0.0..640.0).contains(&node.x));
		assert!((0.0..480.0).contains(&node.y));
		assert!(node.vx.abs() <= VELOCITY_SCALE);
		assert!(node.vy.abs() <= VELOCITY_SCALE);
	}
}

#[test]
fn edge_count_is_sum_of_pairs_per_label() {
	let pills = pills(&[
		("A", &["europa", "novecento"]),
		("B", &["europa", "novecento"]),
		("C", &["europa"]),
		("D", &["novecento", "clima"]),
		("E", &["clima"]),
		("F", &["solo"]),
	]);
	let graph = build(&pills, 100.0, 100.0);

	let mut holders: HashMap<&str, usize> = HashMap::new();
	for pill in &pills {
		for tag in &pill.tags {
			*holders.entry(tag.label.as_str()).or_default() += 1;
		}
	}
	let expected: usize = holders.values().map(|&k| k * (k - 1) / 2).sum();

	// europa: 3 pairs, novecento: 3 pairs, clima: 1 pair.
	assert_eq!(expected, 7);
	assert_eq!(graph.edges.len(), expected);
	assert!(graph.edges.iter().all(|e| e.source < e.target));

	// A and B share two labels and get two edges.
	let ab = graph
		.edges
		.iter()
		.filter(|e| (e.source, e.target) == (0, 1))
		.count();
	assert_eq!(ab, 2);
}

#[test]
fn empty_and_degenerate_inputs() {
	let graph = build(&[], 100.0, 100.0);
	assert!(graph.nodes.is_empty());
	assert!(graph.edges.is_empty());

	let pills = pills(&[("A", &["x"]), ("B", &["x"])]);
	let mut graph = build(&pills, 0.0, -5.0);
	assert_eq!(graph.nodes.len(), 2);
	for node in &graph.nodes {
		assert_eq!((node.x, node.y), (0.0, 0.0));
	}
	graph.advance();
	for node in &graph.nodes {
		assert_eq!((node.x, node.y), (0.0, 0.0));
	}
}

#[test]
fn advance_moves_by_velocity_inside_the_surface() {
	let pills = pills(&[("A", &[])]);
	let mut graph = build(&pills, 100.0, 100.0);
	let node = &mut graph.nodes[0];
	(node.x, node.y, node.vx, node.vy) = (50.0, 50.0, 0.5, -0.25);

	graph.advance();

	let node = &graph.nodes[0];
	assert_eq!((node.x, node.y), (50.5, 49.75));
	assert_eq!((node.vx, node.vy), (0.5, -0.25));
}

#[test]
fn advance_reflects_at_every_border() {
	let pills = pills(&[("left", &[]), ("right", &[]), ("top", &[]), ("bottom", &[])]);
	let mut graph = build(&pills, 100.0, 80.0);
	let starts = [
		(0.2, 40.0, -0.5, 0.0),
		(99.9, 40.0, 0.5, 0.0),
		(50.0, 0.1, 0.0, -0.5),
		(50.0, 79.8, 0.0, 0.5),
	];
	for (node, &(x, y, vx, vy)) in graph.nodes.iter_mut().zip(&starts) {
		(node.x, node.y, node.vx, node.vy) = (x, y, vx, vy);
	}

	graph.advance();

	let left = &graph.nodes[0];
	assert_eq!(left.x, 0.0);
	assert_eq!(left.vx, 0.5);

	let right = &graph.nodes[1];
	assert_eq!(right.x, 100.0);
	assert_eq!(right.vx, -0.5);

	let top = &graph.nodes[2];
	assert_eq!(top.y, 0.0);
	assert_eq!(top.vy, 0.5);

	let bottom = &graph.nodes[3];
	assert_eq!(bottom.y, 80.0);
	assert_eq!(bottom.vy, -0.5);

	// Reflected nodes come back inside on the next step.
	graph.advance();
	assert!(graph.nodes[0].x > 0.0);
	assert!(graph.nodes[1].x < 100.0);
	assert!(graph.nodes[2].y > 0.0);
	assert!(graph.nodes[3].y < 80.0);
}

#[test]
fn motion_never_leaves_the_surface() {
	let pills = pills(&[("A", &[]), ("B", &[]), ("C", &[])]);
	let mut graph = build(&pills, 50.0, 30.0);
	for _ in 0..10_000 {
		graph.advance();
		for node in &graph.nodes {
			assert!((0.0..=50.0).contains(&node.x));
			assert!((0.0..=30.0).contains(&node.y));
		}
	}
}

#[test]
fn hit_test_is_first_match_within_pick_radius() {
	let pills = pills(&[("A", &[]), ("B", &[]), ("C", &[])]);
	let mut graph = build(&pills, 200.0, 200.0);
	let places = [(100.0, 100.0), (104.0, 100.0), (150.0, 150.0)];
	for (node, &(x, y)) in graph.nodes.iter_mut().zip(&places) {
		(node.x, node.y) = (x, y);
	}

	// B is closer to the pointer, but A comes first and is within range.
	assert_eq!(graph.hit_test(104.0, 100.0), Some(0));
	assert_eq!(graph.hit_test(112.0, 100.0), Some(1));
	assert_eq!(graph.hit_test(150.0, 150.0 + PICK_RADIUS - 0.01), Some(2));
	assert_eq!(graph.hit_test(150.0, 150.0 + PICK_RADIUS), None);
	assert_eq!(graph.hit_test(10.0, 10.0), None);
}

#[test]
fn mark_read_flags_only_the_picked_node() {
	let pills = pills(&[("A", &[]), ("B", &[])]);
	let mut graph = build(&pills, 100.0, 100.0);
	graph.mark_read(1);
	graph.mark_read(99);
	assert!(!graph.nodes[0].read);
	assert!(graph.nodes[1].read);
}

#[test]
fn previously_opened_pills_start_read() {
	let pills = pills(&[("A", &[]), ("B", &[]), ("C", &[])]);
	let mut graph = build(&pills, 100.0, 100.0);
	let opened: HashSet<String> = [pills[0].id.clone(), pills[2].id.clone(), "gone".to_string()]
		.into_iter()
		.collect();

	graph.mark_read_pills(&opened);

	let read: Vec<bool> = graph.nodes.iter().map(|n| n.read).collect();
	assert_eq!(read, vec![true, false, true]);
}

#[test]
fn seeded_builds_are_reproducible() {
	let pills = pills(&[("A", &["x"]), ("B", &["x"])]);
	let a = build(&pills, 300.0, 200.0);
	let b = build(&pills, 300.0, 200.0);
	assert_eq!(a.nodes, b.nodes);
	assert_eq!(a.edges, b.edges);
}
