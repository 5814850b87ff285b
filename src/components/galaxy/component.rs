//! Animation loop and Leptos component for the galaxy canvas.
//!
//! [`GalaxyLoop::start`] binds a canvas and schedules a `requestAnimationFrame`
//! callback that renders the current positions, advances the simulation, and
//! reschedules itself. [`GalaxyLoop::stop`] (or dropping the loop) cancels the
//! pending frame, so leaving the page releases the loop.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::engine::TagGraph;
use super::render;
use crate::model::Pill;
use crate::theme::Theme;
use crate::web;

/// The galaxy could not bind its canvas or schedule a frame.
#[derive(Debug, Error)]
pub enum GalaxyError {
	/// Not running in a browser window.
	#[error("no browser window")]
	NoWindow,
	/// The canvas refused a 2D context.
	#[error("canvas 2d context unavailable: {0}")]
	Context(String),
	/// `requestAnimationFrame` failed.
	#[error("failed to schedule animation frame: {0}")]
	Schedule(String),
}

/// Thread-safe switch shared between a loop and whoever may stop it.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
	running: Arc<AtomicBool>,
	frame_id: Arc<AtomicI32>,
}

impl StopHandle {
	fn started() -> Self {
		let handle = Self::default();
		handle.running.store(true, Ordering::SeqCst);
		handle
	}

	/// Whether the loop will keep rescheduling itself.
	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::SeqCst)
	}

	/// Cancels the pending frame. Idempotent.
	pub fn stop(&self) {
		if !self.running.swap(false, Ordering::SeqCst) {
			return;
		}
		let id = self.frame_id.swap(0, Ordering::SeqCst);
		if id != 0 {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running galaxy bound to one canvas.
pub struct GalaxyLoop {
	graph: Rc<RefCell<TagGraph>>,
	handle: StopHandle,
	_frame: FrameSlot,
}

impl GalaxyLoop {
	/// Builds the graph for `pills` at the canvas size, flags the pills in
	/// `read`, and schedules the first frame.
	pub fn start(
		canvas: &HtmlCanvasElement,
		pills: &[Pill],
		read: &HashSet<String>,
		theme: Theme,
	) -> Result<Self, GalaxyError> {
		let window = web_sys::window().ok_or(GalaxyError::NoWindow)?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.map_err(|e| GalaxyError::Context(format!("{e:?}")))?
			.ok_or_else(|| GalaxyError::Context("missing".into()))?
			.dyn_into()
			.map_err(|e| GalaxyError::Context(format!("{e:?}")))?;

		let mut graph = TagGraph::build(
			pills,
			canvas.width() as f64,
			canvas.height() as f64,
			&mut web::rng(),
		);
		graph.mark_read_pills(read);
		info!(
			"omnia: galaxy started with {} nodes, {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);

		let graph = Rc::new(RefCell::new(graph));
		let handle = StopHandle::started();
		let frame: FrameSlot = Rc::new(RefCell::new(None));

		let (graph_anim, handle_anim, frame_weak) =
			(graph.clone(), handle.clone(), Rc::downgrade(&frame));
		*frame.borrow_mut() = Some(Closure::new(move || {
			if !handle_anim.is_running() {
				return;
			}
			{
				let mut g = graph_anim.borrow_mut();
				render::render(&g, &ctx, &theme);
				g.advance();
			}
			let Some(slot) = frame_weak.upgrade() else {
				return;
			};
			if let Some(ref cb) = *slot.borrow() {
				if let Some(win) = web_sys::window() {
					if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						handle_anim.frame_id.store(id, Ordering::SeqCst);
					}
				}
			}
		}));

		if let Some(ref cb) = *frame.borrow() {
			let id = window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.map_err(|e| GalaxyError::Schedule(format!("{e:?}")))?;
			handle.frame_id.store(id, Ordering::SeqCst);
		}

		Ok(Self {
			graph,
			handle,
			_frame: frame,
		})
	}

	/// Handle that can stop this loop from anywhere.
	pub fn stop_handle(&self) -> StopHandle {
		self.handle.clone()
	}

	/// Resolves a click to a pill id and marks its node as read.
	pub fn pick(&self, x: f64, y: f64) -> Option<String> {
		let mut graph = self.graph.borrow_mut();
		let index = graph.hit_test(x, y)?;
		graph.mark_read(index);
		Some(graph.nodes[index].pill_id.clone())
	}

	/// Cancels the pending frame and releases the callback.
	pub fn stop(self) {
		drop(self);
	}
}

impl Drop for GalaxyLoop {
	fn drop(&mut self) {
		self.handle.stop();
	}
}

/// Renders the pill galaxy and reports clicked pills through `on_select`.
///
/// The canvas takes its parent's size. The graph is rebuilt whenever `pills`
/// or `dark_mode` change and stopped when the component unmounts. Pills in
/// `read` start out dimmed.
#[component]
pub fn GalaxyCanvas(
	#[prop(into)] pills: Signal<Vec<Pill>>,
	#[prop(into)] read: Signal<HashSet<String>>,
	#[prop(into)] dark_mode: Signal<bool>,
	#[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let galaxy: Rc<RefCell<Option<GalaxyLoop>>> = Rc::new(RefCell::new(None));
	let current: Arc<Mutex<StopHandle>> = Arc::new(Mutex::new(StopHandle::default()));
	let (galaxy_init, current_init) = (galaxy.clone(), current.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let pills = pills.get();
		let theme = Theme::for_mode(dark_mode.get());
		let read = read.get_untracked();

		let (w, h) = canvas
			.parent_element()
			.map(|p| (p.client_width(), p.client_height()))
			.filter(|&(w, h)| w > 0 && h > 0)
			.unwrap_or((800, 600));
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Dropping the previous loop cancels its pending frame.
		galaxy_init.borrow_mut().take();
		match GalaxyLoop::start(&canvas, &pills, &read, theme) {
			Ok(running) => {
				if let Ok(mut slot) = current_init.lock() {
					*slot = running.stop_handle();
				}
				*galaxy_init.borrow_mut() = Some(running);
			}
			Err(e) => warn!("omnia: galaxy failed to start: {e}"),
		}
	});

	on_cleanup(move || {
		if let Ok(handle) = current.lock() {
			handle.stop();
		}
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		if rect.width() <= 0.0 || rect.height() <= 0.0 {
			return;
		}
		let (x, y) = (
			(ev.client_x() as f64 - rect.left()) * canvas.width() as f64 / rect.width(),
			(ev.client_y() as f64 - rect.top()) * canvas.height() as f64 / rect.height(),
		);

		let picked = galaxy.borrow().as_ref().and_then(|g| g.pick(x, y));
		if let Some(pill_id) = picked {
			on_select.run(pill_id);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="galaxy-canvas"
			on:click=on_click
			style="display: block; width: 100%; height: 100%; cursor: pointer;"
		/>
	}
}
