//! Animated tag galaxy.
//!
//! Pills become nodes scattered over a canvas; pills sharing a tag label are
//! joined by edges. Nodes drift and bounce off the borders without any force
//! model, and clicking a node opens its pill.
//!
//! # Example
//!
//! ```ignore
//! view! {
//!     <GalaxyCanvas
//!         pills=pills_signal
//!         read=read_ids_signal
//!         dark_mode=dark_signal
//!         on_select=Callback::new(move |id: String| open_pill(id))
//!     />
//! }
//! ```

mod component;
pub mod engine;
mod render;

pub use component::{GalaxyCanvas, GalaxyError, GalaxyLoop, StopHandle};
pub use engine::{EDGE_STRENGTH, GraphEdge, GraphNode, PICK_RADIUS, TagGraph, VELOCITY_SCALE};
