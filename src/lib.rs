//! omnia-pills: knowledge pills reader for the browser.
//!
//! Pills are short educational texts grouped into categories, generated through
//! the Gemini API or taken from a bundled template set, kept in local storage,
//! and shown as cards, a list, a detail view with speech playback, and an
//! animated galaxy of pills linked by shared tags.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod content;
pub mod model;
pub mod speech;
pub mod state;
pub mod store;
pub mod theme;
pub mod web;

pub use components::galaxy::{GalaxyCanvas, GraphEdge, GraphNode, TagGraph};
pub use config::Config;
pub use model::{Category, Pill, PillDraft, Tag};

use components::archive::ArchivePage;
use components::detail::DetailPage;
use components::explore::GalaxyPage;
use components::home::HomePage;
use components::layout::{NavBar, NoticeBanner};
use components::settings::SettingsPage;
use state::{AppState, Page};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("omnia: logging initialized");
}

/// Main application component.
/// Loads the library from local storage and renders the current page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let state = AppState::load();
	let theme = move || {
		if state.config.with(|c| c.dark_mode) {
			"dark"
		} else {
			"light"
		}
	};

	view! {
		<Html attr:lang="it" attr:dir="ltr" attr:data-theme=theme />
		<Title text="OMNIA · Pillole di conoscenza" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app">
			<NavBar state=state />
			<NoticeBanner state=state />
			<main>
				{move || match state.page.get() {
					Page::Home => view! { <HomePage state=state /> }.into_any(),
					Page::Archive => view! { <ArchivePage state=state /> }.into_any(),
					Page::Detail => view! { <DetailPage state=state /> }.into_any(),
					Page::Galaxy => view! { <GalaxyPage state=state /> }.into_any(),
					Page::Settings => view! { <SettingsPage state=state /> }.into_any(),
				}}
			</main>
		</div>
	}
}
