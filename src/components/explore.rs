//! Galaxy page: the animated tag graph plus a category legend.

use leptos::prelude::*;

use super::galaxy::GalaxyCanvas;
use crate::model::Category;
use crate::state::AppState;

/// Galaxy canvas with its legend.
#[component]
pub fn GalaxyPage(state: AppState) -> impl IntoView {
	let pills = Signal::derive(move || state.pills.get());
	let read = Signal::derive(move || state.read.get());
	let dark_mode = Signal::derive(move || state.config.with(|c| c.dark_mode));
	let on_select = Callback::new(move |pill_id: String| state.open_pill(pill_id));

	view! {
		<section class="page galaxy-page">
			<div class="galaxy-frame" style="position: relative; width: 100%; height: 70vh;">
				<GalaxyCanvas pills=pills read=read dark_mode=dark_mode on_select=on_select />
			</div>
			<ul class="galaxy-legend">
				{Category::ALL
					.into_iter()
					.map(|category| {
						view! {
							<li>
								<span
									class="legend-dot"
									style=format!("background: {}", category.color().to_css())
								></span>
								{category.title()}
							</li>
						}
					})
					.collect_view()}
			</ul>
			<p class="galaxy-hint">"Le pillole con tag in comune sono collegate. Clicca un nodo per aprirla."</p>
		</section>
	}
}
