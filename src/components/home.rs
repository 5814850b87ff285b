//! Home page: refresh action and one card per category.

use leptos::prelude::*;

use crate::model::Category;
use crate::state::AppState;

/// Refresh button and category cards.
#[component]
pub fn HomePage(state: AppState) -> impl IntoView {
	view! {
		<section class="page home-page">
			<div class="home-actions">
				<button
					class="refresh-btn"
					disabled=move || state.refreshing.get()
					on:click=move |_| state.refresh()
				>
					{move || {
						if state.refreshing.get() {
							"⏳ Ricerca Accademica..."
						} else {
							"🔄 Aggiorna Conoscenza"
						}
					}}
				</button>
				<span class="pill-total">{move || format!("{} pillole", state.pills.with(Vec::len))}</span>
			</div>
			<div class="categories-grid">
				{Category::ALL
					.into_iter()
					.map(|category| view! { <CategoryCard state=state category=category /> })
					.collect_view()}
			</div>
		</section>
	}
}

#[component]
fn CategoryCard(state: AppState, category: Category) -> impl IntoView {
	let info = category.info();
	view! {
		<div
			class="category-card"
			style=format!("border-left: 5px solid {}", info.color.to_css())
		>
			<div class="category-header">
				<span>{info.icon}</span>
				" "
				<span>{move || state.count(category)}</span>
			</div>
			<h3>{info.title}</h3>
			<p>{info.description}</p>
			<button on:click=move |_| state.browse(Some(category))>"Esplora"</button>
		</div>
	}
}
