//! Archive page: pill list with a category filter.

use leptos::prelude::*;

use super::format_duration;
use crate::model::{Category, Pill};
use crate::state::AppState;

/// Pill list with category filter buttons.
#[component]
pub fn ArchivePage(state: AppState) -> impl IntoView {
	let visible = move || {
		let filter = state.filter.get();
		state.pills.with(|pills| {
			pills
				.iter()
				.filter(|p| filter.is_none_or(|c| p.category == c))
				.cloned()
				.collect::<Vec<_>>()
		})
	};

	view! {
		<section class="page archive-page">
			<div class="archive-filters">
				<button
					class:active=move || state.filter.get().is_none()
					on:click=move |_| state.filter.set(None)
				>
					"Tutte"
				</button>
				{Category::ALL
					.into_iter()
					.map(|category| {
						view! {
							<button
								class:active=move || state.filter.get() == Some(category)
								on:click=move |_| state.filter.set(Some(category))
							>
								{category.info().icon}
								" "
								{category.title()}
							</button>
						}
					})
					.collect_view()}
			</div>
			<Show
				when=move || !visible().is_empty()
				fallback=|| {
					view! {
						<p class="empty">"Nessuna pillola. Aggiorna la conoscenza dalla home."</p>
					}
				}
			>
				<div class="pills-list">
					<For
						each=visible
						key=|pill| pill.id.clone()
						children=move |pill: Pill| view! { <PillCard state=state pill=pill /> }
					/>
				</div>
			</Show>
		</section>
	}
}

#[component]
fn PillCard(state: AppState, pill: Pill) -> impl IntoView {
	let info = pill.category.info();
	let id = pill.id.clone();
	view! {
		<div
			class="pill-card"
			style=format!("border-left: 4px solid {}", info.color.to_css())
			on:click=move |_| state.open_pill(id.clone())
		>
			<h4>{pill.title}</h4>
			<p>{pill.excerpt}</p>
			<small>{info.icon} " " {info.title} " · " {format_duration(pill.duration)}</small>
		</div>
	}
}
