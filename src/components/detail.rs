//! Detail page: full pill text, tags and speech controls.

use chrono::DateTime;
use leptos::prelude::*;
use log::warn;

use super::format_duration;
use crate::model::{Pill, Source};
use crate::speech;
use crate::state::{AppState, Page};

fn created_label(millis: i64) -> String {
	DateTime::from_timestamp_millis(millis)
		.map(|d| d.format("%d/%m/%Y").to_string())
		.unwrap_or_default()
}

/// The selected pill, or a not-found message.
#[component]
pub fn DetailPage(state: AppState) -> impl IntoView {
	move || match state.selected_pill() {
		Some(pill) => view! { <PillDetail state=state pill=pill /> }.into_any(),
		None => {
			view! {
				<section class="page detail-page">
					<p class="empty">"Pillola non trovata."</p>
					<button on:click=move |_| state.navigate(Page::Archive)>"← Archivio"</button>
				</section>
			}
				.into_any()
		}
	}
}

#[component]
fn PillDetail(state: AppState, pill: Pill) -> impl IntoView {
	let info = pill.category.info();
	let source = match pill.source {
		Source::Internal => "Contenuto locale",
		Source::Generated => "Generata",
	};
	let tags = pill
		.tags
		.iter()
		.map(|tag| view! { <span class="tag">"#" {tag.label.clone()}</span> })
		.collect_view();
	let paragraphs = pill
		.content
		.split('\n')
		.filter(|p| !p.trim().is_empty())
		.map(|p| view! { <p>{p.to_string()}</p> })
		.collect_view();
	let title = pill.title.clone();
	let meta = format!(
		"{} · {} · {}",
		created_label(pill.created_at),
		format_duration(pill.duration),
		source
	);

	view! {
		<article class="page detail-page">
			<button class="back-btn" on:click=move |_| state.navigate(Page::Archive)>
				"← Archivio"
			</button>
			<header style=format!("border-left: 5px solid {}", info.color.to_css())>
				<small>{info.icon} " " {info.title}</small>
				<h2>{title}</h2>
				<small class="pill-meta">{meta}</small>
			</header>
			<div class="pill-tags">{tags}</div>
			<div class="pill-content">{paragraphs}</div>
			<div class="pill-actions">
				<button on:click=move |_| state.play(&pill)>"▶ Ascolta"</button>
				<button on:click=move |_| {
					if let Err(e) = speech::stop() {
						warn!("omnia: {e}");
					}
				}>"■ Stop"</button>
			</div>
		</article>
	}
}
