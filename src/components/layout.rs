//! Navigation bar and notice banner.

use leptos::prelude::*;

use crate::state::{AppState, NoticeKind, Page};

const NAV: &[(Page, &str)] = &[
	(Page::Home, "🏠 Home"),
	(Page::Archive, "📚 Archivio"),
	(Page::Galaxy, "✨ Galassia"),
	(Page::Settings, "⚙️ Impostazioni"),
];

/// Top navigation.
#[component]
pub fn NavBar(state: AppState) -> impl IntoView {
	view! {
		<nav class="nav-bar">
			<h1 class="brand">"OMNIA"</h1>
			{NAV
				.iter()
				.map(|&(page, label)| {
					view! {
						<button
							class="nav-btn"
							class:active=move || state.page.get() == page
							on:click=move |_| {
								if page == Page::Archive {
									state.browse(None);
								} else {
									state.navigate(page);
								}
							}
						>
							{label}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}

/// Dismissable notice, when one is set.
#[component]
pub fn NoticeBanner(state: AppState) -> impl IntoView {
	move || {
		state.notice.get().map(|notice| {
			let class = match notice.kind {
				NoticeKind::Info => "notice notice-info",
				NoticeKind::Error => "notice notice-error",
			};
			view! {
				<div class=class role="status">
					<span>{notice.text}</span>
					<button class="notice-close" on:click=move |_| state.notice.set(None)>
						"×"
					</button>
				</div>
			}
		})
	}
}
