//! Settings page: API key, language, display mode, playback speed and the
//! archive maintenance actions.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::config::{MAX_TTS_SPEED, MIN_TTS_SPEED};
use crate::state::AppState;

/// Speech languages offered in the selector.
const LANGUAGES: &[(&str, &str)] = &[
	("it-IT", "Italiano"),
	("en-US", "English"),
	("fr-FR", "Français"),
	("de-DE", "Deutsch"),
	("es-ES", "Español"),
];

/// Settings form and archive actions.
#[component]
pub fn SettingsPage(state: AppState) -> impl IntoView {
	let key_input = NodeRef::<leptos::html::Input>::new();
	let has_key = move || state.config.with(|c| c.api_key().is_some());

	let save_key = move |_| {
		if let Some(input) = key_input.get() {
			state.save_api_key(&input.value());
			input.set_value("");
		}
	};

	let on_import = move |ev: leptos::ev::Event| {
		let input: HtmlInputElement = event_target(&ev);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		input.set_value("");
		wasm_bindgen_futures::spawn_local(async move {
			match JsFuture::from(file.text()).await.map(|v| v.as_string()) {
				Ok(Some(json)) => state.import(&json),
				Ok(None) => state.fail("File non leggibile."),
				Err(e) => {
					warn!("omnia: import read failed: {e:?}");
					state.fail("File non leggibile.");
				}
			}
		});
	};

	view! {
		<section class="page settings-page">
			<h2>"Impostazioni"</h2>

			<fieldset>
				<legend>"Gemini API Key"</legend>
				<p class="key-status">
					{move || if has_key() { "✅ Chiave configurata" } else { "⚠️ Nessuna chiave" }}
				</p>
				<input node_ref=key_input type="password" placeholder="Incolla la chiave" />
				<button on:click=save_key>"Salva"</button>
				<button disabled=move || !has_key() on:click=move |_| state.remove_api_key()>
					"Rimuovi"
				</button>
			</fieldset>

			<fieldset>
				<legend>"Lettura"</legend>
				<label>
					"Lingua "
					<select on:change=move |ev| {
						let language = event_target_value(&ev);
						state.update_config(|c| c.language = language);
					}>
						{LANGUAGES
							.iter()
							.map(|&(code, name)| {
								view! {
									<option
										value=code
										selected=move || state.config.with(|c| c.language == code)
									>
										{name}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<label>
					"Velocità "
					<input
						type="range"
						min=MIN_TTS_SPEED.to_string()
						max=MAX_TTS_SPEED.to_string()
						step="0.1"
						prop:value=move || state.config.with(|c| c.tts_speed.to_string())
						on:change=move |ev| {
							if let Ok(speed) = event_target_value(&ev).parse::<f64>() {
								state.update_config(|c| c.set_tts_speed(speed));
							}
						}
					/>
					{move || format!(" {:.1}x", state.config.with(|c| c.tts_speed))}
				</label>
			</fieldset>

			<fieldset>
				<legend>"Aspetto"</legend>
				<label>
					<input
						type="checkbox"
						prop:checked=move || state.config.with(|c| c.dark_mode)
						on:change=move |ev| {
							let dark = event_target_checked(&ev);
							state.update_config(|c| c.dark_mode = dark);
						}
					/>
					" Tema scuro"
				</label>
			</fieldset>

			<fieldset>
				<legend>"Archivio"</legend>
				<button on:click=move |_| state.export()>"⬇ Esporta JSON"</button>
				<label class="import-btn">
					"⬆ Importa JSON "
					<input type="file" accept="application/json,.json" on:change=on_import />
				</label>
				<button class="danger" on:click=move |_| state.clear_all()>"🗑 Cancella tutto"</button>
			</fieldset>
		</section>
	}
}
