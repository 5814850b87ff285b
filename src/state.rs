//! Application state and the actions that mutate it.
//!
//! [`AppState`] is a bundle of signals created once by the root component and
//! handed to every page as a prop. Actions that change durable data persist it
//! through [`PillStore`] before or right after updating the signals.

use std::collections::HashSet;

use leptos::prelude::*;
use log::{error, info, warn};

use crate::config::Config;
use crate::content::{self, GeminiClient};
use crate::model::{Category, Pill, PillFactory};
use crate::speech;
use crate::store::{Archive, BrowserStorage, PillStore, StoreResult};
use crate::web;

/// Pages of the single-page UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
	/// Category cards and the refresh action.
	Home,
	/// Pill list, optionally filtered by category.
	Archive,
	/// One pill with speech controls.
	Detail,
	/// Animated tag graph.
	Galaxy,
	/// Key, playback, appearance and archive maintenance.
	Settings,
}

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	/// Outcome of a successful action.
	Info,
	/// Something failed; the app keeps running.
	Error,
}

/// Non-blocking message shown above the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	/// Severity, used for styling.
	pub kind: NoticeKind,
	/// Italian message shown to the user.
	pub text: String,
}

/// Number of pills in `category`.
pub fn count_in(pills: &[Pill], category: Category) -> usize {
	pills.iter().filter(|p| p.category == category).count()
}

fn browser_store() -> StoreResult<PillStore<BrowserStorage>> {
	BrowserStorage::local().map(PillStore::new)
}

/// Signals shared by every page, plus the actions that change them.
#[derive(Clone, Copy)]
pub struct AppState {
	/// The library, in insertion order.
	pub pills: RwSignal<Vec<Pill>>,
	/// Persisted settings.
	pub config: RwSignal<Config>,
	/// Page currently shown.
	pub page: RwSignal<Page>,
	/// Category shown by the archive; `None` lists everything.
	pub filter: RwSignal<Option<Category>>,
	/// Id of the pill shown by the detail page.
	pub selected: RwSignal<Option<String>>,
	/// Ids of pills opened during this session.
	pub read: RwSignal<HashSet<String>>,
	/// Message shown above the page, if any.
	pub notice: RwSignal<Option<Notice>>,
	/// A refresh is in flight.
	pub refreshing: RwSignal<bool>,
	/// The stored pills could neither be read nor copied aside, so pill writes
	/// are refused until the user clears the archive.
	pub pills_locked: RwSignal<bool>,
}

impl AppState {
	/// Loads pills and settings from local storage.
	///
	/// Unreadable values are reported and replaced by empty defaults instead of
	/// aborting startup.
	pub fn load() -> Self {
		let state = Self {
			pills: RwSignal::new(Vec::new()),
			config: RwSignal::new(Config::default()),
			page: RwSignal::new(Page::Home),
			filter: RwSignal::new(None),
			selected: RwSignal::new(None),
			read: RwSignal::new(HashSet::new()),
			notice: RwSignal::new(None),
			refreshing: RwSignal::new(false),
			pills_locked: RwSignal::new(false),
		};

		let store = match browser_store() {
			Ok(store) => store,
			Err(e) => {
				warn!("omnia: {e}");
				state.fail(format!("Archivio locale non disponibile: {e}"));
				return state;
			}
		};

		match store.load_config() {
			Ok(config) => state.config.set(config),
			Err(e) => {
				warn!("omnia: {e}");
				state.fail("Impostazioni illeggibili, ripristinate ai valori predefiniti.");
			}
		}
		match store.load_pills() {
			Ok(pills) => {
				info!("omnia: loaded {} pills", pills.len());
				state.pills.set(pills);
			}
			Err(e) => {
				warn!("omnia: {e}");
				match store.back_up_unreadable_pills() {
					Ok(Some(key)) => state.fail(format!(
						"Archivio pillole illeggibile, copiato in \"{key}\". Avvio con archivio vuoto."
					)),
					outcome => {
						if let Err(backup) = outcome {
							error!("omnia: could not back up unreadable pills: {backup}");
						}
						state.pills_locked.set(true);
						state.fail(
							"Archivio pillole illeggibile. Salvataggio disabilitato finché non lo cancelli.",
						);
					}
				}
			}
		}
		state
	}

	/// Refuses pill writes while an unreadable archive is still stored.
	fn pills_writable(&self) -> bool {
		if self.pills_locked.get_untracked() {
			warn!("omnia: pill write refused, stored archive is unreadable");
			self.fail("Archivio illeggibile: cancellalo dalle Impostazioni prima di salvare nuove pillole.");
			return false;
		}
		true
	}

	/// Shows an informational notice.
	pub fn notify(&self, text: impl Into<String>) {
		self.notice.set(Some(Notice {
			kind: NoticeKind::Info,
			text: text.into(),
		}));
	}

	/// Shows an error notice.
	pub fn fail(&self, text: impl Into<String>) {
		self.notice.set(Some(Notice {
			kind: NoticeKind::Error,
			text: text.into(),
		}));
	}

	/// Switches page; leaving the detail page silences speech.
	pub fn navigate(&self, page: Page) {
		if page != Page::Detail {
			if let Err(e) = speech::stop() {
				warn!("omnia: {e}");
			}
		}
		self.page.set(page);
	}

	/// Opens the archive filtered to one category, or all with `None`.
	pub fn browse(&self, filter: Option<Category>) {
		self.filter.set(filter);
		self.navigate(Page::Archive);
	}

	/// Shows a pill and remembers it as read.
	pub fn open_pill(&self, id: String) {
		self.read.update(|read| {
			read.insert(id.clone());
		});
		self.selected.set(Some(id));
		self.navigate(Page::Detail);
	}

	/// The pill picked for the detail page, if it still exists.
	pub fn selected_pill(&self) -> Option<Pill> {
		let id = self.selected.get()?;
		self.pills.with(|pills| pills.iter().find(|p| p.id == id).cloned())
	}

	/// Number of stored pills in `category`.
	pub fn count(&self, category: Category) -> usize {
		self.pills.with(|pills| count_in(pills, category))
	}

	/// Generates a new batch for every category and persists it.
	///
	/// Without an API key nothing is requested and a blocking notice is shown.
	pub fn refresh(&self) {
		if self.refreshing.get_untracked() || !self.pills_writable() {
			return;
		}
		let client = match GeminiClient::from_config(&self.config.get_untracked()) {
			Ok(client) => client,
			Err(e) => {
				warn!("omnia: refresh aborted: {e}");
				web::alert("Inserisci la API Key nelle Impostazioni!");
				return;
			}
		};

		self.refreshing.set(true);
		let state = *self;
		wasm_bindgen_futures::spawn_local(async move {
			let mut factory = PillFactory::new(web::rng());
			let report = content::refresh(&client, &mut factory, web::now_ms).await;

			let current = state.pills.get_untracked();
			match browser_store().and_then(|store| report.commit(&store, &current)) {
				Ok(all) => {
					state.pills.set(all);
					state.notify(report.notice());
				}
				Err(e) => {
					error!("omnia: failed to persist refresh: {e}");
					state.fail(format!("Salvataggio non riuscito: {e}"));
				}
			}
			state.refreshing.set(false);
		});
	}

	/// Applies `change` to the settings and persists them.
	pub fn update_config(&self, change: impl FnOnce(&mut Config)) {
		self.config.update(change);
		let config = self.config.get_untracked();
		if let Err(e) = browser_store().and_then(|store| store.save_config(&config)) {
			error!("omnia: failed to save config: {e}");
			self.fail(format!("Impostazioni non salvate: {e}"));
		}
	}

	/// Stores a trimmed API key; a blank entry removes it.
	pub fn save_api_key(&self, key: &str) {
		self.update_config(|config| config.set_api_key(key));
		if self.config.with_untracked(|c| c.api_key().is_some()) {
			web::alert("Chiave Salvata!");
		}
	}

	/// Forgets the API key.
	pub fn remove_api_key(&self) {
		self.update_config(|config| config.gemini_api_key = None);
		self.notify("Chiave rimossa.");
	}

	/// Downloads the library as `omnia-export-<date>.json`, without the API key.
	pub fn export(&self) {
		let pills = self.pills.get_untracked();
		let config = self.config.get_untracked();
		let result = Archive::at_millis(&pills, &config, web::now_ms())
			.and_then(|archive| Ok((archive.file_name(), archive.to_json()?)));
		match result {
			Ok((name, json)) => {
				if let Err(e) = web::download_text(&name, &json, "application/json") {
					error!("omnia: export download failed: {e:?}");
					self.fail("Esportazione non riuscita.");
				}
			}
			Err(e) => {
				error!("omnia: export failed: {e}");
				self.fail(format!("Esportazione non riuscita: {e}"));
			}
		}
	}

	/// Merges an exported archive into the library.
	pub fn import(&self, json: &str) {
		let archive = match Archive::parse(json) {
			Ok(archive) => archive,
			Err(e) => {
				warn!("omnia: import rejected: {e}");
				self.fail(format!("File non valido: {e}"));
				return;
			}
		};

		if !self.pills_writable() {
			return;
		}

		let mut pills = self.pills.get_untracked();
		let mut config = self.config.get_untracked();
		let summary = archive.apply(&mut pills, &mut config);

		let saved = browser_store().and_then(|store| {
			store.save_pills(&pills)?;
			store.save_config(&config)
		});
		match saved {
			Ok(()) => {
				self.pills.set(pills);
				self.config.set(config);
				self.notify(format!(
					"Importate {} pillole ({} già presenti).",
					summary.added, summary.skipped
				));
			}
			Err(e) => {
				error!("omnia: import not persisted: {e}");
				self.fail(format!("Importazione non salvata: {e}"));
			}
		}
	}

	/// Removes every pill; settings are kept.
	pub fn clear_all(&self) {
		if !web::confirm("Eliminare tutte le pillole?") {
			return;
		}
		match browser_store().and_then(|store| store.clear_pills()) {
			Ok(()) => {
				self.pills.set(Vec::new());
				self.pills_locked.set(false);
				self.selected.set(None);
				self.notify("Archivio svuotato.");
			}
			Err(e) => {
				error!("omnia: clear failed: {e}");
				self.fail(format!("Impossibile svuotare l'archivio: {e}"));
			}
		}
	}

	/// Reads `pill` aloud with the configured language and speed.
	pub fn play(&self, pill: &Pill) {
		if let Err(e) = speech::play(pill, &self.config.get_untracked()) {
			warn!("omnia: {e}");
			self.fail("Sintesi vocale non disponibile.");
		}
	}
}
