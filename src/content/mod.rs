//! Pill sources and the refresh pipeline.
//!
//! A refresh walks the category registry in order and awaits one request per
//! category before starting the next. When the remote source fails for a
//! category, that category falls back to the bundled templates; the report
//! lists every fallback so the UI can tell the user. Nothing is written until
//! the whole batch is committed in one full-collection write.

pub mod gemini;
pub mod reply;
pub mod templates;

use log::{info, warn};
use rand::Rng;
use thiserror::Error;

use crate::model::{Category, Pill, PillDraft, PillFactory, Source};
use crate::store::{KeyValueStore, PillStore, StoreResult};

pub use gemini::GeminiClient;
pub use reply::ReplyError;

/// Refresh could not start.
#[derive(Debug, Error)]
pub enum RefreshError {
	/// No usable key in the settings.
	#[error("no Gemini API key configured")]
	MissingApiKey,
}

/// A single category request failed.
#[derive(Debug, Error)]
pub enum GenerationError {
	/// Network or browser failure before a response arrived.
	#[error("request failed: {0}")]
	Transport(String),
	/// Non-success HTTP status.
	#[error("server answered with status {0}")]
	Status(u16),
	/// Body is not a `generateContent` response with text.
	#[error("unexpected response envelope: {0}")]
	Envelope(String),
	/// Reply text carries no valid pills.
	#[error(transparent)]
	Reply(#[from] ReplyError),
}

/// Something that produces drafts for a category.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
	/// Produces at least one draft for `category`.
	async fn generate(&self, category: Category) -> Result<Vec<PillDraft>, GenerationError>;
}

/// A category that was served from templates after the remote source failed.
#[derive(Debug)]
pub struct Fallback {
	/// Category served from templates.
	pub category: Category,
	/// Why the remote source failed.
	pub reason: GenerationError,
}

/// New pills produced by one refresh, not yet persisted.
#[derive(Debug, Default)]
pub struct RefreshReport {
	/// New pills in registry order.
	pub pills: Vec<Pill>,
	/// Categories that fell back, in registry order.
	pub fallbacks: Vec<Fallback>,
}

impl RefreshReport {
	/// Categories served from templates.
	pub fn fell_back(&self) -> Vec<Category> {
		self.fallbacks.iter().map(|f| f.category).collect()
	}

	/// User-facing summary of the refresh.
	pub fn notice(&self) -> String {
		let mut text = format!("{} nuove pillole.", self.pills.len());
		if !self.fallbacks.is_empty() {
			let names: Vec<&str> = self.fallbacks.iter().map(|f| f.category.title()).collect();
			text.push_str(&format!(
				" Contenuti locali usati per: {}.",
				names.join(", ")
			));
		}
		text
	}

	/// Appends the batch to `current` and persists the result in one write.
	///
	/// On a storage failure nothing is returned and `current` stays as it was.
	pub fn commit<S: KeyValueStore>(
		&self,
		store: &PillStore<S>,
		current: &[Pill],
	) -> StoreResult<Vec<Pill>> {
		let mut all = Vec::with_capacity(current.len() + self.pills.len());
		all.extend_from_slice(current);
		all.extend(self.pills.iter().cloned());
		store.save_pills(&all)?;
		Ok(all)
	}
}

/// Requests new pills for every category, in registry order.
///
/// `now` supplies creation timestamps in epoch milliseconds.
pub async fn refresh<S, R, F>(source: &S, factory: &mut PillFactory<R>, now: F) -> RefreshReport
where
	S: ContentSource,
	R: Rng,
	F: Fn() -> i64,
{
	let mut report = RefreshReport::default();

	for category in Category::ALL {
		match source.generate(category).await {
			Ok(drafts) => {
				let created_at = now();
				for draft in drafts {
					report
						.pills
						.push(factory.build(draft, category, Source::Generated, created_at));
				}
			}
			Err(reason) => {
				warn!("omnia: {} fell back to templates: {reason}", category.key());
				let draft = templates::pick_draft(category, factory.rng());
				report
					.pills
					.push(factory.build(draft, category, Source::Internal, now()));
				report.fallbacks.push(Fallback { category, reason });
			}
		}
	}

	info!(
		"omnia: refresh produced {} pills ({} fallbacks)",
		report.pills.len(),
		report.fallbacks.len()
	);
	report
}
