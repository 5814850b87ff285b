//! Pill and tag records plus the factory that turns drafts into pills.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Characters of content kept in a pill excerpt.
pub const EXCERPT_CHARS: usize = 100;
/// Characters read per second when estimating listening time.
const CHARS_PER_SECOND: usize = 5;

/// Where a pill came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
	/// Built from the bundled template set.
	Internal,
	/// Returned by the remote generator.
	Generated,
}

/// A normalized label attached to a pill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
	/// Unique among the tags of the owning pill.
	pub id: String,
	/// Normalized label; equal labels link pills in the galaxy.
	pub label: String,
	/// Category of the owning pill.
	pub category: Category,
}

/// A single unit of educational content. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pill {
	/// Unique id, `pill-<created>-<seq>-<random>`.
	pub id: String,
	/// Headline.
	pub title: String,
	/// Full text; paragraphs are separated by newlines.
	pub content: String,
	/// Category the pill was generated for.
	pub category: Category,
	/// Normalized, deduplicated tags.
	pub tags: Vec<Tag>,
	/// Creation time in epoch milliseconds.
	pub created_at: i64,
	/// Estimated listening time in seconds.
	pub duration: u32,
	/// First 100 characters of `content`.
	pub excerpt: String,
	/// Remote generator or bundled template.
	pub source: Source,
}

impl Pill {
	/// Whether any tag carries the normalized `label`.
	pub fn has_label(&self, label: &str) -> bool {
		self.tags.iter().any(|t| t.label == label)
	}
}

/// Raw pill content before it is assigned an id, category and timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillDraft {
	/// Headline as produced.
	pub title: String,
	/// Body as produced.
	pub content: String,
	/// Raw labels, normalized when the pill is built.
	#[serde(default)]
	pub tags: Vec<String>,
}

impl PillDraft {
	/// Draft from borrowed parts.
	pub fn new(title: impl Into<String>, content: impl Into<String>, tags: &[&str]) -> Self {
		Self {
			title: title.into(),
			content: content.into(),
			tags: tags.iter().map(|t| t.to_string()).collect(),
		}
	}
}

/// Lowercases a label and joins whitespace-separated words with hyphens.
///
/// Returns `None` for labels that are empty after trimming.
pub fn normalize_label(raw: &str) -> Option<String> {
	let words: Vec<&str> = raw.split_whitespace().collect();
	if words.is_empty() {
		return None;
	}
	Some(words.join("-").to_lowercase())
}

/// Listening time in seconds, rounded up.
pub fn estimate_duration(content: &str) -> u32 {
	content.chars().count().div_ceil(CHARS_PER_SECOND) as u32
}

/// First [`EXCERPT_CHARS`] characters of `content`, with an ellipsis when cut.
pub fn excerpt(content: &str) -> String {
	match content.char_indices().nth(EXCERPT_CHARS) {
		Some((cut, _)) => format!("{}...", &content[..cut]),
		None => content.to_string(),
	}
}

/// Assigns ids, tags and derived fields to drafts.
///
/// Ids combine the creation time, a per-factory sequence number and a random
/// suffix, so pills issued by one factory never collide.
pub struct PillFactory<R> {
	rng: R,
	issued: u64,
}

impl<R: Rng> PillFactory<R> {
	/// Factory drawing id suffixes from `rng`.
	pub fn new(rng: R) -> Self {
		Self { rng, issued: 0 }
	}

	/// The generator, shared with template picking.
	pub fn rng(&mut self) -> &mut R {
		&mut self.rng
	}

	/// Turns a draft into a pill of `category`, created at `created_at` ms.
	pub fn build(
		&mut self,
		draft: PillDraft,
		category: Category,
		source: Source,
		created_at: i64,
	) -> Pill {
		let id = self.next_id(created_at);

		let mut tags: Vec<Tag> = Vec::with_capacity(draft.tags.len());
		for label in draft.tags.iter().filter_map(|raw| normalize_label(raw)) {
			if tags.iter().any(|t| t.label == label) {
				continue;
			}
			tags.push(Tag {
				id: format!("{id}-tag-{}", tags.len()),
				label,
				category,
			});
		}

		let title = draft.title.trim().to_string();
		let content = draft.content.trim().to_string();

		Pill {
			duration: estimate_duration(&content),
			excerpt: excerpt(&content),
			id,
			title,
			content,
			category,
			tags,
			created_at,
			source,
		}
	}

	fn next_id(&mut self, created_at: i64) -> String {
		self.issued += 1;
		format!(
			"pill-{created_at}-{}-{:08x}",
			self.issued,
			self.rng.r#gen::<u32>()
		)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn factory() -> PillFactory<StdRng> {
		PillFactory::new(StdRng::seed_from_u64(7))
	}

	#[test]
	fn labels_are_lowercased_and_hyphenated() {
		assert_eq!(
			normalize_label("  Guerra   Fredda "),
			Some("guerra-fredda".into())
		);
		assert_eq!(normalize_label("Clima"), Some("clima".into()));
		assert_eq!(normalize_label(" \t "), None);
	}

	#[test]
	fn excerpt_cuts_on_char_boundaries() {
		let short = "Breve.";
		assert_eq!(excerpt(short), short);

		let long: String = "è".repeat(150);
		let cut = excerpt(&long);
		assert!(cut.ends_with("..."));
		assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
	}

	#[test]
	fn duration_rounds_up() {
		assert_eq!(estimate_duration(""), 0);
		assert_eq!(estimate_duration("abcde"), 1);
		assert_eq!(estimate_duration("abcdef"), 2);
	}

	#[test]
	fn build_assigns_unique_ids_and_owned_tags() {
		let mut factory = factory();
		let draft = PillDraft::new("Titolo", "Contenuto", &["Clima", "clima", "Alta Quota", ""]);
		let a = factory.build(draft.clone(), Category::Geopolitica, Source::Generated, 1_000);
		let b = factory.build(draft, Category::Geopolitica, Source::Generated, 1_000);

		assert_ne!(a.id, b.id);
		let labels: Vec<&str> = a.tags.iter().map(|t| t.label.as_str()).collect();
		assert_eq!(labels, ["clima", "alta-quota"]);
		assert!(a.tags.iter().all(|t| t.category == Category::Geopolitica));
		assert_ne!(a.tags[0].id, b.tags[0].id);
		assert!(a.has_label("clima"));
		assert_eq!(a.excerpt, "Contenuto");
		assert_eq!(a.duration, 2);
	}

	#[test]
	fn persisted_field_names() {
		let pill = factory().build(
			PillDraft::new("T", "C", &["x"]),
			Category::Arte,
			Source::Internal,
			42,
		);
		let value = serde_json::to_value(&pill).unwrap();
		assert_eq!(value["createdAt"], 42);
		assert_eq!(value["category"], "arte");
		assert_eq!(value["source"], "internal");
		assert_eq!(value["tags"][0]["label"], "x");
	}
}
