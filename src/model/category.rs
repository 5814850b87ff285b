//! Closed category registry.
//!
//! Every pill belongs to exactly one [`Category`]. Display data lives in a static
//! table keyed by the enum, so an unknown category cannot reach the renderer: it
//! is rejected when the persisted JSON is deserialized.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::Color;

/// Static display data attached to a category.
#[derive(Clone, Copy, Debug)]
pub struct CategoryInfo {
	/// Italian display name.
	pub title: &'static str,
	/// Emoji shown next to the title.
	pub icon: &'static str,
	/// Accent color for cards and galaxy nodes.
	pub color: Color,
	/// One-line summary shown on the home card.
	pub description: &'static str,
}

/// Topical grouping of a pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	/// Italian history.
	StoriaIt,
	/// Geopolitics.
	Geopolitica,
	/// Current affairs.
	Attualita,
	/// Literature.
	Letteratura,
	/// Art history.
	Arte,
	/// Music.
	Musica,
}

impl Category {
	/// All categories in registry order. Refresh walks them in this order.
	pub const ALL: [Category; 6] = [
		Category::StoriaIt,
		Category::Geopolitica,
		Category::Attualita,
		Category::Letteratura,
		Category::Arte,
		Category::Musica,
	];

	/// Storage key, identical to the serde representation.
	pub fn key(self) -> &'static str {
		match self {
			Category::StoriaIt => "storia_it",
			Category::Geopolitica => "geopolitica",
			Category::Attualita => "attualita",
			Category::Letteratura => "letteratura",
			Category::Arte => "arte",
			Category::Musica => "musica",
		}
	}

	/// Inverse of [`Category::key`].
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.key() == key)
	}

	/// Display data for this category.
	pub fn info(self) -> &'static CategoryInfo {
		match self {
			Category::StoriaIt => &STORIA_IT,
			Category::Geopolitica => &GEOPOLITICA,
			Category::Attualita => &ATTUALITA,
			Category::Letteratura => &LETTERATURA,
			Category::Arte => &ARTE,
			Category::Musica => &MUSICA,
		}
	}

	/// Italian display name.
	pub fn title(self) -> &'static str {
		self.info().title
	}

	/// Accent color.
	pub fn color(self) -> Color {
		self.info().color
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.title())
	}
}

static STORIA_IT: CategoryInfo = CategoryInfo {
	title: "Storia Italiana",
	icon: "🇮🇹",
	color: Color::rgb(0x00, 0x8c, 0x45),
	description: "Analisi dei processi storici e politici nazionali.",
};

static GEOPOLITICA: CategoryInfo = CategoryInfo {
	title: "Geopolitica",
	icon: "🌐",
	color: Color::rgb(0x4a, 0x90, 0xe2),
	description: "Relazioni internazionali e scenari globali.",
};

static ATTUALITA: CategoryInfo = CategoryInfo {
	title: "Attualità",
	icon: "📰",
	color: Color::rgb(0xe7, 0x4c, 0x3c),
	description: "Analisi critica degli eventi contemporanei.",
};

static LETTERATURA: CategoryInfo = CategoryInfo {
	title: "Letteratura",
	icon: "📚",
	color: Color::rgb(0xf1, 0xc4, 0x0f),
	description: "Approfondimenti filologici e critici.",
};

static ARTE: CategoryInfo = CategoryInfo {
	title: "Cultura Artistica",
	icon: "🎨",
	color: Color::rgb(0x9b, 0x59, 0xb6),
	description: "Storia dell'arte e teoria estetica.",
};

static MUSICA: CategoryInfo = CategoryInfo {
	title: "Cultura Musicale",
	icon: "🎵",
	color: Color::rgb(0x2e, 0xcc, 0x71),
	description: "Sociologia e teoria musicale.",
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_match_serde_representation() {
		for category in Category::ALL {
			let json = serde_json::to_string(&category).unwrap();
			assert_eq!(json, format!("\"{}\"", category.key()));
			assert_eq!(Category::from_key(category.key()), Some(category));
		}
	}

	#[test]
	fn unknown_category_is_rejected() {
		assert!(serde_json::from_str::<Category>("\"world\"").is_err());
		assert_eq!(Category::from_key("world"), None);
	}

	#[test]
	fn registry_colors() {
		assert_eq!(Category::StoriaIt.color().to_css(), "#008c45");
		assert_eq!(Category::Geopolitica.color().to_css(), "#4a90e2");
	}
}
