//! Export/import document: `{ pills, config, exportDate }`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::model::Pill;

/// Export or import failed.
#[derive(Debug, Error)]
pub enum ArchiveError {
	/// Clock value outside the representable range.
	#[error("invalid export timestamp {0}")]
	InvalidDate(i64),
	/// Serialization failed.
	#[error("failed to encode archive: {0}")]
	Encode(#[source] serde_json::Error),
	/// The file is not an export document.
	#[error("not an OMNIA archive: {0}")]
	Decode(#[source] serde_json::Error),
}

/// Snapshot of the whole library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
	/// Every pill, in library order.
	pub pills: Vec<Pill>,
	/// Settings with the API key removed.
	pub config: Config,
	/// Serialized as an RFC 3339 / ISO-8601 string.
	pub export_date: DateTime<Utc>,
}

impl Archive {
	/// Builds an archive; the API key never leaves the browser.
	pub fn new(pills: &[Pill], config: &Config, export_date: DateTime<Utc>) -> Self {
		Self {
			pills: pills.to_vec(),
			config: config.redacted(),
			export_date,
		}
	}

	/// Archive dated `millis` epoch milliseconds.
	pub fn at_millis(pills: &[Pill], config: &Config, millis: i64) -> Result<Self, ArchiveError> {
		let date =
			DateTime::from_timestamp_millis(millis).ok_or(ArchiveError::InvalidDate(millis))?;
		Ok(Self::new(pills, config, date))
	}

	/// Pretty-printed document.
	pub fn to_json(&self) -> Result<String, ArchiveError> {
		serde_json::to_string_pretty(self).map_err(ArchiveError::Encode)
	}

	/// Reads a document produced by [`Archive::to_json`].
	pub fn parse(json: &str) -> Result<Self, ArchiveError> {
		serde_json::from_str(json).map_err(ArchiveError::Decode)
	}

	/// Download name, `omnia-export-YYYY-MM-DD.json`.
	pub fn file_name(&self) -> String {
		format!("omnia-export-{}.json", self.export_date.format("%Y-%m-%d"))
	}

	/// Merges the archived pills into `pills` and adopts the archived settings,
	/// keeping the local API key.
	pub fn apply(self, pills: &mut Vec<Pill>, config: &mut Config) -> ImportSummary {
		let api_key = config.gemini_api_key.take();
		*config = Config {
			gemini_api_key: api_key,
			..self.config
		};
		merge_pills(pills, self.pills)
	}
}

/// Outcome of merging imported pills into the library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
	/// Pills appended.
	pub added: usize,
	/// Pills whose id was already present.
	pub skipped: usize,
}

/// Appends pills whose ids are not already present, preserving order.
pub fn merge_pills(existing: &mut Vec<Pill>, incoming: Vec<Pill>) -> ImportSummary {
	let mut seen: HashSet<String> = existing.iter().map(|p| p.id.clone()).collect();
	let mut summary = ImportSummary::default();
	for pill in incoming {
		if seen.insert(pill.id.clone()) {
			existing.push(pill);
			summary.added += 1;
		} else {
			summary.skipped += 1;
		}
	}
	summary
}
