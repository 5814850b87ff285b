//! User settings persisted as a single record.

use serde::{Deserialize, Serialize};

/// Slowest playback rate accepted for speech.
pub const MIN_TTS_SPEED: f64 = 0.5;
/// Fastest playback rate accepted for speech.
pub const MAX_TTS_SPEED: f64 = 2.0;

/// Process-wide settings: language, display mode, playback speed and API key.
///
/// Every field has a default so records written by older builds, or partially
/// written records, still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
	/// BCP-47 language code used for speech playback.
	pub language: String,
	/// Dark page theme and night galaxy.
	pub dark_mode: bool,
	/// Speech rate, kept within the supported range.
	pub tts_speed: f64,
	/// Gemini API key; never exported.
	pub gemini_api_key: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			language: "it-IT".to_string(),
			dark_mode: false,
			tts_speed: 1.0,
			gemini_api_key: None,
		}
	}
}

impl Config {
	/// The API key, if one is set and not blank.
	pub fn api_key(&self) -> Option<&str> {
		self.gemini_api_key
			.as_deref()
			.map(str::trim)
			.filter(|k| !k.is_empty())
	}

	/// Stores a trimmed key; a blank key removes it.
	pub fn set_api_key(&mut self, key: &str) {
		let key = key.trim();
		self.gemini_api_key = (!key.is_empty()).then(|| key.to_string());
	}

	/// Stores `speed` clamped to the supported range; non-finite values reset it.
	pub fn set_tts_speed(&mut self, speed: f64) {
		self.tts_speed = clamp_speed(speed);
	}

	/// Playback speed safe to hand to the speech engine.
	pub fn effective_tts_speed(&self) -> f64 {
		clamp_speed(self.tts_speed)
	}

	/// Copy of the settings without the API key, for exports.
	pub fn redacted(&self) -> Self {
		Self {
			gemini_api_key: None,
			..self.clone()
		}
	}
}

fn clamp_speed(speed: f64) -> f64 {
	if speed.is_finite() {
		speed.clamp(MIN_TTS_SPEED, MAX_TTS_SPEED)
	} else {
		1.0
	}
}
