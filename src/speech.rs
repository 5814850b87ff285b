//! Text-to-speech playback through the Web Speech API.

use log::debug;
use thiserror::Error;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use crate::config::Config;
use crate::model::Pill;

/// Speech playback could not start.
#[derive(Debug, Error)]
pub enum SpeechError {
	/// The browser exposes no speech synthesis.
	#[error("speech synthesis is not supported: {0}")]
	Unsupported(String),
	/// The utterance could not be built.
	#[error("failed to create utterance: {0}")]
	Utterance(String),
}

fn synthesis() -> Result<SpeechSynthesis, SpeechError> {
	web_sys::window()
		.ok_or_else(|| SpeechError::Unsupported("no window".into()))?
		.speech_synthesis()
		.map_err(|e| SpeechError::Unsupported(format!("{e:?}")))
}

/// Text read aloud for a pill: the title, a pause, then the body.
pub fn spoken_text(pill: &Pill) -> String {
	format!("{}. {}", pill.title, pill.content)
}

/// Reads `pill` aloud with the configured language and rate, interrupting any
/// utterance already playing.
pub fn play(pill: &Pill, config: &Config) -> Result<(), SpeechError> {
	let synth = synthesis()?;
	synth.cancel();

	let utterance = SpeechSynthesisUtterance::new_with_text(&spoken_text(pill))
		.map_err(|e| SpeechError::Utterance(format!("{e:?}")))?;
	utterance.set_lang(&config.language);
	utterance.set_rate(config.effective_tts_speed() as f32);

	debug!(
		"omnia: speaking {} at {}x ({})",
		pill.id,
		config.effective_tts_speed(),
		config.language
	);
	synth.speak(&utterance);
	Ok(())
}

/// Silences any utterance in progress.
pub fn stop() -> Result<(), SpeechError> {
	synthesis()?.cancel();
	Ok(())
}
