//! Remote pill generation through the Gemini `generateContent` endpoint.

use js_sys::encode_uri_component;
use log::debug;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{ContentSource, GenerationError, RefreshError, reply};
use crate::config::Config;
use crate::model::{Category, PillDraft};

/// `generateContent` endpoint; the key goes in the query string.
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
	pub(crate) contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestContent {
	pub(crate) parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TextPart {
	#[serde(default)]
	pub(crate) text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
	content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
	#[serde(default)]
	parts: Vec<TextPart>,
}

/// Instruction text sent for one category.
pub fn prompt(category: Category) -> String {
	let title = category.title();
	let system = format!(
		"Sei un accademico esperto. Genera una pillola di ALTO LIVELLO per la categoria {title}.\n\
		 REQUISITI:\n\
		 - Tono: Accademico, profondo, analitico. Evita banalità.\n\
		 - Contenuto: Cita correnti di pensiero, dati storici precisi o teorie specifiche.\n\
		 - Struttura JSON: {{\"pills\": [{{\"title\": \"...\", \"content\": \"...\", \"tags\": [\"...\", \"...\"]}}]}}"
	);
	let user = format!("Genera un'analisi approfondita su un tema di nicchia o avanzato di: {title}.");
	format!("{system}\n\n{user}")
}

pub(crate) fn request_body(category: Category) -> GenerateRequest {
	GenerateRequest {
		contents: vec![RequestContent {
			parts: vec![TextPart {
				text: Some(prompt(category)),
			}],
		}],
	}
}

/// Pulls `candidates[0].content.parts[0].text` out of a response body.
pub fn reply_text(body: &str) -> Result<String, GenerationError> {
	let response: GenerateResponse =
		serde_json::from_str(body).map_err(|e| GenerationError::Envelope(e.to_string()))?;
	response
		.candidates
		.into_iter()
		.next()
		.and_then(|c| c.content.parts.into_iter().next())
		.and_then(|p| p.text)
		.ok_or_else(|| GenerationError::Envelope("reply carries no candidate text".into()))
}

/// Client for the Gemini API, bound to one key.
pub struct GeminiClient {
	api_key: String,
}

impl GeminiClient {
	/// Client using `api_key` as is.
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
		}
	}

	/// Fails before any network call when no key is configured.
	pub fn from_config(config: &Config) -> Result<Self, RefreshError> {
		config
			.api_key()
			.map(Self::new)
			.ok_or(RefreshError::MissingApiKey)
	}

	fn url(&self) -> String {
		let key: String = encode_uri_component(&self.api_key).into();
		format!("{GEMINI_ENDPOINT}?key={key}")
	}

	async fn post(&self, body: &str) -> Result<String, GenerationError> {
		let window = web_sys::window().ok_or_else(|| GenerationError::Transport("no window".into()))?;

		let init = web_sys::RequestInit::new();
		init.set_method("POST");
		init.set_body(&wasm_bindgen::JsValue::from_str(body));

		let headers = web_sys::Headers::new().map_err(js_err)?;
		headers
			.set("Content-Type", "application/json")
			.map_err(js_err)?;
		init.set_headers(&headers);

		let request = web_sys::Request::new_with_str_and_init(&self.url(), &init).map_err(js_err)?;
		let resp = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(js_err)?;
		let resp: web_sys::Response = resp.dyn_into().map_err(js_err)?;
		if !resp.ok() {
			return Err(GenerationError::Status(resp.status()));
		}

		let text = JsFuture::from(resp.text().map_err(js_err)?)
			.await
			.map_err(js_err)?;
		text.as_string()
			.ok_or_else(|| GenerationError::Transport("response body is not text".into()))
	}
}

impl ContentSource for GeminiClient {
	async fn generate(&self, category: Category) -> Result<Vec<PillDraft>, GenerationError> {
		let body = serde_json::to_string(&request_body(category))
			.map_err(|e| GenerationError::Transport(e.to_string()))?;
		debug!("omnia: requesting pills for {}", category.key());
		let raw = self.post(&body).await?;
		let text = reply_text(&raw)?;
		Ok(reply::extract_pills(&text)?)
	}
}

fn js_err(err: wasm_bindgen::JsValue) -> GenerationError {
	GenerationError::Transport(format!("{err:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_body_carries_category_prompt() {
		let value = serde_json::to_value(request_body(Category::Musica)).unwrap();
		let text = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
		assert!(text.contains("Cultura Musicale"));
		assert!(text.contains("{\"pills\": [{\"title\""));
		assert!(text.contains("\n\nGenera un'analisi"));
	}

	#[test]
	fn envelope_text_is_extracted() {
		let body = r#"{"candidates":[{"content":{"parts":[{"text":"ciao"}]}}]}"#;
		assert_eq!(reply_text(body).unwrap(), "ciao");
	}

	#[test]
	fn empty_envelope_is_an_error() {
		assert!(matches!(
			reply_text(r#"{"candidates":[]}"#),
			Err(GenerationError::Envelope(_))
		));
		assert!(matches!(
			reply_text("<html>"),
			Err(GenerationError::Envelope(_))
		));
	}

	#[test]
	fn missing_key_is_a_configuration_error() {
		assert!(matches!(
			GeminiClient::from_config(&Config::default()),
			Err(RefreshError::MissingApiKey)
		));
	}
}
