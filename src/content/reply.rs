//! Extraction of pill drafts from free-form generator replies.
//!
//! The generator answers with prose that embeds one JSON object shaped like
//! `{"pills":[{"title":..,"content":..,"tags":[..]}]}`. The first brace at which
//! a complete JSON object parses wins; any text after it is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::PillDraft;

/// Why a reply could not be turned into drafts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplyError {
	/// No `{` anywhere in the reply.
	#[error("reply contains no JSON object")]
	NoJsonObject,
	/// Braces present but no complete object parses.
	#[error("reply JSON is malformed: {0}")]
	MalformedJson(String),
	/// An object parsed but holds no usable pills.
	#[error("reply does not match the pill schema: {0}")]
	SchemaMismatch(String),
}

#[derive(Deserialize)]
struct ReplyBody {
	pills: Vec<PillDraft>,
}

/// Finds the first JSON object embedded in `text`.
///
/// Braces inside the span a failed parse already consumed are not retried, so
/// a truncated object is reported as malformed instead of yielding one of its
/// nested objects.
pub fn extract_object(text: &str) -> Result<Map<String, Value>, ReplyError> {
	let mut first_error: Option<String> = None;
	let mut resume_at = 0;

	for (start, _) in text.match_indices('{') {
		if start < resume_at {
			continue;
		}
		let rest = &text[start..];
		let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
		match stream.next() {
			Some(Ok(Value::Object(map))) => return Ok(map),
			Some(Err(e)) => {
				resume_at = start + consumed_len(rest, &e).max(1);
				first_error.get_or_insert_with(|| e.to_string());
			}
			_ => {}
		}
	}

	match first_error {
		Some(err) => Err(ReplyError::MalformedJson(err)),
		None => Err(ReplyError::NoJsonObject),
	}
}

/// Bytes of `text` read before `err` was raised. Errors report 1-based
/// line/column positions; an early end of input consumed everything.
fn consumed_len(text: &str, err: &serde_json::Error) -> usize {
	if err.is_eof() {
		return text.len();
	}
	let line_start: usize = text
		.split_inclusive('\n')
		.take(err.line().saturating_sub(1))
		.map(str::len)
		.sum();
	(line_start + err.column()).min(text.len())
}

/// Parses and validates the drafts carried by a generator reply.
pub fn extract_pills(text: &str) -> Result<Vec<PillDraft>, ReplyError> {
	let object = extract_object(text)?;
	let body: ReplyBody = serde_json::from_value(Value::Object(object))
		.map_err(|e| ReplyError::SchemaMismatch(e.to_string()))?;

	if body.pills.is_empty() {
		return Err(ReplyError::SchemaMismatch("`pills` is empty".into()));
	}
	for (i, draft) in body.pills.iter().enumerate() {
		if draft.title.trim().is_empty() {
			return Err(ReplyError::SchemaMismatch(format!("pill {i} has no title")));
		}
		if draft.content.trim().is_empty() {
			return Err(ReplyError::SchemaMismatch(format!("pill {i} has no content")));
		}
	}
	Ok(body.pills)
}
