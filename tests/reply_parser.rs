#![allow(unused_crate_dependencies)]

use omnia_pills::PillDraft;
use omnia_pills::content::ReplyError;
use omnia_pills::content::reply::{extract_object, extract_pills};

#[test]
fn prose_without_braces_has_no_object() {
	assert_eq!(
		extract_pills("Mi dispiace, non posso aiutarti."),
		Err(ReplyError::NoJsonObject)
	);
	assert_eq!(extract_pills(""), Err(ReplyError::NoJsonObject));
}

#[test]
fn unterminated_object_is_malformed() {
	let err = extract_pills(r#"Ecco: {"pills": [{"title": "T", "content": "#).unwrap_err();
	assert!(matches!(err, ReplyError::MalformedJson(_)), "{err:?}");
}

#[test]
fn reply_cut_before_closing_brackets_is_malformed() {
	let err = extract_pills(r#"Ecco: {"pills": [{"title":"T","content":"C","tags":["a"]}"#).unwrap_err();
	assert!(matches!(err, ReplyError::MalformedJson(_)), "{err:?}");
}

#[test]
fn syntax_error_after_a_nested_object_is_malformed() {
	let text = r#"{"pills": [{"title": "T", "content": "C"} oops]}"#;
	let err = extract_pills(text).unwrap_err();
	assert!(matches!(err, ReplyError::MalformedJson(_)), "{err:?}");
}

#[test]
fn object_after_a_broken_one_is_still_found() {
	let text = r#"Bozza: {"pills": oops} Versione finale: {"pills": [{"title": "T", "content": "C"}]}"#;
	let drafts = extract_pills(text).unwrap();
	assert_eq!(drafts[0].title, "T");
}

#[test]
fn object_with_wrong_shape_is_a_schema_mismatch() {
	for text in [
		r#"{"risposta": "nessuna pillola"}"#,
		r#"{"pills": "non una lista"}"#,
		r#"{"pills": [{"title": "Solo titolo"}]}"#,
		r#"{"pills": [{"title": 3, "content": "C"}]}"#,
	] {
		let err = extract_pills(text).unwrap_err();
		assert!(matches!(err, ReplyError::SchemaMismatch(_)), "{text}: {err:?}");
	}
}

#[test]
fn empty_or_blank_pills_are_rejected() {
	let empty = extract_pills(r#"{"pills": []}"#).unwrap_err();
	assert!(matches!(empty, ReplyError::SchemaMismatch(_)));

	let blank_title = extract_pills(r#"{"pills": [{"title": "  ", "content": "C"}]}"#).unwrap_err();
	assert!(matches!(blank_title, ReplyError::SchemaMismatch(_)));

	let blank_content = extract_pills(r#"{"pills": [{"title": "T", "content": ""}]}"#).unwrap_err();
	assert!(matches!(blank_content, ReplyError::SchemaMismatch(_)));
}

#[test]
fn fenced_reply_yields_every_draft_in_order() {
	let text = "Certo! Ecco le pillole.\n\n```json\n{\n  \"pills\": [\n    {\"title\": \"Il Risorgimento\", \"content\": \"Processo di unificazione.\", \"tags\": [\"Ottocento\", \"Unità\"]},\n    {\"title\": \"La Resistenza\", \"content\": \"Lotta di liberazione.\", \"tags\": [\"Novecento\"]}\n  ]\n}\n```\n";
	let drafts = extract_pills(text).unwrap();
	assert_eq!(
		drafts,
		vec![
			PillDraft::new(
				"Il Risorgimento",
				"Processo di unificazione.",
				&["Ottocento", "Unità"]
			),
			PillDraft::new("La Resistenza", "Lotta di liberazione.", &["Novecento"]),
		]
	);
}

#[test]
fn only_the_first_object_counts() {
	let text = r#"{"pills": [{"title": "Primo", "content": "A"}]} e poi {"pills": [{"title": "Secondo", "content": "B"}]}"#;
	let drafts = extract_pills(text).unwrap();
	assert_eq!(drafts.len(), 1);
	assert_eq!(drafts[0].title, "Primo");
}

#[test]
fn extract_object_skips_arrays_and_scalars() {
	let map = extract_object(r#"[1, 2] {"a": {"b": 1}}"#).unwrap();
	assert!(map.contains_key("a"));
}
