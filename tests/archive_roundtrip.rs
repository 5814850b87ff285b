#![allow(unused_crate_dependencies)]

use omnia_pills::Config;
use omnia_pills::model::{Category, Pill, PillDraft, PillFactory, Source};
use omnia_pills::store::{Archive, ArchiveError, ImportSummary};
use rand::SeedableRng;
use rand::rngs::StdRng;

// 2024-03-05T10:20:30Z
const EXPORTED_AT: i64 = 1_709_634_030_000;

fn library(seed: u64, titles: &[&str]) -> Vec<Pill> {
	let mut factory = PillFactory::new(StdRng::seed_from_u64(seed));
	titles
		.iter()
		.zip(Category::ALL.iter().cycle())
		.enumerate()
		.map(|(i, (title, category))| {
			factory.build(
				PillDraft::new(*title, format!("Contenuto di {title}."), &["Novecento", "Arte sacra"]),
				*category,
				if i % 2 == 0 { Source::Generated } else { Source::Internal },
				EXPORTED_AT - 1_000 * i as i64,
			)
		})
		.collect()
}

fn config_with_key(key: &str) -> Config {
	let mut config = Config {
		dark_mode: true,
		language: "en-US".into(),
		..Config::default()
	};
	config.set_api_key(key);
	config.set_tts_speed(1.4);
	config
}

#[test]
fn exported_document_parses_back_to_the_same_pills() {
	let pills = library(1, &["Dante", "Caravaggio", "Verdi"]);
	let archive = Archive::at_millis(&pills, &config_with_key("segreta"), EXPORTED_AT).unwrap();
	let json = archive.to_json().unwrap();

	let parsed = Archive::parse(&json).unwrap();
	assert_eq!(parsed.pills, pills);
	assert_eq!(parsed, archive);
}

#[test]
fn export_never_carries_the_api_key() {
	let archive = Archive::at_millis(&[], &config_with_key("segreta"), EXPORTED_AT).unwrap();
	assert_eq!(archive.config.gemini_api_key, None);
	assert_eq!(archive.config.language, "en-US");
	assert!(archive.config.dark_mode);

	let json = archive.to_json().unwrap();
	assert!(!json.contains("segreta"));
}

#[test]
fn document_layout_uses_camel_case_and_iso_date() {
	let pills = library(2, &["Leopardi"]);
	let archive = Archive::at_millis(&pills, &Config::default(), EXPORTED_AT).unwrap();
	let value: serde_json::Value = serde_json::from_str(&archive.to_json().unwrap()).unwrap();

	let date = value["exportDate"].as_str().unwrap();
	assert!(date.starts_with("2024-03-05T10:20:30"), "{date}");
	assert_eq!(value["pills"][0]["createdAt"], EXPORTED_AT);
	assert_eq!(value["pills"][0]["tags"][1]["label"], "arte-sacra");
	assert_eq!(value["config"]["ttsSpeed"], 1.0);
	assert_eq!(archive.file_name(), "omnia-export-2024-03-05.json");
}

#[test]
fn import_merges_by_id_and_keeps_the_local_key() {
	let exported = library(3, &["Manzoni", "Giotto"]);
	let archive = Archive::at_millis(&exported, &config_with_key("remota"), EXPORTED_AT).unwrap();
	let json = archive.to_json().unwrap();

	// The local library already holds one of the exported pills.
	let mut local = library(4, &["Puccini"]);
	local.push(exported[1].clone());
	let mut config = config_with_key("locale");
	config.dark_mode = false;

	let summary = Archive::parse(&json).unwrap().apply(&mut local, &mut config);

	assert_eq!(summary, ImportSummary { added: 1, skipped: 1 });
	assert_eq!(local.len(), 3);
	assert_eq!(local[2], exported[0]);
	assert_eq!(config.api_key(), Some("locale"));
	assert!(config.dark_mode);
	assert_eq!(config.language, "en-US");
}

#[test]
fn garbage_is_not_an_archive() {
	assert!(matches!(
		Archive::parse("{\"pills\": 3}"),
		Err(ArchiveError::Decode(_))
	));
	assert!(matches!(
		Archive::parse("non json"),
		Err(ArchiveError::Decode(_))
	));
}

#[test]
fn out_of_range_timestamp_is_rejected() {
	assert!(matches!(
		Archive::at_millis(&[], &Config::default(), i64::MAX),
		Err(ArchiveError::InvalidDate(i64::MAX))
	));
}
