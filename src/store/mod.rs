//! Key-value persistence for pills and settings.
//!
//! Pills and the config record are two independently serialized JSON values.
//! Writes always replace the whole value, so a collection is either fully
//! persisted or not at all.

mod archive;
mod browser;

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::model::Pill;

pub use archive::{Archive, ArchiveError, ImportSummary, merge_pills};
pub use browser::BrowserStorage;

/// Storage key holding the pill array.
pub const PILLS_KEY: &str = "omnia_pills";
/// Storage key receiving a copy of an unreadable pill array.
pub const PILLS_BACKUP_KEY: &str = "omnia_pills_corrupt";
/// Storage key holding the config record.
pub const CONFIG_KEY: &str = "omnia_config";

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
	/// No storage in this environment.
	#[error("storage is not available: {0}")]
	Unavailable(String),
	/// The backend rejected a read or write.
	#[error("storage backend failed: {0}")]
	Backend(String),
	#[error("stored value under `{key}` is corrupted: {source}")]
	Corrupt {
		/// Storage key holding the bad value.
		key: &'static str,
		/// Decoder error.
		#[source]
		source: serde_json::Error,
	},
	/// A value could not be serialized.
	#[error("failed to encode value: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Result of a storage operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal string key-value backend.
pub trait KeyValueStore {
	/// Raw value under `key`, if any.
	fn get(&self, key: &str) -> StoreResult<Option<String>>;
	/// Replaces the value under `key`.
	fn set(&self, key: &str, value: &str) -> StoreResult<()>;
	/// Deletes `key`; missing keys are fine.
	fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-process backend, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> StoreResult<Option<String>> {
		Ok(self.entries.borrow().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> StoreResult<()> {
		self.entries
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> StoreResult<()> {
		self.entries.borrow_mut().remove(key);
		Ok(())
	}
}

/// Typed access to the persisted pills and config.
pub struct PillStore<S> {
	backend: S,
}

impl<S: KeyValueStore> PillStore<S> {
	/// Store over `backend`.
	pub fn new(backend: S) -> Self {
		Self { backend }
	}

	/// Underlying key-value backend.
	pub fn backend(&self) -> &S {
		&self.backend
	}

	/// Loads the pill collection; a missing key is an empty collection.
	pub fn load_pills(&self) -> StoreResult<Vec<Pill>> {
		Ok(self.read(PILLS_KEY)?.unwrap_or_default())
	}

	/// Replaces the whole persisted collection.
	pub fn save_pills(&self, pills: &[Pill]) -> StoreResult<()> {
		self.write(PILLS_KEY, pills)?;
		debug!("omnia: persisted {} pills", pills.len());
		Ok(())
	}

	/// Copies an unreadable pill array aside so later writes cannot destroy it.
	///
	/// Returns the backup key, or `None` when the stored value is absent or
	/// readable. Existing backups are kept: a different value goes to the next
	/// free `omnia_pills_corrupt_<n>` key, an identical one is not copied again.
	pub fn back_up_unreadable_pills(&self) -> StoreResult<Option<String>> {
		let Some(raw) = self.backend.get(PILLS_KEY)? else {
			return Ok(None);
		};
		if serde_json::from_str::<Vec<Pill>>(&raw).is_ok() {
			return Ok(None);
		}

		let mut key = PILLS_BACKUP_KEY.to_string();
		let mut suffix = 1;
		while let Some(existing) = self.backend.get(&key)? {
			if existing == raw {
				return Ok(Some(key));
			}
			key = format!("{PILLS_BACKUP_KEY}_{suffix}");
			suffix += 1;
		}
		self.backend.set(&key, &raw)?;
		warn!("omnia: unreadable pills copied to `{key}`");
		Ok(Some(key))
	}

	/// Deletes the pill array; settings stay.
	pub fn clear_pills(&self) -> StoreResult<()> {
		self.backend.remove(PILLS_KEY)
	}

	/// Loads the settings; a missing key yields defaults.
	pub fn load_config(&self) -> StoreResult<Config> {
		Ok(self.read(CONFIG_KEY)?.unwrap_or_default())
	}

	/// Replaces the persisted settings.
	pub fn save_config(&self, config: &Config) -> StoreResult<()> {
		self.write(CONFIG_KEY, config)
	}

	fn read<T: DeserializeOwned>(&self, key: &'static str) -> StoreResult<Option<T>> {
		let Some(raw) = self.backend.get(key)? else {
			return Ok(None);
		};
		serde_json::from_str(&raw)
			.map(Some)
			.map_err(|source| StoreError::Corrupt { key, source })
	}

	fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
		let raw = serde_json::to_string(value)?;
		self.backend.set(key, &raw)
	}
}

impl PillStore<MemoryStore> {
	/// Store over a fresh [`MemoryStore`].
	pub fn in_memory() -> Self {
		Self::new(MemoryStore::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_keys_load_as_defaults() {
		let store = PillStore::in_memory();
		assert!(store.load_pills().unwrap().is_empty());
		assert_eq!(store.load_config().unwrap(), Config::default());
	}

	#[test]
	fn corrupt_value_is_reported_with_its_key() {
		let store = PillStore::in_memory();
		store.backend().set(PILLS_KEY, "[{not json").unwrap();
		match store.load_pills() {
			Err(StoreError::Corrupt { key, .. }) => assert_eq!(key, PILLS_KEY),
			other => panic!("expected corrupt error, got {other:?}"),
		}
	}

	#[test]
	fn readable_or_missing_pills_need_no_backup() {
		let store = PillStore::in_memory();
		assert_eq!(store.back_up_unreadable_pills().unwrap(), None);
		store.save_pills(&[]).unwrap();
		assert_eq!(store.back_up_unreadable_pills().unwrap(), None);
		assert_eq!(store.backend().get(PILLS_BACKUP_KEY).unwrap(), None);
	}

	#[test]
	fn backups_never_overwrite_each_other() {
		let store = PillStore::in_memory();
		store.backend().set(PILLS_KEY, "[{broken").unwrap();
		assert_eq!(
			store.back_up_unreadable_pills().unwrap().as_deref(),
			Some(PILLS_BACKUP_KEY)
		);
		// Same value again: reuses the existing copy.
		assert_eq!(
			store.back_up_unreadable_pills().unwrap().as_deref(),
			Some(PILLS_BACKUP_KEY)
		);

		store.backend().set(PILLS_KEY, "{\"other\": true}").unwrap();
		let second = store.back_up_unreadable_pills().unwrap().unwrap();
		assert_eq!(second, format!("{PILLS_BACKUP_KEY}_1"));
		assert_eq!(
			store.backend().get(PILLS_BACKUP_KEY).unwrap().as_deref(),
			Some("[{broken")
		);
		assert_eq!(
			store.backend().get(&second).unwrap().as_deref(),
			Some("{\"other\": true}")
		);
	}

	#[test]
	fn config_round_trips() {
		let store = PillStore::in_memory();
		let mut config = Config::default();
		config.dark_mode = true;
		config.set_api_key("k");
		store.save_config(&config).unwrap();
		assert_eq!(store.load_config().unwrap(), config);
	}
}
