use web_sys::Storage;

use super::{KeyValueStore, StoreError, StoreResult};

/// `window.localStorage` backend.
pub struct BrowserStorage {
	storage: Storage,
}

impl BrowserStorage {
	/// Binds the window's local storage.
	pub fn local() -> StoreResult<Self> {
		let window =
			web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
		let storage = window
			.local_storage()
			.map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
			.ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
		Ok(Self { storage })
	}
}

impl KeyValueStore for BrowserStorage {
	fn get(&self, key: &str) -> StoreResult<Option<String>> {
		self.storage
			.get_item(key)
			.map_err(|e| StoreError::Backend(format!("{e:?}")))
	}

	fn set(&self, key: &str, value: &str) -> StoreResult<()> {
		self.storage
			.set_item(key, value)
			.map_err(|e| StoreError::Backend(format!("{e:?}")))
	}

	fn remove(&self, key: &str) -> StoreResult<()> {
		self.storage
			.remove_item(key)
			.map_err(|e| StoreError::Backend(format!("{e:?}")))
	}
}
