//! Small wrappers over browser globals used across the UI.

use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

/// Wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
	js_sys::Date::now() as i64
}

/// Generator seeded from the clock and `Math.random`.
pub fn rng() -> StdRng {
	let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
	StdRng::seed_from_u64(noise ^ js_sys::Date::now() as u64)
}

/// Blocking notice.
pub fn alert(message: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) = window.alert_with_message(message) {
		warn!("omnia: alert failed: {e:?}");
	}
}

/// Blocking yes/no prompt; `false` when no window exists.
pub fn confirm(message: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.confirm_with_message(message).ok())
		.unwrap_or(false)
}

/// Offers `contents` to the user as a file download.
pub fn download_text(file_name: &str, contents: &str, mime: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let options = BlobPropertyBag::new();
	options.set_type(mime);
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(file_name);
	anchor.click();

	revoke_later(&window, url);
	Ok(())
}

/// Releases an object URL on a later task, after a download started in the
/// current one has resolved it. If the timer cannot be set the URL stays alive
/// until the page unloads.
pub fn revoke_later(window: &Window, url: String) {
	let revoke = Closure::once_into_js(move || {
		if let Err(e) = Url::revoke_object_url(&url) {
			warn!("omnia: failed to revoke object URL: {e:?}");
		}
	});
	if let Err(e) =
		window.set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), 0)
	{
		warn!("omnia: could not schedule object URL release: {e:?}");
	}
}
