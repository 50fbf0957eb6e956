use dioxus::logger::tracing::warn;
use gloo_storage::{LocalStorage, Storage};

/// Where the credential lives between sessions. Stored as the raw string,
/// unencrypted, exactly as the user typed it.
const STORAGE_KEY: &str = "text_studio_api_key";

pub fn load() -> Option<String> {
	LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten()
}

pub fn save(value: &str) {
	if value.trim().is_empty() {
		return;
	}
	if LocalStorage::raw().set_item(STORAGE_KEY, value).is_err() {
		warn!("could not persist the API key; it will only last this session");
	}
}

pub fn clear() {
	let _ = LocalStorage::raw().remove_item(STORAGE_KEY);
}
