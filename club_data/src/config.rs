use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
	dom::{Document, Element},
	events::{EventRecord, RecordStore},
	typing::TypingSlot,
};

/// Id of the `<script type="application/json">` element a page can use to override defaults.
pub const CONFIG_ID: &str = "siteConfig";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("couldn't parse site config: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("event #{0} in the site config has no name")]
	UnnamedEvent(usize),
}

/// Everything that differs between pages or deployments of the site. Every field has a default,
/// so a page only has to spell out what it changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
	pub club_name: String,
	pub tagline: String,
	/// Ids of the controls that open and close the mobile nav.
	pub hamburger_ids: Vec<String>,
	pub typing: Vec<TypingSlot>,
	/// Whether a successful join also shows a toast.
	pub join_toast: bool,
	/// Replaces the bundled events when present.
	pub events: Option<Vec<EventRecord>>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			club_name: "Tech Innovators Club".into(),
			tagline: "Empowering Future Innovators".into(),
			hamburger_ids: ["hamburger", "hamburgerAbout", "hamburgerEvents", "hamburgerJoin", "hamburgerContact"]
				.into_iter()
				.map(String::from)
				.collect(),
			typing: vec![TypingSlot {
				id: "typingText".into(),
				text: "Building the future, one line of code at a time.".into(),
			}],
			join_toast: true,
			events: None,
		}
	}
}

impl SiteConfig {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;

		if let Some(idx) = config.events.iter()
			.flatten()
			.position(|e| e.name.trim().is_empty()) {
			return Err(ConfigError::UnnamedEvent(idx));
		}

		Ok(config)
	}

	/// Reads the page's inline config if it has one. A missing element means defaults; a broken
	/// one is logged and also means defaults.
	pub fn load<D: Document>(doc: &D) -> Self {
		let Some(el) = doc.element_by_id(CONFIG_ID) else {
			return Self::default();
		};

		Self::from_json(&el.text()).unwrap_or_else(|e| {
			warn!("Falling back to the default site config: {e}");
			Self::default()
		})
	}

	#[must_use]
	pub fn record_store(&self) -> RecordStore<'_> {
		match self.events.as_deref() {
			Some(events) => RecordStore::new(events),
			None => RecordStore::bundled(),
		}
	}
}
