use std::{fmt, str::FromStr};

use log::{debug, info};
use thiserror::Error;

use crate::dom::{Document, Element};

/// Key the theme preference is saved under.
pub const THEME_KEY: &str = "theme";
/// Every control matching this flips the theme and shows the current icon.
pub const TOGGLE_SELECTOR: &str = ".theme-toggle";
/// Set on the body while the light theme is active.
pub const LIGHT_CLASS: &str = "light-mode";

/// Somewhere a preference can survive a page reload (`localStorage`, in the browser).
pub trait PreferenceStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	Light,
	#[default]
	Dark,
}

impl Theme {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	#[must_use]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// What the toggle controls display; it hints at what clicking will switch to.
	#[must_use]
	pub const fn icon(self) -> &'static str {
		match self {
			Self::Dark => "☀️",
			Self::Light => "🌙",
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
	type Err = UnknownTheme;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(UnknownTheme(s.to_owned())),
		}
	}
}

/// The page-wide theme. Read from storage once when it's created, and only changed through
/// [`ThemeSwitch::toggle`].
pub struct ThemeSwitch<S> {
	store: S,
	theme: Theme,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
	pub fn load(store: S) -> Self {
		let theme = match store.get(THEME_KEY).map(|s| s.parse::<Theme>()) {
			Some(Ok(theme)) => theme,
			Some(Err(e)) => {
				debug!("Ignoring saved preference: {e}");
				Theme::default()
			},
			None => Theme::default(),
		};

		Self { store, theme }
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		self.theme
	}

	/// Makes the page reflect the current theme: the body class and every toggle's icon.
	pub fn apply<D: Document>(&self, doc: &D) {
		if let Some(body) = doc.body() {
			body.set_class(LIGHT_CLASS, self.theme == Theme::Light);
		}

		for toggle in doc.query_selector_all(TOGGLE_SELECTOR) {
			toggle.set_text(self.theme.icon());
		}
	}

	pub fn toggle<D: Document>(&mut self, doc: &D) -> Theme {
		self.theme = self.theme.toggled();
		self.store.set(THEME_KEY, self.theme.as_str());
		info!("Switched to the {} theme", self.theme);

		self.apply(doc);
		self.theme
	}
}
