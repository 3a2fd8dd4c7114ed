use horrorshow::html;
use log::debug;

use crate::{
	card::{render_cards, CardMode, Escaped, Fragment},
	config::SiteConfig,
	dom::{Document, Element},
	events::RecordStore,
};

/// The containers in a host page that get filled with generated markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountPoint {
	/// Every event, full cards (the events page).
	AllEvents,
	/// The first few events, preview cards (the home page).
	Preview,
}

impl MountPoint {
	pub const ALL: [Self; 2] = [Self::AllEvents, Self::Preview];

	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Self::AllEvents => "eventsContainer",
			Self::Preview => "homeEvents",
		}
	}

	#[must_use]
	pub fn render(self, store: RecordStore<'_>) -> Fragment {
		match self {
			Self::AllEvents => render_cards(store.all(), CardMode::Full),
			Self::Preview => render_cards(store.preview(), CardMode::Preview),
		}
	}
}

pub const FOOTER_ID: &str = "footer";
// host pages don't style the footer's contents, so it carries its own layout
const FOOTER_STYLE: &str = "max-width:1100px;margin:0 auto;color:var(--muted);";

/// Fills `point` with cards if the page has it. Returns whether anything was mounted.
pub fn mount<D: Document>(doc: &D, point: MountPoint, store: RecordStore<'_>) -> bool {
	let Some(container) = doc.element_by_id(point.id()) else {
		debug!("No #{} on this page, skipping", point.id());
		return false;
	};

	container.set_markup(&point.render(store));
	true
}

#[must_use]
pub fn render_footer(year: i32, club_name: &str, tagline: &str) -> Fragment {
	let line = format!("© {year} {club_name} • {tagline}");
	let markup = html! {
		div(style = FOOTER_STYLE) {
			p : Escaped::text(&line);
		}
	}.to_string();

	Fragment(markup)
}

pub fn mount_footer<D: Document>(doc: &D, year: i32, config: &SiteConfig) -> bool {
	let Some(footer) = doc.element_by_id(FOOTER_ID) else {
		debug!("No #{FOOTER_ID} on this page, skipping");
		return false;
	};

	footer.set_markup(&render_footer(year, &config.club_name, &config.tagline));
	true
}

/// Everything that gets generated once when a page loads: event cards in whichever
/// containers exist, and the footer.
pub fn render_page<D: Document>(doc: &D, config: &SiteConfig, year: i32) {
	let store = config.record_store();
	if store.is_empty() {
		debug!("No events configured; event containers will be emptied");
	}

	for point in MountPoint::ALL {
		mount(doc, point, store);
	}
	mount_footer(doc, year, config);
}
