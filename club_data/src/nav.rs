use log::debug;

use crate::dom::{Document, Element};

pub const NAV_LINKS_SELECTOR: &str = ".nav-links";

/// Flips the shared nav links between shown (`flex`) and hidden. Anything that isn't explicitly
/// `flex` counts as hidden, so the first click on a fresh page always opens the menu.
///
/// Returns whether the links are now visible, or `None` if the page has no nav links.
pub fn toggle_nav<D: Document>(doc: &D) -> Option<bool> {
	let Some(links) = doc.query_selector(NAV_LINKS_SELECTOR) else {
		debug!("No {NAV_LINKS_SELECTOR} to toggle");
		return None;
	};

	let show = links.style("display") != "flex";
	links.set_style("display", if show { "flex" } else { "none" });
	Some(show)
}
