use std::{cell::RefCell, rc::Rc};

use club_data::{
	dom::Document,
	form::{submit_join, FORM_ID},
	nav::toggle_nav,
	render_page,
	theme::{ThemeSwitch, TOGGLE_SELECTOR},
	toast::Toaster,
	typing::start_typing,
	SiteConfig,
};
use log::debug;
use web::{BrowserTimers, LocalStorage, WebDocument};

mod logger;
mod web;

fn main() {
	console_error_panic_hook::set_once();
	logger::init();

	let Some(doc) = WebDocument::current() else {
		gloo_console::error!("No document to attach to");
		return;
	};

	let config = SiteConfig::load(&doc);
	let year = js_sys::Date::new_0().get_full_year() as i32;

	render_page(&doc, &config, year);

	let timers = BrowserTimers;
	let toaster = Toaster::new(timers);

	// Theme: one shared switch, any number of controls
	let theme = Rc::new(RefCell::new(ThemeSwitch::load(LocalStorage::default())));
	theme.borrow().apply(&doc);
	for toggle in doc.query_selector_all(TOGGLE_SELECTOR) {
		let theme = theme.clone();
		let doc = doc.clone();
		toggle.on("click", move |_| {
			theme.borrow_mut().toggle(&doc);
		});
	}

	for id in &config.hamburger_ids {
		let Some(button) = doc.element_by_id(id) else {
			continue;
		};

		let doc = doc.clone();
		button.on("click", move |_| {
			toggle_nav(&doc);
		});
	}

	if let Some(form) = doc.element_by_id(FORM_ID) {
		let doc = doc.clone();
		let toaster = config.join_toast.then_some(toaster);
		form.on("submit", move |ev| {
			// there's no backend to send this to; we just acknowledge it in-page
			ev.prevent_default();
			_ = submit_join(&doc, toaster.as_ref());
		});
	}

	for slot in &config.typing {
		start_typing(&doc, &timers, slot);
	}

	debug!("Page behaviors attached");
}
