// club_data's page traits, implemented over the real DOM

use club_data::{
	dom::{Document, Element, Timers},
	theme::PreferenceStore,
	Fragment,
};
use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Storage};

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
	/// Calls `handler` for every `event` on this element, for the rest of the page's life.
	pub fn on(&self, event: &str, handler: impl FnMut(Event) + 'static) {
		let closure = Closure::<dyn FnMut(Event)>::new(handler);

		if let Err(e) = self.0.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
			warn!("Couldn't listen for {event} on #{}: {e:?}", self.0.id());
			return;
		}

		// the listener never gets removed, so the closure has to outlive this scope
		closure.forget();
	}

	fn html(&self) -> Option<&HtmlElement> {
		self.0.dyn_ref::<HtmlElement>()
	}
}

impl Element for WebElement {
	fn set_markup(&self, markup: &Fragment) {
		self.0.set_inner_html(markup.as_str());
	}

	fn text(&self) -> String {
		self.0.text_content().unwrap_or_default()
	}

	fn set_text(&self, text: &str) {
		self.0.set_text_content(Some(text));
	}

	fn value(&self) -> String {
		if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
			area.value()
		} else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
			select.value()
		} else {
			String::new()
		}
	}

	fn set_value(&self, value: &str) {
		if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
			area.set_value(value);
		} else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
			select.set_value(value);
		}
	}

	fn reset(&self) {
		if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
			form.reset();
		}
	}

	fn style(&self, property: &str) -> String {
		self.html()
			.and_then(|el| el.style().get_property_value(property).ok())
			.unwrap_or_default()
	}

	fn set_style(&self, property: &str, value: &str) {
		let Some(el) = self.html() else { return };

		if let Err(e) = el.style().set_property(property, value) {
			warn!("Couldn't set {property}: {value} on #{}: {e:?}", self.0.id());
		}
	}

	fn set_class(&self, class: &str, on: bool) {
		if let Err(e) = self.0.class_list().toggle_with_force(class, on) {
			warn!("Couldn't toggle class {class} on #{}: {e:?}", self.0.id());
		}
	}
}

#[derive(Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
	pub fn current() -> Option<Self> {
		web_sys::window()
			.and_then(|win| win.document())
			.map(Self)
	}
}

impl Document for WebDocument {
	type Element = WebElement;

	fn element_by_id(&self, id: &str) -> Option<WebElement> {
		self.0.get_element_by_id(id).map(WebElement)
	}

	fn query_selector(&self, selector: &str) -> Option<WebElement> {
		self.0.query_selector(selector)
			.ok()
			.flatten()
			.map(WebElement)
	}

	fn query_selector_all(&self, selector: &str) -> Vec<WebElement> {
		let Ok(list) = self.0.query_selector_all(selector) else {
			warn!("Invalid selector '{selector}'");
			return Vec::new();
		};

		(0..list.length())
			.filter_map(|idx| list.get(idx))
			.filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
			.map(WebElement)
			.collect()
	}

	fn body(&self) -> Option<WebElement> {
		self.0.body().map(|body| WebElement(body.into()))
	}

	fn create_in_body(&self, tag: &str, id: &str) -> Option<WebElement> {
		let body = self.0.body()?;
		let el = self.0.create_element(tag).ok()?;
		el.set_id(id);

		if let Err(e) = body.append_child(&el) {
			warn!("Couldn't add #{id} to the page: {e:?}");
			return None;
		}

		Some(WebElement(el))
	}
}

/// `window.localStorage`, if the browser lets us have it (it may not, e.g. in some private
/// browsing modes), in which case the preference just won't stick.
pub struct LocalStorage(Option<Storage>);

impl Default for LocalStorage {
	fn default() -> Self {
		Self(web_sys::window().and_then(|win| win.local_storage().ok().flatten()))
	}
}

impl PreferenceStore for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.0.as_ref()?.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		let Some(storage) = self.0.as_ref() else { return };

		if let Err(e) = storage.set_item(key, value) {
			warn!("Couldn't save {key}={value}: {e:?}");
		}
	}
}

#[derive(Clone, Copy)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
	fn after(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
		wasm_bindgen_futures::spawn_local(async move {
			TimeoutFuture::new(delay_ms).await;
			task();
		});
	}
}
