//! The slice of the browser that the page behaviors need. The wasm frontend implements these
//! over `web-sys`; tests use the in-memory fakes in `crate::testing`.
//!
//! Every lookup returns an `Option` and every caller treats `None` as "this page doesn't have
//! that piece", since one script drives several differently-composed pages.

use crate::card::Fragment;

/// A handle to one element in the page. Handles are cheap to clone and all point at the same
/// underlying node.
pub trait Element: Clone + 'static {
	/// Replaces everything inside this element with `markup`.
	fn set_markup(&self, markup: &Fragment);
	fn text(&self) -> String;
	fn set_text(&self, text: &str);
	/// Current value of a form control; empty for anything that isn't one.
	fn value(&self) -> String;
	fn set_value(&self, value: &str);
	/// Puts a form's controls back to their default values. Does nothing on anything that
	/// isn't a form.
	fn reset(&self);
	/// Inline style property, empty if unset.
	fn style(&self, property: &str) -> String;
	fn set_style(&self, property: &str, value: &str);
	fn set_class(&self, class: &str, on: bool);
}

pub trait Document {
	type Element: Element;

	fn element_by_id(&self, id: &str) -> Option<Self::Element>;
	fn query_selector(&self, selector: &str) -> Option<Self::Element>;
	fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;
	fn body(&self) -> Option<Self::Element>;
	/// Creates a `tag` element with the given id and appends it to the body.
	fn create_in_body(&self, tag: &str, id: &str) -> Option<Self::Element>;
}

/// Deferred work. Tasks are fire-and-forget; nothing can cancel one once it's scheduled.
pub trait Timers: Clone + 'static {
	fn after(&self, delay_ms: u32, task: impl FnOnce() + 'static);
}
