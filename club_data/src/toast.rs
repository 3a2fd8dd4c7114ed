use log::debug;

use crate::dom::{Document, Element, Timers};

pub const TOAST_ID: &str = "toast";
/// How long after a call the toast becomes visible.
pub const SHOW_DELAY_MS: u32 = 100;
/// How long it then stays visible.
pub const VISIBLE_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	Success,
	Error,
}

impl ToastKind {
	const fn class(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

/// Shows short-lived messages in the page's single toast element.
///
/// Calls aren't queued: a new message overwrites whatever is showing, and the hide scheduled by
/// an earlier call still fires on its own schedule.
#[derive(Clone)]
pub struct Toaster<T> {
	timers: T,
}

impl<T: Timers> Toaster<T> {
	pub fn new(timers: T) -> Self {
		Self { timers }
	}

	pub fn notify<D: Document>(&self, doc: &D, text: &str, kind: ToastKind) {
		let Some(toast) = doc.element_by_id(TOAST_ID)
			.or_else(|| doc.create_in_body("div", TOAST_ID)) else {
			debug!("Couldn't find or create #{TOAST_ID}; dropping toast '{text}'");
			return;
		};

		toast.set_class("toast", true);
		toast.set_text(text);
		for other in [ToastKind::Success, ToastKind::Error] {
			toast.set_class(other.class(), other == kind);
		}

		let shown = toast.clone();
		self.timers.after(SHOW_DELAY_MS, move || shown.set_class("show", true));
		self.timers.after(SHOW_DELAY_MS + VISIBLE_MS, move || toast.set_class("show", false));
	}
}
