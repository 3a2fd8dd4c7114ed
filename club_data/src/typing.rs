use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dom::{Document, Element, Timers};

/// Time between each revealed character.
pub const TYPING_INTERVAL_MS: u32 = 80;

/// An element whose text gets typed out on load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TypingSlot {
	pub id: String,
	pub text: String,
}

/// Clears the slot's element and then reveals `slot.text` one character at a time. Returns
/// false if the page doesn't have the element.
pub fn start_typing<D, T>(doc: &D, timers: &T, slot: &TypingSlot) -> bool
where
	D: Document,
	T: Timers
{
	let Some(el) = doc.element_by_id(&slot.id) else {
		debug!("No #{} to type into", slot.id);
		return false;
	};

	el.set_text("");
	type_next(el, timers.clone(), Rc::from(slot.text.as_str()), 0);
	true
}

// `shown` is the byte length of the prefix already on screen
fn type_next<E: Element, T: Timers>(el: E, timers: T, text: Rc<str>, shown: usize) {
	let Some(next) = text[shown..].chars().next().map(|c| shown + c.len_utf8()) else {
		return;
	};

	let later = timers.clone();
	timers.after(TYPING_INTERVAL_MS, move || {
		el.set_text(&text[..next]);
		type_next(el, later, text, next);
	});
}
