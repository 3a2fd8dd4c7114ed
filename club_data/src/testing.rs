// In-memory stand-ins for the browser, used by the tests across this crate

use std::{
	cell::{Cell, RefCell},
	collections::{BTreeMap, BTreeSet, HashMap},
	rc::Rc,
};

use crate::{
	card::Fragment,
	dom::{Document, Element, Timers},
	theme::PreferenceStore,
};

#[derive(Default)]
struct Node {
	id: String,
	tag: String,
	classes: BTreeSet<String>,
	markup: String,
	text: String,
	value: String,
	// what `reset` puts back
	default_value: String,
	// controls owned by a form
	controls: Vec<FakeElement>,
	style: BTreeMap<String, String>,
	writes: usize,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
	fn new(tag: &str, id: &str) -> Self {
		Self(Rc::new(RefCell::new(Node {
			tag: tag.into(),
			id: id.into(),
			..Node::default()
		})))
	}

	pub fn markup(&self) -> String {
		self.0.borrow().markup.clone()
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.0.borrow().classes.contains(class)
	}

	pub fn writes(&self) -> usize {
		self.0.borrow().writes
	}

	fn matches(&self, selector: &str) -> bool {
		let node = self.0.borrow();
		if let Some(id) = selector.strip_prefix('#') {
			node.id == id
		} else if let Some(class) = selector.strip_prefix('.') {
			node.classes.contains(class)
		} else {
			node.tag == selector
		}
	}

	fn write(&self, f: impl FnOnce(&mut Node)) {
		let mut node = self.0.borrow_mut();
		node.writes += 1;
		f(&mut node);
	}
}

impl Element for FakeElement {
	fn set_markup(&self, markup: &Fragment) {
		self.write(|n| n.markup = markup.as_str().to_owned());
	}

	fn text(&self) -> String {
		self.0.borrow().text.clone()
	}

	fn set_text(&self, text: &str) {
		self.write(|n| n.text = text.to_owned());
	}

	fn value(&self) -> String {
		self.0.borrow().value.clone()
	}

	fn set_value(&self, value: &str) {
		self.write(|n| n.value = value.to_owned());
	}

	fn style(&self, property: &str) -> String {
		self.0.borrow().style.get(property).cloned().unwrap_or_default()
	}

	fn set_style(&self, property: &str, value: &str) {
		self.write(|n| {
			n.style.insert(property.to_owned(), value.to_owned());
		});
	}

	fn reset(&self) {
		let controls = self.0.borrow().controls.clone();
		for control in controls {
			control.write(|n| n.value = n.default_value.clone());
		}
	}

	fn set_class(&self, class: &str, on: bool) {
		self.write(|n| if on {
			n.classes.insert(class.to_owned());
		} else {
			n.classes.remove(class);
		});
	}
}

#[derive(Default)]
pub struct FakeDocument {
	body: FakeElement,
	nodes: RefCell<Vec<FakeElement>>,
	created: Cell<usize>,
}

impl FakeDocument {
	pub fn new() -> Self {
		Self {
			body: FakeElement::new("body", ""),
			..Self::default()
		}
	}

	/// Adds a `div` with the given id.
	pub fn add(&self, id: &str) -> FakeElement {
		self.add_tag("div", id)
	}

	pub fn add_tag(&self, tag: &str, id: &str) -> FakeElement {
		let el = FakeElement::new(tag, id);
		self.nodes.borrow_mut().push(el.clone());
		el
	}

	/// Adds an element with no id but with `class` set.
	pub fn add_classed(&self, class: &str) -> FakeElement {
		let el = self.add("");
		el.0.borrow_mut().classes.insert(class.to_owned());
		el
	}

	/// An input whose value (and default value) starts as `default`.
	pub fn input(&self, id: &str, default: &str) -> FakeElement {
		let el = self.add_tag("input", id);
		{
			let mut node = el.0.borrow_mut();
			node.value = default.to_owned();
			node.default_value = default.to_owned();
		}
		el
	}

	/// A form that owns `controls`, so resetting it restores their defaults.
	pub fn form(&self, id: &str, controls: &[&FakeElement]) -> FakeElement {
		let form = self.add_tag("form", id);
		form.0.borrow_mut().controls = controls.iter().map(|c| (*c).clone()).collect();
		form
	}

	pub fn body_element(&self) -> FakeElement {
		self.body.clone()
	}

	pub fn created(&self) -> usize {
		self.created.get()
	}

	/// Every write to every element, plus every element created.
	pub fn total_writes(&self) -> usize {
		self.nodes.borrow().iter().map(FakeElement::writes).sum::<usize>()
			+ self.body.writes()
			+ self.created.get()
	}
}

impl Document for FakeDocument {
	type Element = FakeElement;

	fn element_by_id(&self, id: &str) -> Option<FakeElement> {
		self.nodes.borrow().iter().find(|n| n.0.borrow().id == id).cloned()
	}

	fn query_selector(&self, selector: &str) -> Option<FakeElement> {
		self.nodes.borrow().iter().find(|n| n.matches(selector)).cloned()
	}

	fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
		self.nodes.borrow().iter().filter(|n| n.matches(selector)).cloned().collect()
	}

	fn body(&self) -> Option<FakeElement> {
		Some(self.body.clone())
	}

	fn create_in_body(&self, tag: &str, id: &str) -> Option<FakeElement> {
		self.created.set(self.created.get() + 1);
		Some(self.add_tag(tag, id))
	}
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
	now: u64,
	seq: u64,
	// (due, insertion order, task)
	pending: Vec<(u64, u64, Task)>,
}

/// A virtual clock; scheduled tasks only run when the test calls [`ManualTimers::advance`].
#[derive(Clone, Default)]
pub struct ManualTimers(Rc<RefCell<Clock>>);

impl ManualTimers {
	pub fn pending(&self) -> usize {
		self.0.borrow().pending.len()
	}

	/// Moves the clock forward by `ms`, running everything that comes due in order, including
	/// tasks that get scheduled by other tasks along the way.
	pub fn advance(&self, ms: u64) {
		let target = self.0.borrow().now + ms;

		loop {
			let task = {
				let mut clock = self.0.borrow_mut();
				let next = clock.pending.iter()
					.enumerate()
					.filter(|(_, (due, _, _))| *due <= target)
					.min_by_key(|(_, (due, seq, _))| (*due, *seq))
					.map(|(idx, _)| idx);

				match next {
					Some(idx) => {
						let (due, _, task) = clock.pending.remove(idx);
						clock.now = due;
						task
					},
					None => {
						clock.now = target;
						break;
					}
				}
			};

			task();
		}
	}
}

impl Timers for ManualTimers {
	fn after(&self, delay_ms: u32, task: impl FnOnce() + 'static) {
		let mut clock = self.0.borrow_mut();
		let due = clock.now + u64::from(delay_ms);
		let seq = clock.seq;
		clock.seq += 1;
		clock.pending.push((due, seq, Box::new(task)));
	}
}

#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
	pub fn with(key: &str, value: &str) -> Self {
		let store = Self::default();
		store.set(key, value);
		store
	}
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
	}
}
