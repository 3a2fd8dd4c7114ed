use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How many records the home page preview shows.
pub const PREVIEW_LEN: usize = 3;

/// One club event, as displayed on the events page and the home preview. None of these fields
/// are trusted; they're escaped whenever they get rendered.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EventRecord {
	pub name: Cow<'static, str>,
	pub date: Cow<'static, str>,
	pub image: Option<Cow<'static, str>>,
	pub description: Cow<'static, str>,
}

impl EventRecord {
	#[must_use]
	pub const fn new(
		name: &'static str,
		date: &'static str,
		image: Option<&'static str>,
		description: &'static str
	) -> Self {
		Self {
			name: Cow::Borrowed(name),
			date: Cow::Borrowed(date),
			image: match image {
				Some(img) => Some(Cow::Borrowed(img)),
				None => None,
			},
			description: Cow::Borrowed(description),
		}
	}

	#[must_use]
	pub fn image(&self) -> Option<&str> {
		self.image.as_deref()
	}
}

/// Read-only, ordered view over a list of events. Nothing here reorders or filters.
#[derive(Clone, Copy, Debug)]
pub struct RecordStore<'a> {
	records: &'a [EventRecord],
}

impl<'a> RecordStore<'a> {
	#[must_use]
	pub const fn new(records: &'a [EventRecord]) -> Self {
		Self { records }
	}

	#[must_use]
	pub fn all(&self) -> &'a [EventRecord] {
		self.records
	}

	/// The first [`PREVIEW_LEN`] records, or all of them if there aren't that many.
	#[must_use]
	pub fn preview(&self) -> &'a [EventRecord] {
		&self.records[..self.records.len().min(PREVIEW_LEN)]
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl RecordStore<'static> {
	#[must_use]
	pub fn bundled() -> Self {
		Self::new(EVENTS)
	}
}

// Modify here to add/remove events, or override them with `events` in the site config
pub static EVENTS: &[EventRecord] = &[
	EventRecord::new(
		"Hack the Future 2025",
		"January 15–17, 2025",
		Some("https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&fit=crop&w=1400&q=80"),
		"A 48-hour hackathon where creative minds collaborate on futuristic tech solutions. Includes mentorship, exciting prizes and team challenges focused on social impact."
	),
	EventRecord::new(
		"AI & Robotics Workshop",
		"March 2, 2025",
		Some("https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&fit=crop&w=1400&q=80"),
		"Hands-on workshop exploring AI fundamentals and introductory robotics. Build a small autonomous bot and learn model training workflows."
	),
	EventRecord::new(
		"Tech Expo 2025",
		"May 20, 2025",
		Some("https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=1400&q=80"),
		"Showcase of student projects with live demos, startup pitches and networking opportunities with industry professionals."
	),
	EventRecord::new(
		"Women in Tech Meetup",
		"August 10, 2025",
		Some("https://images.unsplash.com/photo-1521737604893-d14cc237f11d?auto=format&fit=crop&w=1400&q=80"),
		"A meetup celebrating women innovators in STEM. Debates, career sessions, and mentorship circles designed to grow leadership and inclusivity."
	),
	EventRecord::new(
		"Annual Tech Fest",
		"December 5–7, 2025",
		Some("https://images.unsplash.com/photo-1542744095-291d1f67b221?auto=format&fit=crop&w=1400&q=80"),
		"A three-day festival featuring coding contests, hardware demos, speaker sessions and social events to wrap up the year in style."
	),
];
