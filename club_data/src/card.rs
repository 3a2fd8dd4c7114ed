use std::borrow::Cow;

use horrorshow::{html, Raw, RenderOnce, TemplateBuffer};

use crate::{
	escape::{escape_html, escape_opt},
	events::EventRecord,
};

/// Markup that is safe to hand to `innerHTML`: everything in it came out of a horrorshow
/// template, with field text going through [`Escaped`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment(pub(crate) String);

impl Fragment {
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromIterator<Fragment> for Fragment {
	fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
		Self(iter.into_iter().map(|frag| frag.0).collect())
	}
}

/// Untrusted text headed into a template. horrorshow leaves `'` alone, so this runs the text
/// through [`escape_html`] instead and writes the result raw.
pub(crate) struct Escaped<'a>(Cow<'a, str>);

impl<'a> Escaped<'a> {
	pub(crate) fn text(text: &'a str) -> Self {
		Self(escape_html(text))
	}

	pub(crate) fn opt(text: Option<&'a str>) -> Self {
		Self(escape_opt(text))
	}
}

impl RenderOnce for Escaped<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		Raw(self.0).render_once(tmpl);
	}
}

/// Which fields of a record end up on its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardMode {
	/// Image, date, name and description; used on the events page.
	Full,
	/// Image, name and date only; used for the home page preview.
	Preview,
}

#[must_use]
pub fn render_card(event: &EventRecord, mode: CardMode) -> Fragment {
	let markup = match mode {
		CardMode::Full => html! {
			article(class = "event-card", role = "article", aria-label = Escaped::text(&event.name)) {
				img(loading = "lazy", src = Escaped::opt(event.image()), alt = Escaped::text(&event.name));
				div(class = "event-details") {
					div(class = "event-date") : Escaped::text(&event.date);
					h3 : Escaped::text(&event.name);
					p : Escaped::text(&event.description);
				}
			}
		}.to_string(),
		CardMode::Preview => html! {
			div(class = "event-card") {
				img(loading = "lazy", src = Escaped::opt(event.image()), alt = Escaped::text(&event.name));
				div(class = "event-details") {
					h3 : Escaped::text(&event.name);
					div(class = "event-date") : Escaped::text(&event.date);
				}
			}
		}.to_string(),
	};

	Fragment(markup)
}

/// Renders every record in order and joins the cards together.
pub fn render_cards<'e, I>(events: I, mode: CardMode) -> Fragment
where
	I: IntoIterator<Item = &'e EventRecord>
{
	events.into_iter()
		.map(|event| render_card(event, mode))
		.collect()
}
