use std::borrow::Cow;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Replaces the characters that are significant inside html text and attribute values with
/// their character references.
///
/// This is a single left-to-right pass, so references already present in the input are escaped
/// again: `&amp;` comes out as `&amp;amp;` and will display as the literal text `&amp;`.
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
	let Some(first) = input.find(SPECIAL) else {
		return Cow::Borrowed(input);
	};

	let mut out = String::with_capacity(input.len() + 16);
	out.push_str(&input[..first]);

	for c in input[first..].chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#039;"),
			c => out.push(c),
		}
	}

	Cow::Owned(out)
}

/// Same as [`escape_html`], but absent text is treated as empty.
#[must_use]
pub fn escape_opt(input: Option<&str>) -> Cow<'_, str> {
	input.map_or(Cow::Borrowed(""), escape_html)
}
