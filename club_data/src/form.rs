use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;
use thiserror::Error;

use crate::{
	dom::{Document, Element, Timers},
	toast::{ToastKind, Toaster},
};

pub const FORM_ID: &str = "joinForm";
pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const INTEREST_FIELD: &str = "interest";
pub const MESSAGE_ID: &str = "formMessage";

pub const INVALID_MESSAGE: &str = "⚠️ Please provide a valid name and email.";
pub const WARNING_COLOR: &str = "#ff7b7b";
pub const SUCCESS_COLOR: &str = "#8ef6c6";

// anything@anything.anything, with no whitespace and a single @
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
	static EMAIL: OnceLock<Regex> = OnceLock::new();

	// constant pattern, so this can't fail at runtime
	EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
		.is_match(email)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
	#[error("no name was given")]
	MissingName,
	#[error("the email address doesn't look valid")]
	InvalidEmail,
}

/// What someone typed into the join form, trimmed. Interest is optional and never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinSubmission {
	pub name: String,
	pub email: String,
	pub interest: String,
}

impl JoinSubmission {
	/// Reads the form fields; any that aren't on the page count as empty.
	pub fn read<D: Document>(doc: &D) -> Self {
		let field = |id: &str| doc.element_by_id(id)
			.map(|el| el.value().trim().to_owned())
			.unwrap_or_default();

		Self {
			name: field(NAME_FIELD),
			email: field(EMAIL_FIELD),
			interest: field(INTEREST_FIELD),
		}
	}

	pub fn validate(self) -> Result<Self, JoinError> {
		if self.name.is_empty() {
			return Err(JoinError::MissingName);
		}

		if !is_valid_email(&self.email) {
			return Err(JoinError::InvalidEmail);
		}

		Ok(self)
	}

	#[must_use]
	pub fn acknowledgement(&self) -> String {
		format!("🎉 Thanks {}! We'll contact you at {}.", self.name, self.email)
	}
}

fn show_message<D: Document>(doc: &D, text: &str, color: &str) {
	if let Some(slot) = doc.element_by_id(MESSAGE_ID) {
		slot.set_text(text);
		slot.set_style("color", color);
	}
}

/// Handles a submit of the join form. Nothing is sent anywhere; a valid submission just gets
/// acknowledged and the form is reset to its defaults.
pub fn submit_join<D, T>(doc: &D, toaster: Option<&Toaster<T>>) -> Result<JoinSubmission, JoinError>
where
	D: Document,
	T: Timers
{
	let submission = match JoinSubmission::read(doc).validate() {
		Ok(submission) => submission,
		Err(e) => {
			debug!("Rejected join form: {e}");
			show_message(doc, INVALID_MESSAGE, WARNING_COLOR);
			return Err(e);
		}
	};

	info!("Join form accepted");
	show_message(doc, &submission.acknowledgement(), SUCCESS_COLOR);

	if let Some(form) = doc.element_by_id(FORM_ID) {
		form.reset();
	}

	if let Some(toaster) = toaster {
		toaster.notify(doc, &format!("Welcome aboard, {}!", submission.name), ToastKind::Success);
	}

	Ok(submission)
}
