//! Page behaviors for the club site: rendering the event list into whichever containers a page
//! has, the join form, the theme switch, toasts, the mobile nav and typing text.
//!
//! Nothing in here touches the browser directly. It all goes through the traits in [`dom`] and
//! [`theme::PreferenceStore`], which the `frontend` crate implements over `web-sys`.

mod card;
mod config;
pub mod dom;
mod escape;
mod events;
pub mod form;
mod mount;
pub mod nav;
pub mod theme;
pub mod toast;
pub mod typing;

#[cfg(test)]
mod testing;

pub use card::{render_card, render_cards, CardMode, Fragment};
pub use config::{ConfigError, SiteConfig, CONFIG_ID};
pub use escape::{escape_html, escape_opt};
pub use events::{EventRecord, RecordStore, EVENTS, PREVIEW_LEN};
pub use mount::{mount, mount_footer, render_footer, render_page, MountPoint, FOOTER_ID};
