//! # userdeck
//!
//! `userdeck` fetches a collection of user records from a JSON endpoint and
//! presents them as a searchable list of cards.
//!
//! ## Flow
//!
//! - **Fetch:** one `GET` against the configured endpoint; the body must be a JSON
//!   array of user objects.
//! - **Render:** every record becomes a card, in source order, with a staggered
//!   reveal delay.
//! - **Filter:** typing narrows the cached records by a case-insensitive substring
//!   match over name, email, username, phone, city and company name. Filtering
//!   never triggers a new request.
//!
//! ## Display Surfaces
//!
//! The controller talks to a [`userdeck::View`]. Two are provided: an HTML
//! document (`export`) and an interactive terminal session (`browse`).

pub mod cli;
pub mod userdeck;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
