//! Innovation School site client library.
//!
//! This crate is the application layer of the school website: everything
//! between the rendered pages and the remote content store. The UI (public
//! pages and the admin panel) consumes it; the remote store serves it.
//!
//! # Architecture
//!
//! - [`backend`] - typed HTTP client for the remote content store
//! - [`auth`] - admin session store, validator, and the facade route guards
//!   consume
//! - [`content`] - bundled default catalog and the default/remote merge
//! - [`services`] - public and admin operations (site content, gallery,
//!   enquiries, contact details)
//! - [`state`] - dependency-injected composition root ([`state::AppState`])
//!
//! The remote store is the source of truth for edited content; the bundled
//! defaults in [`content`] keep the public site rendering when the store has
//! no published override (or is unreachable).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod backend;
pub mod config;
pub mod content;
pub mod error;
pub mod services;
pub mod state;
