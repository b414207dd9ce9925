//! # bank-accounts-ui
//!
//! Leptos + WASM single-page client for managing bank-account records
//! against an external REST backend. The backend stays the sole source of
//! truth: every screen re-fetches on mount and mutations are followed by a
//! redirect or a full re-fetch rather than local patching.
//!
//! This crate contains the router, one page per screen, the shared form
//! model, and the HTTP adapter. Browser-only pieces (fetch, dialogs) sit
//! behind the `csr` feature with inert native fallbacks, so the unit tests
//! run on the host with plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
