//! Screen-independent application state.

pub mod form;
