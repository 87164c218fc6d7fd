//! HTTP request handlers.

pub mod redirect;

pub use redirect::{fallback_handler, redirect_handler};
