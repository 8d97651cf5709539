//! Client-side state shared across views.

pub mod auth;
pub mod notice;
pub mod token_store;
