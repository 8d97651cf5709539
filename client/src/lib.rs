//! Style Share client library.
//!
//! Session state, token persistence, REST access to the admin API, and the
//! view models behind the comment moderation page and the navigation bar.
//! Rendering is left to the caller; views return plain rows and [`Notice`]
//! values instead of drawing anything.
//!
//! [`Notice`]: state::notice::Notice

pub mod components;
pub mod net;
pub mod pages;
pub mod state;
