//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, mutations, notices)
//! and exposes a row model for whatever front end renders it.

pub mod comments;
