//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold the state behind shared page chrome and read session
//! state passed in by the caller.

pub mod navbar;
