//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the screen and either read shared state from
//! Leptos context or report interactions through callback props.

pub mod social_tiles;
pub mod theme_toggle;
